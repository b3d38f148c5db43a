//! Word list loading utilities
//!
//! Parses word lists from files or from the embedded constant.

use crate::core::Word;
use crate::error::SourceError;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse words from text, one per line
///
/// Blank lines and `#` comments are ignored; lines that are not valid words
/// are skipped.
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!("skipped {skipped} invalid word list entries");
    }
    words
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns `SourceError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_autosolve::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, SourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_autosolve::wordlists::loader::words_from_slice;
/// use wordle_autosolve::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "to0long", "", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_ignores_comments_and_blanks() {
        let words = parse_words("# starters\ncrane\n\n  SLATE  \nbad1\ntrace\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "trace"]);
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("wordle_autosolve_{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }
}
