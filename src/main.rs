//! Wordle Autosolve - CLI
//!
//! Solves daily, seeded-random or explicit-target puzzles against the local
//! reference oracle, scores a single guess, filters candidates by hand, or
//! benchmarks the solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use wordle_autosolve::{
    candidates::{CandidateSource, EmbeddedSource, FileSource, StaticSource},
    commands::{
        BenchmarkConfig, ModeRequest, refine_candidates, resolve_mode, run_benchmark,
        score_guess, solve_puzzle,
    },
    core::Word,
    oracle::LocalOracle,
    output::{
        BenchmarkReport, GuessReport, RefineReport, SolveReport, print_benchmark_result,
        print_guess_result, print_refine_result, print_solve_outcome, to_json,
    },
    solver::{DEFAULT_SIZE, SolveConfig},
};

#[derive(Parser)]
#[command(
    name = "wordle_autosolve",
    about = "Automatic Wordle solver: guess, score, prune, repeat",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word length of the puzzle
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Stop after this many rounds (default: number of candidates)
    #[arg(long, global = true)]
    max_rounds: Option<usize>,

    /// Print JSON instead of colored output
    #[arg(long, global = true)]
    json: bool,

    /// Show candidate counts and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the puzzle of the day
    Daily,

    /// Solve a seeded random puzzle
    Random {
        /// Seed selecting the puzzle (drawn at random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Solve a puzzle with a known secret
    Word {
        /// The secret word
        target: String,
    },

    /// Score one guess against the daily, seeded or target puzzle
    Guess {
        /// The word to try
        word: String,

        /// Use the seeded random puzzle instead of the daily one
        #[arg(short, long, conflicts_with = "target")]
        seed: Option<u64>,

        /// Use a puzzle with this secret instead of the daily one
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Filter the word list with your own guesses and feedback
    Refine {
        /// Alternating guesses and feedback, e.g. `crane YGG-G trace -GGGG`
        ///
        /// Feedback uses G (correct), Y (present) and - or X (absent), or the
        /// oracle's JSON response.
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        pairs: Vec<String>,
    },

    /// Solve every word of the list as a target
    Benchmark {
        /// Only test the first N words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Pick the candidate source from the -w flag
fn word_source(wordlist: &str) -> Box<dyn CandidateSource> {
    match wordlist {
        "embedded" => Box::new(EmbeddedSource),
        path => Box::new(FileSource::new(path)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let source = word_source(&cli.wordlist);
    let words = source
        .load()
        .with_context(|| format!("loading word list '{}'", cli.wordlist))?;

    match &cli.command {
        Commands::Daily => run_solve_command(&cli, ModeRequest::Daily, words),
        Commands::Random { seed } => {
            run_solve_command(&cli, ModeRequest::Random { seed: *seed }, words)
        }
        Commands::Word { target } => run_solve_command(
            &cli,
            ModeRequest::Target {
                word: target.clone(),
            },
            words,
        ),
        Commands::Guess { word, seed, target } => {
            let request = match (seed, target) {
                (_, Some(target)) => ModeRequest::Target {
                    word: target.clone(),
                },
                (Some(seed), None) => ModeRequest::Random { seed: Some(*seed) },
                (None, None) => ModeRequest::Daily,
            };
            let mode = resolve_mode(request, cli.size)?;
            let oracle = LocalOracle::new(words);
            let result = score_guess(word, mode, cli.size, &oracle)?;

            if cli.json {
                println!("{}", to_json(&GuessReport::from(&result))?);
            } else {
                print_guess_result(&result);
            }
            Ok(())
        }
        Commands::Refine { pairs } => {
            let result = refine_candidates(words, pairs, cli.size)?;
            if cli.json {
                println!("{}", to_json(&RefineReport::from(&result))?);
            } else {
                print_refine_result(&result);
            }
            Ok(())
        }
        Commands::Benchmark { limit } => {
            let config = BenchmarkConfig {
                size: cli.size,
                max_rounds: cli.max_rounds,
                limit: *limit,
                show_progress: !cli.json,
            };
            let oracle = LocalOracle::new(Vec::new());
            let result = run_benchmark(&words, &oracle, &config)?;
            if cli.json {
                println!("{}", to_json(&BenchmarkReport::from(&result))?);
            } else {
                print_benchmark_result(&result);
            }
            Ok(())
        }
    }
}

fn run_solve_command(cli: &Cli, request: ModeRequest, words: Vec<Word>) -> Result<()> {
    let mode = resolve_mode(request, cli.size)?;
    let config = SolveConfig::new(mode.clone())
        .with_size(cli.size)
        .with_max_rounds(cli.max_rounds);

    // The local oracle draws daily and random secrets from the same list
    let oracle = LocalOracle::new(words.clone());
    let source = StaticSource::new(words);
    let outcome = solve_puzzle(config, &source, &oracle)?;

    if cli.json {
        let report = SolveReport::from_outcome(&outcome, &mode);
        println!("{}", report.to_json()?);
    } else {
        print_solve_outcome(&outcome, &mode, cli.verbose);
    }
    Ok(())
}
