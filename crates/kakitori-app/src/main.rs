use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use kakitori_config::Config;
use kakitori_core::{RecordStore, resolve};
use kakitori_dataset::{KankenRater, load_dataset, load_kanken_list};
use kakitori_render::WorksheetGenerator;

/// Generate printable kanji writing worksheets.
#[derive(Debug, Parser)]
#[command(name = "kakitori", version)]
struct Cli {
    /// Selection expression, e.g. "1-3,S,k4-2"
    #[arg(short = 'g', long = "grades")]
    grades: String,

    /// Prefix for the output file names
    #[arg(short, long)]
    prefix: Option<String>,

    /// Shuffle seed (0 keeps dataset order)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the dataset CSV
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Re-rate kanken levels from the exam-list CSVs in this directory
    #[arg(long, value_name = "DIR")]
    rate: Option<PathBuf>,

    /// Show diagnostic logs
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all logs
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    // --quiet silences everything; --verbose defaults to debug; otherwise
    // RUST_LOG is honoured with info as the fallback. Logs go to stderr so
    // the generated HTML paths stay pipeable.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::new();
    let dataset_path = cli
        .dataset
        .unwrap_or_else(|| PathBuf::from(&config.dataset_path));
    let prefix = cli.prefix.or(config.prefix);
    let seed = cli.seed.or(config.seed);

    let mut records = load_dataset(&dataset_path)
        .with_context(|| format!("failed to load dataset {}", dataset_path.display()))?;
    tracing::debug!(count = records.len(), "dataset loaded");

    if let Some(dir) = &cli.rate {
        let rater = KankenRater::new(
            load_exam_list(dir, "kanken-4.csv")?,
            load_exam_list(dir, "kanken-3.csv")?,
            load_exam_list(dir, "kanken-2.5.csv")?,
        );
        rater.apply(&mut records);
    }

    let store = RecordStore::from_records(records);
    let quiz = resolve(&store, &cli.grades)
        .with_context(|| format!("bad selection expression {:?}", cli.grades))?;

    let count = quiz.len();
    WorksheetGenerator::new(quiz, seed, prefix)
        .generate()
        .context("failed to write worksheets")?;
    tracing::info!("generated {count} questions");

    Ok(())
}

fn load_exam_list(dir: &Path, name: &str) -> Result<std::collections::HashSet<String>> {
    let path = dir.join(name);
    load_kanken_list(&path)
        .with_context(|| format!("failed to load exam list {}", path.display()))
}
