//! Textsim CLI - compare two texts or two files

use clap::Parser;
use std::path::PathBuf;
use textsim::config::{expand_path, OutputFormat};
use textsim::input::{resolve_pair, InputMode};
use textsim::report::{render_json, render_text, Score};
use textsim::{Algorithm, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "textsim")]
#[command(author = "Textsim Team")]
#[command(version)]
#[command(about = "Textsim - CJK-aware text similarity", long_about = None)]
struct Args {
    /// First text (or file path with --files)
    #[arg(required_unless_present = "init")]
    first: Option<String>,

    /// Second text (or file path with --files)
    #[arg(required_unless_present = "init")]
    second: Option<String>,

    /// Treat both arguments as file paths
    #[arg(short, long)]
    files: bool,

    /// Algorithm: cosine, jaccard or levenshtein (case-insensitive)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Score with every algorithm
    #[arg(long, conflicts_with = "algorithm")]
    all: bool,

    /// Print JSON instead of a percentage line
    #[arg(long)]
    json: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TEXTSIM_CONFIG", default_value_os_t = Config::default_path())]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Initialize a new config file with defaults
    #[arg(long)]
    init: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout only carries results
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("textsim={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = expand_path(&args.config);

    // Handle --init flag
    if args.init {
        if config_path.exists() {
            tracing::warn!("Config file already exists: {}", config_path.display());
            return Ok(());
        }
        Config::create_default(&config_path)?;
        tracing::info!("Created default config at: {}", config_path.display());
        return Ok(());
    }

    let mut config = Config::load_or_default(&config_path)?;
    config.apply_env_overrides();

    let algorithms = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        match args.algorithm.as_deref() {
            Some(name) => vec![Algorithm::from_name(name)?],
            None => vec![config.similarity.algorithm],
        }
    };

    let mode = if args.files {
        InputMode::Files
    } else {
        InputMode::Text
    };
    let pair = resolve_pair(
        mode,
        args.first.as_deref().unwrap_or_default(),
        args.second.as_deref().unwrap_or_default(),
    )?;

    let scores: Vec<Score> = algorithms
        .into_iter()
        .map(|algorithm| {
            tracing::debug!("Scoring with {}", algorithm);
            Score::compute(algorithm, &pair.first, &pair.second)
        })
        .collect();

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let rendered = match format {
        OutputFormat::Json => render_json(&scores)?,
        OutputFormat::Text => render_text(&scores, config.output.precision, args.all),
    };
    println!("{}", rendered);

    Ok(())
}
