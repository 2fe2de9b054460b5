use clap::{Parser, Subcommand};
use correlation_factory::chart::{self, PointCount, ShareCode, DEFAULT_POINTS};
use correlation_factory::{generate_correlation_params, hash_string, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Deterministic, hilariously correlated chart data
#[derive(Parser)]
#[command(name = "correlation-factory")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a string the way seeds are hashed
    Hash {
        text: String,
    },

    /// Show the parameters derived from a correlation id
    Params {
        correlation_id: String,
    },

    /// Generate one metric series
    Metric {
        seed: String,
        correlation_id: String,

        /// Number of points (5-100)
        #[arg(short, long, env = "CORRELATION_FACTORY_POINTS", default_value_t = DEFAULT_POINTS)]
        points: usize,
    },

    /// Pick the caption for a correlation id
    Caption {
        correlation_id: String,
    },

    /// Pick three random words for a new chart
    Words {
        /// Word seed (defaults to the wall clock)
        #[arg(short, long)]
        seed: Option<String>,
    },

    /// Build a brand new chart from random words
    New {
        /// Word seed (defaults to the wall clock)
        #[arg(short, long)]
        seed: Option<String>,

        /// Number of points (5-100)
        #[arg(short, long, env = "CORRELATION_FACTORY_POINTS", default_value_t = DEFAULT_POINTS)]
        points: usize,
    },

    /// Build a full chart from a seed1-seed2-correlationId share code
    Chart {
        share_code: String,

        /// Number of points (5-100)
        #[arg(short, long, env = "CORRELATION_FACTORY_POINTS", default_value_t = DEFAULT_POINTS)]
        points: usize,
    },

    /// Measure how often generated pairs reach r² >= 0.6
    Survey {
        /// Correlation id prefix
        #[arg(long, default_value = "survey")]
        prefix: String,

        /// Number of pairings to generate
        #[arg(short, long, default_value_t = 1000)]
        count: usize,

        /// Number of points (5-100)
        #[arg(short, long, env = "CORRELATION_FACTORY_POINTS", default_value_t = DEFAULT_POINTS)]
        points: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Hash { text } => emit(&hash_string(&text), cli.compact),
        Commands::Params { correlation_id } => emit(&generate_correlation_params(&correlation_id), cli.compact),
        Commands::Metric { seed, correlation_id, points } => {
            let report = chart::metric_report(&seed, &correlation_id, PointCount::new(points)?)?;
            emit(&report, cli.compact)
        }
        Commands::Caption { correlation_id } => emit(&chart::caption_report(&correlation_id)?, cli.compact),
        Commands::Words { seed } => {
            let seed = seed.unwrap_or_else(chart::clock_seed);
            emit(&chart::random_words(&seed), cli.compact)
        }
        Commands::New { seed, points } => {
            let seed = seed.unwrap_or_else(chart::clock_seed);
            let code = chart::random_words(&seed).share_code(PointCount::new(points)?);
            info!(seed = %seed, share_code = %code, "new chart");
            emit(&chart::build_chart(&code)?, cli.compact)
        }
        Commands::Chart { share_code, points } => {
            let code = share_code.parse::<ShareCode>()?.with_points(PointCount::new(points)?);
            emit(&chart::build_chart(&code)?, cli.compact)
        }
        Commands::Survey { prefix, count, points } => {
            emit(&chart::survey(&prefix, count, PointCount::new(points)?)?, cli.compact)
        }
    }
}

fn emit<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}
