use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tallyrank::{CaptureConfig, Number, Recorder, Snapshot, DEFAULT_MAX_VALUE};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Values recorded by the `demo` subcommand.
const DEMO_VALUES: [u32; 5] = [3, 9, 3, 4, 6];

#[derive(Parser, Debug)]
#[command(
    name = "tallyrank",
    about = "Count recorded integers below, above and between thresholds"
)]
struct Cli {
    /// Inclusive upper bound of the accepted value domain.
    #[arg(long, global = true, env = "TALLYRANK_MAX_VALUE", default_value_t = DEFAULT_MAX_VALUE)]
    max_value: u32,
    /// Log snapshot construction at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record {3, 9, 3, 4, 6} and print less(4), greater(4) and between(3, 6).
    Demo,
    /// Record values and answer count queries over them.
    Query {
        /// Values to record.
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// File of values to record (whitespace separated, `#` starts a comment).
        #[arg(long)]
        input: Option<PathBuf>,
        /// Count values strictly less than this threshold (repeatable).
        #[arg(long, allow_negative_numbers = true)]
        less: Vec<String>,
        /// Count values strictly greater than this threshold (repeatable).
        #[arg(long, allow_negative_numbers = true)]
        greater: Vec<String>,
        /// Count values in the inclusive range LO..=HI (repeatable).
        #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
        between: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CaptureConfig::default().with_max_value(cli.max_value);

    match cli.command {
        Commands::Demo => run_demo(config)?,
        Commands::Query {
            values,
            input,
            less,
            greater,
            between,
        } => run_query(config, values, input, less, greater, between)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn run_demo(config: CaptureConfig) -> Result<()> {
    let mut capture = Recorder::with_config(config).context("invalid capture configuration")?;
    capture
        .extend(DEMO_VALUES)
        .context("failed to record demo values")?;
    let stats = capture.snapshot().context("failed to build statistics")?;

    println!("less(4) = {}", stats.less(4)?);
    println!("greater(4) = {}", stats.greater(4)?);
    println!("between(3, 6) = {}", stats.between(3, 6)?);
    Ok(())
}

fn run_query(
    config: CaptureConfig,
    values: Vec<String>,
    input: Option<PathBuf>,
    less: Vec<String>,
    greater: Vec<String>,
    between: Vec<String>,
) -> Result<()> {
    let mut capture = Recorder::with_config(config).context("invalid capture configuration")?;

    let mut raw = values;
    if let Some(path) = input {
        raw.extend(
            read_values_file(&path)
                .with_context(|| format!("failed to read values from {}", path.display()))?,
        );
    }

    for (idx, text) in raw.iter().enumerate() {
        let number = parse_number(text)?;
        capture
            .insert(number)
            .with_context(|| format!("failed to record value {} ('{}')", idx + 1, text))?;
    }
    info!(recorded = capture.len(), "values recorded");

    let stats = capture.snapshot().context("failed to build statistics")?;

    if less.is_empty() && greater.is_empty() && between.is_empty() {
        print_summary(&stats);
        return Ok(());
    }

    for text in &less {
        let count = stats
            .less(parse_number(text)?)
            .with_context(|| format!("less({text}) failed"))?;
        println!("less({text}) = {count}");
    }
    for text in &greater {
        let count = stats
            .greater(parse_number(text)?)
            .with_context(|| format!("greater({text}) failed"))?;
        println!("greater({text}) = {count}");
    }
    for pair in between.chunks(2) {
        let [lo, hi] = pair else {
            bail!("--between expects two values, got {}", pair.len());
        };
        let count = stats
            .between(parse_number(lo)?, parse_number(hi)?)
            .with_context(|| format!("between({lo}, {hi}) failed"))?;
        println!("between({lo}, {hi}) = {count}");
    }

    Ok(())
}

fn parse_number(text: &str) -> Result<Number> {
    text.parse::<Number>()
        .with_context(|| format!("'{text}' is not a number"))
}

fn read_values_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect())
}

fn print_summary(stats: &Snapshot) {
    println!(
        "count={}\tmin={}\tmax={}\tfingerprint={}",
        stats.len(),
        stats.min(),
        stats.max(),
        stats.fingerprint().to_hex()
    );
}
