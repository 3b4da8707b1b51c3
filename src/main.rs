//! chartfmt - format chart values from the command line.

use anyhow::{Context, Result};
use chartfmt::chart::{ChartReader, SankeyChart};
use chartfmt::config::Config;
use chartfmt::format::{parse_value, FormatMode, ZeroDisplay};
use chartfmt::util::render_chart;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "chartfmt")]
#[command(about = "Format numbers for chart link and node labels", long_about = None)]
struct Args {
    /// Values to format (`-`, `undefined` or `null` for a missing value)
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Raw mode input as typed into the chart's format box (0, 1 or 2)
    #[arg(long, conflicts_with = "format")]
    mode: Option<String>,

    /// Format mode by name (normal, short, percentage)
    #[arg(long, short = 'f')]
    format: Option<FormatMode>,

    /// Show zero values instead of leaving them blank
    #[arg(long)]
    show_zero: bool,

    /// Maximum fraction digits in short mode
    #[arg(long)]
    max_fraction_digits: Option<u8>,

    /// Sankey chart JSON file whose labels should be formatted
    #[arg(long, conflicts_with = "demo")]
    chart: Option<PathBuf>,

    /// Format the labels of the built-in demo chart
    #[arg(long)]
    demo: bool,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_logging(log_path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    // A mode flag replaces the env mode, so the env value is never parsed
    let mode_flag_given = args.mode.is_some() || args.format.is_some();
    let env_mode = if mode_flag_given {
        None
    } else {
        Config::env_mode()
    };
    let mut config = Config::load(args.config.as_deref(), env_mode.as_deref())?;

    // Flags win over env and file settings
    if let Some(ref raw) = args.mode {
        config.mode = FormatMode::from_input(raw);
    } else if let Some(mode) = args.format {
        config.mode = mode;
    }
    if args.show_zero {
        config.zero = ZeroDisplay::Show;
    }
    if let Some(digits) = args.max_fraction_digits {
        config.max_fraction_digits = digits;
    }
    tracing::info!(mode = %config.mode, "formatting");

    let formatter = config.formatter();

    let chart = if args.demo {
        Some(SankeyChart::demo())
    } else if let Some(ref path) = args.chart {
        Some(ChartReader::read_file(path)?)
    } else {
        None
    };

    if let Some(chart) = chart {
        print!("{}", render_chart(&chart, &formatter));
    }

    for raw in &args.values {
        let value = parse_value(raw)?;
        println!("{}", formatter.format(value));
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(ref log_path) = args.log {
        if let Err(err) = init_logging(log_path) {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
        tracing::info!("Starting chartfmt");
    }

    if let Err(err) = run(&args) {
        tracing::error!(error = %err, "chartfmt failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    if args.log.is_some() {
        tracing::info!("chartfmt exited");
    }
}
