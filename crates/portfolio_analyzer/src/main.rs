use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use portfolio_analyzer::{OutputFormat, PlanOverrides, init_logging, render_report, resolve_plan, run_plan};

#[derive(Parser, Debug)]
#[command(name = "portfolio-analyzer")]
#[command(about = "Monte Carlo percentiles of inflation-adjusted portfolio outcomes")]
struct Args {
    /// Path to a YAML analysis plan (default: the two preset portfolios)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: PlanOverrides,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    init_logging(&args.log_level, args.log_file.as_deref())?;

    let plan = resolve_plan(args.config.as_deref(), &args.overrides)?;

    let results = run_plan(&plan).wrap_err("Portfolio analysis failed")?;
    let report = render_report(&results, args.format).wrap_err("Failed to render report")?;
    println!("{report}");

    tracing::info!("Reported {} analyses", results.len());
    Ok(())
}
