mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cfmask",
    about = "Percentile thresholds and helpers for cloud/shadow masking"
)]
#[command(version)]
struct Cli {
    /// Log percentile histogram details (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate percentile thresholds from a file of band samples
    Percentile(commands::percentile::PercentileArgs),
    /// Convert an acquisition date to day of year
    Doy(commands::doy::DoyArgs),
    /// Print, save or check a masking config (TOML)
    Config(commands::config::ConfigArgs),
}

impl Commands {
    fn run(&self) -> Result<()> {
        match self {
            Commands::Percentile(args) => commands::percentile::run(args),
            Commands::Doy(args) => commands::doy::run(args),
            Commands::Config(args) => commands::config::run(args),
        }
    }
}

/// `--verbose` forces debug output for the library; otherwise RUST_LOG is
/// honoured, falling back to warnings only.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("cfmask_core=debug,cfmask=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .init();
    cli.command.run()
}
