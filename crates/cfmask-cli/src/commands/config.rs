use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cfmask_core::config::MaskConfig;
use tracing::info;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the default config to a file instead of stdout
    #[arg(short, long, conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Load and validate a config file (TOML), printing its values
    #[arg(long)]
    pub check: Option<PathBuf>,
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    if let Some(ref path) = args.check {
        let config = load_config(path)?;
        println!("Config {} is valid", path.display());
        println!("{}", config);
        return Ok(());
    }

    let toml_str = toml::to_string_pretty(&MaskConfig::default())?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

/// Read a TOML masking config; absent keys take their defaults.
pub fn load_config(path: &Path) -> Result<MaskConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: MaskConfig = toml::from_str(&contents).context("Invalid masking config")?;
    config.validate()?;
    info!(path = %path.display(), "Masking config loaded");
    Ok(config)
}
