//! Config command - inspect and edit the stored configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use tracing::debug;

use sizetally_core::TallyConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,

    /// Write a configuration file with default settings
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, e.g. `extraction.quantity_radius`
    Get { key: String },

    /// Change one value and save the file
    Set { key: String, value: String },

    /// Print where the configuration file lives
    Path,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sizetally")
        .join("config.json")
}

/// Load the config from `path`, else the default location, else defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<TallyConfig> {
    match path {
        Some(path) => Ok(TallyConfig::from_file(Path::new(path))?),
        None => stored_config(&default_config_path()),
    }
}

/// `path` is the global `--config` file when given.
pub async fn run(args: ConfigArgs, path: Option<&str>) -> anyhow::Result<()> {
    let path = path.map(PathBuf::from).unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            if !path.exists() {
                println!(
                    "{} No config file at {}, showing defaults.",
                    style("ℹ").blue(),
                    path.display()
                );
            }
            println!("{}", serde_json::to_string_pretty(&stored_config(&path)?)?);
        }
        ConfigCommand::Init { force } => init_config(&path, force)?,
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(stored_config(&path)?)?;
            let value = json
                .pointer(&json_pointer(&key))
                .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value)?,
        ConfigCommand::Path => {
            let status = if path.exists() {
                style("exists").green()
            } else {
                style("not created, run `sizetally config init`").yellow()
            };
            println!("{} ({})", path.display(), status);
        }
    }

    Ok(())
}

/// The file at `path`, or defaults when there is none.
fn stored_config(path: &Path) -> anyhow::Result<TallyConfig> {
    if path.exists() {
        debug!("Using config file {}", path.display());
        Ok(TallyConfig::from_file(path)?)
    } else {
        Ok(TallyConfig::default())
    }
}

/// `extraction.quantity_radius` -> `/extraction/quantity_radius`
fn json_pointer(key: &str) -> String {
    format!("/{}", key.replace('.', "/"))
}

fn write_config(path: &Path, config: &TallyConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    write_config(path, &TallyConfig::default())?;
    println!("{} Created {}", style("✓").green(), path.display());
    Ok(())
}

fn set_config(path: &Path, key: &str, raw: &str) -> anyhow::Result<()> {
    // Bare words such as `csv` are taken as strings
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let mut json = serde_json::to_value(stored_config(path)?)?;
    let slot = json
        .pointer_mut(&json_pointer(key))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    *slot = value.clone();

    let config: TallyConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    write_config(path, &config)?;

    println!("{} Set {} = {}", style("✓").green(), key, value);
    Ok(())
}
