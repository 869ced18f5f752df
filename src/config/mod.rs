pub mod persist;
mod types;
pub mod verify;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "multirip";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Platform-specific location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Use the custom path if given, otherwise the platform default
pub fn resolve_config_path(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(expand_path(path)),
        None => default_config_path(),
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {:?}. Please run 'multirip init'",
            path
        )
    })?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    config.handbrake.binary = expand_path(&config.handbrake.binary);
    config.handbrake.preset = expand_path(&config.handbrake.preset);
    config.output.log_dir = expand_path(&config.output.log_dir);

    Ok(config)
}

/// Load a jobs file
pub fn load_jobs(path: &Path) -> Result<JobsConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read jobs file: {:?}", path))?;

    let mut jobs: JobsConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse jobs file: {:?}", path))?;

    jobs.output_dir = expand_path(&jobs.output_dir);
    for job in &mut jobs.jobs {
        if let Some(dir) = job.output_dir.as_mut() {
            *dir = expand_path(dir);
        }
    }

    Ok(jobs)
}

/// Expand a leading `~` to the home directory
fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.handbrake.binary.as_os_str().is_empty() {
        anyhow::bail!("handbrake.binary cannot be empty");
    }

    if config.output.shows_filename_template.trim().is_empty() {
        anyhow::bail!("output.shows_filename_template cannot be empty");
    }

    if config.output.movies_filename_template.trim().is_empty() {
        anyhow::bail!("output.movies_filename_template cannot be empty");
    }

    if config.handbrake.preset_name.is_empty() {
        tracing::warn!("handbrake.preset_name is empty; HandBrakeCLI will reject the preset");
    }

    Ok(())
}
