//! Writing the default config file, annotated with comments via toml_edit.

use super::Config;
use anyhow::{Context, Result};
use std::path::Path;
use toml_edit::{DocumentMut, Item};

const HANDBRAKE_HEADER: &str = "\
# multirip configuration
#
# binary:      HandBrakeCLI executable, absolute or found through PATH
# preset:      JSON preset file exported from HandBrake
# preset_name: preset to use from that file
";

const OUTPUT_HEADER: &str = "
# Output names are built by replacing {key} placeholders; unknown
# placeholders are left untouched and no number formatting is applied.
# Shows:  {title} {season} {episode} {track} {drive}
# Movies: {title} {track} {drive}
# log_dir: where the per-drive <drive>.log files are written
";

/// Render a config as an annotated TOML document
pub fn render_config(config: &Config) -> Result<String> {
    let content = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    let mut doc: DocumentMut = content
        .parse()
        .with_context(|| "Failed to parse serialized config")?;

    if let Some(table) = doc.get_mut("handbrake").and_then(Item::as_table_mut) {
        table.decor_mut().set_prefix(HANDBRAKE_HEADER);
    }
    if let Some(table) = doc.get_mut("output").and_then(Item::as_table_mut) {
        table.decor_mut().set_prefix(OUTPUT_HEADER);
    }

    Ok(doc.to_string())
}

/// Save a config to a TOML file, creating parent directories
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    std::fs::write(path, render_config(config)?)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

/// Write the default config unless a file already exists.
///
/// Returns `true` if a file was created.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    save_config(path, &Config::default())?;
    Ok(true)
}
