//! Path checks behind `multirip verify`.

use super::Config;
use std::path::PathBuf;

/// Outcome of checking one configured path.
#[derive(Debug)]
pub struct PathCheck {
    pub label: &'static str,
    pub path: PathBuf,
    pub error: Option<String>,
}

impl PathCheck {
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Check the encoder binary and the preset file.
pub fn check_paths(config: &Config) -> Vec<PathCheck> {
    let binary = &config.handbrake.binary;
    let preset = &config.handbrake.preset;

    vec![
        PathCheck {
            label: "Handbrake Binary",
            path: binary.clone(),
            error: multirip_av::check_executable(binary)
                .err()
                .map(|e| e.to_string()),
        },
        PathCheck {
            label: "Preset File",
            path: preset.clone(),
            error: multirip_av::check_file(preset).err().map(|e| e.to_string()),
        },
    ]
}
