use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub handbrake: HandbrakeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HandbrakeConfig {
    /// HandBrakeCLI executable (absolute path or a name resolved through PATH)
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Preset file passed with --preset-import-file
    #[serde(default = "default_preset")]
    pub preset: PathBuf,

    /// Preset name inside the preset file
    #[serde(default = "default_preset_name")]
    pub preset_name: String,
}

fn default_binary() -> PathBuf {
    PathBuf::from("/path/to/HandBrakeCLI")
}
fn default_preset() -> PathBuf {
    PathBuf::from("/path/to/presets.json")
}
fn default_preset_name() -> String {
    "My_Preset".to_string()
}

impl Default for HandbrakeConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            preset: default_preset(),
            preset_name: default_preset_name(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Placeholders: {title} {season} {episode} {track} {drive}
    #[serde(default = "default_shows_template")]
    pub shows_filename_template: String,

    /// Placeholders: {title} {track} {drive}
    #[serde(default = "default_movies_template")]
    pub movies_filename_template: String,

    /// Directory for the per-drive `<drive>.log` files (default: working directory)
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_shows_template() -> String {
    "{title}_S{season:02}E{episode:02}".to_string()
}
fn default_movies_template() -> String {
    "{title}".to_string()
}
fn default_log_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            shows_filename_template: default_shows_template(),
            movies_filename_template: default_movies_template(),
            log_dir: default_log_dir(),
        }
    }
}

/// Contents of a jobs file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JobsConfig {
    /// Output directory used by entries without their own `output_dir`
    #[serde(default)]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub jobs: Vec<JobDefinition>,
}

/// Everything to rip from one drive.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobDefinition {
    pub drive: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<Show>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Show {
    pub title: String,

    #[serde(default)]
    pub season: u32,

    #[serde(default)]
    pub episode: u32,

    pub track_number: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Movie {
    pub title: String,

    pub track_number: u32,
}
