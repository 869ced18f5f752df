//! Error types for multirip-av.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the encoder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external tool failed to execute.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// A filename template rendered to something that is not a file name.
    #[error("cannot render filename from template {template:?}: {reason}")]
    Template { template: String, reason: String },

    /// The specified file was not found.
    #[error("file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The path exists but is a directory.
    #[error("path is a directory, not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan output did not yield a usable title.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Reasons a drive scan can fail to produce a "Play All" title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// No title block with a duration was found.
    #[error("no titles found in scan output")]
    NoTitles,

    /// Titles were found but none had a duration above zero.
    #[error("could not identify a title with the longest duration")]
    Unidentified,
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a template rendering error.
    pub fn template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}
