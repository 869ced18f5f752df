//! External tool and input file checks.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolve an encoder binary to an executable path.
///
/// A path that exists and carries an execute bit is accepted as-is. Anything
/// else (a bare name like `HandBrakeCLI`, or a file without the execute bit)
/// is looked up in `PATH`.
///
/// # Errors
///
/// Returns [`Error::NotAFile`] for a directory and [`Error::ToolNotFound`] if
/// neither check succeeds.
pub fn check_executable(path: &Path) -> Result<PathBuf> {
    if let Ok(meta) = std::fs::metadata(path) {
        if meta.is_dir() {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }
        if is_executable(&meta) {
            return Ok(path.to_path_buf());
        }
    }

    which::which(path).map_err(|_| Error::tool_not_found(path.display().to_string()))
}

/// Require that `path` is an existing regular file.
pub fn check_file(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(Error::NotAFile {
            path: path.to_path_buf(),
        }),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::file_not_found(path)),
        Err(e) => Err(Error::Io(e)),
    }
}

#[cfg(unix)]
fn is_executable(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(meta: &std::fs::Metadata) -> bool {
    meta.is_file()
}
