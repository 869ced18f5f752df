//! HandBrakeCLI invocations.

use std::fmt;
use std::path::{Path, PathBuf};

use tokio::process::Command;

/// A single external encoder invocation.
///
/// The argument order is fixed by [`EncodeCommand::handbrake_encode`]; the
/// scheduler treats the command as opaque and only spawns it.
///
/// # Example
///
/// ```
/// use multirip_av::EncodeCommand;
/// use std::path::Path;
///
/// let cmd = EncodeCommand::handbrake_encode(
///     Path::new("/usr/bin/HandBrakeCLI"),
///     Path::new("/etc/presets.json"),
///     "Fast 1080p30",
///     "/dev/sr0",
///     3,
///     Path::new("/rips/Movie.mkv"),
/// );
/// assert_eq!(cmd.args()[6], "-t");
/// assert_eq!(cmd.args()[7], "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl EncodeCommand {
    /// Create a new command for the given program path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, s: impl Into<String>) -> Self {
        self.args.push(s.into());
        self
    }

    /// Build the encode invocation for one title of a drive.
    pub fn handbrake_encode(
        binary: &Path,
        preset_file: &Path,
        preset_name: &str,
        drive: &str,
        title: u32,
        output: &Path,
    ) -> Self {
        Self::new(binary)
            .arg("--preset-import-file")
            .arg(preset_file.display().to_string())
            .arg("--preset")
            .arg(preset_name)
            .arg("-i")
            .arg(drive)
            .arg("-t")
            .arg(title.to_string())
            .arg("-o")
            .arg(output.display().to_string())
    }

    /// Build the scan invocation, which lists every title instead of encoding.
    pub fn handbrake_scan(binary: &Path, drive: &str) -> Self {
        Self::new(binary)
            .arg("-i")
            .arg(drive)
            .arg("--title")
            .arg("0")
    }

    /// Program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments in invocation order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Short program name used in log lines and errors.
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// A ready-to-spawn tokio command with stdin detached.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(std::process::Stdio::null());
        cmd
    }
}

impl fmt::Display for EncodeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
