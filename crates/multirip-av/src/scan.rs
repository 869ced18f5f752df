//! Drive scanning and "Play All" title detection.
//!
//! HandBrakeCLI invoked with `--title 0` lists every title on the disc instead
//! of encoding one. Each title block looks like:
//!
//! ```text
//! + title 3:
//!   + vts 1, ttn 3, cells 0->12 (2001134 blocks)
//!   + duration: 01:05:30
//! ```
//!
//! The longest title is assumed to be the "Play All" feature.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::{EncodeCommand, Error, Result, ScanError};

static TITLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+ title (\d+):").expect("valid title regex"));

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"duration: (\d{2}):(\d{2}):(\d{2})").expect("valid duration regex")
});

/// A title found in scan output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMatch {
    /// Title number as reported by the encoder.
    pub title: u32,
    /// Play time of the title.
    pub duration: Duration,
}

/// Extract every title that reports a `HH:MM:SS` duration, in output order.
///
/// A title's duration is the first one found between its header and the next
/// title header. Titles without one are skipped.
pub fn parse_titles(scan_output: &str) -> Vec<ScanMatch> {
    let headers: Vec<_> = TITLE_HEADER.captures_iter(scan_output).collect();
    let mut matches = Vec::with_capacity(headers.len());

    for (i, caps) in headers.iter().enumerate() {
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let block_end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(scan_output.len(), |m| m.start());
        let block = &scan_output[whole.end()..block_end];

        let Ok(title) = number.as_str().parse::<u32>() else {
            continue;
        };
        let Some(duration) = DURATION.captures(block).and_then(|d| {
            let field = |i: usize| d.get(i)?.as_str().parse::<u64>().ok();
            Some(Duration::from_secs(
                field(1)? * 3600 + field(2)? * 60 + field(3)?,
            ))
        }) else {
            continue;
        };

        matches.push(ScanMatch { title, duration });
    }

    matches
}

/// Select the longest title from scan output.
///
/// Ties go to the title listed first.
///
/// # Errors
///
/// - [`ScanError::NoTitles`] if no title with a duration is present.
/// - [`ScanError::Unidentified`] if no title is longer than zero seconds.
pub fn find_play_all_title(scan_output: &str) -> std::result::Result<ScanMatch, ScanError> {
    let titles = parse_titles(scan_output);
    tracing::debug!(count = titles.len(), "Found title matches");
    longest_title(&titles)
}

fn longest_title(titles: &[ScanMatch]) -> std::result::Result<ScanMatch, ScanError> {
    if titles.is_empty() {
        return Err(ScanError::NoTitles);
    }

    let mut best: Option<ScanMatch> = None;
    for &candidate in titles {
        let longest = best.map_or(Duration::ZERO, |b| b.duration);
        if candidate.duration > longest {
            best = Some(candidate);
        }
    }

    match best {
        Some(found) if found.title != 0 => Ok(found),
        _ => Err(ScanError::Unidentified),
    }
}

/// Run a title scan on `drive` and return the combined stdout/stderr text.
///
/// Both streams are written to the same temporary file so they interleave in
/// the order the encoder produced them. HandBrakeCLI commonly exits non-zero
/// after a pure scan; that is logged and otherwise ignored.
///
/// # Errors
///
/// Returns [`Error::ToolFailed`] if the binary cannot be launched.
pub async fn run_scan(binary: &Path, drive: &str) -> Result<String> {
    let scan = EncodeCommand::handbrake_scan(binary, drive);
    let tool = scan.program_name();

    let mut capture = tempfile::tempfile()?;
    let stderr = capture.try_clone()?;

    let status = scan
        .to_command()
        .stdout(capture.try_clone()?)
        .stderr(stderr)
        .status()
        .await
        .map_err(|e| Error::tool_failed(&tool, format!("failed to spawn: {e}")))?;

    if !status.success() {
        tracing::warn!(
            %status,
            "{} scan finished with an error (this is often expected)",
            tool
        );
    }

    capture.seek(SeekFrom::Start(0))?;
    let mut raw = Vec::new();
    capture.read_to_end(&mut raw)?;

    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Every title found on a drive, plus the one picked as "Play All".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveScan {
    /// Titles with a duration, in scan order.
    pub titles: Vec<ScanMatch>,
    /// The longest of `titles`.
    pub play_all: ScanMatch,
}

/// Scan `drive`, keeping every parsed title alongside the "Play All" pick.
pub async fn scan_titles(binary: &Path, drive: &str) -> Result<DriveScan> {
    tracing::info!(drive, "Scanning drive to find 'Play All' title...");

    let output = run_scan(binary, drive).await?;
    tracing::debug!(output = %output, "Full scan output");

    let titles = parse_titles(&output);
    tracing::debug!(count = titles.len(), "Found title matches");

    let play_all = longest_title(&titles)?;
    tracing::info!(
        drive,
        title_number = play_all.title,
        duration_secs = play_all.duration.as_secs(),
        "Found 'Play All' title"
    );
    Ok(DriveScan { titles, play_all })
}

/// Scan `drive` and identify its "Play All" title.
pub async fn scan_drive(binary: &Path, drive: &str) -> Result<ScanMatch> {
    Ok(scan_titles(binary, drive).await?.play_all)
}
