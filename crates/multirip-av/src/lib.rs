//! # multirip-av
//!
//! Encoder-facing building blocks for multirip.
//!
//! This crate provides:
//! - [`EncodeCommand`] - the HandBrakeCLI encode and scan invocations
//! - [`scan`] - parsing of title scans to find the "Play All" title
//! - [`TemplateContext`] - `{key}` placeholder substitution for output names
//! - [`tools`] - executable and preset file checks
//!
//! ## Example
//!
//! ```
//! use multirip_av::find_play_all_title;
//!
//! let output = "+ title 1:\n  + duration: 00:10:00\n+ title 2:\n  + duration: 01:05:30\n";
//! assert_eq!(find_play_all_title(output)?.title, 2);
//! # Ok::<(), multirip_av::ScanError>(())
//! ```

pub mod command;
mod error;
pub mod scan;
pub mod template;
pub mod tools;

// Re-exports
pub use command::EncodeCommand;
pub use error::{Error, Result, ScanError};
pub use scan::{find_play_all_title, parse_titles, scan_drive, scan_titles, DriveScan, ScanMatch};
pub use template::TemplateContext;
pub use tools::{check_executable, check_file};
