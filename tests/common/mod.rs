//! Shared helpers for integration tests.
//!
//! [`fake_encoder`] writes a shell script that stands in for HandBrakeCLI. It
//! parses the `-t <track>` argument into `$track`, echoes one line to stdout
//! and one to stderr, then runs the test-specific shell snippet.

#![allow(dead_code)]

use multirip::config::{Config, JobDefinition, JobsConfig, Movie};
use std::path::{Path, PathBuf};

/// Write an executable stand-in for HandBrakeCLI into `dir`.
#[cfg(unix)]
pub fn fake_encoder(dir: &Path, behaviour: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("HandBrakeCLI");
    let body = format!(
        r#"#!/bin/sh
track=""
while [ $# -gt 0 ]; do
  case "$1" in
    -t) track="$2"; shift 2 ;;
    *) shift ;;
  esac
done
echo "encode track $track"
echo "stderr track $track" >&2
{behaviour}
"#
    );
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Config pointing at `binary`, naming movies `{title}`.
pub fn config_for(binary: &Path) -> Config {
    let mut config = Config::default();
    config.handbrake.binary = binary.to_path_buf();
    config.handbrake.preset = PathBuf::from("/dev/null");
    config.output.movies_filename_template = "{title}".to_string();
    config
}

/// Jobs file with one movie per track, grouped per drive.
pub fn jobs_for(output_dir: &Path, drives: &[(&str, &[u32])]) -> JobsConfig {
    JobsConfig {
        output_dir: output_dir.to_path_buf(),
        jobs: drives
            .iter()
            .map(|(drive, tracks)| JobDefinition {
                drive: drive.to_string(),
                output_dir: None,
                shows: Vec::new(),
                movies: tracks
                    .iter()
                    .map(|track| Movie {
                        title: format!("title{track}"),
                        track_number: *track,
                    })
                    .collect(),
            })
            .collect(),
    }
}
