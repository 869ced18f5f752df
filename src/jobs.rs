//! Expansion of a jobs file into per-drive encode queues.

use crate::config::{Config, JobDefinition, JobsConfig};
use multirip_av::{EncodeCommand, TemplateContext};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Extension appended to every rendered output name.
pub const MEDIA_EXTENSION: &str = "mkv";

/// One title to encode from one drive.
#[derive(Debug, Clone)]
pub struct Job {
    /// Track (title) number on the disc
    pub id: u32,
    /// Rendered output name, without extension
    pub name: String,
    pub drive: String,
    pub output_path: PathBuf,
    pub command: EncodeCommand,
}

/// Jobs partitioned by drive, each queue in jobs-file order.
#[derive(Debug, Clone, Default)]
pub struct DriveGroups {
    groups: BTreeMap<String, Vec<Job>>,
    skipped: usize,
}

impl DriveGroups {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn drive_count(&self) -> usize {
        self.groups.len()
    }

    pub fn job_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Entries dropped because their output name could not be rendered
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn get(&self, drive: &str) -> Option<&[Job]> {
        self.groups.get(drive).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Job])> {
        self.groups
            .iter()
            .map(|(drive, jobs)| (drive.as_str(), jobs.as_slice()))
    }

    fn push(&mut self, job: Job) {
        self.groups.entry(job.drive.clone()).or_default().push(job);
    }
}

impl IntoIterator for DriveGroups {
    type Item = (String, Vec<Job>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<Job>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Build the encode jobs for every show and movie in `jobs_config`.
///
/// Entries whose filename cannot be rendered are logged and skipped; the rest
/// of the file is still processed.
pub fn build_drive_groups(config: &Config, jobs_config: &JobsConfig) -> DriveGroups {
    let mut groups = DriveGroups::default();

    for definition in &jobs_config.jobs {
        let output_dir = definition
            .output_dir
            .as_deref()
            .unwrap_or(&jobs_config.output_dir);

        for show in &definition.shows {
            let ctx = TemplateContext::new()
                .with_var("title", &show.title)
                .with_var("season", show.season)
                .with_var("episode", show.episode)
                .with_var("track", show.track_number)
                .with_var("drive", &definition.drive);

            add_job(
                &mut groups,
                config,
                definition,
                output_dir,
                &ctx,
                &config.output.shows_filename_template,
                show.track_number,
            );
        }

        for movie in &definition.movies {
            let ctx = TemplateContext::new()
                .with_var("title", &movie.title)
                .with_var("track", movie.track_number)
                .with_var("drive", &definition.drive);

            add_job(
                &mut groups,
                config,
                definition,
                output_dir,
                &ctx,
                &config.output.movies_filename_template,
                movie.track_number,
            );
        }
    }

    groups
}

fn add_job(
    groups: &mut DriveGroups,
    config: &Config,
    definition: &JobDefinition,
    output_dir: &Path,
    ctx: &TemplateContext,
    template: &str,
    track: u32,
) {
    let name = match ctx.render_filename(template) {
        Ok(name) => name,
        Err(e) => {
            tracing::error!(
                drive = %definition.drive,
                track,
                error = %e,
                "Could not generate filename, skipping"
            );
            groups.skipped += 1;
            return;
        }
    };

    let output_path = output_dir.join(format!("{name}.{MEDIA_EXTENSION}"));
    let command = EncodeCommand::handbrake_encode(
        &config.handbrake.binary,
        &config.handbrake.preset,
        &config.handbrake.preset_name,
        &definition.drive,
        track,
        &output_path,
    );

    groups.push(Job {
        id: track,
        name,
        drive: definition.drive.clone(),
        output_path,
        command,
    });
}
