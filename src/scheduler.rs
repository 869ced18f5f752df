//! Per-drive worker scheduling.
//!
//! Every drive gets its own tokio task. Inside a task the drive's jobs run one
//! at a time, in queue order, with stdout and stderr of each encoder process
//! appended to a single `<drive>.log` file. Drives never wait on each other.

use crate::jobs::{DriveGroups, Job};
use multirip_av::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{error, info, warn, Instrument};

/// State changes reported by drive workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveEvent {
    WorkerStarted { drive: String },
    /// The drive's log file could not be created; none of its jobs ran.
    WorkerAborted { drive: String, error: String },
    JobStarted { drive: String, job_id: u32, name: String },
    JobFinished { drive: String, job_id: u32 },
    JobFailed { drive: String, job_id: u32, error: String },
    WorkerFinished { drive: String },
}

/// Runs drive queues concurrently, one worker per drive.
pub struct DriveScheduler {
    log_dir: PathBuf,
    event_tx: Option<mpsc::UnboundedSender<DriveEvent>>,
}

impl DriveScheduler {
    /// Create a scheduler writing per-drive logs into `log_dir`.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            event_tx: None,
        }
    }

    /// Create a scheduler that also reports [`DriveEvent`]s.
    pub fn with_events(
        log_dir: impl Into<PathBuf>,
        event_tx: mpsc::UnboundedSender<DriveEvent>,
    ) -> Self {
        Self {
            log_dir: log_dir.into(),
            event_tx: Some(event_tx),
        }
    }

    /// Log file used for `drive`.
    pub fn log_path(&self, drive: &str) -> PathBuf {
        self.log_dir.join(format!("{}.log", drive_label(drive)))
    }

    /// Run every queue to completion.
    ///
    /// Returns once all workers have finished; a failing job or drive never
    /// stops the others.
    pub async fn run(&self, groups: DriveGroups) {
        let mut workers = JoinSet::new();

        for (drive, jobs) in groups {
            let worker = DriveWorker {
                log_path: self.log_path(&drive),
                events: self.event_tx.clone(),
                drive,
                jobs,
            };
            let span = tracing::info_span!("drive", drive = %worker.drive);
            workers.spawn(worker.run().instrument(span));
        }

        while let Some(result) = workers.join_next().await {
            if let Err(e) = result {
                error!("Drive worker task failed: {}", e);
            }
        }
    }
}

struct DriveWorker {
    drive: String,
    jobs: Vec<Job>,
    log_path: PathBuf,
    events: Option<mpsc::UnboundedSender<DriveEvent>>,
}

impl DriveWorker {
    async fn run(self) {
        self.emit(DriveEvent::WorkerStarted {
            drive: self.drive.clone(),
        });

        let log_file = match tokio::fs::File::create(&self.log_path).await {
            Ok(file) => file.into_std().await,
            Err(e) => {
                error!(file = %self.log_path.display(), error = %e, "Error creating log file");
                self.emit(DriveEvent::WorkerAborted {
                    drive: self.drive.clone(),
                    error: e.to_string(),
                });
                return;
            }
        };

        info!(
            jobs = self.jobs.len(),
            log = %self.log_path.display(),
            "Worker started"
        );

        for job in &self.jobs {
            info!(job_id = job.id, name = %job.name, "Worker started job");
            self.emit(DriveEvent::JobStarted {
                drive: self.drive.clone(),
                job_id: job.id,
                name: job.name.clone(),
            });

            match run_job(job, &log_file).await {
                Ok(()) => {
                    info!(job_id = job.id, "Worker finished job");
                    self.emit(DriveEvent::JobFinished {
                        drive: self.drive.clone(),
                        job_id: job.id,
                    });
                }
                Err(e) => {
                    error!(job_id = job.id, error = %e, "Error while transcoding");
                    self.emit(DriveEvent::JobFailed {
                        drive: self.drive.clone(),
                        job_id: job.id,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!("Worker finished");
        self.emit(DriveEvent::WorkerFinished {
            drive: self.drive.clone(),
        });
    }

    fn emit(&self, event: DriveEvent) {
        if let Some(ref tx) = self.events {
            if tx.send(event).is_err() {
                warn!("Drive event receiver dropped");
            }
        }
    }
}

/// Run one encode with both output streams appended to `log_file`.
async fn run_job(job: &Job, log_file: &File) -> multirip_av::Result<()> {
    let tool = job.command.program_name();

    let status = job
        .command
        .to_command()
        .stdout(log_file.try_clone()?)
        .stderr(log_file.try_clone()?)
        .status()
        .await
        .map_err(|e| Error::tool_failed(&tool, format!("failed to spawn: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::tool_failed(&tool, status.to_string()))
    }
}

/// Last path component of a drive identifier, used to name its log file.
fn drive_label(drive: &str) -> String {
    Path::new(drive)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| drive.to_string())
        .replace(['/', '\\', ':'], "_")
}
