use crate::channel_collective::ChannelCollective;
use geo_grid_core::pipeline::{self, JobConfig, PipelineError};
use geo_grid_core::report::Report;
use std::fmt;

/// Run one full job with `workers` tokio tasks, each task acting as one
/// rank of the collective, and return the coordinator's report.
///
/// Every task runs the same pipeline entry point; rank 0 doubles as the
/// coordinator. Any rank failing fails the whole run.
pub async fn run_job(job: JobConfig, workers: usize) -> Result<Report, JobError> {
    let handles: Vec<_> = ChannelCollective::create(workers)
        .into_iter()
        .map(|mut comm| {
            let job = job.clone();
            tokio::spawn(async move { pipeline::run(&mut comm, &job).await })
        })
        .collect();

    let mut report = None;
    for (rank, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(Some(rank_report))) => report = Some(rank_report),
            Ok(Ok(None)) => {}
            Ok(Err(e)) => return Err(JobError::Rank { rank, source: e }),
            Err(e) => {
                return Err(JobError::Join {
                    rank,
                    message: e.to_string(),
                })
            }
        }
    }
    report.ok_or(JobError::MissingReport)
}

#[derive(Debug)]
pub enum JobError {
    /// A rank's pipeline failed; the run is abandoned
    Rank { rank: usize, source: PipelineError },
    /// A worker task panicked or was cancelled
    Join { rank: usize, message: String },
    /// Every task finished but none produced a report
    MissingReport,
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobError::Rank { rank, source } => write!(f, "Rank {} failed: {}", rank, source),
            JobError::Join { rank, message } => {
                write!(f, "Worker task {} did not finish: {}", rank, message)
            }
            JobError::MissingReport => write!(f, "No rank produced a report"),
        }
    }
}

impl std::error::Error for JobError {}
