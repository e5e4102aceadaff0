use crate::accumulator::scan_partition;
use crate::aggregate::{merge_partials, PartialAggregate};
use crate::collective::{Collective, CommError};
use crate::grid::{ConfigError, GridIndex};
use crate::ranking::build_report;
use crate::report::Report;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Input paths for one run; identical on every rank.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub grid_path: PathBuf,
    pub posts_path: PathBuf,
}

/// Run the full job as one rank of the collective. Every rank calls this
/// same function:
///
/// 1. the coordinator loads the grid index and broadcasts it;
/// 2. every rank streams the post file and accumulates its own partition;
/// 3. partial aggregates are gathered at the coordinator;
/// 4. the coordinator merges, ranks, and returns `Some(report)`; every
///    other rank returns `None`.
pub async fn run<C: Collective>(
    comm: &mut C,
    job: &JobConfig,
) -> Result<Option<Report>, PipelineError> {
    let local_grid = if comm.is_coordinator() {
        Some(GridIndex::load(&job.grid_path)?)
    } else {
        None
    };
    let grid: GridIndex = comm.broadcast(local_grid).await?;

    let posts = File::open(&job.posts_path)?;
    let partial = scan_partition(&grid, BufReader::new(posts), comm.rank(), comm.size());

    let gathered: Option<Vec<PartialAggregate>> = comm.gather(partial).await?;
    Ok(gathered.map(|partials| {
        let merged = merge_partials(partials, grid.len());
        build_report(&grid, merged)
    }))
}

#[derive(Debug)]
pub enum PipelineError {
    /// The grid definition was missing or malformed
    Config(ConfigError),
    /// A collective operation failed; the run is abandoned
    Comm(CommError),
    /// The post stream could not be opened
    Io(std::io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Config(e) => write!(f, "{}", e),
            PipelineError::Comm(e) => write!(f, "{}", e),
            PipelineError::Io(e) => write!(f, "Failed to open post stream: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ConfigError> for PipelineError {
    fn from(e: ConfigError) -> Self {
        PipelineError::Config(e)
    }
}

impl From<CommError> for PipelineError {
    fn from(e: CommError) -> Self {
        PipelineError::Comm(e)
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(e: std::io::Error) -> Self {
        PipelineError::Io(e)
    }
}
