use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Identity of one execution unit in the collective.
pub trait Communicator {
    /// This worker's identity, 0-based.
    fn rank(&self) -> usize;

    /// Total number of workers in the run.
    fn size(&self) -> usize;

    /// True on the coordinator rank, which loads the grid, gathers the
    /// partial aggregates, and emits the report.
    fn is_coordinator(&self) -> bool {
        self.rank() == 0
    }
}

/// Collective operations joining all workers.
///
/// Both operations are barriers: every rank must call them, in the same
/// order. A failure is fatal for the whole run; there are no retries and
/// no degraded result.
#[async_trait]
pub trait Collective: Communicator + Send {
    /// One-to-all distribution. The coordinator passes `Some(value)`,
    /// every other rank passes `None`; all ranks return their own copy of
    /// the value.
    async fn broadcast<T>(&mut self, value: Option<T>) -> Result<T, CommError>
    where
        T: Serialize + DeserializeOwned + Send + 'static;

    /// All-to-one collection. Every rank contributes one value; the
    /// coordinator returns `Some` with one value per rank, ordered by
    /// rank, every other rank returns `None`.
    async fn gather<T>(&mut self, value: T) -> Result<Option<Vec<T>>, CommError>
    where
        T: Serialize + DeserializeOwned + Send + 'static;
}

#[derive(Debug)]
pub enum CommError {
    /// A peer hung up before the collective completed
    Disconnected,
    /// A payload failed to encode or decode
    Codec(String),
    /// A rank called a collective in a way the protocol does not allow
    Protocol(String),
}

impl fmt::Display for CommError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommError::Disconnected => write!(f, "Peer disconnected during a collective"),
            CommError::Codec(msg) => write!(f, "Payload codec failure: {}", msg),
            CommError::Protocol(msg) => write!(f, "Collective protocol violation: {}", msg),
        }
    }
}

impl std::error::Error for CommError {}
