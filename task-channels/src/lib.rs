pub mod channel_collective;
pub mod runner;

pub use channel_collective::ChannelCollective;
pub use runner::{run_job, JobError};
