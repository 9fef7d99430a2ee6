//! Application Layer - Pipeline orchestration
//!
//! - `assembler`: turns the trending list into ranked candidates
//! - `report`: console and log-sink line formats
//! - `scheduler`: single-shot and continuous polling
//! - `pool`: parallel uncoordinated workers

pub mod assembler;
pub mod pool;
pub mod report;
pub mod scheduler;

pub use assembler::{CandidateAssembler, DEFAULT_FETCH_DELAY};
pub use pool::WorkerPool;
pub use scheduler::{PollingScheduler, SchedulerError, DEFAULT_POLL_INTERVAL};
