//! Visit counter storage
//!
//! Handlers only see the [`VisitCounter`] trait, so the backing store is
//! chosen at startup and tests never touch a deployment file.

mod file;
mod memory;

pub use file::FileCounter;
pub use memory::MemoryCounter;

/// Error types for counter storage
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Counter lock poisoned")]
    LockPoisoned,
}

/// A persistent count of visits.
pub trait VisitCounter: Send + Sync {
    /// Current count. Unreadable or missing storage counts as zero.
    fn get(&self) -> u64;

    /// Add one visit and return the new count.
    ///
    /// The read-modify-write is serialized, so concurrent callers never lose
    /// an increment.
    fn increment(&self) -> Result<u64, CounterError>;
}
