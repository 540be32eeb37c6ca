use std::sync::atomic::{AtomicU64, Ordering};

use super::{CounterError, VisitCounter};

/// Counter that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryCounter {
    count: AtomicU64,
}

impl MemoryCounter {
    pub fn new(start: u64) -> Self {
        Self {
            count: AtomicU64::new(start),
        }
    }
}

impl VisitCounter for MemoryCounter {
    fn get(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    fn increment(&self) -> Result<u64, CounterError> {
        let prev = self
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_add(1)))
            .unwrap_or_else(|n| n);
        Ok(prev.saturating_add(1))
    }
}
