use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::counter::VisitCounter;
use crate::error::Result;
use crate::strategy::Strategy;

/// Counter guarded by a lock.
///
/// The critical section never awaits, so a plain `std::sync::Mutex` is used
/// and callers are serialized for a few instructions at most.
#[derive(Debug, Default)]
pub struct MutexCounter {
    visits: Mutex<u64>,
}

impl MutexCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) -> u64 {
        // A poisoned guard still holds a whole u64.
        let mut visits = self.visits.lock().unwrap_or_else(PoisonError::into_inner);
        *visits += 1;
        *visits
    }

    pub fn current(&self) -> u64 {
        *self.visits.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl VisitCounter for MutexCounter {
    fn strategy(&self) -> Strategy {
        Strategy::Mutex
    }

    async fn increment(&self) -> Result<u64> {
        Ok(MutexCounter::increment(self))
    }

    async fn current(&self) -> Result<u64> {
        Ok(MutexCounter::current(self))
    }
}
