use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::counter::VisitCounter;
use crate::error::Result;
use crate::strategy::Strategy;

/// Lock-free counter: one `fetch_add` per visit.
///
/// The read-modify-write is a single atomic instruction, so no other memory
/// needs ordering against it and `Relaxed` is enough for unique results.
#[derive(Debug, Default)]
pub struct AtomicCounter {
    visits: AtomicU64,
}

impl AtomicCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) -> u64 {
        self.visits.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn current(&self) -> u64 {
        self.visits.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl VisitCounter for AtomicCounter {
    fn strategy(&self) -> Strategy {
        Strategy::Atomic
    }

    async fn increment(&self) -> Result<u64> {
        Ok(AtomicCounter::increment(self))
    }

    async fn current(&self) -> Result<u64> {
        Ok(AtomicCounter::current(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn sequential_visits_count_up() {
        let c = AtomicCounter::new();
        for i in 1..=5 {
            assert_eq!(c.increment(), i);
        }
        assert_eq!(c.current(), 5);
    }

    #[test]
    fn thousand_threads_no_lost_update() {
        let c = Arc::new(AtomicCounter::new());
        let handles: Vec<_> = (0..1000)
            .map(|_| {
                let c = Arc::clone(&c);
                thread::spawn(move || c.increment())
            })
            .collect();

        let mut all: Vec<u64> = handles.into_iter().filter_map(|h| h.join().ok()).collect();
        all.sort_unstable();

        assert_eq!(all, (1..=1000).collect::<Vec<_>>());
        assert_eq!(c.current(), 1000);
    }
}
