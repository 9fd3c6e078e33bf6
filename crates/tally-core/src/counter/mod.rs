//! Visit counters.
//!
//! Each strategy owns its own `u64` starting at 0. The outward contract is the
//! same for all of them: the values returned to the callers of one counter
//! are exactly `1..=N` after `N` completed increments.

pub mod atomic;
pub mod channel;
pub mod mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::strategy::Strategy;

pub use atomic::AtomicCounter;
pub use channel::ChannelCounter;
pub use mutex::MutexCounter;

/// Common contract of the three strategies.
#[async_trait]
pub trait VisitCounter: Send + Sync {
    fn strategy(&self) -> Strategy;

    /// Add one visit and return the count right after it.
    ///
    /// Not retryable: a second call counts a second visit.
    async fn increment(&self) -> Result<u64>;

    /// Current count, read through the same synchronization as `increment`.
    async fn current(&self) -> Result<u64>;
}
