use async_trait::async_trait;

use crate::counter::VisitCounter;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::token::ExclusiveToken;

/// Counter whose value is passed around as an exclusive token.
///
/// An increment withdraws the count from the single-slot channel, bumps it,
/// and puts it back before returning. There is no `.await` between withdraw
/// and return, so a caller dropped while waiting never leaves the count
/// half-updated, and one that got the token always finishes.
pub struct ChannelCounter {
    token: ExclusiveToken<u64>,
}

impl ChannelCounter {
    /// Build a counter with its one token already in the slot.
    pub fn new() -> Self {
        Self {
            token: ExclusiveToken::new(0),
        }
    }

    pub async fn increment(&self) -> Result<u64> {
        let mut visits = self.token.acquire().await?;
        *visits += 1;
        Ok(*visits)
    }

    pub async fn current(&self) -> Result<u64> {
        Ok(*self.token.acquire().await?)
    }

    /// Tear down: waits for the in-flight holder, then rejects new visits.
    pub async fn close(&self) {
        self.token.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_closed()
    }
}

impl Default for ChannelCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisitCounter for ChannelCounter {
    fn strategy(&self) -> Strategy {
        Strategy::Channel
    }

    async fn increment(&self) -> Result<u64> {
        ChannelCounter::increment(self).await
    }

    async fn current(&self) -> Result<u64> {
        ChannelCounter::current(self).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TallyError;

    #[tokio::test]
    async fn sequential_visits_count_up() {
        let c = ChannelCounter::new();
        for i in 1..=5 {
            assert_eq!(c.increment().await.unwrap(), i);
        }
        assert_eq!(c.current().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn closed_counter_rejects_visits() {
        let c = ChannelCounter::new();
        c.increment().await.unwrap();
        c.close().await;

        assert!(c.is_closed());
        assert!(matches!(c.increment().await, Err(TallyError::TokenClosed)));
        assert!(matches!(c.current().await, Err(TallyError::TokenClosed)));
    }
}
