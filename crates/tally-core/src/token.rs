//! Exclusive-ownership token: a single-slot channel used as a mutex.
//!
//! Exactly one value lives in the slot. `acquire` withdraws it (suspending
//! until it is there), the returned [`TokenGuard`] hands out the value, and
//! dropping the guard puts it back. Admission is gated by a one-permit
//! semaphore so waiters park on the runtime instead of spinning on the slot;
//! the slot lock itself is never contended.
//!
//! The token is seeded by the constructor, so a token that can never be
//! acquired cannot be built.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

use tokio::sync::{Semaphore, SemaphorePermit};

use crate::error::{Result, TallyError};

pub struct ExclusiveToken<T> {
    gate: Semaphore,
    slot: Mutex<Option<T>>,
}

impl<T> ExclusiveToken<T> {
    /// Seed the slot with `value`.
    pub fn new(value: T) -> Self {
        Self {
            gate: Semaphore::new(1),
            slot: Mutex::new(Some(value)),
        }
    }

    /// Withdraw the token, waiting until the current holder returns it.
    ///
    /// Fails with [`TallyError::TokenClosed`] once [`close`](Self::close) ran.
    pub async fn acquire(&self) -> Result<TokenGuard<'_, T>> {
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| TallyError::TokenClosed)?;

        let value = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or_else(|| TallyError::Internal("token slot empty while admitted".into()))?;

        Ok(TokenGuard {
            value: Some(value),
            slot: &self.slot,
            _permit: permit,
        })
    }

    /// Close the channel after the token is back in the slot.
    ///
    /// Waits for the in-flight holder (if any) to return the token, so no
    /// holder ever hands it back to a closed channel. Waiters still queued
    /// are woken with `TokenClosed`.
    pub async fn close(&self) {
        let drained = self.gate.acquire().await;
        self.gate.close();
        drop(drained);
        tracing::debug!("exclusive token closed");
    }

    pub fn is_closed(&self) -> bool {
        self.gate.is_closed()
    }
}

/// Holder of the withdrawn token. Returns it to the slot on drop, unwinding
/// included.
pub struct TokenGuard<'a, T> {
    // Some(..) until drop.
    value: Option<T>,
    slot: &'a Mutex<Option<T>>,
    // Declared last: released only after `drop` has refilled the slot.
    _permit: SemaphorePermit<'a>,
}

impl<T> Deref for TokenGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.value {
            Some(v) => v,
            None => unreachable!("token taken out of a live guard"),
        }
    }
}

impl<T> DerefMut for TokenGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.value {
            Some(v) => v,
            None => unreachable!("token taken out of a live guard"),
        }
    }
}

impl<T> Drop for TokenGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn guard_returns_token_on_drop() {
        let token = ExclusiveToken::new(String::from("a"));
        {
            let mut g = token.acquire().await.unwrap();
            g.push('b');
        }
        let g = token.acquire().await.unwrap();
        assert_eq!(g.as_str(), "ab");
    }

    #[tokio::test]
    async fn second_acquire_waits_for_holder() {
        let token = Arc::new(ExclusiveToken::new(0u64));
        let held = token.acquire().await.unwrap();

        let t = Arc::clone(&token);
        let waiter = tokio::spawn(async move {
            let value = *t.acquire().await.unwrap();
            value
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(held);
        assert_eq!(waiter.await.unwrap(), 0);
    }

    #[tokio::test]
    async fn close_waits_for_token_then_rejects() {
        let token = Arc::new(ExclusiveToken::new(7u64));
        let mut held = token.acquire().await.unwrap();

        let t = Arc::clone(&token);
        let closer = tokio::spawn(async move { t.close().await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!closer.is_finished());
        assert!(!token.is_closed());

        *held += 1;
        drop(held);
        closer.await.unwrap();

        assert!(token.is_closed());
        assert!(matches!(token.acquire().await, Err(TallyError::TokenClosed)));
    }

    #[test]
    fn token_survives_panicking_holder() {
        let token = ExclusiveToken::new(1u64);

        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let mut g = token.acquire().await.unwrap();
                *g += 1;
                panic!("holder failed");
            })
        }));
        assert!(res.is_err());

        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let g = rt.block_on(token.acquire()).unwrap();
        assert_eq!(*g, 2);
    }
}
