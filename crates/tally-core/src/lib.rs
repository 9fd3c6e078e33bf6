//! tally core: the counter-update protocol, independent of any transport.
//!
//! Three increment strategies share one contract ([`counter::VisitCounter`]):
//! a lock, a single atomic read-modify-write, and an exclusive token handed
//! around through a single-slot channel. Every strategy guarantees that the
//! values returned to concurrent callers of one counter form `1..=N` with no
//! duplicates and no gaps.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Lifecycle misuse (a closed token) surfaces as `TallyError`, never as a
//! panic inside a critical section.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod message;
pub mod strategy;
pub mod token;

/// Shared result type.
pub use error::{Result, TallyError};
pub use strategy::Strategy;
