//! tally gateway library entry.
//!
//! Wires the three visit counters from `tally-core` behind an axum router
//! with request middleware, config loading, and metrics. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod layers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod visits;
