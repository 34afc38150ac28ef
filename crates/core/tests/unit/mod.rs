//! # Unit Components
//!
//! Aggregates the test modules for the simulator's building blocks.

/// Configuration validation and derived-geometry tests.
pub mod config;

/// End-to-end engine runs over small traces, pinning the access-charging
/// model and the final counter values.
pub mod engine;

/// Property tests for the monotonic statistics counters.
pub mod properties;

/// Trace parsing and file streaming tests.
pub mod trace;
