//! Trace-driven virtual-memory address translation simulator.
//!
//! This crate simulates a two-level translation path — a TLB backed by a
//! page table, itself backed by a bounded pool of physical frames — driven
//! by a trace of virtual memory accesses. It provides:
//! 1. **Common:** Address, access-type, and error definitions.
//! 2. **Config:** Validated simulation parameters and derived geometry.
//! 3. **Memory:** The TLB (LRU/FIFO), page table, and frame pool.
//! 4. **Simulation:** Trace parsing and the per-access engine.
//! 5. **Statistics:** Hit/miss/fault accounting and the summary report.

/// Common types (addresses, access types, errors).
pub mod common;
/// Simulation configuration and validation.
pub mod config;
/// Simulated translation hardware (TLB, page table, physical memory).
pub mod mem;
/// Trace input and the simulation engine.
pub mod sim;
/// Statistics collection and reporting.
pub mod stats;

/// Crate-wide error type.
pub use crate::common::error::SimError;
/// Validated simulation configuration; construct then [`SimConfig::validate`].
pub use crate::config::SimConfig;
/// The per-run simulation engine; construct with [`SimulationEngine::new`].
pub use crate::sim::engine::SimulationEngine;
/// Streaming trace parser; construct with [`TraceReader::from_path`].
pub use crate::sim::trace::TraceReader;
/// Final counters of a run.
pub use crate::stats::SimStats;
