//! Simulation driver: trace input and the per-access engine.

/// The per-access state machine driving TLB, page table, and RAM.
pub mod engine;

/// Trace-file parsing and streaming.
pub mod trace;

pub use engine::{AccessKind, SimulationEngine};
pub use trace::{TraceEvent, TraceReader};
