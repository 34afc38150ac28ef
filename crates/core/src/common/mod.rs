//! Common types shared across the virtual-memory simulator.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Address Types:** A strong type for 32-bit virtual addresses.
//! 2. **Access Types:** Classification of trace records (Read/Write).
//! 3. **Error Handling:** The crate-wide error enumeration.

/// Virtual address type and VPN/offset decomposition.
pub mod addr;

/// Memory access type definitions.
pub mod data;

/// Error types for configuration, trace parsing, and simulation.
pub mod error;

pub use addr::VirtAddr;
pub use data::AccessType;
pub use error::SimError;
