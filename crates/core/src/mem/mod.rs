//! Simulated memory-translation hardware.
//!
//! This module contains the three tables the engine drives for every trace
//! record. It organizes:
//! 1. **TLB:** A fixed-capacity associative cache over virtual page numbers.
//! 2. **Page Table:** One entry per representable virtual page.
//! 3. **Physical Memory:** The bounded frame pool with LRU recycling.

/// Page table and per-page entries (valid, dirty, assigned frame).
pub mod page_table;

/// TLB replacement policy implementations (LRU, FIFO).
pub mod policies;

/// Physical frame pool with LRU eviction.
pub mod ram;

/// Translation-lookaside buffer.
pub mod tlb;

pub use page_table::{PageTable, PageTableEntry};
pub use ram::PhysicalMemory;
pub use tlb::Tlb;
