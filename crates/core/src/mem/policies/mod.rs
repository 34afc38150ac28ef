//! TLB replacement policies.
//!
//! Implements the algorithms for selecting a victim entry when the TLB is
//! full. Both policies keep their bookkeeping in the per-entry counters of
//! the TLB itself; what the counter means differs per policy.
//!
//! # Policies
//!
//! - `Lru`: counter = accesses since last use; the largest counter loses.
//! - `Fifo`: counter = insertion order; the entry that reaches 0 loses.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use crate::mem::tlb::TlbEntry;

/// Trait for TLB replacement policies.
///
/// The TLB delegates all counter bookkeeping to its policy; the policy in
/// turn never inspects anything but the entry slice it is given. Linear
/// victim scans are the specified algorithm, not an accident: tie-breaks
/// (first match in storage order) are part of the observable behavior.
pub trait ReplacementPolicy: std::fmt::Debug + Send + Sync {
    /// Updates entry counters after a lookup.
    ///
    /// # Arguments
    ///
    /// * `entries` - All current TLB entries, in storage order.
    /// * `hit` - Index of the matching entry, if the lookup hit.
    fn on_lookup(&self, entries: &mut [TlbEntry], hit: Option<usize>);

    /// Inserts a virtual page number after a confirmed miss, evicting a
    /// victim if the TLB is at capacity.
    ///
    /// # Arguments
    ///
    /// * `entries` - All current TLB entries, in storage order.
    /// * `vpn` - The virtual page number to cache.
    /// * `capacity` - Maximum number of entries the TLB may hold.
    fn insert(&self, entries: &mut Vec<TlbEntry>, vpn: u32, capacity: usize);
}
