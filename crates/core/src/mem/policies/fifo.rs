//! First-In, First-Out (FIFO) TLB replacement policy.
//!
//! Counters record insertion order: a new entry appended below capacity
//! starts at the current entry count, so the oldest entry sits at 0. At
//! capacity the entry holding 0 is evicted, the replacement is written with
//! counter `capacity`, and every counter is then decremented by one. With
//! that ordering the counters remain a permutation of `0..capacity`, so
//! exactly one entry holds 0 at the next eviction and the counters never
//! underflow.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) lookup bookkeeping, O(N) insert.
//! - **Best Case:** Streaming accesses where all pages matter equally.
//! - **Worst Case:** Hot pages evicted regardless of reuse.

use super::ReplacementPolicy;
use crate::mem::tlb::TlbEntry;

/// FIFO policy; all state lives in the TLB entry counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoPolicy;

impl ReplacementPolicy for FifoPolicy {
    /// Lookups never touch FIFO counters; only insertions reorder ages.
    fn on_lookup(&self, _entries: &mut [TlbEntry], _hit: Option<usize>) {}

    /// Appends below capacity; at capacity evicts the entry whose counter
    /// reached 0.
    ///
    /// If no counter is exactly 0 the first entry holding the minimum
    /// counter is the victim. That fallback is unreachable through the
    /// TLB's public operations (the counters stay a permutation of
    /// `0..capacity`) but keeps eviction deterministic for any counter
    /// state.
    fn insert(&self, entries: &mut Vec<TlbEntry>, vpn: u32, capacity: usize) {
        if entries.len() < capacity {
            let age = entries.len() as u64;
            entries.push(TlbEntry::new(vpn, age));
            return;
        }

        let victim = entries
            .iter()
            .position(|e| e.count == 0)
            .unwrap_or_else(|| first_minimum(entries));

        entries[victim] = TlbEntry::new(vpn, capacity as u64);
        for entry in entries {
            entry.count -= 1;
        }
    }
}

/// Index of the first entry holding the minimum counter.
fn first_minimum(entries: &[TlbEntry]) -> usize {
    let mut victim = 0;
    let mut min_count = u64::MAX;
    for (i, entry) in entries.iter().enumerate() {
        if entry.count < min_count {
            min_count = entry.count;
            victim = i;
        }
    }
    victim
}
