//! Least Recently Used (LRU) TLB replacement policy.
//!
//! Every entry carries a counter of accesses since it was last used. A hit
//! resets the matching counter and ages everything else; a miss ages every
//! entry. Eviction picks the entry with the largest counter, first match in
//! storage order winning ties.
//!
//! # Performance
//!
//! - **Time Complexity:** O(N) per lookup and per insert, N = TLB capacity.
//! - **Best Case:** Workloads with strong temporal locality.
//! - **Worst Case:** Scans larger than the TLB (thrashing).

use super::ReplacementPolicy;
use crate::mem::tlb::TlbEntry;

/// LRU policy; all state lives in the TLB entry counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Resets the hit entry's counter and ages every other entry; on a miss
    /// ages all entries.
    fn on_lookup(&self, entries: &mut [TlbEntry], hit: Option<usize>) {
        match hit {
            Some(idx) => {
                for (i, entry) in entries.iter_mut().enumerate() {
                    if i == idx {
                        entry.count = 0;
                    } else {
                        entry.count += 1;
                    }
                }
            }
            None => {
                for entry in entries {
                    entry.count += 1;
                }
            }
        }
    }

    /// Appends below capacity; at capacity overwrites the stalest entry.
    ///
    /// The victim is the first entry holding the maximum counter (strict
    /// greater-than scan). The replacement starts at counter 0 and every
    /// other entry ages by one.
    fn insert(&self, entries: &mut Vec<TlbEntry>, vpn: u32, capacity: usize) {
        if entries.len() < capacity {
            entries.push(TlbEntry::new(vpn, 0));
            return;
        }

        let mut victim = 0;
        let mut max_count = 0;
        for (i, entry) in entries.iter().enumerate() {
            if entry.count > max_count {
                max_count = entry.count;
                victim = i;
            }
        }

        for (i, entry) in entries.iter_mut().enumerate() {
            if i == victim {
                *entry = TlbEntry::new(vpn, 0);
            } else {
                entry.count += 1;
            }
        }
    }
}
