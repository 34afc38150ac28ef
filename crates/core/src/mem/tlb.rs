//! Translation Lookaside Buffer (TLB).
//!
//! A fully associative, fixed-capacity cache of recently translated virtual
//! page numbers. The simulator only needs presence (a cached VPN means the
//! translation is known), so entries carry no physical page number, just
//! the VPN tag and the replacement counter its policy maintains.

use crate::config::TlbPolicy;
use crate::mem::policies::{FifoPolicy, LruPolicy, ReplacementPolicy};

/// A single TLB entry: a VPN tag plus its replacement counter.
///
/// What the counter means depends on the active policy: accesses since last
/// use for LRU, insertion order for FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlbEntry {
    /// Virtual page number (the tag).
    pub vpn: u32,
    /// Replacement counter owned by the policy.
    pub count: u64,
}

impl TlbEntry {
    /// Creates an entry with the given tag and counter.
    #[must_use]
    pub const fn new(vpn: u32, count: u64) -> Self {
        Self { vpn, count }
    }
}

/// Translation Lookaside Buffer structure.
///
/// Holds at most `capacity` entries with unique VPNs. Lookup and insertion
/// both scan linearly; the scan order doubles as the tie-break order for
/// eviction, so it must not be disturbed.
#[derive(Debug)]
pub struct Tlb {
    entries: Vec<TlbEntry>,
    capacity: usize,
    policy: Box<dyn ReplacementPolicy>,
}

impl Tlb {
    /// Creates an empty TLB.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum entry count; validated to be >= 1 by the
    ///   configuration layer.
    /// * `policy` - Which replacement policy maintains the counters.
    #[must_use]
    pub fn new(capacity: usize, policy: TlbPolicy) -> Self {
        let policy: Box<dyn ReplacementPolicy> = match policy {
            TlbPolicy::Lru => Box::new(LruPolicy),
            TlbPolicy::Fifo => Box::new(FifoPolicy),
        };
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    /// Looks up a VPN, updating replacement state per the active policy.
    ///
    /// # Arguments
    ///
    /// * `vpn` - The virtual page number to look up.
    ///
    /// # Returns
    ///
    /// `true` on a hit.
    pub fn lookup(&mut self, vpn: u32) -> bool {
        let hit = self.entries.iter().position(|e| e.vpn == vpn);
        self.policy.on_lookup(&mut self.entries, hit);
        hit.is_some()
    }

    /// Caches a VPN after a confirmed miss, evicting per the active policy
    /// when at capacity.
    ///
    /// Must only be called after [`Tlb::lookup`] returned `false` for the
    /// same VPN; inserting a resident VPN would violate the uniqueness
    /// invariant.
    pub fn insert(&mut self, vpn: u32) {
        debug_assert!(
            !self.entries.iter().any(|e| e.vpn == vpn),
            "insert of resident vpn {vpn:#x}"
        );
        self.policy.insert(&mut self.entries, vpn, self.capacity);
    }

    /// Number of entries currently cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the TLB holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a VPN is currently cached; does not touch replacement state.
    #[must_use]
    pub fn contains(&self, vpn: u32) -> bool {
        self.entries.iter().any(|e| e.vpn == vpn)
    }

    /// The entries in storage order; exposed for tests and diagnostics.
    #[must_use]
    pub fn entries(&self) -> &[TlbEntry] {
        &self.entries
    }
}
