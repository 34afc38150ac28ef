//! The simulation engine: the per-access state machine.
//!
//! For every trace record the engine drives the cascade
//! TLB → page table → physical memory and charges memory accesses by how
//! deep the cascade went: one access for a TLB hit, a second for a TLB miss
//! that hit the page table, a third for a page fault. That 1/2/3 charging
//! is the simulator's defined metric of memory accesses per instruction.

use tracing::{debug, trace};

use crate::common::addr::VirtAddr;
use crate::common::data::AccessType;
use crate::common::error::SimError;
use crate::config::SimConfig;
use crate::mem::page_table::PageTable;
use crate::mem::ram::PhysicalMemory;
use crate::mem::tlb::Tlb;
use crate::sim::trace::TraceEvent;
use crate::stats::SimStats;

/// How a single access resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    /// The translation was cached in the TLB; one access charged.
    TlbHit,
    /// TLB miss, but the page table held a valid mapping; two accesses.
    PageHit,
    /// Page fault served from a free frame; three accesses.
    FaultPlaced,
    /// Page fault that had to evict a resident page; three accesses.
    FaultEvicted,
}

/// The simulation engine.
///
/// Owns the TLB, page table, physical memory, and statistics for one run;
/// there is no ambient state, so independent runs cannot interfere.
#[derive(Debug)]
pub struct SimulationEngine {
    offset_bits: u32,
    tlb: Tlb,
    page_table: PageTable,
    ram: PhysicalMemory,
    stats: SimStats,
}

impl SimulationEngine {
    /// Builds an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the configuration is invalid; the
    /// tables are never constructed in that case.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            offset_bits: config.offset_bits(),
            tlb: Tlb::new(config.tlb_size, config.tlb_policy),
            page_table: PageTable::new(config.page_table_len()),
            ram: PhysicalMemory::new(config.num_frames()),
            stats: SimStats::default(),
        })
    }

    /// Processes one access through the TLB → page table → RAM cascade.
    ///
    /// # Arguments
    ///
    /// * `addr` - The virtual address accessed.
    /// * `op` - Read or write.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::VpnOutOfRange`] if the address decomposes to a
    /// page outside the configured table.
    ///
    /// # Returns
    ///
    /// The classification of the access.
    pub fn access(&mut self, addr: VirtAddr, op: AccessType) -> Result<AccessKind, SimError> {
        let vpn = addr.vpn(self.offset_bits);
        self.stats.total_instructions += 1;
        self.stats.total_mem_accesses += 1;

        if self.tlb.lookup(vpn) {
            trace!(%addr, vpn, "tlb hit");
            return Ok(AccessKind::TlbHit);
        }

        self.stats.total_tlb_misses += 1;
        self.stats.total_mem_accesses += 1;

        let kind = if self.page_table.entry(vpn)?.valid {
            trace!(%addr, vpn, "tlb miss, page table hit");
            if op == AccessType::Write {
                self.page_table.mark_write(vpn)?;
            }
            self.ram.touch(&mut self.page_table, vpn)?;
            AccessKind::PageHit
        } else {
            self.stats.total_page_faults += 1;
            self.stats.total_mem_accesses += 1;
            if op == AccessType::Write {
                // Placement clears the dirty bit, so a faulting write
                // still ends clean.
                self.page_table.mark_write(vpn)?;
            }
            if self.ram.has_free_frame() {
                self.ram.place(&mut self.page_table, vpn)?;
                debug!(%addr, vpn, "page fault, placed in free frame");
                AccessKind::FaultPlaced
            } else {
                let evicted = self.ram.evict_and_place(&mut self.page_table, vpn)?;
                debug!(%addr, vpn, evicted, "page fault, evicted resident page");
                AccessKind::FaultEvicted
            }
        };

        self.tlb.insert(vpn);
        Ok(kind)
    }

    /// Runs the engine over a stream of parsed trace events.
    ///
    /// # Arguments
    ///
    /// * `events` - Anything yielding `Result<TraceEvent, SimError>`, such
    ///   as [`TraceReader`](crate::sim::trace::TraceReader).
    ///
    /// # Errors
    ///
    /// The first parse, I/O, or out-of-range error aborts the run; no
    /// partial statistics are reported.
    pub fn run<I>(&mut self, events: I) -> Result<&SimStats, SimError>
    where
        I: IntoIterator<Item = Result<TraceEvent, SimError>>,
    {
        for event in events {
            let event = event?;
            let _ = self.access(event.addr, event.op)?;
        }
        Ok(&self.stats)
    }

    /// The statistics accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The TLB; exposed for tests and diagnostics.
    #[must_use]
    pub const fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    /// The page table; exposed for tests and diagnostics.
    #[must_use]
    pub const fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// The physical memory pool; exposed for tests and diagnostics.
    #[must_use]
    pub const fn ram(&self) -> &PhysicalMemory {
        &self.ram
    }
}
