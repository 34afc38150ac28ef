//! Simulation statistics collection and reporting.
//!
//! Tracks the four monotonic counters the engine maintains and derives the
//! summary figures of the final report:
//! 1. **Instructions:** One per trace record.
//! 2. **Memory accesses:** Weighted by how far each access cascaded
//!    (1 for a TLB hit, 2 for a TLB miss that hit the page table, 3 for a
//!    page fault).
//! 3. **Faults and misses:** Page-fault and TLB-miss totals with their
//!    percentages of the instruction count.

use crate::config::TlbPolicy;

/// Simulation statistics.
///
/// Counters only ever increase while a simulation runs; the report is read
/// once at the end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Trace records processed.
    pub total_instructions: u64,
    /// Charged memory accesses, weighted by cascade depth.
    pub total_mem_accesses: u64,
    /// Accesses that faulted (no valid translation).
    pub total_page_faults: u64,
    /// Accesses that missed the TLB.
    pub total_tlb_misses: u64,
}

impl SimStats {
    /// Average charged memory accesses per instruction; 0 for an empty
    /// trace.
    #[must_use]
    pub fn accesses_per_instruction(&self) -> f64 {
        if self.total_instructions == 0 {
            return 0.0;
        }
        self.total_mem_accesses as f64 / self.total_instructions as f64
    }

    /// Page faults as a percentage of instructions; 0 for an empty trace.
    #[must_use]
    pub fn page_fault_percent(&self) -> f64 {
        Self::percent(self.total_page_faults, self.total_instructions)
    }

    /// TLB misses as a percentage of instructions; 0 for an empty trace.
    #[must_use]
    pub fn tlb_miss_percent(&self) -> f64 {
        Self::percent(self.total_tlb_misses, self.total_instructions)
    }

    /// Prints the summary report to stdout.
    ///
    /// # Arguments
    ///
    /// * `policy` - The TLB replacement policy the run used, echoed in the
    ///   report header.
    pub fn print(&self, policy: TlbPolicy) {
        println!("-------------------------------------------------");
        println!("VIRTUAL MEMORY SIMULATION STATISTICS");
        println!("-------------------------------------------------");
        println!("replacement_policy       {policy}");
        println!("total_instructions       {}", self.total_instructions);
        println!(
            "mem_accesses_per_inst    {:.4}",
            self.accesses_per_instruction()
        );
        println!(
            "page_faults              {} ({:.2}%)",
            self.total_page_faults,
            self.page_fault_percent()
        );
        println!(
            "tlb_misses               {} ({:.2}%)",
            self.total_tlb_misses,
            self.tlb_miss_percent()
        );
        println!("-------------------------------------------------");
    }

    fn percent(part: u64, whole: u64) -> f64 {
        if whole == 0 {
            return 0.0;
        }
        (part as f64 / whole as f64) * 100.0
    }
}
