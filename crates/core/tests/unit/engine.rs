//! End-to-end engine tests.
//!
//! Runs small traces through the full TLB → page table → RAM cascade and
//! pins the literal counter values of the access-charging model: one
//! charged access for a TLB hit, two for a TLB miss that hits the page
//! table, three for a page fault.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vmsim_core::config::{PagePolicy, SimConfig, TlbPolicy};
use vmsim_core::sim::engine::SimulationEngine;
use vmsim_core::sim::trace::TraceEvent;
use vmsim_core::stats::SimStats;

fn config(tlb_policy: TlbPolicy, tlb_size: usize, ram_bits: u32) -> SimConfig {
    SimConfig {
        tlb_policy,
        page_policy: PagePolicy::Lru,
        page_size: 0x1000,
        tlb_size,
        ram_bits,
    }
}

fn run(config: &SimConfig, lines: &[&str]) -> SimStats {
    let mut engine = SimulationEngine::new(config).expect("valid config");
    let events = lines
        .iter()
        .enumerate()
        .map(|(i, line)| TraceEvent::parse_line(line, i as u64 + 1));
    *engine.run(events).expect("trace runs to completion")
}

/// With a one-entry TLB and a single frame, every access of this trace
/// cascades to a fault: the second access evicts page 0 from both the TLB
/// and RAM, so the third access faults again.
#[test]
fn tight_config_faults_on_every_access() {
    let stats = run(&config(TlbPolicy::Lru, 1, 12), &["0 R", "1000 R", "0 R"]);
    assert_eq!(
        stats,
        SimStats {
            total_instructions: 3,
            total_mem_accesses: 9,
            total_page_faults: 3,
            total_tlb_misses: 3,
        }
    );
}

/// With room for both pages the third access hits the TLB: two faults, two
/// misses, and 3 + 3 + 1 charged accesses.
#[rstest]
#[case(TlbPolicy::Lru)]
#[case(TlbPolicy::Fifo)]
fn third_access_hits_when_both_pages_fit(#[case] policy: TlbPolicy) {
    let stats = run(&config(policy, 2, 13), &["0 R", "1000 R", "0 R"]);
    assert_eq!(
        stats,
        SimStats {
            total_instructions: 3,
            total_mem_accesses: 7,
            total_page_faults: 2,
            total_tlb_misses: 2,
        }
    );
}

/// An empty trace reports all-zero counters.
#[test]
fn empty_trace() {
    let stats = run(&config(TlbPolicy::Lru, 4, 16), &[]);
    assert_eq!(stats, SimStats::default());
}

/// A page resident in RAM but evicted from the TLB costs two accesses, not
/// three: TLB miss, page-table hit.
#[test]
fn resident_page_costs_two_accesses() {
    // One TLB entry but plenty of frames: pages stay resident.
    let stats = run(&config(TlbPolicy::Lru, 1, 16), &["0 R", "1000 R", "0 R"]);
    assert_eq!(
        stats,
        SimStats {
            total_instructions: 3,
            total_mem_accesses: 8,
            total_page_faults: 2,
            total_tlb_misses: 3,
        }
    );
}

/// FIFO evicts by insertion order even when the oldest entry was just
/// re-used; LRU protects the re-used entry. Same trace, different victims.
#[test]
fn lru_and_fifo_diverge_on_reuse() {
    // Trace: 1, 2, 1 (hit), 3 (forces eviction), 1 again.
    let lines = ["1000 R", "2000 R", "1000 R", "3000 R", "1000 R"];

    // LRU: re-access protects page 1; inserting 3 evicts 2; final access
    // to 1 is a TLB hit.
    let lru = run(&config(TlbPolicy::Lru, 2, 16), &lines);
    assert_eq!(lru.total_tlb_misses, 3);

    // FIFO: the lookup hit does not refresh age; inserting 3 evicts 1,
    // so the final access to 1 misses again.
    let fifo = run(&config(TlbPolicy::Fifo, 2, 16), &lines);
    assert_eq!(fifo.total_tlb_misses, 4);
}

/// Faults dominate when the frame pool thrashes: cycling three pages
/// through two frames with an adequate TLB still faults every time the
/// page was evicted.
#[test]
fn frame_thrash_with_ample_tlb() {
    // Two frames, TLB big enough to hold all three pages.
    let lines = ["0 R", "1000 R", "2000 R", "0 R"];
    let stats = run(&config(TlbPolicy::Lru, 8, 13), &lines);
    // Access 4 hits the TLB (page 0 is still cached there) even though
    // its frame was recycled; the TLB answers before the page table is
    // consulted, so no fault is charged.
    assert_eq!(stats.total_page_faults, 3);
    assert_eq!(stats.total_tlb_misses, 3);
    assert_eq!(stats.total_mem_accesses, 3 + 3 + 3 + 1);
}
