//! Property tests for the statistics counters.
//!
//! For any trace the counters obey the same ordering: every instruction
//! charges at least one access, misses never exceed instructions, and
//! faults never exceed misses. The TLB and frame pool also never exceed
//! their configured capacities, whatever the access pattern.

use proptest::prelude::*;
use vmsim_core::common::addr::VirtAddr;
use vmsim_core::common::data::AccessType;
use vmsim_core::config::{PagePolicy, SimConfig, TlbPolicy};
use vmsim_core::sim::engine::SimulationEngine;

fn any_policy() -> impl Strategy<Value = TlbPolicy> {
    prop_oneof![Just(TlbPolicy::Lru), Just(TlbPolicy::Fifo)]
}

fn any_access() -> impl Strategy<Value = (u32, AccessType)> {
    (
        any::<u32>(),
        prop_oneof![Just(AccessType::Read), Just(AccessType::Write)],
    )
}

proptest! {
    #[test]
    fn counters_stay_ordered(
        policy in any_policy(),
        tlb_size in 1_usize..16,
        ram_bits in 12_u32..20,
        accesses in proptest::collection::vec(any_access(), 0..200),
    ) {
        let config = SimConfig {
            tlb_policy: policy,
            page_policy: PagePolicy::Lru,
            page_size: 0x1000,
            tlb_size,
            ram_bits,
        };
        let mut engine = SimulationEngine::new(&config).expect("valid config");
        for &(addr, op) in &accesses {
            engine.access(VirtAddr::new(addr), op).expect("in range");
        }

        let stats = engine.stats();
        let n = accesses.len() as u64;
        prop_assert_eq!(stats.total_instructions, n);
        prop_assert!(stats.total_mem_accesses >= n);
        prop_assert!(stats.total_mem_accesses <= 3 * n);
        prop_assert!(stats.total_tlb_misses <= n);
        prop_assert!(stats.total_page_faults <= stats.total_tlb_misses);
    }

    #[test]
    fn capacities_are_never_exceeded(
        policy in any_policy(),
        tlb_size in 1_usize..8,
        accesses in proptest::collection::vec(any_access(), 1..100),
    ) {
        let config = SimConfig {
            tlb_policy: policy,
            page_policy: PagePolicy::Lru,
            page_size: 0x1000,
            tlb_size,
            ram_bits: 14,
        };
        let mut engine = SimulationEngine::new(&config).expect("valid config");
        for &(addr, op) in &accesses {
            engine.access(VirtAddr::new(addr), op).expect("in range");

            prop_assert!(engine.tlb().len() <= tlb_size);
            let mut vpns: Vec<u32> = engine.tlb().entries().iter().map(|e| e.vpn).collect();
            vpns.sort_unstable();
            vpns.dedup();
            prop_assert_eq!(vpns.len(), engine.tlb().len());

            prop_assert!(engine.ram().occupied() <= engine.ram().num_frames());
        }
    }

    #[test]
    fn valid_entries_match_occupied_frames(
        policy in any_policy(),
        accesses in proptest::collection::vec(any_access(), 1..100),
    ) {
        let config = SimConfig {
            tlb_policy: policy,
            page_policy: PagePolicy::Lru,
            page_size: 0x0100_0000,
            tlb_size: 4,
            ram_bits: 26,
        };
        let mut engine = SimulationEngine::new(&config).expect("valid config");
        for &(addr, op) in &accesses {
            engine.access(VirtAddr::new(addr), op).expect("in range");
        }

        // Small table (256 entries): count resident pages two ways.
        let valid = (0..256_u32)
            .filter(|&vpn| engine.page_table().entry(vpn).expect("in range").valid)
            .count();
        prop_assert_eq!(valid, engine.ram().occupied());
    }
}
