//! Configuration validation tests.
//!
//! Verifies that impossible geometries are rejected before any trace line
//! is read, and that the derived constants match the configured page size.

use rstest::rstest;
use vmsim_core::config::{PagePolicy, SimConfig, TlbPolicy};

fn config(page_size: u32, tlb_size: usize, ram_bits: u32) -> SimConfig {
    SimConfig {
        tlb_policy: TlbPolicy::Lru,
        page_policy: PagePolicy::Lru,
        page_size,
        tlb_size,
        ram_bits,
    }
}

/// Valid power-of-two page sizes produce the expected offset widths.
#[rstest]
#[case(2, 1)]
#[case(256, 8)]
#[case(0x1000, 12)]
#[case(0x8000, 15)]
fn offset_bits_follow_page_size(#[case] page_size: u32, #[case] offset_bits: u32) {
    let cfg = config(page_size, 4, 31);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.offset_bits(), offset_bits);
    assert_eq!(cfg.page_mask(), page_size - 1);
}

/// Non-power-of-two and degenerate page sizes are configuration errors.
#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(4095)]
fn bad_page_sizes_rejected(#[case] page_size: u32) {
    assert!(config(page_size, 4, 24).validate().is_err());
}

/// A RAM that cannot hold even one whole page is a configuration error;
/// exactly one frame (ram_bits == offset width) is the minimum.
#[test]
fn ram_must_hold_at_least_one_frame() {
    assert!(config(0x1000, 4, 11).validate().is_err());
    assert!(config(0x1000, 4, 12).validate().is_ok());
    assert_eq!(config(0x1000, 4, 12).num_frames(), 1);
}

/// The frame count is `2^(ram_bits - offset_bits)`.
#[test]
fn frame_count_derivation() {
    let cfg = config(0x1000, 4, 20);
    assert_eq!(cfg.num_frames(), 256);
    assert_eq!(cfg.page_table_len(), 1 << 20);
}

/// An empty TLB is a configuration error.
#[test]
fn tlb_needs_at_least_one_entry() {
    assert!(config(0x1000, 0, 20).validate().is_err());
}
