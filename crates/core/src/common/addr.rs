//! Virtual address type and decomposition.
//!
//! This module defines a strong type for the 32-bit virtual addresses read
//! from the trace file. It provides the following:
//! 1. **Type Safety:** Prevents raw trace integers from being confused with
//!    page numbers or frame indices.
//! 2. **Decomposition:** Splits an address into its virtual page number and
//!    page offset for a configured page size.

/// Number of bits in a virtual address; fixed by the trace format.
pub const ADDRESS_BITS: u32 = 32;

/// A virtual address in the simulated 32-bit address space.
///
/// Virtual addresses come straight from the trace file and are decomposed
/// into a virtual page number (VPN) and a page offset before translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtAddr(pub u32);

impl VirtAddr {
    /// Creates a new virtual address from a raw 32-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 32-bit address value.
    #[inline(always)]
    #[must_use]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    #[must_use]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Extracts the virtual page number: the address shifted right by the
    /// page-offset width.
    ///
    /// # Arguments
    ///
    /// * `offset_bits` - log2 of the configured page size; always `< 32`
    ///   after configuration validation.
    #[inline(always)]
    #[must_use]
    pub const fn vpn(self, offset_bits: u32) -> u32 {
        self.0 >> offset_bits
    }

    /// Extracts the byte offset within the page.
    ///
    /// # Arguments
    ///
    /// * `page_mask` - `page_size - 1` for the configured power-of-two
    ///   page size.
    #[inline(always)]
    #[must_use]
    pub const fn page_offset(self, page_mask: u32) -> u32 {
        self.0 & page_mask
    }
}

impl std::fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
