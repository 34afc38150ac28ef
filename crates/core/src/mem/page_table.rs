//! Page table: one entry per representable virtual page.
//!
//! The table is a dense array sized `2^(32 - offset_bits)` at construction
//! and never grows or shrinks; entries are only mutated. Validation and
//! invalidation happen as side effects of frame placement and eviction in
//! [`PhysicalMemory`](crate::mem::ram::PhysicalMemory); the table itself
//! only offers range-checked access and the dirty-bit write path.

use crate::common::error::SimError;

/// One page-table entry.
///
/// Invariants: `valid` exactly when `frame` is assigned; `dirty` only while
/// valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    /// Whether the page currently has a physical frame.
    pub valid: bool,
    /// Whether the page was written since it was placed in its frame.
    pub dirty: bool,
    /// Index of the assigned frame, while valid.
    pub frame: Option<usize>,
}

impl PageTableEntry {
    /// Assigns a frame: validates the entry and clears the dirty bit.
    pub(crate) fn assign(&mut self, frame: usize) {
        self.valid = true;
        self.dirty = false;
        self.frame = Some(frame);
    }

    /// Releases the frame: the entry becomes invalid and clean.
    pub(crate) fn release(&mut self) {
        self.valid = false;
        self.dirty = false;
        self.frame = None;
    }
}

/// Fixed-size page table indexed by virtual page number.
#[derive(Debug)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    /// Creates a table of `len` invalid entries.
    ///
    /// # Arguments
    ///
    /// * `len` - `2^(32 - offset_bits)` for the configured page size.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![PageTableEntry::default(); len],
        }
    }

    /// Looks up the entry for a VPN.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::VpnOutOfRange`] when the VPN does not fit the
    /// configured address space. The trace line was syntactically valid, so
    /// this is a distinct fatal trace error, not a parse error.
    pub fn entry(&self, vpn: u32) -> Result<&PageTableEntry, SimError> {
        self.entries
            .get(vpn as usize)
            .ok_or(SimError::VpnOutOfRange {
                vpn,
                table_len: self.entries.len(),
            })
    }

    /// Mutable counterpart of [`PageTable::entry`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::VpnOutOfRange`] when the VPN does not fit the
    /// configured address space.
    pub fn entry_mut(&mut self, vpn: u32) -> Result<&mut PageTableEntry, SimError> {
        let table_len = self.entries.len();
        self.entries
            .get_mut(vpn as usize)
            .ok_or(SimError::VpnOutOfRange { vpn, table_len })
    }

    /// Marks the page dirty (a write reached the page table).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::VpnOutOfRange`] when the VPN does not fit the
    /// configured address space.
    pub fn mark_write(&mut self, vpn: u32) -> Result<(), SimError> {
        self.entry_mut(vpn)?.dirty = true;
        Ok(())
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
