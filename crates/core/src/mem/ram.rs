//! Physical memory: a bounded pool of frames with LRU recycling.
//!
//! Each frame holds at most one page (recorded by its VPN) and a recency
//! counter. Placement, eviction, and touch are the only writers of frame
//! and page-table validity state. Eviction scans for the largest recency
//! counter; the first frame holding the maximum wins ties, and that
//! tie-break is part of the observable behavior.
//!
//! The frame's occupant VPN is bookkeeping only: the page table remains the
//! sole owner of page-table entries, which is why every operation here
//! borrows it mutably instead of holding entry references.

use crate::common::error::SimError;
use crate::mem::page_table::PageTable;

/// A physical frame slot: its occupant page (by VPN) and recency counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// VPN of the resident page, if any.
    pub occupant: Option<u32>,
    /// Accesses since this frame was last used.
    pub age: u64,
}

/// Fixed-capacity pool of physical frames.
#[derive(Debug)]
pub struct PhysicalMemory {
    frames: Vec<Frame>,
    occupied: usize,
}

impl PhysicalMemory {
    /// Creates a pool of `num_frames` empty frames.
    #[must_use]
    pub fn new(num_frames: usize) -> Self {
        Self {
            frames: vec![Frame::default(); num_frames],
            occupied: 0,
        }
    }

    /// Whether at least one frame is still unoccupied.
    #[must_use]
    pub const fn has_free_frame(&self) -> bool {
        self.occupied < self.frames.len()
    }

    /// Places a page into the next free frame.
    ///
    /// Assigns the frame to the entry (validating it and clearing its dirty
    /// bit), resets the frame's recency counter, and ages every other
    /// occupied frame. Caller guarantees [`PhysicalMemory::has_free_frame`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::VpnOutOfRange`] if `vpn` is outside the table.
    pub fn place(&mut self, page_table: &mut PageTable, vpn: u32) -> Result<(), SimError> {
        debug_assert!(self.has_free_frame(), "place called with no free frame");
        let idx = self.occupied;
        self.install(page_table, vpn, idx)?;
        self.occupied += 1;
        Ok(())
    }

    /// Evicts the least recently used page and reuses its frame.
    ///
    /// The victim is the occupied frame with the largest recency counter
    /// (first maximum in frame order wins ties). Its occupant's entry is
    /// invalidated (`valid` and `dirty` cleared, frame unset) before the new
    /// page is installed exactly as in [`PhysicalMemory::place`]. Caller
    /// guarantees the pool is full.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::VpnOutOfRange`] if either VPN is outside the
    /// table.
    ///
    /// # Returns
    ///
    /// The VPN of the evicted page.
    pub fn evict_and_place(
        &mut self,
        page_table: &mut PageTable,
        vpn: u32,
    ) -> Result<u32, SimError> {
        debug_assert!(!self.has_free_frame(), "evict_and_place with free frames");

        let mut victim = 0;
        let mut max_age = 0;
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.occupant.is_some() && frame.age > max_age {
                max_age = frame.age;
                victim = i;
            }
        }

        let evicted = self.frames[victim].occupant;
        if let Some(old_vpn) = evicted {
            page_table.entry_mut(old_vpn)?.release();
        }
        self.install(page_table, vpn, victim)?;
        // Occupied count is unchanged: one out, one in.
        Ok(evicted.unwrap_or(vpn))
    }

    /// Refreshes a page that is already resident (TLB miss, page-table hit).
    ///
    /// Resets its frame's recency counter and ages the other occupied
    /// frames. The entry keeps its frame and its dirty bit; residency is a
    /// caller-guaranteed precondition.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::VpnOutOfRange`] if `vpn` is outside the table.
    pub fn touch(&mut self, page_table: &mut PageTable, vpn: u32) -> Result<(), SimError> {
        let entry = page_table.entry(vpn)?;
        debug_assert!(entry.valid, "touch of non-resident vpn {vpn:#x}");
        if let Some(idx) = entry.frame {
            self.refresh(idx);
        }
        Ok(())
    }

    /// Number of occupied frames.
    #[must_use]
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Total number of frames in the pool.
    #[must_use]
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// The frames in pool order; exposed for tests and diagnostics.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Writes a page into a specific frame and refreshes recency state.
    fn install(
        &mut self,
        page_table: &mut PageTable,
        vpn: u32,
        idx: usize,
    ) -> Result<(), SimError> {
        page_table.entry_mut(vpn)?.assign(idx);
        self.frames[idx].occupant = Some(vpn);
        self.refresh(idx);
        Ok(())
    }

    /// Resets the recency counter of frame `idx` and ages every other
    /// occupied frame by one.
    fn refresh(&mut self, idx: usize) {
        for (i, frame) in self.frames.iter_mut().enumerate() {
            if frame.occupant.is_none() {
                continue;
            }
            if i == idx {
                frame.age = 0;
            } else {
                frame.age += 1;
            }
        }
    }
}
