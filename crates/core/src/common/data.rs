//! Memory access types.
//!
//! Classifies the two kinds of trace record the simulator understands. The
//! access type decides whether a page-table entry gets its dirty bit set
//! when the access reaches the page table.

/// Type of memory access operation, as recorded in the trace file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Data read access (`R` in the trace).
    Read,

    /// Data write access (`W` in the trace).
    ///
    /// Writes mark the target page-table entry dirty when they miss the TLB
    /// and reach the page table.
    Write,
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "R"),
            Self::Write => write!(f, "W"),
        }
    }
}
