//! Error types for the virtual-memory simulator.
//!
//! A single error enumeration covers every failure mode the simulator can
//! hit: invalid configuration, malformed trace lines, syntactically valid
//! addresses that fall outside the configured address space, and trace
//! source I/O failures. All errors are terminal for the run; no statistics
//! are reported after a failure.

use thiserror::Error;

/// Errors produced by configuration validation, trace parsing, and the
/// simulation engine.
#[derive(Debug, Error)]
pub enum SimError {
    /// The supplied configuration is invalid (bad page size, TLB size,
    /// RAM size, or policy combination). Raised before any trace line
    /// is read.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A trace line failed to parse: wrong field count, non-hex address,
    /// or an operation other than `R`/`W`.
    #[error("trace line {line}: {reason} (got {text:?})")]
    Parse {
        /// 1-based line number of the offending line.
        line: u64,
        /// What was wrong with the line.
        reason: String,
        /// The offending line text.
        text: String,
    },

    /// A syntactically valid address decomposed to a virtual page number
    /// outside the configured page table. Distinct from [`SimError::Parse`]:
    /// the line itself was well-formed.
    #[error("virtual page number {vpn:#x} outside page table of {table_len} entries")]
    VpnOutOfRange {
        /// The out-of-range virtual page number.
        vpn: u32,
        /// Number of entries in the configured page table.
        table_len: usize,
    },

    /// The trace source could not be opened or read.
    #[error("trace source: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Builds a parse error for one trace line.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-based line number.
    /// * `reason` - Human-readable description of the defect.
    /// * `text` - The offending line, stored verbatim for the report.
    #[must_use]
    pub fn parse(line: u64, reason: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
            text: text.into(),
        }
    }
}
