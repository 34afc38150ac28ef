//! Trace-file parsing.
//!
//! A trace is a sequence of lines, each `<address-hex> <op>` where the
//! address is unprefixed hexadecimal fitting in 32 bits and the op is a
//! case-sensitive `R` or `W`. Parsing is fail-fast: the first malformed
//! line aborts the run with its 1-based line number, and no partial
//! statistics are reported.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::addr::VirtAddr;
use crate::common::data::AccessType;
use crate::common::error::SimError;

/// One parsed trace record: an address and the access kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    /// The virtual address accessed.
    pub addr: VirtAddr,
    /// Whether the access reads or writes.
    pub op: AccessType,
}

impl TraceEvent {
    /// Parses a single trace line.
    ///
    /// # Arguments
    ///
    /// * `line` - The raw line text, without its terminator.
    /// * `line_no` - 1-based line number, for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`] on a wrong field count, a non-hex or
    /// oversized address, or an operation other than `R`/`W`.
    pub fn parse_line(line: &str, line_no: u64) -> Result<Self, SimError> {
        let mut fields = line.split_whitespace();
        let (Some(addr_field), Some(op_field), None) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(SimError::parse(
                line_no,
                "expected exactly two fields: <address-hex> <R|W>",
                line,
            ));
        };

        let addr = u32::from_str_radix(addr_field, 16).map_err(|_| {
            SimError::parse(line_no, "address is not 32-bit unprefixed hex", line)
        })?;

        let op = match op_field {
            "R" => AccessType::Read,
            "W" => AccessType::Write,
            _ => {
                return Err(SimError::parse(
                    line_no,
                    "operation must be exactly R or W",
                    line,
                ));
            }
        };

        Ok(Self {
            addr: VirtAddr::new(addr),
            op,
        })
    }
}

/// Streams [`TraceEvent`]s from a buffered line source.
///
/// Yields `Result` per line so the engine can abort on the first malformed
/// line or I/O failure.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    line_no: u64,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file for streaming.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be opened; the
    /// simulation does not start.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps an already-buffered line source.
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceEvent, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                let text = line.trim_end_matches(['\n', '\r']);
                Some(TraceEvent::parse_line(text, self.line_no))
            }
            Err(e) => Some(Err(SimError::Io(e))),
        }
    }
}
