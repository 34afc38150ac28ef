//! Configuration for the virtual-memory simulator.
//!
//! This module defines the configuration structures and enums that
//! parameterize a simulation run. It provides:
//! 1. **Policy Enums:** TLB and page/frame replacement policy selection.
//! 2. **Structure:** The [`SimConfig`] consumed by the engine.
//! 3. **Validation:** Startup checks that reject impossible geometries
//!    before any trace line is read.
//!
//! Configuration is built from command-line flags by the CLI crate or
//! deserialized from JSON via `serde`.

use std::str::FromStr;

use serde::Deserialize;

use crate::common::addr::ADDRESS_BITS;
use crate::common::error::SimError;

/// TLB replacement policy algorithms.
///
/// Selects how the TLB picks a victim entry when it is full and a new
/// virtual page number must be cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlbPolicy {
    /// Least Recently Used replacement.
    ///
    /// Evicts the entry with the most accesses since its last use.
    #[default]
    #[serde(alias = "LRU")]
    Lru,
    /// First In, First Out replacement.
    ///
    /// Evicts the entry that has been resident the longest, regardless of
    /// how recently it was used.
    #[serde(alias = "FIFO")]
    Fifo,
}

impl std::fmt::Display for TlbPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lru => write!(f, "lru"),
            Self::Fifo => write!(f, "fifo"),
        }
    }
}

impl FromStr for TlbPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lru" | "LRU" => Ok(Self::Lru),
            "fifo" | "FIFO" => Ok(Self::Fifo),
            other => Err(SimError::Config(format!(
                "unsupported TLB policy {other:?} (expected \"lru\" or \"fifo\")"
            ))),
        }
    }
}

/// Page/frame replacement policy algorithms.
///
/// Physical frames are currently always recycled with LRU; the enum exists
/// so the policy is named explicitly in the configuration and the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagePolicy {
    /// Least Recently Used frame recycling (recency of use, not insertion).
    #[default]
    #[serde(alias = "LRU")]
    Lru,
}

impl std::fmt::Display for PagePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lru => write!(f, "lru"),
        }
    }
}

impl FromStr for PagePolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lru" | "LRU" => Ok(Self::Lru),
            other => Err(SimError::Config(format!(
                "unsupported page policy {other:?} (expected \"lru\")"
            ))),
        }
    }
}

/// Simulation configuration.
///
/// All table geometry is derived from these five values once, at
/// construction time: `offset_bits = log2(page_size)`,
/// `page_table_len = 2^(32 - offset_bits)`, and
/// `num_frames = 2^(ram_bits - offset_bits)`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Replacement policy for the TLB.
    #[serde(default)]
    pub tlb_policy: TlbPolicy,

    /// Replacement policy for physical frames.
    #[serde(default)]
    pub page_policy: PagePolicy,

    /// Page size in bytes; must be a power of two and at least 2.
    pub page_size: u32,

    /// Number of TLB entries; must be at least 1.
    pub tlb_size: usize,

    /// log2 of the total addressable RAM in bytes; must be at least the
    /// page offset width (one frame) and fit in the 32-bit address space.
    pub ram_bits: u32,
}

impl SimConfig {
    /// Builds a configuration from a JSON document and validates it.
    ///
    /// # Arguments
    ///
    /// * `json` - A JSON object with the same field names as [`SimConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the document does not deserialize or
    /// fails validation.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SimError::Config(format!("bad JSON configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the page size is not a power of two,
    /// the TLB has no entries, or the RAM geometry yields a non-positive
    /// frame count.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.page_size < 2 || !self.page_size.is_power_of_two() {
            return Err(SimError::Config(format!(
                "page size must be a power of two >= 2, got {}",
                self.page_size
            )));
        }
        if self.tlb_size == 0 {
            return Err(SimError::Config("TLB size must be at least 1".into()));
        }
        if self.ram_bits < self.offset_bits() {
            return Err(SimError::Config(format!(
                "ram_bits ({}) must be at least the page offset width ({}); \
                 a smaller RAM cannot hold one frame",
                self.ram_bits,
                self.offset_bits()
            )));
        }
        if self.ram_bits > ADDRESS_BITS {
            return Err(SimError::Config(format!(
                "ram_bits ({}) cannot exceed the {ADDRESS_BITS}-bit address space",
                self.ram_bits
            )));
        }
        Ok(())
    }

    /// Width of the page offset in bits: log2 of the page size.
    #[must_use]
    pub const fn offset_bits(&self) -> u32 {
        self.page_size.trailing_zeros()
    }

    /// Mask selecting the offset bits of an address: `page_size - 1`.
    #[must_use]
    pub const fn page_mask(&self) -> u32 {
        self.page_size - 1
    }

    /// Number of page-table entries: one per representable virtual page.
    #[must_use]
    pub const fn page_table_len(&self) -> usize {
        1 << (ADDRESS_BITS - self.offset_bits())
    }

    /// Number of physical frames backing the page table.
    #[must_use]
    pub const fn num_frames(&self) -> usize {
        1 << (self.ram_bits - self.offset_bits())
    }
}
