//! Virtual-memory simulator CLI.
//!
//! Single entry point for trace-driven simulation runs. It performs:
//! 1. **Configuration:** Builds and validates the simulation parameters
//!    from command-line flags.
//! 2. **Execution:** Streams the trace file through the engine.
//! 3. **Reporting:** Prints the summary statistics on success; on any
//!    error prints it once to stderr and exits 1 with no partial report.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vmsim_core::config::{PagePolicy, SimConfig, TlbPolicy};
use vmsim_core::{SimError, SimulationEngine, TraceReader};

#[derive(Parser, Debug)]
#[command(
    name = "vmsim",
    author,
    version,
    about = "Trace-driven two-level virtual-memory translation simulator",
    long_about = "Simulates a TLB backed by a page table backed by a bounded pool of \
                  physical frames, driven by a trace of virtual memory accesses.\n\n\
                  Trace format: one access per line, `<address-hex> <R|W>`.\n\n\
                  Example:\n  vmsim -f trace.dat --tlb-policy lru --page-policy lru \\\n        \
                  --page-size 4096 --tlb-size 16 --ram-bits 20"
)]
struct Cli {
    /// Trace file to simulate.
    #[arg(short = 'f', long = "trace")]
    trace: PathBuf,

    /// Replacement policy for the TLB (lru or fifo).
    #[arg(long = "tlb-policy")]
    tlb_policy: TlbPolicy,

    /// Replacement policy for pages/frames (lru is the only one supported).
    #[arg(long = "page-policy", default_value = "lru")]
    page_policy: PagePolicy,

    /// Page size in bytes (power of two).
    #[arg(long = "page-size")]
    page_size: u32,

    /// Number of TLB entries.
    #[arg(long = "tlb-size")]
    tlb_size: usize,

    /// log2 of the total RAM size in bytes.
    #[arg(long = "ram-bits")]
    ram_bits: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("vmsim: {e}");
        process::exit(1);
    }
}

/// Builds the configuration, streams the trace, and prints the report.
fn run(cli: &Cli) -> Result<(), SimError> {
    let config = SimConfig {
        tlb_policy: cli.tlb_policy,
        page_policy: cli.page_policy,
        page_size: cli.page_size,
        tlb_size: cli.tlb_size,
        ram_bits: cli.ram_bits,
    };
    config.validate()?;

    let mut engine = SimulationEngine::new(&config)?;
    let reader = TraceReader::from_path(&cli.trace)?;
    let stats = engine.run(reader)?;
    stats.print(config.tlb_policy);
    Ok(())
}
