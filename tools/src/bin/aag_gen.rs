use std::path::PathBuf;

use aagen::aag::{self, AagParams};
use anyhow::Context;
use clap::Parser;

/// Writes a random combinational ASCII AIGER netlist.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// File to write; overwritten if it exists.
    file: PathBuf,
    /// Maximum variable index (M); must be at least #PI + #AIG.
    max_idx: usize,
    /// Number of primary inputs (I).
    pi: usize,
    /// Number of latches (L); must be 0.
    latch: usize,
    /// Number of primary outputs (O).
    po: usize,
    /// Number of AND gates (A).
    aig: usize,
    /// Seed for the random number generator. Drawn from OS entropy if absent.
    #[arg(long)]
    seed: Option<u64>,
}

const USAGE: [&str; 2] = [
    "Usage: aag-gen <fileName> <#MaxIdx> <#PI> <#LATCH> <#PO> <#AIG> [--seed <SEED>]",
    "Example: aag-gen 1.aag 1000 100 0 100 200",
];

fn main() -> anyhow::Result<()> {
    let _ = env_logger::try_init();

    let Some(args) = tools::parse_or_usage::<Args>(&USAGE) else {
        return Ok(());
    };

    let params = AagParams::new(args.max_idx, args.pi, args.latch, args.po, args.aig);
    let (mut rng, seed) = aagen::rng::seeded(args.seed);
    log::info!("generating {:?} with seed {}", params, seed);

    let netlist = aag::generate(&params, &mut rng).context("cannot generate netlist")?;
    netlist
        .to_file(&args.file)
        .with_context(|| format!("cannot write {}", args.file.display()))?;

    Ok(())
}
