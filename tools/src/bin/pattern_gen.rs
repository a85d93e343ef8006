use std::path::PathBuf;

use aagen::pattern::{self, PatternParams};
use anyhow::Context;
use clap::Parser;

/// Writes random simulation patterns, one `0`/`1` string per line.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// File to write; overwritten if it exists.
    file: PathBuf,
    /// Bits per pattern (the number of primary inputs).
    pi: usize,
    /// Number of patterns.
    pattern: usize,
    /// Seed for the random number generator. Drawn from OS entropy if absent.
    #[arg(long)]
    seed: Option<u64>,
}

const USAGE: [&str; 1] = ["Usage: pattern-gen <fileName> <#PI> <#Pattern> [--seed <SEED>]"];

fn main() -> anyhow::Result<()> {
    let _ = env_logger::try_init();

    let Some(args) = tools::parse_or_usage::<Args>(&USAGE) else {
        return Ok(());
    };

    let (mut rng, seed) = aagen::rng::seeded(args.seed);
    log::info!("generating {} patterns of width {} with seed {}", args.pattern, args.pi, seed);

    let patterns = pattern::generate(&PatternParams { width: args.pi, count: args.pattern }, &mut rng);
    patterns
        .to_file(&args.file)
        .with_context(|| format!("cannot write {}", args.file.display()))?;

    tools::print_summary(&[
        format!("Output \"{}\"", args.file.display()),
        format!("#Pattern = {}", patterns.len()),
        format!("#PI      = {}", patterns.width()),
    ]);

    Ok(())
}
