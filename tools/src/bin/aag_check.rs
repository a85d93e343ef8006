use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use aagen::check::check_aag;
use aagen::pattern::read_patterns;
use anyhow::Context;
use clap::Parser;

/// Checks a generated ASCII AIGER netlist, and optionally a pattern file for it.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Netlist to check.
    file: PathBuf,
    /// Pattern file whose width must match the netlist's inputs.
    #[arg(long)]
    patterns: Option<PathBuf>,
}

const USAGE: [&str; 1] = ["Usage: aag-check <fileName> [--patterns <FILE>]"];

fn main() -> anyhow::Result<()> {
    let _ = env_logger::try_init();

    let Some(args) = tools::parse_or_usage::<Args>(&USAGE) else {
        return Ok(());
    };

    let file = File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;
    let report = check_aag(file).with_context(|| format!("{} failed the netlist check", args.file.display()))?;
    log::debug!("{:?}", report);

    let mut summary = vec![
        format!("Checked \"{}\"", args.file.display()),
        format!("#MaxIdx  = {}", report.params.max_var),
        format!("#PI      = {}", report.params.inputs),
        format!("#PO      = {}", report.params.outputs),
        format!("#AIG     = {}", report.params.ands),
        format!("#Unused  = {}", report.unused),
        format!("Depth    = {}", report.depth),
    ];

    if let Some(path) = &args.patterns {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        let patterns = read_patterns(BufReader::new(file), report.params.inputs)
            .with_context(|| format!("{} does not fit {}", path.display(), args.file.display()))?;
        summary.push(format!("Checked \"{}\"", path.display()));
        summary.push(format!("#Pattern = {}", patterns.len()));
    }

    tools::print_summary(&summary);

    Ok(())
}
