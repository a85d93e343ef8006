//! Plumbing shared by the fixture binaries.

use clap::error::ErrorKind;
use clap::Parser;

/// Parses the command line into `T`.
///
/// Arguments that don't fit are not an error for these tools: the problem and `usage` are printed, and `None`
/// tells the caller to exit successfully without doing any work. `--help` and `--version` exit as usual.
#[must_use]
pub fn parse_or_usage<T: Parser>(usage: &[&str]) -> Option<T> {
    match T::try_parse() {
        Ok(args) => Some(args),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            eprint!("{}", err);
            for line in usage {
                println!("{}", line);
            }
            None
        }
    }
}

/// Prints a framed block of `lines` to stdout.
pub fn print_summary<S: AsRef<str>>(lines: &[S]) {
    println!("==============================");
    for line in lines {
        println!("{}", line.as_ref());
    }
    println!("==============================");
}
