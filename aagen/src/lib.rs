//! Random fixtures for tools that consume and-inverter graphs.
//!
//! An and-inverter graph (AIG) represents boolean logic as two-input AND gates connected by edges that may be
//! inverted. The ASCII AIGER format (`aag`) writes one as a header of counts followed by numbered literals: a
//! literal is `2 * variable`, plus one if the edge is inverted.
//!
//! This crate produces two kinds of fixture:
//! - [`aag`]: random combinational netlists with a chosen number of inputs, outputs and AND gates. Gates only
//!   read inputs and gates defined before them, so every netlist is acyclic.
//! - [`pattern`]: random input patterns, one `0`/`1` string per line, for simulating such a netlist.
//!
//! [`check`] reads a netlist back and confirms the structural guarantees hold. Every generator takes its random
//! number generator as an argument; [`rng::seeded`] builds a reproducible one.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod aag;
pub mod check;
mod error;
pub mod pattern;
pub mod rng;

pub use error::{Error, Result};
