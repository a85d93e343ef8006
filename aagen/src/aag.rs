//! Random ASCII AIGER netlists.
//!
//! Variables `1..=M` are shuffled and split into primary inputs and AND gates; the rest stay unused. Gates are
//! emitted in a random order, and each gate may only read inputs and gates emitted before it, so the netlist is
//! acyclic and already in topological order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use aiger::Literal;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// The comment written after the symbol table.
pub const DEFAULT_COMMENT: &str = "AAG output by aagen";

/// The `M I L O A` counts of a netlist to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AagParams {
    /// The maximum variable index.
    pub max_var: usize,
    /// The number of primary inputs.
    pub inputs: usize,
    /// The number of latches. Must be zero.
    pub latches: usize,
    /// The number of primary outputs.
    pub outputs: usize,
    /// The number of AND gates.
    pub ands: usize,
}

impl AagParams {
    /// Bundles the header counts `M I L O A`.
    #[must_use]
    pub const fn new(max_var: usize, inputs: usize, latches: usize, outputs: usize, ands: usize) -> Self {
        Self { max_var, inputs, latches, outputs, ands }
    }

    /// Checks the counts describe a netlist that can be generated.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable pool is too small for the inputs and gates, if latches were requested,
    /// or if outputs or gates would have nothing to read from.
    pub fn validate(&self) -> Result<()> {
        let needed = self.inputs.saturating_add(self.ands);
        if self.max_var < needed {
            return Err(Error::IndexPoolExhausted { max_var: self.max_var, needed });
        }
        if self.latches != 0 {
            return Err(Error::LatchesUnsupported(self.latches));
        }
        if self.outputs > 0 && self.ands == 0 {
            return Err(Error::NoGatesForOutputs);
        }
        if self.ands > 0 && self.inputs == 0 {
            return Err(Error::NoDriversForGates);
        }
        Ok(())
    }
}

/// A two-input AND gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AndGate {
    /// The literal defined by this gate. Never inverted.
    pub output: Literal,
    /// The fan-in literals.
    pub inputs: [Literal; 2],
}

/// A combinational netlist, held in the order it is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AagNetlist {
    /// The header counts.
    pub params: AagParams,
    /// Primary input literals, never inverted.
    pub inputs: Vec<Literal>,
    /// Primary output literals, each over an AND gate.
    pub outputs: Vec<Literal>,
    /// Gates in definition order; a gate only reads inputs and earlier gates.
    pub ands: Vec<AndGate>,
    /// Free text written after the `c` line.
    pub comment: String,
}

/// Draws a literal over a random variable of `pool`, inverted half the time.
fn pick_literal<R: Rng>(pool: &[usize], rng: &mut R) -> Option<Literal> {
    let variable = *pool.choose(rng)?;
    Some(Literal::from_variable(variable, rng.gen_bool(0.5)))
}

/// Generates a random netlist with the counts in `params`.
///
/// # Errors
///
/// Returns an error if `params` fails [`AagParams::validate`].
pub fn generate<R: Rng>(params: &AagParams, rng: &mut R) -> Result<AagNetlist> {
    params.validate()?;
    log::debug!("generating netlist for {:?}", params);

    let mut pool = (1..=params.max_var).collect::<Vec<usize>>();
    pool.shuffle(rng);

    let split = pool.len() - params.inputs;
    let input_vars = pool.drain(split..).rev().collect::<Vec<usize>>();
    let split = pool.len() - params.ands;
    let mut gate_vars = pool.drain(split..).rev().collect::<Vec<usize>>();
    gate_vars.shuffle(rng);

    let outputs = (0..params.outputs)
        .map(|_| pick_literal(&gate_vars, rng))
        .collect::<Option<Vec<Literal>>>()
        .ok_or(Error::NoGatesForOutputs)?;

    // Variables a gate may read: every input, plus each gate once it is defined.
    let mut drivers = input_vars.clone();
    drivers.reserve(gate_vars.len());

    let mut ands = Vec::with_capacity(gate_vars.len());
    for &variable in &gate_vars {
        let x = pick_literal(&drivers, rng).ok_or(Error::NoDriversForGates)?;
        let y = pick_literal(&drivers, rng).ok_or(Error::NoDriversForGates)?;
        ands.push(AndGate { output: Literal::from_variable(variable, false), inputs: [x, y] });
        drivers.push(variable);
    }

    let inputs = input_vars.into_iter().map(|variable| Literal::from_variable(variable, false)).collect();

    log::debug!("{} unused variables", pool.len());

    Ok(AagNetlist { params: *params, inputs, outputs, ands, comment: DEFAULT_COMMENT.to_string() })
}

impl AagNetlist {
    /// Writes the netlist in ASCII AIGER format, symbol table and comment included.
    #[allow(clippy::missing_errors_doc)]
    pub fn write<W: Write>(&self, mut w: W) -> io::Result<()> {
        let p = &self.params;
        writeln!(w, "aag {}", [p.max_var, p.inputs, p.latches, p.outputs, p.ands].iter().join(" "))?;

        for Literal(input) in &self.inputs {
            writeln!(w, "{}", input)?;
        }

        for Literal(output) in &self.outputs {
            writeln!(w, "{}", output)?;
        }

        for gate in &self.ands {
            let [Literal(x), Literal(y)] = gate.inputs;
            writeln!(w, "{} {} {}", gate.output.0, x, y)?;
        }

        for position in 0..self.inputs.len() {
            writeln!(w, "i{} INPUT{0}", position)?;
        }

        for position in 0..self.outputs.len() {
            writeln!(w, "o{} OUTPUT{0}", position)?;
        }

        writeln!(w, "c")?;
        writeln!(w, "{}", self.comment)
    }

    /// Creates (or truncates) `path` and writes the netlist to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path)?);
        self.write(&mut w)?;
        w.flush()?;
        log::info!(
            "wrote {} inputs, {} outputs, {} AND gates to {}",
            self.inputs.len(),
            self.outputs.len(),
            self.ands.len(),
            path.display()
        );
        Ok(())
    }
}
