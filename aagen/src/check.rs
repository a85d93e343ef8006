//! Structural checks for generated fixtures.
//!
//! [`check_aag`] reads an ASCII AIGER file back and confirms it is a well-formed combinational netlist: inputs
//! and gates define distinct variables, every fan-in is defined, gates only read inputs and earlier gates, and
//! every output is driven by a gate.

use std::collections::HashMap;
use std::io::Read;

use petgraph::{prelude::*, visit::EdgeRef};

use crate::aag::AagParams;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Var {
    Constant,
    Unused,
    Input,
    And,
}

#[derive(Clone, Copy, Debug)]
struct Node {
    var: Var,
    variable: usize,
    /// Position of the defining line; inputs and the constant sort before every gate.
    defined_at: Option<usize>,
}

/// The variables a netlist mentions, each with its graph node.
///
/// Nodes are only created for variables that appear in the file, so a huge `M` costs nothing.
#[derive(Default)]
struct Variables {
    graph: Graph<Node, bool>,
    nodes: HashMap<usize, NodeIndex>,
}

impl Variables {
    fn node(&mut self, variable: usize) -> NodeIndex {
        let graph = &mut self.graph;
        *self.nodes.entry(variable).or_insert_with(|| {
            let (var, defined_at) = if variable == 0 { (Var::Constant, Some(0)) } else { (Var::Unused, None) };
            graph.add_node(Node { var, variable, defined_at })
        })
    }
}

/// A summary of a netlist that passed [`check_aag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckReport {
    /// The header counts.
    pub params: AagParams,
    /// Variables in `1..=M` that are neither inputs nor gates.
    pub unused: usize,
    /// Symbol table entries.
    pub symbols: usize,
    /// The longest input-to-gate path, in gates.
    pub depth: usize,
}

fn malformed<T>(msg: String) -> Result<T> {
    Err(Error::Malformed(msg))
}

/// Parses and checks an ASCII AIGER netlist.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the AIGER reader rejects the file, or [`Error::Malformed`] describing the first
/// structural rule it breaks.
#[allow(clippy::similar_names)]
pub fn check_aag<R: Read>(reader: R) -> Result<CheckReport> {
    let reader = aiger::Reader::from_reader(reader)?;
    let header = reader.header();

    if header.l != 0 {
        return malformed(format!("header declares {} latches", header.l));
    }

    match header.i.checked_add(header.a) {
        Some(defined) if defined <= header.m => {},
        _ => {
            return malformed(format!(
                "header declares {} inputs and {} gates but only {} variables",
                header.i, header.a, header.m
            ))
        },
    }

    let mut vars = Variables::default();
    let mut inputs = 0;
    let mut outputs = Vec::new();
    let mut gates = Vec::new();
    let mut symbols = 0;

    for record in reader.records() {
        match record? {
            aiger::Aiger::Input(l) => {
                let node = vars.node(l.variable());
                if vars.graph[node].var != Var::Unused {
                    return malformed(format!("input {} redefines variable {}", inputs, l.variable()));
                }
                vars.graph[node].var = Var::Input;
                vars.graph[node].defined_at = Some(0);
                inputs += 1;
            },
            aiger::Aiger::Output(l) => {
                outputs.push(l);
            },
            aiger::Aiger::AndGate { output, inputs: [x, y] } => {
                let gate = vars.node(output.variable());
                if vars.graph[gate].var != Var::Unused {
                    return malformed(format!("gate {} redefines variable {}", output.0, output.variable()));
                }
                gates.push(gate);
                vars.graph[gate].var = Var::And;
                vars.graph[gate].defined_at = Some(gates.len());
                for fanin in [x, y] {
                    let source = vars.node(fanin.variable());
                    vars.graph.add_edge(source, gate, fanin.is_inverted());
                }
            },
            aiger::Aiger::Symbol { .. } => {
                symbols += 1;
            },
            other => return malformed(format!("unsupported record {:?}", other)),
        }
    }

    if inputs != header.i || outputs.len() != header.o || gates.len() != header.a {
        return malformed(format!(
            "found {} inputs, {} outputs, {} gates; header declares {} {} {}",
            inputs,
            outputs.len(),
            gates.len(),
            header.i,
            header.o,
            header.a
        ));
    }

    let graph = &vars.graph;

    for edge in graph.edge_references() {
        let source = graph[edge.source()];
        if source.var == Var::Unused {
            return malformed(format!(
                "gate {} reads undefined variable {}",
                graph[edge.target()].variable * 2,
                source.variable
            ));
        }
    }

    let order = petgraph::algo::toposort(graph, None).or_else(|cycle| {
        malformed(format!("combinational cycle through variable {}", graph[cycle.node_id()].variable))
    })?;

    for &gate in &gates {
        for fanin in graph.neighbors_directed(gate, Incoming) {
            if graph[fanin].defined_at >= graph[gate].defined_at {
                return malformed(format!(
                    "gate {} reads variable {} before it is defined",
                    graph[gate].variable * 2,
                    graph[fanin].variable
                ));
            }
        }
    }

    for (position, output) in outputs.iter().enumerate() {
        let driven = vars.nodes.get(&output.variable()).map_or(false, |&node| graph[node].var == Var::And);
        if !driven {
            return malformed(format!("output {} ({}) is not driven by an AND gate", position, output.0));
        }
    }

    let mut depth = vec![0; graph.node_count()];
    for node in order {
        if graph[node].var == Var::And {
            depth[node.index()] =
                graph.neighbors_directed(node, Incoming).map(|fanin| depth[fanin.index()]).max().unwrap_or(0) + 1;
        }
    }
    let depth = depth.into_iter().max().unwrap_or(0);

    // The counts match the header, which was checked to fit in `M`.
    let unused = header.m - header.i - header.a;

    let params = AagParams::new(header.m, header.i, header.l, header.o, header.a);
    log::debug!("checked {:?}: {} unused variables, depth {}", params, unused, depth);

    Ok(CheckReport { params, unused, symbols, depth })
}
