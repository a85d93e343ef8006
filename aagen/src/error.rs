use std::fmt;
use std::io;

/// Errors produced while generating, writing or checking fixtures.
#[derive(Debug)]
pub enum Error {
    /// The index pool `1..=max_var` cannot hold all inputs and AND gates.
    IndexPoolExhausted {
        /// The requested maximum variable index.
        max_var: usize,
        /// The number of indices needed (inputs plus AND gates).
        needed: usize,
    },
    /// A nonzero latch count was requested.
    LatchesUnsupported(usize),
    /// Outputs were requested from a netlist without AND gates.
    NoGatesForOutputs,
    /// AND gates were requested without any inputs to drive them.
    NoDriversForGates,
    /// The AIGER reader rejected the file.
    Parse(aiger::AigerError),
    /// The file parsed, but breaks a structural rule.
    Malformed(String),
    /// An IO error occurred.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexPoolExhausted { max_var, needed } => write!(
                f,
                "maximum variable index {} is smaller than #PI + #AIG = {}",
                max_var, needed
            ),
            Self::LatchesUnsupported(latches) => {
                write!(f, "latches are not supported (requested {})", latches)
            }
            Self::NoGatesForOutputs => write!(f, "cannot pick outputs from a netlist with no AND gates"),
            Self::NoDriversForGates => write!(f, "cannot drive AND gates in a netlist with no inputs"),
            Self::Parse(err) => write!(f, "AIGER parse error: {:?}", err),
            Self::Malformed(msg) => write!(f, "malformed fixture: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<aiger::AigerError> for Error {
    fn from(err: aiger::AigerError) -> Self {
        Self::Parse(err)
    }
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
