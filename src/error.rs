//! Error taxonomy for scheduling simulations.
//!
//! Every error is terminal for the invocation that raised it: there is no
//! partial or degraded output. Callers decide whether to abort the whole run
//! or skip one discipline.

use thiserror::Error;

/// Errors raised while loading processes or running a discipline.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Wrong command-line arity.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// A process record failed to parse or violates a field constraint.
    ///
    /// `line` is the 1-based source line when the record came from text input.
    #[error("malformed input{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    MalformedInput {
        /// Source line (1-based), if known.
        line: Option<usize>,
        /// Human-readable description.
        message: String,
    },

    /// An algorithm or the metrics aggregator received zero processes.
    #[error("empty process set: averages and throughput are undefined")]
    EmptyProcessSet,

    /// Round-robin invoked with a non-positive time quantum.
    #[error("invalid time quantum {0}: must be greater than zero")]
    InvalidQuantum(i64),

    /// I/O failure while reading a process file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimulationError {
    /// Creates a `MalformedInput` error without a source line.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line: None,
            message: message.into(),
        }
    }

    /// Creates a `MalformedInput` error tied to a source line.
    pub fn malformed_at(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line: Some(line),
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_with_line() {
        let err = SimulationError::malformed_at(3, "burst is not an integer");
        assert_eq!(
            err.to_string(),
            "malformed input at line 3: burst is not an integer"
        );
    }

    #[test]
    fn test_malformed_display_without_line() {
        let err = SimulationError::malformed("duplicate process id 4");
        assert_eq!(err.to_string(), "malformed input: duplicate process id 4");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SimulationError = io.into();
        assert!(matches!(err, SimulationError::Io(_)));
    }
}
