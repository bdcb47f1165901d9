//! Error handling logic

use std::fmt;

/// Unique identifier for a simulated qubit.
/// Qubits are index-addressed; ascending id order is also the bit order
/// used in measurement bitstrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub u64);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Error types for circuit construction and simulation.
///
/// All failures are terminal for the run that raised them; there is no
/// retry or recovery layer.
#[derive(Debug, Clone, PartialEq)] // PartialEq useful for testing error variants
pub enum QnoiseError {
    /// The circuit is structurally invalid: mismatched angle sequences,
    /// a measurement that is not the final operation, a second measurement,
    /// or a measurement with no targets.
    InvalidCircuit {
        /// InvalidCircuit failure message
        message: String,
    },

    /// An operation references a qubit the engine does not track.
    UnknownQubit {
        /// The unresolved qubit
        qubit: QubitId,
        /// UnknownQubit failure message
        message: String,
    },

    /// The statevector failed a consistency check (normalization drift,
    /// dimension mismatch).
    StateError {
        /// StateError failure message
        message: String,
    },

    /// General error encountered during the simulation process itself.
    SimulationError {
        /// SimulationError failure message
        message: String,
    },
}

impl fmt::Display for QnoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QnoiseError::InvalidCircuit { message } => write!(f, "Invalid Circuit: {}", message),
            QnoiseError::UnknownQubit { qubit, message } => {
                write!(f, "Unknown Qubit ({}): {}", qubit, message)
            }
            QnoiseError::StateError { message } => write!(f, "State Error: {}", message),
            QnoiseError::SimulationError { message } => {
                write!(f, "Simulation Process Error: {}", message)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QnoiseError {}
