// src/operations/mod.rs

//! Defines the operations a circuit can apply to its qubits.
//!
//! The operation set mirrors the data-encoding scheme: each raw sample is
//! carried into the circuit as a rotation angle, so the single-qubit
//! operations are all parameterized by an angle in radians. A circuit
//! finishes with a single joint measurement tagged with a result key.

// Import necessary types from the core module
use crate::core::QubitId;

/// A single step in a circuit.
///
/// Rotation angles are taken as-is; callers that want angles inside
/// [0, 2π] are expected to normalize their raw data before encoding
/// (out-of-range angles are valid input, not an error).
#[derive(Debug, Clone, PartialEq)] // PartialEq for circuit comparison in tests; f64 comparison needs care.
pub enum Operation {
    /// Rotation about the X axis of the Bloch sphere by `theta` radians.
    ///
    /// Encodes the first data source: qubit `i` receives the angle mapped
    /// from sample `i`.
    RotationX {
        /// The rotated qubit.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Rotation about the Y axis of the Bloch sphere by `theta` radians.
    ///
    /// Encodes the second data source, applied after the X rotation on the
    /// same qubit.
    RotationY {
        /// The rotated qubit.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Applies the phase factor `e^(iθ)` to the `|1⟩` component of a qubit.
    ///
    /// Not part of the rotation encoding itself, but available for circuits
    /// that mix in explicit phase manipulation.
    PhaseShift {
        /// The target qubit whose `|1⟩` amplitude is rotated in phase.
        target: QubitId,
        /// The phase angle `theta` (in radians) to apply.
        theta: f64,
    },

    /// Joint computational-basis measurement of `targets`, tagged with a
    /// result key.
    ///
    /// Sampling one outcome per repetition yields a bit per target qubit,
    /// reported in ascending qubit-id order. A circuit may contain exactly
    /// one measurement and it must be the final operation; the simulator
    /// rejects other layouts.
    Measure {
        /// The measured qubits.
        targets: Vec<QubitId>,
        /// Key identifying this measurement's outcomes in the results.
        key: String,
    },
}

impl Operation {
    /// Returns all qubit ids mentioned in the operation's parameters.
    /// The circuit uses this to track which qubits it involves.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::RotationX { target, .. } => vec![*target],
            Operation::RotationY { target, .. } => vec![*target],
            Operation::PhaseShift { target, .. } => vec![*target],
            Operation::Measure { targets, .. } => targets.clone(),
        }
    }

    /// `true` for the terminal measurement operation.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Operation::Measure { .. })
    }

    /// `true` for the parameterized rotation operations (X or Y axis).
    pub fn is_rotation(&self) -> bool {
        matches!(
            self,
            Operation::RotationX { .. } | Operation::RotationY { .. }
        )
    }
}
