// src/core/state.rs

use num_complex::Complex;
use std::fmt;

/// Dense complex amplitude vector over the computational basis of the
/// simulated qubits.
///
/// The dimension is 2^N for N qubits; basis index `k` encodes one bit per
/// qubit, most significant bit first in ascending qubit-id order. The
/// vector is only mutated by the simulation engine while it applies the
/// circuit's operations.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Wraps a raw amplitude vector. The engine is responsible for handing
    /// in vectors of the correct dimension.
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Builds a statevector from explicit amplitudes, mainly for analysis
    /// and validation of hand-constructed states.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Read-only access to the amplitude vector.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of basis states represented (2^N for N qubits).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Sum of squared amplitude magnitudes; 1.0 for a normalized state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
