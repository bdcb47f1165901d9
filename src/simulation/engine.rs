// src/simulation/engine.rs
use crate::core::{QnoiseError, QubitId, StateVector};
use crate::operations::Operation;
use num_complex::Complex;
use num_traits::Zero; // For Complex::zero()
use rand::RngExt;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};

/// The core simulation engine: owns the dense statevector and evolves it
/// by applying the circuit's single-qubit operations, then samples the
/// terminal measurement's outcome distribution.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    /// Maps qubit ids to their index (0..N-1) in the sorted order used for
    /// the global statevector. Sorted assignment keeps the basis layout
    /// deterministic regardless of `HashSet` iteration order.
    qubit_indices: HashMap<QubitId, usize>,
    /// The global statevector of dimension 2^N, basis index bit `N-1-i`
    /// carrying qubit index `i` (ascending qubit-id order, MSB first).
    state: StateVector,
    /// Number of qubits being simulated (N).
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine for a given set of qubits in the |0…0⟩ state.
    pub(crate) fn init(qubit_ids: &HashSet<QubitId>) -> Result<Self, QnoiseError> {
        if qubit_ids.is_empty() {
            return Err(QnoiseError::InvalidCircuit {
                message: "cannot initialize simulation engine with zero qubits".to_string(),
            });
        }

        let num_qubits = qubit_ids.len();
        let dim = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or_else(|| QnoiseError::SimulationError {
                message: "number of qubits too large, statevector dimension overflows usize"
                    .to_string(),
            })?;

        let mut sorted_ids: Vec<QubitId> = qubit_ids.iter().cloned().collect();
        sorted_ids.sort();
        let mut qubit_indices = HashMap::with_capacity(num_qubits);
        for (index, qubit_id) in sorted_ids.into_iter().enumerate() {
            qubit_indices.insert(qubit_id, index);
        }

        let mut initial = vec![Complex::zero(); dim];
        initial[0] = Complex::new(1.0, 0.0);

        Ok(Self {
            qubit_indices,
            state: StateVector::new(initial),
            num_qubits,
        })
    }

    /// Applies a single non-measurement operation to the global state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), QnoiseError> {
        match op {
            Operation::RotationX { target, theta } => {
                let target_idx = self.qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &rotation_x_matrix(*theta));
            }
            Operation::RotationY { target, theta } => {
                let target_idx = self.qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &rotation_y_matrix(*theta));
            }
            Operation::PhaseShift { target, theta } => {
                let target_idx = self.qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &phase_shift_matrix(*theta));
            }
            Operation::Measure { .. } => {
                return Err(QnoiseError::InvalidCircuit {
                    message: "measurement must not be passed to apply_operation".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Samples `repetitions` independent outcomes of measuring `targets`
    /// in the computational basis, without mutating the state.
    ///
    /// Each outcome is one bit per target qubit, ordered by ascending
    /// qubit id regardless of the order in `targets`. Sampling draws
    /// basis index `k` with probability `|c_k|^2 / Σ|c|^2` per repetition.
    pub(crate) fn sample(
        &self,
        targets: &[QubitId],
        repetitions: usize,
        rng: &mut StdRng,
    ) -> Result<Vec<Vec<u8>>, QnoiseError> {
        let mut sorted_targets: Vec<QubitId> = targets.to_vec();
        sorted_targets.sort();
        let mut bit_positions = Vec::with_capacity(sorted_targets.len());
        for target in &sorted_targets {
            let idx = self.qubit_index(target)?;
            bit_positions.push(self.num_qubits - 1 - idx);
        }

        // Cumulative weights over the basis; the final entry is the total
        // probability mass (1.0 for a normalized state, up to rounding).
        let mut cumulative = Vec::with_capacity(self.state.dim());
        let mut acc = 0.0;
        for amplitude in self.state.vector() {
            acc += amplitude.norm_sqr();
            cumulative.push(acc);
        }
        if !(acc.is_finite() && acc > 0.0) {
            return Err(QnoiseError::StateError {
                message: format!("outcome distribution has no probability mass (Σ|c|^2 = {})", acc),
            });
        }

        let mut outcomes = Vec::with_capacity(repetitions);
        for _ in 0..repetitions {
            let draw: f64 = rng.random::<f64>() * acc;
            let k = cumulative
                .partition_point(|&mass| mass <= draw)
                .min(self.state.dim() - 1);
            let bits = bit_positions
                .iter()
                .map(|&pos| ((k >> pos) & 1) as u8)
                .collect();
            outcomes.push(bits);
        }
        Ok(outcomes)
    }

    /// Read access to the evolved statevector.
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    // Direct state injection for engine-level tests.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), QnoiseError> {
        if state.dim() != self.state.dim() {
            return Err(QnoiseError::StateError {
                message: format!(
                    "cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            });
        }
        self.state = state;
        Ok(())
    }

    /// Helper to resolve a qubit's engine index, with a specific error if
    /// the qubit is not tracked.
    fn qubit_index(&self, qubit_id: &QubitId) -> Result<usize, QnoiseError> {
        self.qubit_indices
            .get(qubit_id)
            .copied()
            .ok_or_else(|| QnoiseError::UnknownQubit {
                qubit: *qubit_id,
                message: "qubit not found in simulation context".to_string(),
            })
    }

    /// Applies a 2x2 matrix to the target qubit within the global
    /// statevector, pairing basis states that differ only in the target's
    /// bit position.
    fn apply_single_qubit_gate(&mut self, target_idx: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let mask = 1usize << (self.num_qubits - 1 - target_idx);
        let dim = self.state.dim();
        let amplitudes = self.state.vector();
        let mut next = vec![Complex::zero(); dim];

        for i0 in 0..dim {
            if i0 & mask != 0 {
                continue;
            }
            let i1 = i0 | mask;
            let psi_0 = amplitudes[i0];
            let psi_1 = amplitudes[i1];
            next[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            next[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }

        self.state = StateVector::new(next);
    }
}

/// Rx(θ) = [[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]]
fn rotation_x_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let half = theta / 2.0;
    let (sin, cos) = half.sin_cos();
    [
        [Complex::new(cos, 0.0), Complex::new(0.0, -sin)],
        [Complex::new(0.0, -sin), Complex::new(cos, 0.0)],
    ]
}

/// Ry(θ) = [[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]
fn rotation_y_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let half = theta / 2.0;
    let (sin, cos) = half.sin_cos();
    [
        [Complex::new(cos, 0.0), Complex::new(-sin, 0.0)],
        [Complex::new(sin, 0.0), Complex::new(cos, 0.0)],
    ]
}

/// Applies the phase factor `e^(i*theta)` to the `|1⟩` component.
fn phase_shift_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::new(1.0, 0.0), Complex::zero()],
        [Complex::zero(), Complex::new(theta.cos(), theta.sin())], // e^(i*theta)
    ]
}
