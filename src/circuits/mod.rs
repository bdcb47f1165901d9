// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`qnoise::operations::Operation`).
//!
//! This module provides the `Circuit` structure, an immutable-after-build
//! ordered pathway of rotations ending in a single joint measurement, plus
//! the `data_circuit` constructor that realizes the rotation encoding of
//! two parallel angle sequences.

// Import necessary types from other modules
use crate::core::{QnoiseError, QubitId};
use crate::operations::Operation;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Represents an ordered sequence of Operations applied to a set of qubits.
///
/// The operation order fixes a deterministic circuit for a given angle
/// sequence. Rotations on distinct qubits commute, so cross-qubit ordering
/// only affects the textual rendering, never the measurement statistics.
#[derive(Clone, PartialEq)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// The unique set of qubits involved across all operations.
    qubits: HashSet<QubitId>,

    /// The ordered sequence of operations defining the circuit's logic.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: HashSet::new(),
            operations: Vec::new(),
        }
    }

    /// Adds a single operation to the end of the circuit's sequence.
    ///
    /// Automatically registers the qubits involved in `op`.
    pub fn add_operation(&mut self, op: Operation) {
        for qubit in op.involved_qubits() {
            self.qubits.insert(qubit);
        }
        self.operations.push(op);
    }

    /// Adds multiple operations from an iterator to the end of the sequence.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Returns a reference to the set of unique qubit ids in this circuit.
    pub fn qubits(&self) -> &HashSet<QubitId> {
        &self.qubits
    }

    /// Returns a slice containing the ordered sequence of operations.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of rotation operations (X or Y axis) in the circuit.
    pub fn rotation_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_rotation()).count()
    }

    /// Number of measurement operations in the circuit.
    pub fn measurement_count(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| op.is_measurement())
            .count()
    }
}

// Implement Default for convenient creation of empty circuits.
impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the rotation-encoded circuit for two parallel angle sequences.
///
/// For each index `i` in `[0, N)`, qubit `i` receives an X rotation by
/// `angles_x[i]` followed by a Y rotation by `angles_y[i]`; a single joint
/// measurement of all `N` qubits, tagged with `key`, terminates the
/// circuit. The result always holds exactly `2N` rotations and one
/// measurement.
///
/// # Errors
/// Returns `QnoiseError::InvalidCircuit` when the two angle slices differ
/// in length.
pub fn data_circuit(
    angles_x: &[f64],
    angles_y: &[f64],
    key: &str,
) -> Result<Circuit, QnoiseError> {
    if angles_x.len() != angles_y.len() {
        return Err(QnoiseError::InvalidCircuit {
            message: format!(
                "angle sequences must have equal length (got {} and {})",
                angles_x.len(),
                angles_y.len()
            ),
        });
    }

    let mut builder = CircuitBuilder::new();
    for (i, (&theta_x, &theta_y)) in angles_x.iter().zip(angles_y.iter()).enumerate() {
        let qubit = QubitId(i as u64);
        builder = builder.rotate_x(qubit, theta_x).rotate_y(qubit, theta_y);
    }
    Ok(builder.measure_all(key).build())
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
        }
    }

    /// Adds a single operation to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Appends an X rotation of `target` by `theta` radians.
    pub fn rotate_x(self, target: QubitId, theta: f64) -> Self {
        self.add_op(Operation::RotationX { target, theta })
    }

    /// Appends a Y rotation of `target` by `theta` radians.
    pub fn rotate_y(self, target: QubitId, theta: f64) -> Self {
        self.add_op(Operation::RotationY { target, theta })
    }

    /// Appends a phase shift of `target` by `theta` radians.
    pub fn phase_shift(self, target: QubitId, theta: f64) -> Self {
        self.add_op(Operation::PhaseShift { target, theta })
    }

    /// Appends a joint measurement of the given qubits, tagged with `key`.
    pub fn measure(self, targets: Vec<QubitId>, key: &str) -> Self {
        self.add_op(Operation::Measure {
            targets,
            key: key.to_string(),
        })
    }

    /// Appends a joint measurement of every qubit the circuit involves so
    /// far, in ascending id order, tagged with `key`.
    pub fn measure_all(self, key: &str) -> Self {
        let mut targets: Vec<QubitId> = self.circuit.qubits().iter().cloned().collect();
        targets.sort();
        self.measure(targets, key)
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// Implement Default for convenient creation of builders.
impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return writeln!(f, "qnoise::Circuit[0 operations on 0 qubits]");
        }

        // --- Setup ---
        let ops = &self.operations;
        let num_ops = ops.len();

        // Sorted qubit list fixes the row order
        let mut sorted_qubits: Vec<QubitId> = self.qubits.iter().cloned().collect();
        sorted_qubits.sort();
        let num_qubits = sorted_qubits.len();
        let qubit_to_row: HashMap<QubitId, usize> = sorted_qubits
            .iter()
            .enumerate()
            .map(|(i, qid)| (*qid, i))
            .collect();

        let max_label_width = sorted_qubits
            .iter()
            .map(|qid| format!("{}", qid).len())
            .max()
            .unwrap_or(0);

        const GATE_WIDTH: usize = 7; // e.g., "──Rx───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const H_WIRE: char = '─';

        // op_grid[row][time] stores the gate/wire segment string
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];

        // Helper to center a gate symbol inside a wire segment
        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre = total_dashes / 2;
                let post = total_dashes - pre;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre),
                    symbol,
                    H_WIRE.to_string().repeat(post)
                )
            }
        }

        // --- Populate grid ---
        for (t, op) in ops.iter().enumerate() {
            match op {
                Operation::RotationX { target, .. } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("Rx");
                    }
                }
                Operation::RotationY { target, .. } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("Ry");
                    }
                }
                Operation::PhaseShift { target, .. } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("P");
                    }
                }
                Operation::Measure { targets, .. } => {
                    for target in targets {
                        if let Some(r) = qubit_to_row.get(target) {
                            op_grid[*r][t] = format_gate("M");
                        }
                    }
                }
            }
        }

        // --- Format output string ---
        writeln!(
            f,
            "qnoise::Circuit[{} operations on {} qubits]",
            num_ops, num_qubits
        )?;
        for r in 0..num_qubits {
            let label = format!("{}: ", sorted_qubits[r]);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(id: u64) -> QubitId {
        QubitId(id)
    }

    #[test]
    fn data_circuit_shape() {
        for n in [1usize, 2, 5, 10] {
            let angles_x = vec![0.3; n];
            let angles_y = vec![1.1; n];
            let circuit = data_circuit(&angles_x, &angles_y, "result").unwrap();

            assert_eq!(circuit.rotation_count(), 2 * n, "2N rotations for N={}", n);
            assert_eq!(circuit.measurement_count(), 1);
            assert_eq!(circuit.len(), 2 * n + 1);
            assert_eq!(circuit.qubits().len(), n);
            assert!(
                circuit.operations().last().unwrap().is_measurement(),
                "measurement must be terminal"
            );
        }
    }

    #[test]
    fn data_circuit_rejects_mismatched_lengths() {
        let result = data_circuit(&[0.0, 1.0], &[0.0], "result");
        match result {
            Err(QnoiseError::InvalidCircuit { message }) => {
                assert!(message.contains("equal length"), "message: {}", message);
            }
            other => panic!("expected InvalidCircuit, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn data_circuit_interleaves_rotations_per_qubit() {
        let circuit = data_circuit(&[0.1, 0.2], &[0.3, 0.4], "result").unwrap();
        let ops = circuit.operations();
        assert_eq!(
            ops[0],
            Operation::RotationX {
                target: qid(0),
                theta: 0.1
            }
        );
        assert_eq!(
            ops[1],
            Operation::RotationY {
                target: qid(0),
                theta: 0.3
            }
        );
        assert_eq!(
            ops[2],
            Operation::RotationX {
                target: qid(1),
                theta: 0.2
            }
        );
        assert_eq!(
            ops[3],
            Operation::RotationY {
                target: qid(1),
                theta: 0.4
            }
        );
    }

    #[test]
    fn measure_all_targets_sorted() {
        let circuit = CircuitBuilder::new()
            .rotate_x(qid(2), 0.5)
            .rotate_x(qid(0), 0.5)
            .rotate_x(qid(1), 0.5)
            .measure_all("m")
            .build();
        match circuit.operations().last().unwrap() {
            Operation::Measure { targets, key } => {
                assert_eq!(targets, &[qid(0), qid(1), qid(2)]);
                assert_eq!(key, "m");
            }
            op => panic!("expected Measure, got {:?}", op),
        }
    }

    #[test]
    fn display_renders_gate_grid() {
        let circuit = data_circuit(&[0.1], &[0.2], "result").unwrap();
        let rendering = format!("{}", circuit);
        assert!(rendering.contains("qnoise::Circuit[3 operations on 1 qubits]"));
        assert!(rendering.contains("q0: "));
        assert!(rendering.contains("Rx"));
        assert!(rendering.contains("Ry"));
        assert!(rendering.contains("M"));
    }
}
