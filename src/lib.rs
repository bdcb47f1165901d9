// src/lib.rs

//! `qnoise` - Data-driven quantum circuit sampling and measurement statistics
//!
//! This library converts scalar data into quantum-gate rotation angles,
//! builds a rotation-encoded circuit with a single terminal measurement,
//! simulates it with a dense statevector engine for a number of
//! repetitions, and summarizes the sampled outcomes (tally, textual bar
//! chart, sample bitstrings).

pub mod core;
pub mod operations;
pub mod circuits;
pub mod encoding;
pub mod simulation;
pub mod analysis;
pub mod pipeline;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{QnoiseError, QubitId, StateVector};
pub use crate::operations::Operation;
pub use crate::circuits::{Circuit, CircuitBuilder, data_circuit};
pub use crate::encoding::{DataSource, UniformSource, to_angles, to_angles_scaled};
pub use crate::simulation::{SimulationResult, Simulator};
pub use crate::analysis::OutcomeTally;
pub use crate::pipeline::{PipelineConfig, PipelineReport};
pub use crate::validation::check_normalization;

// Example 1: Zero rotations resolve to the all-zero outcome
// With every angle at 0 the circuit applies no net rotation, so all
// repetitions sample the |0…0> state.
/// ```
/// use qnoise::{OutcomeTally, Simulator, data_circuit};
///
/// let circuit = data_circuit(&[0.0, 0.0], &[0.0, 0.0], "result").unwrap();
/// println!("{}", circuit); // Display renders the gate grid
///
/// let simulator = Simulator::with_seed(7);
/// let result = simulator.run(&circuit, 4).unwrap();
/// assert_eq!(result.repetitions(), 4);
///
/// let tally = OutcomeTally::from_result(&result);
/// assert_eq!(tally.count("00"), 4);
/// assert_eq!(tally.total(), 4);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: The full pipeline, seeded for reproducibility
// Random data becomes rotation angles, the sampled outcomes are tallied,
// and the first distinct bitstrings serve as illustrative keys (raw
// measurement strings, nothing cryptographic).
/// ```
/// use qnoise::{PipelineConfig, pipeline};
///
/// let config = PipelineConfig {
///     qubits: 3,
///     repetitions: 50,
///     seed: Some(42),
///     ..PipelineConfig::default()
/// };
///
/// let report = pipeline::run(&config).unwrap();
/// assert_eq!(report.angles_x.len(), 3);
/// assert_eq!(report.tally.total(), 50);
///
/// // Identical config, identical run.
/// let rerun = pipeline::run(&config).unwrap();
/// assert_eq!(rerun.result, report.result);
///
/// println!("{}", report.tally.histogram(40));
/// println!("keys: {:?}", report.tally.first_distinct(5));
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
