// src/simulation/mod.rs

//! Simulates the execution of `qnoise::circuits::Circuit`.
//! This module contains the `Simulator` entry point and the internal
//! `SimulationEngine` responsible for evolving the statevector and
//! sampling measurement outcomes.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::SimulationResult;

// Import necessary types for the Simulator struct and its methods
use crate::circuits::Circuit;
use crate::core::QnoiseError;
use crate::operations::Operation;
use crate::validation;
use engine::SimulationEngine;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// The main simulator orchestrating the execution of circuits.
///
/// A default simulator seeds its sampler from process entropy on every
/// run; `with_seed` fixes the sampling stream so repeated runs of the
/// same circuit reproduce the same outcome sequence.
#[derive(Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {
    seed: Option<u64>,
}

impl Simulator {
    /// Creates a new Simulator with entropy-seeded sampling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Simulator whose outcome sampling is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Runs a sampled simulation of the provided circuit.
    ///
    /// Applies the circuit's rotations to a |0…0⟩ statevector in order,
    /// then samples the terminal measurement's outcome distribution
    /// `repetitions` times. Each repetition is an independent sample, so
    /// the returned result holds exactly `repetitions` outcomes, each one
    /// bit per measured qubit.
    ///
    /// # Arguments
    /// * `circuit` - The `Circuit` definition to simulate.
    /// * `repetitions` - Number of independent outcome samples to record.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the ordered outcome sequence. A
    ///   circuit without a measurement yields a result with no outcomes.
    /// * `Err(QnoiseError)` for structurally invalid circuits (measurement
    ///   not terminal, repeated measurement, no targets) or statevector
    ///   validation failures.
    pub fn run(
        &self,
        circuit: &Circuit,
        repetitions: usize,
    ) -> Result<SimulationResult, QnoiseError> {
        // Handle empty circuit case
        if circuit.is_empty() {
            return Ok(SimulationResult::unmeasured());
        }

        let mut engine = SimulationEngine::init(circuit.qubits())?;

        // Apply every operation before the terminal measurement; reject
        // layouts the sampling model cannot represent.
        let mut measurement: Option<(&[crate::core::QubitId], &str)> = None;
        for op in circuit.operations() {
            if measurement.is_some() {
                return Err(QnoiseError::InvalidCircuit {
                    message: "operations after the measurement are not supported".to_string(),
                });
            }
            match op {
                Operation::Measure { targets, key } => {
                    if targets.is_empty() {
                        return Err(QnoiseError::InvalidCircuit {
                            message: "measurement requires at least one target".to_string(),
                        });
                    }
                    measurement = Some((targets, key));
                }
                _ => engine.apply_operation(op)?,
            }
        }

        let Some((targets, key)) = measurement else {
            return Ok(SimulationResult::unmeasured());
        };

        // Rotations are unitary; anything beyond float rounding here is an
        // engine defect, surfaced before it can skew the sampling.
        validation::check_normalization(engine.state(), None)?;

        let mut rng = self.sampling_rng();
        let outcomes = engine.sample(targets, repetitions, &mut rng)?;
        Ok(SimulationResult::new(key.to_string(), targets.len(), outcomes))
    }

    fn sampling_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::rng().random::<u64>()),
        }
    }
}
