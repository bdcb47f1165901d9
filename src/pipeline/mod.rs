// src/pipeline/mod.rs

//! The end-to-end pipeline: draw raw data, map it to rotation angles,
//! build the encoded circuit, sample it, and tally the outcomes.
//!
//! All parameters travel through `PipelineConfig` into a single entry
//! function; the pipeline keeps no module-level state.

use crate::analysis::OutcomeTally;
use crate::circuits::{Circuit, data_circuit};
use crate::core::QnoiseError;
use crate::encoding::{DataSource, UniformSource, to_angles};
use crate::simulation::{SimulationResult, Simulator};

/// Default number of qubits (one per data element).
pub const DEFAULT_QUBITS: usize = 10;
/// Default number of sampled repetitions.
pub const DEFAULT_REPETITIONS: usize = 100;
/// Measurement key used by the pipeline's circuit.
pub const RESULT_KEY: &str = "result";

/// Parameters of a pipeline run.
///
/// The defaults reproduce the canonical demo: 10 qubits, 100 repetitions,
/// raw data uniform in `[0, 1)`, fresh entropy. Setting `seed` makes the
/// whole run reproducible; the two data draws and the outcome sampling
/// each derive their own stream from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Number of data elements and therefore qubits (N).
    pub qubits: usize,
    /// Number of independent outcome samples (R).
    pub repetitions: usize,
    /// Lower bound of the raw data range (inclusive).
    pub low: f64,
    /// Upper bound of the raw data range (exclusive).
    pub high: f64,
    /// Optional seed for a fully reproducible run.
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            qubits: DEFAULT_QUBITS,
            repetitions: DEFAULT_REPETITIONS,
            low: 0.0,
            high: 1.0,
            seed: None,
        }
    }
}

/// Everything a pipeline run produced, stage by stage.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Angles encoded as X rotations, one per qubit.
    pub angles_x: Vec<f64>,
    /// Angles encoded as Y rotations, one per qubit.
    pub angles_y: Vec<f64>,
    /// The encoded circuit (2N rotations plus one measurement).
    pub circuit: Circuit,
    /// The ordered outcome sequence of the sampled run.
    pub result: SimulationResult,
    /// First-seen-ordered frequency tally of the outcomes.
    pub tally: OutcomeTally,
}

/// Runs the full pipeline with uniform random data sources.
///
/// # Errors
/// Propagates circuit-construction and simulation errors; a `qubits`
/// count of zero is rejected by the engine.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport, QnoiseError> {
    let (mut source_x, mut source_y, simulator) = match config.seed {
        Some(seed) => (
            UniformSource::with_seed(config.low, config.high, seed),
            UniformSource::with_seed(config.low, config.high, seed.wrapping_add(1)),
            Simulator::with_seed(seed.wrapping_add(2)),
        ),
        None => (
            UniformSource::new(config.low, config.high),
            UniformSource::new(config.low, config.high),
            Simulator::new(),
        ),
    };
    run_with_sources(
        config.qubits,
        config.repetitions,
        &mut source_x,
        &mut source_y,
        &simulator,
    )
}

/// Runs the pipeline with caller-supplied data sources, for deterministic
/// or real-world data instead of the default uniform draws.
pub fn run_with_sources(
    qubits: usize,
    repetitions: usize,
    source_x: &mut dyn DataSource,
    source_y: &mut dyn DataSource,
    simulator: &Simulator,
) -> Result<PipelineReport, QnoiseError> {
    let angles_x = to_angles(&source_x.draw(qubits));
    let angles_y = to_angles(&source_y.draw(qubits));

    let circuit = data_circuit(&angles_x, &angles_y, RESULT_KEY)?;
    let result = simulator.run(&circuit, repetitions)?;
    let tally = OutcomeTally::from_result(&result);

    Ok(PipelineReport {
        angles_x,
        angles_y,
        circuit,
        result,
        tally,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_demo_parameters() {
        let config = PipelineConfig::default();
        assert_eq!(config.qubits, 10);
        assert_eq!(config.repetitions, 100);
        assert_eq!(config.low, 0.0);
        assert_eq!(config.high, 1.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn zero_qubits_is_rejected() {
        let config = PipelineConfig {
            qubits: 0,
            seed: Some(3),
            ..PipelineConfig::default()
        };
        assert!(matches!(
            run(&config),
            Err(QnoiseError::InvalidCircuit { .. })
        ));
    }
}
