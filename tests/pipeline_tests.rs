// tests/pipeline_tests.rs

use qnoise::core::TAU;
use qnoise::{DataSource, PipelineConfig, QnoiseError, Simulator, pipeline};

/// Deterministic stand-in for a user-supplied data source.
struct ConstantSource(f64);

impl DataSource for ConstantSource {
    fn draw(&mut self, count: usize) -> Vec<f64> {
        vec![self.0; count]
    }
}

#[test]
fn test_report_shapes_follow_config() -> Result<(), QnoiseError> {
    let config = PipelineConfig {
        qubits: 4,
        repetitions: 30,
        seed: Some(8),
        ..PipelineConfig::default()
    };
    let report = pipeline::run(&config)?;

    assert_eq!(report.angles_x.len(), 4);
    assert_eq!(report.angles_y.len(), 4);
    assert_eq!(report.circuit.rotation_count(), 8);
    assert_eq!(report.circuit.measurement_count(), 1);
    assert_eq!(report.result.width(), 4);
    assert_eq!(report.result.repetitions(), 30);
    assert_eq!(report.result.key(), pipeline::RESULT_KEY);
    Ok(())
}

#[test]
fn test_tally_sum_invariant() -> Result<(), QnoiseError> {
    let config = PipelineConfig {
        qubits: 3,
        repetitions: 100,
        seed: Some(21),
        ..PipelineConfig::default()
    };
    let report = pipeline::run(&config)?;
    assert_eq!(report.tally.total(), 100);
    Ok(())
}

#[test]
fn test_seeded_pipeline_is_reproducible() -> Result<(), QnoiseError> {
    let config = PipelineConfig {
        qubits: 5,
        repetitions: 40,
        seed: Some(1234),
        ..PipelineConfig::default()
    };

    let first = pipeline::run(&config)?;
    let second = pipeline::run(&config)?;

    assert_eq!(first.angles_x, second.angles_x);
    assert_eq!(first.angles_y, second.angles_y);
    assert_eq!(first.circuit, second.circuit);
    assert_eq!(first.result, second.result);
    assert_eq!(first.tally, second.tally);
    Ok(())
}

#[test]
fn test_different_seeds_draw_different_angles() -> Result<(), QnoiseError> {
    let base = PipelineConfig {
        qubits: 6,
        repetitions: 10,
        ..PipelineConfig::default()
    };
    let first = pipeline::run(&PipelineConfig {
        seed: Some(1),
        ..base.clone()
    })?;
    let second = pipeline::run(&PipelineConfig {
        seed: Some(2),
        ..base
    })?;

    assert_ne!(first.angles_x, second.angles_x);
    Ok(())
}

#[test]
fn test_angles_are_raw_times_tau() -> Result<(), QnoiseError> {
    let simulator = Simulator::with_seed(0);
    let report = pipeline::run_with_sources(
        3,
        5,
        &mut ConstantSource(0.25),
        &mut ConstantSource(0.5),
        &simulator,
    )?;

    assert!(report.angles_x.iter().all(|a| *a == 0.25 * TAU));
    assert!(report.angles_y.iter().all(|a| *a == 0.5 * TAU));
    Ok(())
}

#[test]
fn test_constant_zero_source_yields_single_outcome() -> Result<(), QnoiseError> {
    let simulator = Simulator::with_seed(0);
    let report = pipeline::run_with_sources(
        3,
        12,
        &mut ConstantSource(0.0),
        &mut ConstantSource(0.0),
        &simulator,
    )?;

    assert_eq!(report.tally.keys(), &["000"]);
    assert_eq!(report.tally.count("000"), 12);
    Ok(())
}

#[test]
fn test_first_distinct_is_bounded() -> Result<(), QnoiseError> {
    let config = PipelineConfig {
        qubits: 8,
        repetitions: 100,
        seed: Some(77),
        ..PipelineConfig::default()
    };
    let report = pipeline::run(&config)?;

    let keys = report.tally.first_distinct(5);
    assert!(keys.len() <= 5);
    // First-seen order: the listed keys are the first distinct outcomes
    // of the run, in order.
    let mut seen = Vec::new();
    for bitstring in report.result.bitstrings() {
        if !seen.contains(&bitstring) {
            seen.push(bitstring);
        }
        if seen.len() == keys.len() {
            break;
        }
    }
    assert_eq!(keys, &seen[..]);
    Ok(())
}
