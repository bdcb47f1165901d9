//! Example demonstrating the full data-to-keys pipeline: uniform random
//! data is encoded as Rx/Ry rotation angles, the circuit is sampled 100
//! times, and the outcome statistics are rendered as a bar chart.

use qnoise::{PipelineConfig, QnoiseError, pipeline};

fn main() -> Result<(), QnoiseError> {
    println!("--- qnoise Example: Data-Driven Circuit Sampling ---");

    // Defaults: 10 qubits, 100 repetitions, raw data uniform in [0, 1).
    let config = PipelineConfig::default();
    println!(
        "\nParameters: {} qubits, {} repetitions, data range [{}, {})",
        config.qubits, config.repetitions, config.low, config.high
    );

    let report = pipeline::run(&config)?;

    // Print the circuit diagram
    println!("\nQuantum Circuit:");
    println!("{}", report.circuit);

    println!("{}", report.result);

    println!("Histogram of Measurement Outcomes:");
    println!("{}", report.tally.histogram(40));

    // The "keys" are the raw measurement bitstrings in first-seen order;
    // no key derivation or entropy extraction is applied to them.
    println!(
        "Generated keys (first 5): {:?}",
        report.tally.first_distinct(5)
    );

    Ok(())
}
