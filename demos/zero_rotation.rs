//! Example demonstrating the degenerate encoding: when every raw sample
//! is zero, every rotation angle is zero, the circuit applies no net
//! rotation, and all repetitions sample the all-zero bitstring.

use qnoise::{DataSource, QnoiseError, Simulator, pipeline};

/// A data source that always reports zero, standing in for a user-supplied
/// deterministic source.
struct ZeroSource;

impl DataSource for ZeroSource {
    fn draw(&mut self, count: usize) -> Vec<f64> {
        vec![0.0; count]
    }
}

fn main() -> Result<(), QnoiseError> {
    println!("--- qnoise Example: Zero-Rotation Circuit ---");

    let simulator = Simulator::new();
    let report = pipeline::run_with_sources(2, 4, &mut ZeroSource, &mut ZeroSource, &simulator)?;

    println!("\nQuantum Circuit:");
    println!("{}", report.circuit);

    println!("Angles (X): {:?}", report.angles_x);
    println!("Angles (Y): {:?}", report.angles_y);

    println!("\nHistogram of Measurement Outcomes:");
    println!("{}", report.tally.histogram(40));

    // Every repetition resolves to "00"; the tally holds a single key.
    println!("Outcome tally total: {}", report.tally.total());
    println!("Distinct outcomes:   {:?}", report.tally.keys());

    Ok(())
}
