// src/validation/mod.rs

//! Consistency checks for `StateVector` values.

use crate::core::{QnoiseError, StateVector};

// Default tolerance value (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the statevector is normalized (sum of squared amplitudes
/// ≈ 1.0). Rotation and phase operations are unitary, so the engine's
/// evolved state must pass this up to floating-point rounding.
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QnoiseError::StateError)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QnoiseError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(QnoiseError::StateError {
            message: format!(
                "statevector normalization failed: Σ|c|^2 = {} (deviation > {})",
                norm_sqr, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
