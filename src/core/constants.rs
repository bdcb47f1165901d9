//! Mathematical constants used across the crate.

/// Angle constants for rotation encoding (`angle = raw * TAU`)
pub mod qnoise_constants {
    /// One full turn, 2π. The default full-scale of the angle mapping.
    pub const TAU: f64 = std::f64::consts::TAU;
    /// Half turn, used for phase angles (`e^(iθ)`)
    pub const PI: f64 = std::f64::consts::PI;
}
