// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qnoise::core::TypeName`
pub use error::{QnoiseError, QubitId};
pub use state::StateVector;

pub mod constants;
pub use constants::qnoise_constants::{PI, TAU}; // Re-export
