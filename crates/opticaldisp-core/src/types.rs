//! Core types for optical pulse modelling
//!
//! This module defines the fundamental types used throughout the crate:
//! the complex-sample aliases, the physical constants, and the error type
//! shared by the signal container and the dispersion operator.
//!
//! ## Why complex samples?
//!
//! An optical field oscillates at hundreds of THz — far too fast to sample
//! directly. What we model instead is the **complex envelope**: a slowly
//! varying complex amplitude riding on the carrier, capturing both the
//! instantaneous amplitude AND phase of the field.
//!
//! ```text
//!   real field:  E(t) = Re{ A(t) · exp(j·2π·f₀·t) }
//!                          ^^^^
//!                          the complex envelope we store
//! ```

use num_complex::Complex64;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// A floating point sample (for real-valued waveforms)
pub type Sample = f64;

/// Speed of light in vacuum, in metres per second.
///
/// Defined once and used everywhere a physical conversion needs it
/// (carrier frequency, D-to-β₂ conversion).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Result type for signal operations
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors that can occur when constructing or transforming a signal
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignalError {
    #[error("Invalid wavelength: {0} m. Must be a positive finite value")]
    InvalidWavelength(f64),

    #[error("Invalid sample period: {0} s. Must be a positive finite value")]
    InvalidSamplePeriod(f64),

    #[error("Signal must contain at least one sample")]
    EmptySignal,

    #[error("Signal has {0} sample(s); the dispersion transform needs at least 2")]
    TooFewSamples(usize),
}
