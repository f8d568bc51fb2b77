//! Optical Signal Container
//!
//! Binds a time-domain complex envelope to the two physical parameters needed
//! to interpret it in the frequency domain: the carrier wavelength and the
//! sample period. Derived quantities (instantaneous power, mean power,
//! carrier frequency) are computed on demand rather than stored.
//!
//! ## Example
//!
//! ```
//! use opticaldisp_core::optical_signal::OpticalSignal;
//!
//! // 1550 nm carrier, 1 ps sample period, a short rectangular burst
//! let signal = OpticalSignal::from_real(1550e-9, 1e-12, &[0.0, 1.0, 1.0, 0.0]).unwrap();
//!
//! assert_eq!(signal.len(), 4);
//! assert!((signal.mean_power() - 0.5).abs() < 1e-12);
//! // ~193.4 THz
//! assert!((signal.carrier_frequency() - 1.934e14).abs() < 1e12);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Complex, SignalError, SignalResult, SPEED_OF_LIGHT};

/// A uniformly sampled complex envelope of an optical field.
///
/// The sample buffer is private: the constructor is the only place the
/// non-empty invariant is checked, and nothing afterwards can break it.
/// Transforms such as [`apply_dispersion`](crate::dispersion::apply_dispersion)
/// borrow the signal immutably and return a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalSignal {
    /// Carrier wavelength in metres (e.g. 1550 × 10⁻⁹).
    wavelength: f64,
    /// Sample period in seconds.
    ts: f64,
    /// Complex amplitude envelope in time.
    et: Vec<Complex>,
}

impl OpticalSignal {
    /// Create a signal from complex envelope samples.
    ///
    /// `wavelength` is the carrier wavelength in metres, `ts` the sample
    /// period in seconds. Both must be positive and finite; `et` must be
    /// non-empty. The buffer is taken by value, so the caller keeps no alias
    /// into the stored samples.
    pub fn new(wavelength: f64, ts: f64, et: Vec<Complex>) -> SignalResult<Self> {
        if !wavelength.is_finite() || wavelength <= 0.0 {
            return Err(SignalError::InvalidWavelength(wavelength));
        }
        if !ts.is_finite() || ts <= 0.0 {
            return Err(SignalError::InvalidSamplePeriod(ts));
        }
        if et.is_empty() {
            return Err(SignalError::EmptySignal);
        }

        Ok(Self { wavelength, ts, et })
    }

    /// Create a signal from real-valued samples, promoting them to complex
    /// with zero imaginary part.
    ///
    /// This is the usual entry point for waveforms produced by the generators
    /// in [`waveforms`](crate::waveforms).
    pub fn from_real(wavelength: f64, ts: f64, samples: &[f64]) -> SignalResult<Self> {
        let et = samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
        Self::new(wavelength, ts, et)
    }

    /// Carrier wavelength in metres.
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Sample period in seconds.
    pub fn sample_period(&self) -> f64 {
        self.ts
    }

    /// Read-only view of the complex envelope samples.
    pub fn samples(&self) -> &[Complex] {
        &self.et
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.et.len()
    }

    /// Always false: construction rejects empty sample buffers.
    pub fn is_empty(&self) -> bool {
        self.et.is_empty()
    }

    /// Instantaneous power |E(t)|² per sample.
    pub fn instantaneous_power(&self) -> Vec<f64> {
        self.et.iter().map(|e| e.norm_sqr()).collect()
    }

    /// Mean power over the whole sample window.
    pub fn mean_power(&self) -> f64 {
        let total: f64 = self.et.iter().map(|e| e.norm_sqr()).sum();
        total / self.et.len() as f64
    }

    /// Carrier frequency c / λ in Hz.
    pub fn carrier_frequency(&self) -> f64 {
        SPEED_OF_LIGHT / self.wavelength
    }
}
