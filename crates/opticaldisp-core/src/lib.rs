//! # Optical Dispersion Core
//!
//! Core numerics for modelling linear chromatic dispersion of optical
//! pulses. The crate provides:
//!
//! - **Pulse generation**: the canonical Gaussian, Lorentzian, sech, and
//!   square test pulses
//! - **Signal model**: [`OpticalSignal`], a complex envelope bound to its
//!   carrier wavelength and sample period
//! - **Dispersion**: [`apply_dispersion`], a one-step frequency-domain
//!   group-velocity-dispersion filter
//!
//! ## Signal Flow
//!
//! ```text
//! time axis → waveform → OpticalSignal → apply_dispersion(D₁) → analysis
//!                                  \                     ⋮
//!                                   `→ apply_dispersion(Dₙ) → analysis
//! ```
//!
//! Dispersion is a pure transform: the input signal is never modified, and
//! each call returns a fresh signal, so sweeping a dispersion grid (even from
//! several threads) needs no copies or locks on the caller's side.
//!
//! ## Example
//!
//! ```
//! use opticaldisp_core::{apply_dispersion, OpticalSignal};
//! use opticaldisp_core::waveforms::{generate_gaussian, time_axis};
//!
//! // 1 ps Gaussian pulse at 1550 nm, 64 samples per pulse width
//! let pulsewidth = 1e-12;
//! let ts = pulsewidth / 64.0;
//! let t = time_axis(4096, ts);
//! let pulse = generate_gaussian(&t, pulsewidth);
//! let signal = OpticalSignal::from_real(1550e-9, ts, &pulse).unwrap();
//!
//! // Sweep accumulated dispersion from 0 to 2 ps/nm
//! for step in 0..5 {
//!     let d = 0.5 * step as f64;
//!     let dispersed = apply_dispersion(&signal, d).unwrap();
//!     let peak = dispersed
//!         .instantaneous_power()
//!         .into_iter()
//!         .fold(f64::MIN, f64::max);
//!     println!("D = {d} ps/nm -> peak power {peak:.4}");
//! }
//! ```

pub mod dispersion;
pub mod fft_utils;
pub mod optical_signal;
pub mod types;
pub mod waveforms;

pub use dispersion::{apply_dispersion, transfer_function};
pub use optical_signal::OpticalSignal;
pub use types::{Complex, Sample, SignalError, SignalResult, SPEED_OF_LIGHT};
