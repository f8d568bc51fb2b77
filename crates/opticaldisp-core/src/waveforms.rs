//! Canonical Pulse Waveforms
//!
//! Generators for the standard test-pulse shapes of optical propagation
//! studies: Gaussian, Lorentzian, hyperbolic secant, and square. Each takes
//! a time axis in seconds and a pulse width in seconds — the full width at
//! half maximum of the **intensity** |E|², not of the amplitude — and
//! returns unit-peak real samples, ready for
//! [`OpticalSignal::from_real`](crate::optical_signal::OpticalSignal::from_real).
//!
//! ```text
//!  1 ┤     _‾_            Gaussian: fastest decaying tails
//!    │    / ¦ \           sech:     soliton shape, exponential tails
//!    │   /  ¦  \          Lorentzian: slowest, ∝ 1/t² tails
//!    │ _/   ¦   \_
//!  0 ┤´     ¦     `
//!    └──────┴──────> t
//!          FWHM
//! ```
//!
//! The width-to-τ factors (2·√ln 2, 1.287, 1.7627) convert the intensity
//! FWHM each caller specifies into the natural time constant of each shape;
//! at t = ±pulsewidth/2 every shape has amplitude 1/√2.

use crate::types::Sample;

/// Time axis of `n` points spaced `ts` seconds apart, centered on zero.
///
/// Point `i` sits at `(i+1)·ts − n·ts/2`; for even `n` the sample at
/// `i = n/2 − 1` lands exactly on t = 0.
pub fn time_axis(n: usize, ts: f64) -> Vec<Sample> {
    let half_span = n as f64 * ts / 2.0;
    (0..n).map(|i| (i + 1) as f64 * ts - half_span).collect()
}

/// Gaussian pulse `exp(−t²/2τ²)` with `τ = pulsewidth / (2·√ln 2)`.
pub fn generate_gaussian(t: &[Sample], pulsewidth: f64) -> Vec<Sample> {
    let tau = pulsewidth / (2.0 * (2.0_f64.ln()).sqrt());
    t.iter()
        .map(|&ti| (-ti * ti / (2.0 * tau * tau)).exp())
        .collect()
}

/// Lorentzian pulse `1 / (1 + (t/τ)²)` with `τ = pulsewidth / 1.287`.
pub fn generate_lorentzian(t: &[Sample], pulsewidth: f64) -> Vec<Sample> {
    let tau = pulsewidth / 1.287;
    t.iter()
        .map(|&ti| {
            let x = ti / tau;
            1.0 / (1.0 + x * x)
        })
        .collect()
}

/// Hyperbolic-secant pulse `sech(t/τ)` with `τ = pulsewidth / 1.7627`.
pub fn generate_sech(t: &[Sample], pulsewidth: f64) -> Vec<Sample> {
    let tau = pulsewidth / 1.7627;
    t.iter().map(|&ti| 1.0 / (ti / tau).cosh()).collect()
}

/// Square pulse: 1 where `|t| <= pulsewidth/2`, 0 elsewhere.
pub fn generate_square(t: &[Sample], pulsewidth: f64) -> Vec<Sample> {
    t.iter()
        .map(|&ti| if ti.abs() > pulsewidth / 2.0 { 0.0 } else { 1.0 })
        .collect()
}
