//! Chromatic Dispersion Operator
//!
//! Applies second-order (group-velocity) chromatic dispersion to an optical
//! pulse envelope as a single frequency-domain filtering step.
//!
//! ## Physics
//!
//! In a dispersive fiber the group velocity depends on frequency, so the
//! spectral components of a pulse walk apart in time and the pulse broadens.
//! For linear propagation the whole effect is a pure phase filter:
//!
//! ```text
//! H(Ω) = exp( j/2 · β₂L · Ω² )
//! ```
//!
//! where Ω is the angular frequency offset from the carrier and β₂L the
//! accumulated group-velocity-dispersion parameter in s². |H| = 1 at every
//! frequency, so the filter redistributes energy in time but never removes
//! it: peak power drops, mean power is conserved.
//!
//! The operator takes the engineering coefficient D in **ps/nm** (delay per
//! unit wavelength, with any fiber length folded into the value) and converts
//! it internally:
//!
//! ```text
//! β₂L = -λ² / (2π·c) · D·10⁻¹²/10⁻⁹
//! ```
//!
//! Positive D is the normal dispersion regime, negative anomalous, zero the
//! identity.
//!
//! ## Transform direction
//!
//! The envelope is carried to the frequency domain with the **inverse** FFT
//! and back with the **forward** FFT. For this operator the order is part of
//! its definition: the two orderings assign opposite signs to the frequency
//! axis, so swapping them mirrors which spectral components are advanced and
//! which delayed. Downstream waveform comparisons depend on the order used
//! here; do not swap it.
//!
//! ## Example
//!
//! ```
//! use opticaldisp_core::dispersion::apply_dispersion;
//! use opticaldisp_core::optical_signal::OpticalSignal;
//! use opticaldisp_core::waveforms::{generate_gaussian, time_axis};
//!
//! let ts = 1e-12 / 64.0;
//! let t = time_axis(4096, ts);
//! let pulse = generate_gaussian(&t, 1e-12);
//! let signal = OpticalSignal::from_real(1550e-9, ts, &pulse).unwrap();
//!
//! let dispersed = apply_dispersion(&signal, 0.5).unwrap();
//!
//! // All-pass: the energy is still there, just spread out in time
//! assert!((dispersed.mean_power() - signal.mean_power()).abs() < 1e-9);
//! ```

use crate::fft_utils::{angular_frequency_bins, FftProcessor};
use crate::optical_signal::OpticalSignal;
use crate::types::{Complex, SignalError, SignalResult, SPEED_OF_LIGHT};

/// Apply chromatic dispersion of `dispersion` ps/nm to `input`, returning a
/// new signal with the same wavelength and sample period.
///
/// The input is left untouched; each call allocates its own result, so
/// sweeping one signal over many coefficients from several threads is safe.
///
/// # Errors
///
/// [`SignalError::TooFewSamples`] if the signal holds fewer than 2 samples —
/// a shorter transform has no frequency axis to filter on. Every other finite
/// input runs to completion.
pub fn apply_dispersion(input: &OpticalSignal, dispersion: f64) -> SignalResult<OpticalSignal> {
    let n = input.len();
    if n < 2 {
        return Err(SignalError::TooFewSamples(n));
    }

    let h = transfer_function(n, input.sample_period(), input.wavelength(), dispersion);

    let mut fft = FftProcessor::new(n);
    let mut buffer = fft.ifft(input.samples());
    for (sample, filter) in buffer.iter_mut().zip(h.iter()) {
        *sample *= filter;
    }
    fft.fft_inplace(&mut buffer);

    OpticalSignal::new(input.wavelength(), input.sample_period(), buffer)
}

/// The dispersion transfer function H[k] = exp(j/2 · β₂L · Ω[k]²) on the
/// native-order frequency grid of an `n`-point transform.
///
/// Exposed so analysis code and tests can inspect the filter directly.
pub fn transfer_function(n: usize, ts: f64, wavelength: f64, dispersion: f64) -> Vec<Complex> {
    let beta2l = beta2_accumulated(wavelength, dispersion);
    angular_frequency_bins(n, ts)
        .into_iter()
        .map(|omega| (Complex::i() / 2.0 * beta2l * omega * omega).exp())
        .collect()
}

/// Convert D in ps/nm to the accumulated GVD parameter β₂L in s².
///
/// β₂L = -λ²/(2π·c) · D·10⁻¹²/10⁻⁹, λ in metres.
fn beta2_accumulated(wavelength: f64, dispersion: f64) -> f64 {
    -wavelength * wavelength / (2.0 * std::f64::consts::PI * SPEED_OF_LIGHT)
        * (dispersion * 1e-12 / 1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn test_signal(n: usize) -> OpticalSignal {
        let ts = 1e-12 / 64.0;
        let t = crate::waveforms::time_axis(n, ts);
        let pulse = crate::waveforms::generate_gaussian(&t, 1e-12);
        OpticalSignal::from_real(1550e-9, ts, &pulse).unwrap()
    }

    // -- β₂ conversion -----------------------------------------------------

    #[test]
    fn test_beta2_conversion_sign_and_magnitude() {
        // At 1550 nm, D = 1 ps/nm gives β₂L = -λ²/(2πc)·1e-3 ≈ -1.2756e-24 s²
        let b = beta2_accumulated(1550e-9, 1.0);
        assert!(b < 0.0);
        assert!(approx_eq(b, -1.2756e-24, 1e-27), "β₂L = {b}");
        // Linear in D, sign flips with the regime
        assert!(approx_eq(beta2_accumulated(1550e-9, -2.0), -2.0 * b, 1e-27));
    }

    // -- Transfer function -------------------------------------------------

    #[test]
    fn test_transfer_function_is_all_pass() {
        let h = transfer_function(256, 1e-12, 1550e-9, 17.0);
        for (k, bin) in h.iter().enumerate() {
            assert!(approx_eq(bin.norm(), 1.0, 1e-12), "|H[{k}]| = {}", bin.norm());
        }
    }

    #[test]
    fn test_transfer_function_dc_bin_is_unity() {
        let h = transfer_function(64, 1e-12, 1550e-9, 5.0);
        assert!((h[0] - Complex::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_transfer_function_zero_dispersion_is_identity() {
        let h = transfer_function(64, 1e-12, 1550e-9, 0.0);
        for bin in &h {
            assert!((bin - Complex::new(1.0, 0.0)).norm() < 1e-12);
        }
    }

    #[test]
    fn test_transfer_function_conjugate_under_sign_flip() {
        let h_pos = transfer_function(32, 1e-12, 1550e-9, 0.8);
        let h_neg = transfer_function(32, 1e-12, 1550e-9, -0.8);
        for (p, q) in h_pos.iter().zip(h_neg.iter()) {
            assert!((p.conj() - q).norm() < 1e-12);
        }
    }

    // -- Operator ----------------------------------------------------------

    #[test]
    fn test_identity_at_zero_dispersion() {
        let sig = test_signal(1024);
        let out = apply_dispersion(&sig, 0.0).unwrap();
        for (a, b) in sig.samples().iter().zip(out.samples().iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_parameters_carried_over() {
        let sig = test_signal(256);
        let out = apply_dispersion(&sig, 1.5).unwrap();
        assert_eq!(out.wavelength(), sig.wavelength());
        assert_eq!(out.sample_period(), sig.sample_period());
        assert_eq!(out.len(), sig.len());
    }

    #[test]
    fn test_mean_power_conserved() {
        let sig = test_signal(1024);
        for d in [0.25, 1.0, 5.0, -3.0] {
            let out = apply_dispersion(&sig, d).unwrap();
            assert!(
                approx_eq(out.mean_power(), sig.mean_power(), 1e-12),
                "mean power drifted at D = {d}"
            );
        }
    }

    #[test]
    fn test_rejects_degenerate_length() {
        let sig = OpticalSignal::from_real(1550e-9, 1e-12, &[1.0]).unwrap();
        assert_eq!(apply_dispersion(&sig, 1.0), Err(SignalError::TooFewSamples(1)));
    }

    #[test]
    fn test_odd_length_supported() {
        let ts = 1e-12 / 64.0;
        let t = crate::waveforms::time_axis(257, ts);
        let pulse = crate::waveforms::generate_sech(&t, 1e-12);
        let sig = OpticalSignal::from_real(1550e-9, ts, &pulse).unwrap();
        let out = apply_dispersion(&sig, 0.5).unwrap();
        assert_eq!(out.len(), 257);
        assert!(approx_eq(out.mean_power(), sig.mean_power(), 1e-12));
    }
}
