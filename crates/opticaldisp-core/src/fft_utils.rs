//! FFT utilities for frequency-domain pulse filtering
//!
//! Thin wrapper around `rustfft` providing the transform pair and the
//! angular-frequency bin vector used by the dispersion operator.
//!
//! ## Normalization convention
//!
//! `rustfft` leaves both transform directions unnormalized. This wrapper
//! scales the **inverse** transform by `1/N` and leaves the forward transform
//! untouched, so `fft(ifft(x)) == x` exactly (up to floating-point round-off)
//! and the conventions match NumPy's `fft`/`ifft` pair.
//!
//! ## Bin ordering
//!
//! Spectra come out in native FFT order: non-negative frequencies first,
//! then the negative mirror. [`angular_frequency_bins`] produces the matching
//! Ω vector and is deliberately never fft-shifted — an all-pass phase filter
//! evaluated on a shifted grid would disperse the wrong bins.
//!
//! ```text
//! index:  0    1    2   ...  N/2-1 | N/2      ...  N-2   N-1
//! Ω/Δ:    0    1    2   ...  N/2-1 | -N/2     ...  -2    -1
//! ```

use std::fmt;
use std::sync::Arc;

use rustfft::{Fft, FftPlanner};

use crate::types::Complex;

/// Planned forward/inverse FFT pair of a fixed size.
pub struct FftProcessor {
    size: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex>,
}

impl fmt::Debug for FftProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftProcessor")
            .field("size", &self.size)
            .finish()
    }
}

impl FftProcessor {
    /// Plan a transform pair for `size`-point buffers.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(size);
        let inverse = planner.plan_fft_inverse(size);
        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());
        let scratch = vec![Complex::new(0.0, 0.0); scratch_len];

        Self {
            size,
            forward,
            inverse,
            scratch,
        }
    }

    /// The planned transform size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Forward FFT in place. Unnormalized.
    pub fn fft_inplace(&mut self, buffer: &mut [Complex]) {
        assert_eq!(buffer.len(), self.size);
        self.forward.process_with_scratch(buffer, &mut self.scratch);
    }

    /// Inverse FFT in place, scaled by `1/size`.
    pub fn ifft_inplace(&mut self, buffer: &mut [Complex]) {
        assert_eq!(buffer.len(), self.size);
        self.inverse.process_with_scratch(buffer, &mut self.scratch);

        let scale = 1.0 / self.size as f64;
        for sample in buffer.iter_mut() {
            *sample *= scale;
        }
    }

    /// Forward FFT of `input`, returning a new buffer.
    pub fn fft(&mut self, input: &[Complex]) -> Vec<Complex> {
        let mut buffer = input.to_vec();
        self.fft_inplace(&mut buffer);
        buffer
    }

    /// Inverse FFT of `input`, returning a new buffer. Scaled by `1/size`.
    pub fn ifft(&mut self, input: &[Complex]) -> Vec<Complex> {
        let mut buffer = input.to_vec();
        self.ifft_inplace(&mut buffer);
        buffer
    }
}

/// Angular-frequency bin vector Ω for an `n`-point transform of samples
/// spaced `ts` seconds apart, in native FFT order.
///
/// `Ω[k] = k·Δ` for `k < n/2` and `Ω[k] = (k − n)·Δ` for `k >= n/2`, with
/// `Δ = 2π / (n·ts)`. Integer floor division for `n/2`, so odd lengths get
/// one more non-negative bin than negative ones.
pub fn angular_frequency_bins(n: usize, ts: f64) -> Vec<f64> {
    let delta = 2.0 * std::f64::consts::PI / (n as f64 * ts);
    let half = n / 2;
    (0..n)
        .map(|k| {
            if k < half {
                k as f64 * delta
            } else {
                (k as f64 - n as f64) * delta
            }
        })
        .collect()
}
