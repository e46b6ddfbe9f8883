//! Complex discrete Fourier transform of a fixed length.

use std::fmt;
use std::sync::Arc;

use rustfft::num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

/// Forward and inverse transforms planned once for one length.
///
/// The inverse transform is normalized by `1 / len`, so that
/// `inverse(forward(x)) == x` up to rounding.
pub struct FftPair {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex64>,
}

impl fmt::Debug for FftPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftPair").field("len", &self.len).finish()
    }
}

impl FftPair {
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);
        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());

        Self {
            len,
            forward,
            inverse,
            scratch: vec![Complex64::new(0.0, 0.0); scratch_len],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-place forward transform. `buf` must hold exactly `len` values.
    pub fn forward(&mut self, buf: &mut [Complex64]) {
        debug_assert_eq!(buf.len(), self.len);
        self.forward.process_with_scratch(buf, &mut self.scratch);
    }

    /// In-place normalized inverse transform. `buf` must hold exactly `len` values.
    pub fn inverse(&mut self, buf: &mut [Complex64]) {
        debug_assert_eq!(buf.len(), self.len);
        self.inverse.process_with_scratch(buf, &mut self.scratch);
        let scale = 1.0 / self.len as f64;
        for value in buf.iter_mut() {
            *value *= scale;
        }
    }

    /// Forward transform of a real signal, zero-padded or truncated to `len`.
    pub fn forward_real(&mut self, x: &[f64]) -> Vec<Complex64> {
        let mut buf = zero_padded(x, self.len);
        self.forward(&mut buf);
        buf
    }
}

/// Copies a real signal into a complex buffer of `len` values, padding with zeros.
pub fn zero_padded(x: &[f64], len: usize) -> Vec<Complex64> {
    let mut buf = vec![Complex64::new(0.0, 0.0); len];
    for (dst, src) in buf.iter_mut().zip(x.iter().copied()) {
        *dst = Complex64::new(src, 0.0);
    }
    buf
}
