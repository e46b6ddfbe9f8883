//! Minimum-phase conversion of FIR impulse responses via the real cepstrum.

use log::{debug, info};
use rustfft::num_complex::Complex64;

use crate::utils::fft::{zero_padded, FftPair};
use crate::{Error, Result};

/// Converts a real impulse response into its minimum-phase equivalent.
///
/// The input is zero-padded to `len * oversampling` points to keep cepstral
/// aliasing low. The magnitude spectrum is preserved, only the phase
/// changes, and the result is truncated to the input length.
///
/// Fails with [`Error::Domain`] if any bin of the padded spectrum is exactly
/// zero.
pub fn minimum_phase(x: &[f64], oversampling: usize) -> Result<Vec<f64>> {
    minimum_phase_floored(x, oversampling, 0.0)
}

/// Like [`minimum_phase`], but bins below `relative_floor` times the peak
/// magnitude are raised to that level before taking the logarithm.
///
/// Even-length symmetric prototypes have a zero at Nyquist which the
/// transform may or may not resolve to exactly zero. A floor at rounding
/// noise level makes the result independent of that. Only an all-zero
/// spectrum, or a zero bin with a floor of 0, is still a domain error.
pub fn minimum_phase_floored(
    x: &[f64],
    oversampling: usize,
    relative_floor: f64,
) -> Result<Vec<f64>> {
    if x.is_empty() {
        return Err(Error::EmptySignal);
    }
    if oversampling == 0 {
        return Err(Error::configuration("oversampling must be at least 1"));
    }
    if !(relative_floor >= 0.0 && relative_floor < 1.0) {
        return Err(Error::configuration(format!(
            "magnitude floor {relative_floor} outside [0, 1)"
        )));
    }

    let len = x.len() * oversampling;
    let mut fft = FftPair::new(len);

    let spectrum = fft.forward_real(x);
    let peak = spectrum.iter().map(|c| c.norm()).fold(0.0, f64::max);
    let floor = relative_floor * peak;

    // Real cepstrum: ifft(ln|fft(x)|).
    let mut raised = 0;
    let mut cepstrum = Vec::with_capacity(len);
    for (bin, value) in spectrum.iter().enumerate() {
        let mut magnitude = value.norm();
        if magnitude < floor {
            magnitude = floor;
            raised += 1;
        }
        if magnitude == 0.0 {
            return Err(Error::Domain { bin });
        }
        cepstrum.push(Complex64::new(magnitude.ln(), 0.0));
    }
    if raised > 0 {
        info!("raised {raised} of {len} bins to the magnitude floor {floor:e}");
    }
    fft.inverse(&mut cepstrum);

    // The log magnitude is even, so the imaginary part is rounding noise.
    let mut folded: Vec<f64> = cepstrum.iter().map(|c| c.re).collect();
    fold_causal(&mut folded);

    let mut spectrum = zero_padded(&folded, len);
    fft.forward(&mut spectrum);
    for value in spectrum.iter_mut() {
        *value = value.exp();
    }
    fft.inverse(&mut spectrum);

    debug!(
        "minimum phase: {} samples, transform length {}",
        x.len(),
        len
    );

    Ok(spectrum.iter().take(x.len()).map(|c| c.re).collect())
}

/// Folds the anticausal half of a cepstrum onto the causal half.
///
/// Indices `1..len/2` are doubled and `len/2 + 1..len` cleared. Index 0 and
/// the Nyquist index `len/2` are left alone.
pub fn fold_causal(cepstrum: &mut [f64]) {
    let half = cepstrum.len() / 2;
    if half == 0 {
        return;
    }
    for value in cepstrum[1..half].iter_mut() {
        *value *= 2.0;
    }
    for value in cepstrum[half + 1..].iter_mut() {
        *value = 0.0;
    }
}
