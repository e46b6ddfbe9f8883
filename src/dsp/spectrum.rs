//! Magnitude and phase listing of a signal's spectrum.

use log::debug;

use crate::utils::fft::FftPair;
use crate::utils::lin2db;
use crate::{Error, Result};

/// One bin of the one-sided spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumBin {
    /// Bin center in Hz.
    pub frequency: f64,
    /// Magnitude in dB, `-inf` for an empty bin.
    pub magnitude_db: f64,
    /// `atan2(re, im)` in radians.
    pub phase: f64,
}

/// Analyzes `x` zero-padded to `len` points at `sample_rate` Hz.
///
/// Reports bins `0..len/2`. The phase is `atan2(re, im)`, with the real part
/// as the first argument, which existing plots of these tables rely on.
pub fn analyze(x: &[f64], len: usize, sample_rate: f64) -> Result<Vec<SpectrumBin>> {
    if len == 0 {
        return Err(Error::configuration("analysis length must be positive"));
    }
    if x.len() > len {
        return Err(Error::configuration(format!(
            "signal of {} samples longer than analysis length {}",
            x.len(),
            len
        )));
    }

    let mut fft = FftPair::new(len);
    let spectrum = fft.forward_real(x);
    debug!("spectrum of {} samples over {} points", x.len(), len);

    Ok(spectrum
        .iter()
        .take(len / 2)
        .enumerate()
        .map(|(bin, value)| SpectrumBin {
            frequency: bin as f64 / len as f64 * sample_rate,
            magnitude_db: lin2db(value.norm()),
            phase: value.re.atan2(value.im),
        })
        .collect())
}
