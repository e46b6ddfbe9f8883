//! Windowed-sinc lowpass prototype.

use log::debug;
use sci_rs::signal::filter::design::{firwin_dyn, FilterBandType};
use sci_rs::signal::windows::{get_window, GetWindowBuilder};

use crate::{Error, Result};

/// Linear-phase FIR lowpass designed by the window method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowpassPrototype {
    /// Number of coefficients.
    pub taps: usize,
    /// Corner frequency in Hz.
    pub cutoff_hz: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Kaiser window shape parameter.
    pub kaiser_beta: f64,
}

impl LowpassPrototype {
    pub fn new(taps: usize, cutoff_hz: f64, sample_rate: f64, kaiser_beta: f64) -> Self {
        Self {
            taps,
            cutoff_hz,
            sample_rate,
            kaiser_beta,
        }
    }

    /// Computes the coefficients, scaled to unity gain at DC.
    pub fn design(&self) -> Result<Vec<f64>> {
        if self.taps == 0 {
            return Err(Error::configuration("prototype needs at least one tap"));
        }
        if !(self.sample_rate > 0.0) {
            return Err(Error::configuration("sample rate must be positive"));
        }
        let nyquist = self.sample_rate / 2.0;
        if !(self.cutoff_hz > 0.0 && self.cutoff_hz < nyquist) {
            return Err(Error::configuration(format!(
                "cutoff {} Hz outside (0, {}) Hz",
                self.cutoff_hz, nyquist
            )));
        }
        if !(self.kaiser_beta >= 0.0) {
            return Err(Error::configuration("kaiser beta must not be negative"));
        }

        // Symmetric window, as the window method requires.
        let window = get_window(
            GetWindowBuilder::Kaiser {
                beta: self.kaiser_beta,
            },
            self.taps,
            Some(false),
        );
        let h = firwin_dyn(
            self.taps,
            &[self.cutoff_hz],
            None,
            Some(&window),
            &FilterBandType::Lowpass,
            Some(true),
            Some(self.sample_rate),
        )
        .map_err(|err| Error::configuration(format!("prototype design failed: {err}")))?;

        debug!(
            "lowpass prototype: {} taps, cutoff {} Hz at {} Hz, beta {}",
            self.taps, self.cutoff_hz, self.sample_rate, self.kaiser_beta
        );

        Ok(h)
    }
}
