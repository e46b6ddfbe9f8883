//! Second-order recursive filter section, the fixed RC lowpass and the
//! steady-state filter runner.

use core::f64::consts::PI;

use log::{debug, info};
use num_traits::float::Float;

use crate::{Error, Result};

/// Feed-forward and feedback coefficients of a second-order section.
///
/// The feedback coefficients are stored with the sign convention
/// `y0 = b0 x0 + b1 x1 + b2 x2 - a1 y1 - a2 y2`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coefficients<T> {
    pub b0: T,
    pub b1: T,
    pub b2: T,
    pub a1: T,
    pub a2: T,
}

/// Direct form I biquad. First-order sections set `b2` and `a2` to zero.
#[derive(Debug, Default, Clone)]
pub struct Biquad<T = f64> {
    coefficients: Coefficients<T>,
    x1: T,
    x2: T,
    y1: T,
    y2: T,
}

impl<T: Float> Biquad<T> {
    pub fn new(b0: T, b1: T, b2: T, a1: T, a2: T) -> Self {
        Self::from_coefficients(Coefficients { b0, b1, b2, a1, a2 })
    }

    pub fn from_coefficients(coefficients: Coefficients<T>) -> Self {
        let zero = T::zero();
        Self {
            coefficients,
            x1: zero,
            x2: zero,
            y1: zero,
            y2: zero,
        }
    }

    /// Single-pole section.
    pub fn first_order(b0: T, b1: T, a1: T) -> Self {
        Self::new(b0, b1, T::zero(), a1, T::zero())
    }

    /// Section passing its input through unchanged.
    pub fn identity() -> Self {
        Self::first_order(T::one(), T::zero(), T::zero())
    }

    pub fn coefficients(&self) -> &Coefficients<T> {
        &self.coefficients
    }

    /// Clears the history, keeping the coefficients.
    pub fn reset(&mut self) {
        let zero = T::zero();
        self.x1 = zero;
        self.x2 = zero;
        self.y1 = zero;
        self.y2 = zero;
    }

    #[inline]
    pub fn process(&mut self, x0: T) -> T {
        let c = &self.coefficients;
        let y0 = c.b0 * x0 + c.b1 * self.x1 + c.b2 * self.x2 - c.a1 * self.y1 - c.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = x0;
        self.y2 = self.y1;
        self.y1 = y0;

        y0
    }

    #[inline]
    pub fn process_buffer(&mut self, in_out: &mut [T]) {
        for sample in in_out.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

/// Single-pole section approximating an analog RC lowpass.
///
/// With `w = 2 pi f / fs` and `term = 1 + 1/w` the section is
/// `b0 = 1/term`, `a1 = 1/term - 1`, which has unity gain at DC.
pub fn rc_lowpass(sample_rate: f64, corner_hz: f64) -> Result<Biquad<f64>> {
    if !(corner_hz > 0.0) {
        return Err(Error::configuration(format!(
            "corner frequency must be positive, got {corner_hz} Hz"
        )));
    }
    if !(sample_rate > 0.0) {
        return Err(Error::configuration(format!(
            "sample rate must be positive, got {sample_rate} Hz"
        )));
    }

    let omega = 2.0 * PI * corner_hz / sample_rate;
    let term = 1.0 + 1.0 / omega;
    let filter = Biquad::first_order(1.0 / term, 0.0, -1.0 + 1.0 / term);

    debug!(
        "rc lowpass {} Hz at {} Hz: {:?}",
        corner_hz,
        sample_rate,
        filter.coefficients()
    );

    Ok(filter)
}

/// Output of [`run_filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRun {
    /// Filtered signal, same length as the input.
    pub output: Vec<f64>,
    /// Steady-state tracking error after the last sample, linear.
    pub residual: f64,
}

/// Filters `signal` after settling the filter on its first sample.
///
/// The filter is reset and fed the first sample `warmup` times so that the
/// start-up transient has died out before the signal begins. The residual is
/// the difference between the last input sample and the output produced by
/// feeding that sample once more.
pub fn run_filter(filter: &mut Biquad<f64>, signal: &[f64], warmup: usize) -> Result<FilterRun> {
    let (&first, &last) = match (signal.first(), signal.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(Error::EmptySignal),
    };

    filter.reset();
    for _ in 0..warmup {
        filter.process(first);
    }

    let output: Vec<f64> = signal.iter().map(|&x| filter.process(x)).collect();
    let residual = (last - filter.process(last)).abs();

    info!(
        "filtered {} samples after {} warm-up iterations, residual {:e}",
        signal.len(),
        warmup,
        residual
    );

    Ok(FilterRun { output, residual })
}
