//! Fixed-point quantization with first-order error feedback.

use log::debug;

use crate::{Error, Result};

/// Largest supported bit depth. Keeps `2^bits` within `i32`.
pub const MAX_BITS: u32 = 30;

/// Error-feedback quantizer.
///
/// The rounding error of each sample is subtracted from the target of the
/// next one, so the running sum of the output tracks the running sum of the
/// input to within half a step. All outputs are negated, which is the sign
/// convention the renderer expects from the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    bits: u32,
    normalize: bool,
}

impl Quantizer {
    /// With `normalize`, the input is divided by its total excursion
    /// `last - first` before scaling, mapping a step onto exactly one full
    /// scale.
    pub fn new(bits: u32, normalize: bool) -> Result<Self> {
        if bits == 0 || bits > MAX_BITS {
            return Err(Error::configuration(format!(
                "bit depth {bits} outside 1..={MAX_BITS}"
            )));
        }
        Ok(Self { bits, normalize })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Full-scale factor `2^bits`.
    pub fn factor(&self) -> i64 {
        1 << self.bits
    }

    /// Largest magnitude a rounded value may reach, inclusive.
    pub fn limit(&self) -> i64 {
        self.factor()
    }

    /// Quantizes to integers in units of `2^-bits` full scale.
    pub fn quantize_to_int(&self, x: &[f64]) -> Result<Vec<i32>> {
        let rounded = self.round_all(x)?;
        // Within `limit`, which fits i32 for every accepted bit depth.
        Ok(rounded.into_iter().map(|r| -(r as i32)).collect())
    }

    /// Quantizes and rescales to fractions of full scale.
    pub fn quantize(&self, x: &[f64]) -> Result<Vec<f64>> {
        let factor = self.factor() as f64;
        let rounded = self.round_all(x)?;
        Ok(rounded
            .into_iter()
            .map(|r| r as f64 / factor * -1.0)
            .collect())
    }

    fn correction_factor(&self, x: &[f64]) -> Result<f64> {
        if !self.normalize {
            return Ok(1.0);
        }
        let (first, last) = match (x.first(), x.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Ok(1.0),
        };
        let excursion = last - first;
        if excursion == 0.0 || !excursion.is_finite() {
            return Err(Error::configuration(format!(
                "cannot normalize to an excursion of {excursion}"
            )));
        }
        debug!("normalizing to excursion {}", excursion);
        Ok(excursion)
    }

    fn round_all(&self, x: &[f64]) -> Result<Vec<i64>> {
        let factor = self.factor() as f64;
        let correction = self.correction_factor(x)?;
        let limit = self.limit();

        let (rounded, err) = x.iter().enumerate().try_fold(
            (Vec::with_capacity(x.len()), 0.0),
            |(mut out, err), (index, &sample)| {
                if !sample.is_finite() {
                    return Err(Error::NonFinite { index });
                }
                let (value, err) = quantize_step(err, sample * factor / correction);
                if value < -limit || value > limit {
                    return Err(Error::Range {
                        index,
                        value,
                        limit,
                    });
                }
                out.push(value);
                Ok((out, err))
            },
        )?;

        debug!(
            "quantized {} samples at {} bits, final error {}",
            rounded.len(),
            self.bits,
            err
        );

        Ok(rounded)
    }
}

/// One error-feedback step.
///
/// Subtracts the carried error `err` from `target`, rounds half away from
/// zero and returns the rounded value with the new error. For finite input
/// the returned error never exceeds 0.5 in magnitude.
#[inline]
pub fn quantize_step(err: f64, target: f64) -> (i64, f64) {
    let value = target - err;
    let rounded = value.round();
    (rounded as i64, rounded - value)
}
