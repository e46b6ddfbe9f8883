//! Utility functions shared by the pipeline stages.

pub mod fft;

/// Converts a linear amplitude to decibels.
#[inline]
pub fn lin2db(lin: f64) -> f64 {
    20.0 * lin.log10()
}
