//! Signal processing stages of the table generator.
//!
//! Data flows prototype -> minimum phase -> fixed lowpass -> integrator ->
//! quantizer. The spectrum analyzer replaces the last two stages in
//! diagnostic mode.

pub mod filter;
pub mod fir;
pub mod integrator;
pub mod min_phase;
pub mod quantizer;
pub mod spectrum;

/// Sample rate the table is designed at, in Hz.
pub const ANALYSIS_RATE: f64 = 2_000_000.0;

/// Number of taps of the windowed-sinc prototype.
pub const PROTOTYPE_TAPS: usize = 1024;

/// Corner frequency of the windowed-sinc prototype in Hz.
pub const PROTOTYPE_CUTOFF_HZ: f64 = 20_000.0;

/// Shape parameter of the Kaiser window.
pub const KAISER_BETA: f64 = 9.0;

/// Zero-padding factor used against cepstral aliasing.
pub const OVERSAMPLING: usize = 8;

/// Lowest spectral magnitude used by the minimum-phase transform, relative
/// to the peak.
pub const MAGNITUDE_FLOOR: f64 = f64::EPSILON;

/// Corner frequency of the fixed RC lowpass in Hz.
pub const RC_CORNER_HZ: f64 = 10_000.0;

/// Samples fed into a filter before its output is used.
pub const WARMUP_ITERATIONS: usize = 10_000;

/// Bit depth of the quantized table.
pub const OUTPUT_BITS: u32 = 16;

/// Transform length of the spectrum diagnostic.
pub const SPECTRUM_LENGTH: usize = 16384;
