//! Generator for fixed-point band-limited step (BLEP) tables.
//!
//! A windowed-sinc lowpass is converted to minimum phase, shaped by a fixed
//! RC lowpass, integrated into a step and quantized with error feedback. The
//! resulting integer table is meant to be baked into a fixed-point renderer
//! that corrects discontinuities of sawtooth and square oscillators.

pub mod dsp;
pub mod error;
pub mod output;
pub mod table;
pub mod utils;

pub use error::{Error, Result};
pub use table::{generate_spectrum, generate_table, BlepTable, TableConfig};
