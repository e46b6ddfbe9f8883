//! The complete table generation pipeline.

use log::{info, warn};

use crate::dsp::filter::{rc_lowpass, run_filter, FilterRun};
use crate::dsp::fir::LowpassPrototype;
use crate::dsp::integrator::integrate;
use crate::dsp::min_phase::minimum_phase_floored;
use crate::dsp::quantizer::Quantizer;
use crate::dsp::spectrum::{analyze, SpectrumBin};
use crate::dsp::{
    ANALYSIS_RATE, KAISER_BETA, MAGNITUDE_FLOOR, OUTPUT_BITS, OVERSAMPLING, PROTOTYPE_CUTOFF_HZ,
    PROTOTYPE_TAPS, RC_CORNER_HZ, SPECTRUM_LENGTH, WARMUP_ITERATIONS,
};
use crate::utils::lin2db;
use crate::Result;

/// Design parameters of a table. [`Default`] reproduces the reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub prototype: LowpassPrototype,
    pub oversampling: usize,
    pub magnitude_floor: f64,
    pub rc_corner_hz: f64,
    pub warmup: usize,
    pub bits: u32,
    pub spectrum_length: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            prototype: LowpassPrototype::new(
                PROTOTYPE_TAPS,
                PROTOTYPE_CUTOFF_HZ,
                ANALYSIS_RATE,
                KAISER_BETA,
            ),
            oversampling: OVERSAMPLING,
            magnitude_floor: MAGNITUDE_FLOOR,
            rc_corner_hz: RC_CORNER_HZ,
            warmup: WARMUP_ITERATIONS,
            bits: OUTPUT_BITS,
            spectrum_length: SPECTRUM_LENGTH,
        }
    }
}

impl TableConfig {
    pub fn sample_rate(&self) -> f64 {
        self.prototype.sample_rate
    }
}

/// Quantized step table.
#[derive(Debug, Clone, PartialEq)]
pub struct BlepTable {
    pub values: Vec<i32>,
    /// Steady-state error of the fixed lowpass, linear.
    pub residual: f64,
}

impl BlepTable {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn residual_db(&self) -> f64 {
        lin2db(self.residual)
    }
}

/// Minimum-phase prototype shaped by the fixed lowpass.
fn filtered_impulse(config: &TableConfig) -> Result<FilterRun> {
    let prototype = config.prototype.design()?;
    let impulse =
        minimum_phase_floored(&prototype, config.oversampling, config.magnitude_floor)?;
    let mut lowpass = rc_lowpass(config.sample_rate(), config.rc_corner_hz)?;
    run_filter(&mut lowpass, &impulse, config.warmup)
}

/// Builds the integer step table.
pub fn generate_table(config: &TableConfig) -> Result<BlepTable> {
    let run = filtered_impulse(config)?;
    let step = integrate(&run.output);
    let values = Quantizer::new(config.bits, true)?.quantize_to_int(&step)?;

    let table = BlepTable {
        values,
        residual: run.residual,
    };
    if table.residual_db().is_finite() {
        info!(
            "generated {} entries, residual {:.2} dB",
            table.len(),
            table.residual_db()
        );
    } else {
        warn!("residual of {} is not finite in dB", table.residual);
    }

    Ok(table)
}

/// Spectrum of the quantized, unintegrated impulse response.
pub fn generate_spectrum(config: &TableConfig) -> Result<Vec<SpectrumBin>> {
    let run = filtered_impulse(config)?;
    let quantized = Quantizer::new(config.bits, false)?.quantize(&run.output)?;
    let bins = analyze(&quantized, config.spectrum_length, config.sample_rate())?;

    info!("analyzed {} bins", bins.len());

    Ok(bins)
}
