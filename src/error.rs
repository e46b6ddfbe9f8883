//! Errors raised while generating a table.

/// Errors that abort table generation.
///
/// None of these are recoverable: a table that failed any check must not be
/// emitted at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A spectral bin had zero magnitude, so its logarithm is undefined.
    #[error("zero magnitude in spectral bin {bin}, logarithm undefined")]
    Domain {
        /// Index of the offending bin.
        bin: usize,
    },

    /// A design parameter is outside its valid range.
    #[error("invalid configuration: {reason}")]
    Configuration {
        /// Explaining why the parameter is invalid.
        reason: String,
    },

    /// A quantized value does not fit the representable range.
    #[error("quantized value {value} at index {index} exceeds range of +/-{limit}")]
    Range {
        /// Sample index.
        index: usize,
        /// Rounded integer value.
        value: i64,
        /// Largest allowed magnitude.
        limit: i64,
    },

    /// A sample was NaN or infinite where a finite value is required.
    #[error("non-finite sample at index {index}")]
    NonFinite {
        /// Sample index.
        index: usize,
    },

    /// An operation needing at least one sample got none.
    #[error("signal is empty")]
    EmptySignal,

    /// Writing the output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
