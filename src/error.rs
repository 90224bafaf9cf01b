use thiserror::Error;

use crate::data::model::PayloadRange;

/// A dashboard selection that does not match the loaded table.
///
/// Handlers recover from these locally and render an empty chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("launch site '{site}' is not present in the dataset")]
    UnknownSite { site: String },

    #[error("payload range {range} is inverted")]
    InvertedRange { range: PayloadRange },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("slider bounds must be finite, got [{min}, {max}]")]
    NonFiniteBounds { min: f64, max: f64 },

    #[error("slider minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("slider step must be positive, got {step}")]
    InvalidStep { step: f64 },
}
