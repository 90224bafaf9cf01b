use std::path::PathBuf;

use clap::Parser;

use crate::data::model::PayloadRange;
use crate::error::ConfigError;

#[derive(Debug, Clone, Parser)]
#[command(name = "launch-dash")]
#[command(about = "Interactive dashboard over a table of SpaceX launches")]
pub struct Config {
    /// Launch table (.csv, .json or .parquet). Prompts with a file dialog when omitted.
    pub data: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0)]
    pub slider_min: f64,

    #[arg(long, default_value_t = 10000.0)]
    pub slider_max: f64,

    #[arg(long, default_value_t = 1000.0)]
    pub slider_step: f64,

    #[arg(long, default_value = "SpaceX Launch Records Dashboard")]
    pub title: String,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: None,
            slider_min: 0.0,
            slider_max: 10000.0,
            slider_step: 1000.0,
            title: "SpaceX Launch Records Dashboard".to_string(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.slider_min, self.slider_max);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBounds { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        if !(self.slider_step.is_finite() && self.slider_step > 0.0) {
            return Err(ConfigError::InvalidStep { step: self.slider_step });
        }
        Ok(())
    }

    /// Slider extent: the configured bounds, widened to cover the observed payloads.
    pub fn slider_bounds(&self, observed: Option<PayloadRange>) -> PayloadRange {
        let configured = PayloadRange::new(self.slider_min, self.slider_max);
        match observed {
            Some(o) => PayloadRange::new(configured.min.min(o.min), configured.max.max(o.max)),
            None => configured,
        }
    }
}
