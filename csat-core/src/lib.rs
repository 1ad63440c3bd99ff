//! Core types, errors, config, and tracing setup for the CSAT estimation
//! engine.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{CsatConfig, EstimatorConfig};
pub use errors::{ConfigError, EstimateError};
