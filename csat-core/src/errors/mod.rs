//! Error handling for the CSAT engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod estimate_error;

pub use config_error::ConfigError;
pub use estimate_error::EstimateError;
