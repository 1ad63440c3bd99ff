//! Configuration system for the CSAT engine.
//! TOML-based, 3-layer resolution: env > project > user > defaults.

pub mod csat_config;
pub mod estimator_config;

pub use csat_config::CsatConfig;
pub use estimator_config::EstimatorConfig;
