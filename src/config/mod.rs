//! YAML configuration of the pose evaluator.
//!
//! Everything is loaded from a single file; every field has a default so a
//! partial (or empty) document is valid.

mod defaults;
mod error;
mod sections;
mod vantage;

pub use error::ConfigLoadError;
pub use sections::{BoundsSection, RaycastSection, SamplingSection, SensorSection, StrategyKind};
pub use vantage::VantageConfig;
