//! Main `VantageConfig` and conversion methods.

use std::path::Path;

use super::error::ConfigLoadError;
use super::sections::{BoundsSection, RaycastSection, SamplingSection, SensorSection};
use crate::evaluation::{CastStrategy, ExplorationBounds};
use crate::sampling::{SamplingError, SphericalCrownSampler};
use crate::sensor::SensorModel;

/// Full pose evaluator configuration loaded from YAML.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::config::{StrategyKind, VantageConfig};
///
/// let config = VantageConfig::from_yaml(
///     "sensor:\n  max_range: 2.0\nraycast:\n  strategy: independent\n",
/// )
/// .unwrap();
///
/// assert_eq!(config.sensor.max_range, 2.0);
/// assert_eq!(config.sensor.min_range, 0.8);
/// assert_eq!(config.raycast.strategy, StrategyKind::Independent);
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct VantageConfig {
    /// Sensor settings
    #[serde(default)]
    pub sensor: SensorSection,

    /// Exploration bounds
    #[serde(default)]
    pub bounds: BoundsSection,

    /// Raycasting settings
    #[serde(default)]
    pub raycast: RaycastSection,

    /// Viewpoint sampling settings
    #[serde(default)]
    pub sampling: SamplingSection,
}

impl VantageConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from a YAML string, then validate.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Checks that every section describes a usable setup.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_sensor_model()
            .validate()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))?;

        let extents = self.bounds.maxs - self.bounds.mins;
        if extents.iter().any(|e| !(*e > 0.0)) {
            return Err(ConfigLoadError::Invalid(format!(
                "exploration bounds must have positive extents, got {:?}",
                extents
            )));
        }

        if self.raycast.pixel_step == 0 {
            return Err(ConfigLoadError::Invalid(
                "raycast.pixel_step must be positive".to_string(),
            ));
        }

        let _ = self
            .to_crown_sampler()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))?;

        Ok(())
    }

    /// Convert to a `SensorModel`
    pub fn to_sensor_model(&self) -> SensorModel {
        self.sensor.to_sensor_model()
    }

    /// Convert to `ExplorationBounds`
    pub fn to_bounds(&self) -> ExplorationBounds {
        self.bounds.to_bounds()
    }

    /// Convert to a `CastStrategy`
    pub fn to_strategy(&self) -> CastStrategy {
        self.raycast.to_strategy()
    }

    /// Convert to a `SphericalCrownSampler`
    pub fn to_crown_sampler(&self) -> Result<SphericalCrownSampler, SamplingError> {
        self.sampling.to_crown_sampler()
    }
}
