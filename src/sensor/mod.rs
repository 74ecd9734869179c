//! Depth-sensor model and viewing frustum.

pub use self::frustum::Frustum;
pub use self::sensor_model::{PixelGrid, SensorModel, SensorModelError};

mod frustum;
mod sensor_model;
