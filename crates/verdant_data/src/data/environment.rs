use serde::{Deserialize, Serialize};

/// Ambient conditions an organism experiences during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    /// Ambient temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in `[0, 1]`.
    pub humidity: f32,
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self {
            temperature: 20.0,
            humidity: 0.5,
        }
    }
}
