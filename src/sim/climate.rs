use serde::{Deserialize, Serialize};
use verdant_core::config::WorldConfig;
use verdant_data::EnvironmentState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    #[must_use]
    pub fn regrowth_multiplier(&self) -> f32 {
        match self {
            Season::Spring => 1.5,
            Season::Summer => 1.0,
            Season::Fall => 1.2,
            Season::Winter => 0.5,
        }
    }
}

/// Seasonal temperature cycle.
#[derive(Debug, Clone)]
pub struct Climate {
    base_temperature: f32,
    swing: f32,
    season_length: u64,
}

impl Climate {
    #[must_use]
    pub fn from_config(config: &WorldConfig) -> Self {
        Self {
            base_temperature: config.base_temperature,
            swing: config.temperature_swing,
            season_length: config.season_length.max(1),
        }
    }

    #[must_use]
    pub fn season_at(&self, tick: u64) -> Season {
        match (tick / self.season_length) % 4 {
            0 => Season::Spring,
            1 => Season::Summer,
            2 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Readings at `tick`; one full sine period spans four seasons.
    #[must_use]
    pub fn environment_at(&self, tick: u64) -> EnvironmentState {
        let year = (self.season_length * 4) as f32;
        let phase = (tick as f32 % year) / year * std::f32::consts::TAU;
        let temperature = self.base_temperature + self.swing * phase.sin();
        EnvironmentState {
            temperature,
            humidity: (0.5 + 0.3 * phase.cos()).clamp(0.0, 1.0),
        }
    }
}
