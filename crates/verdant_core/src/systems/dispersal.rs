use crate::config::DispersalConfig;
use crate::rng::RandomExt;
use rand::Rng;

/// Probabilities governing animal-carried seeds.
#[derive(Debug, Clone)]
pub struct SeedDispersalSystem {
    base_burr_attach_chance: f32,
    germination_chance: f32,
}

impl Default for SeedDispersalSystem {
    fn default() -> Self {
        Self::from_config(&DispersalConfig::default())
    }
}

impl SeedDispersalSystem {
    #[must_use]
    pub fn from_config(config: &DispersalConfig) -> Self {
        Self {
            base_burr_attach_chance: config.base_burr_attach_chance,
            germination_chance: config.germination_chance,
        }
    }

    /// Chance a burr hooks into a coat of the given density.
    #[must_use]
    pub fn burr_attach_probability(&self, fur_density: f32) -> f32 {
        (self.base_burr_attach_chance + 0.8 * fur_density.clamp(0.0, 1.0)).clamp(0.0, 1.0)
    }

    /// Viability left after passage through a gut of the given acidity.
    #[must_use]
    pub fn gut_survival(&self, viability: f32, gut_acidity: f32) -> f32 {
        (viability * (1.0 - 0.5 * gut_acidity.clamp(0.0, 1.0))).clamp(0.0, 1.0)
    }

    /// Rolls whether a deposited seed takes root.
    pub fn germinates<R: Rng>(&self, viability: f32, rng: &mut R) -> bool {
        rng.chance(viability.clamp(0.0, 1.0) * self.germination_chance)
    }
}
