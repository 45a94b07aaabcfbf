//! Configuration management for simulation parameters.
//!
//! Strongly-typed sections mapping onto a `config.toml` file. Missing
//! sections or fields fall back to their defaults.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 64
//! height = 48
//! seed = 42
//! deterministic = true
//!
//! [behavior]
//! hunt_cooldown_ticks = 30
//!
//! [dispersal]
//! gut_transit_ticks = 500
//! ```

use serde::{Deserialize, Serialize};

/// World-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub initial_creatures: usize,
    pub max_creatures: usize,
    pub initial_plants: usize,
    pub max_plants: usize,
    pub plant_regrowth: f32,
    pub base_temperature: f32,
    pub temperature_swing: f32,
    pub season_length: u64,
    pub seed: Option<u64>,
    pub deterministic: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            initial_creatures: 40,
            max_creatures: 400,
            initial_plants: 200,
            max_plants: 600,
            plant_regrowth: 0.02,
            base_temperature: 18.0,
            temperature_swing: 12.0,
            season_length: 2000,
            seed: None,
            deterministic: false,
        }
    }
}

/// Thresholds, cooldowns and costs of the standard behaviors.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BehaviorConfig {
    pub hunt_cooldown_ticks: u64,
    pub satiation_threshold: f32,
    pub interaction_distance: f32,
    pub hunt_energy_cost: f32,
    pub breeding_cost: f32,
    pub feeding_energy_cost: f32,
    pub rest_energy_cost: f32,
    pub mate_drive_threshold: f32,
    pub mate_resource_threshold: f32,
    pub maturity_age: f32,
    pub ideal_similarity: f32,
    pub default_sight_range: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            hunt_cooldown_ticks: 30,
            satiation_threshold: 0.8,
            interaction_distance: 1.5,
            hunt_energy_cost: 1.5,
            breeding_cost: 3.0,
            feeding_energy_cost: 0.01,
            rest_energy_cost: 0.005,
            mate_drive_threshold: 0.7,
            mate_resource_threshold: 5.0,
            maturity_age: 0.1,
            ideal_similarity: 0.8,
            default_sight_range: 10.0,
        }
    }
}

/// Trait cache invalidation tolerances.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub age_tolerance: f32,
    pub temperature_tolerance: f32,
    pub health_tolerance: f32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            age_tolerance: 0.01,
            temperature_tolerance: 5.0,
            health_tolerance: 0.05,
        }
    }
}

/// Animal-mediated seed dispersal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DispersalConfig {
    pub gut_transit_ticks: u32,
    pub base_detach_chance: f32,
    pub detach_chance_per_tick: f32,
    pub base_burr_attach_chance: f32,
    pub germination_chance: f32,
}

impl Default for DispersalConfig {
    fn default() -> Self {
        Self {
            gut_transit_ticks: 500,
            base_detach_chance: 0.05,
            detach_chance_per_tick: 0.001,
            base_burr_attach_chance: 0.1,
            germination_chance: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EvolutionConfig {
    pub mutation_rate: f32,
    pub crossover_ratio: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.05,
            crossover_ratio: 0.5,
        }
    }
}

/// Energy bookkeeping applied by the host each tick.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EnergyConfig {
    pub idle_cost: f32,
    pub maintenance_multiplier: f32,
    pub fatigue_per_energy: f32,
    pub offspring_energy_fraction: f32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            idle_cost: 0.01,
            maintenance_multiplier: 0.1,
            fatigue_per_energy: 1.0,
            offspring_energy_fraction: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub behavior: BehaviorConfig,
    pub cache: CacheConfig,
    pub dispersal: DispersalConfig,
    pub evolution: EvolutionConfig,
    pub energy: EnergyConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` describing the
    /// first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(self.world.width <= 1000, "World width too large (max 1000)");
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.height <= 1000,
            "World height too large (max 1000)"
        );
        anyhow::ensure!(
            self.world.initial_plants <= self.world.max_plants,
            "Initial plants exceed max plants"
        );
        anyhow::ensure!(
            self.world.initial_creatures <= self.world.max_creatures,
            "Initial creatures exceed max creatures"
        );
        anyhow::ensure!(
            self.world.season_length > 0,
            "Season length must be positive"
        );

        anyhow::ensure!(
            self.behavior.hunt_cooldown_ticks > 0,
            "Hunt cooldown must be positive"
        );
        anyhow::ensure!(
            self.behavior.satiation_threshold > 0.0 && self.behavior.satiation_threshold <= 1.0,
            "Satiation threshold must be in (0.0, 1.0]"
        );
        anyhow::ensure!(
            self.behavior.interaction_distance > 0.0,
            "Interaction distance must be positive"
        );
        anyhow::ensure!(
            self.behavior.hunt_energy_cost >= 0.0
                && self.behavior.breeding_cost >= 0.0
                && self.behavior.feeding_energy_cost >= 0.0
                && self.behavior.rest_energy_cost >= 0.0,
            "Behavior energy costs must be non-negative"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.behavior.maturity_age),
            "Maturity age must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.behavior.ideal_similarity),
            "Ideal similarity must be in [0.0, 1.0]"
        );

        anyhow::ensure!(
            self.cache.age_tolerance >= 0.0
                && self.cache.temperature_tolerance >= 0.0
                && self.cache.health_tolerance >= 0.0,
            "Cache tolerances must be non-negative"
        );

        anyhow::ensure!(
            self.dispersal.gut_transit_ticks > 0,
            "Gut transit time must be positive"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.dispersal.base_detach_chance),
            "Base detach chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.dispersal.detach_chance_per_tick >= 0.0,
            "Detach chance increment must be non-negative"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.evolution.mutation_rate),
            "Mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.evolution.crossover_ratio),
            "Crossover ratio must be in [0.0, 1.0]"
        );

        anyhow::ensure!(
            self.energy.idle_cost >= 0.0 && self.energy.fatigue_per_energy >= 0.0,
            "Energy costs must be non-negative"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.energy.offspring_energy_fraction),
            "Offspring energy fraction must be in [0.0, 1.0]"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of every section that changes simulation outcomes.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.behavior).as_bytes());
        hasher.update(format!("{:?}", self.cache).as_bytes());
        hasher.update(format!("{:?}", self.dispersal).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hasher.update(format!("{:?}", self.energy).as_bytes());
        hex::encode(hasher.finalize())
    }
}
