//! Shared collaborator systems for every organism's behaviors.
//!
//! All systems are built eagerly in [`OrganismServices::new`] and handed out
//! as `Arc`s, so behaviors borrow them without owning or rebuilding them.

use crate::behavior::{
    BehaviorController, FeedingBehavior, HuntingBehavior, MatingBehavior, MovementBehavior,
    RestBehavior, ZoochoryBehavior,
};
use crate::config::AppConfig;
use crate::genetics::GeneRegistry;
use crate::systems::{
    CombatSystem, FeedingSystem, HealthSystem, PerceptionSystem, SeedDispersalSystem,
};
use std::sync::Arc;

pub struct OrganismServices {
    registry: Arc<GeneRegistry>,
    perception: Arc<PerceptionSystem>,
    health: Arc<HealthSystem>,
    feeding: Arc<FeedingSystem>,
    combat: Arc<CombatSystem>,
    dispersal: Arc<SeedDispersalSystem>,
}

impl OrganismServices {
    #[must_use]
    pub fn new(registry: Arc<GeneRegistry>, config: &AppConfig) -> Self {
        Self {
            registry,
            perception: Arc::new(PerceptionSystem::new(config.behavior.default_sight_range)),
            health: Arc::new(HealthSystem::default()),
            feeding: Arc::new(FeedingSystem::default()),
            combat: Arc::new(CombatSystem),
            dispersal: Arc::new(SeedDispersalSystem::from_config(&config.dispersal)),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<GeneRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn perception(&self) -> &Arc<PerceptionSystem> {
        &self.perception
    }

    #[must_use]
    pub fn health(&self) -> &Arc<HealthSystem> {
        &self.health
    }

    #[must_use]
    pub fn feeding(&self) -> &Arc<FeedingSystem> {
        &self.feeding
    }

    #[must_use]
    pub fn combat(&self) -> &Arc<CombatSystem> {
        &self.combat
    }

    #[must_use]
    pub fn dispersal(&self) -> &Arc<SeedDispersalSystem> {
        &self.dispersal
    }

    /// Scheduler with the six standard behaviors wired to these systems.
    #[must_use]
    pub fn build_controller(&self, config: &AppConfig) -> BehaviorController {
        let mut controller = BehaviorController::new();
        controller.add(Box::new(FeedingBehavior::new(
            Arc::clone(&self.perception),
            Arc::clone(&self.feeding),
            Arc::clone(&self.dispersal),
            &config.behavior,
        )));
        controller.add(Box::new(HuntingBehavior::new(
            Arc::clone(&self.perception),
            Arc::clone(&self.combat),
            &config.behavior,
        )));
        controller.add(Box::new(MatingBehavior::new(
            Arc::clone(&self.perception),
            &config.behavior,
            &config.evolution,
        )));
        controller.add(Box::new(RestBehavior::new(&config.behavior)));
        controller.add(Box::new(MovementBehavior::new()));
        controller.add(Box::new(ZoochoryBehavior::new(&config.dispersal)));
        controller
    }
}
