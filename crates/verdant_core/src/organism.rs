//! Creature state the behaviors act on.

use crate::genetics::Phenotype;
use std::sync::Arc;
use verdant_data::{Genome, OrganismId, OrganismState, Position};

/// Hands out monotonically increasing organism ids.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> OrganismId {
        let id = OrganismId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone)]
pub struct Organism {
    pub id: OrganismId,
    pub phenotype: Phenotype,
    pub position: Position,
    pub energy: f32,
    pub max_energy: f32,
    pub health: f32,
    /// Accumulated exertion; grows with energy spent, drained by resting.
    pub fatigue: f32,
    pub age_ticks: u64,
    pub lifespan: u64,
    pub generation: u32,
    pub is_pregnant: bool,
    pub is_sleeping: bool,
}

impl Organism {
    pub const DEFAULT_MAX_ENERGY: f32 = 20.0;
    pub const DEFAULT_LIFESPAN: u64 = 5000;

    #[must_use]
    pub fn new(id: OrganismId, phenotype: Phenotype, position: Position) -> Self {
        Self {
            id,
            phenotype,
            position,
            energy: Self::DEFAULT_MAX_ENERGY,
            max_energy: Self::DEFAULT_MAX_ENERGY,
            health: 1.0,
            fatigue: 0.0,
            age_ticks: 0,
            lifespan: Self::DEFAULT_LIFESPAN,
            generation: 0,
            is_pregnant: false,
            is_sleeping: false,
        }
    }

    #[must_use]
    pub fn genome(&self) -> &Arc<Genome> {
        self.phenotype.genome()
    }

    #[must_use]
    pub fn world_x(&self) -> f32 {
        self.position.x
    }

    #[must_use]
    pub fn world_y(&self) -> f32 {
        self.position.y
    }

    pub fn set_world_position(&mut self, x: f32, y: f32) {
        self.position = Position::new(x, y);
    }

    #[must_use]
    pub fn energy_level(&self) -> f32 {
        if self.max_energy <= 0.0 {
            return 0.0;
        }
        (self.energy / self.max_energy).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn age_normalized(&self) -> f32 {
        if self.lifespan == 0 {
            return 1.0;
        }
        (self.age_ticks as f32 / self.lifespan as f32).clamp(0.0, 1.0)
    }

    /// Fresh snapshot for this tick.
    #[must_use]
    pub fn snapshot(&self) -> OrganismState {
        OrganismState::new(
            self.age_normalized(),
            self.energy_level(),
            self.health,
            self.is_pregnant,
            self.is_sleeping,
        )
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.energy > 0.0 && self.health > 0.0 && self.age_ticks < self.lifespan
    }
}
