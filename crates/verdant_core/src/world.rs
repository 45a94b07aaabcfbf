//! Contracts between behaviors and the world that hosts them.
//!
//! Behaviors read the world through [`WorldView`] and describe the changes
//! they want as [`WorldCommand`]s; the host applies them after the tick.

use std::sync::Arc;
use verdant_data::{DispersalEvent, Genome, OrganismId, PlantId, Position};

/// What a behavior can see of another creature.
#[derive(Debug, Clone)]
pub struct CreatureView {
    pub id: OrganismId,
    pub position: Position,
    pub genome: Arc<Genome>,
    pub size: f32,
    pub flee_speed: f32,
    pub armor: f32,
    pub health: f32,
    pub age_normalized: f32,
}

/// What a behavior can see of a plant.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantView {
    pub id: PlantId,
    pub position: Position,
    pub nutrition: f32,
    pub toughness: f32,
    pub edible: bool,
    /// Seeds carried in ripe fruit.
    pub fruit_seeds: u32,
    pub seed_viability: f32,
    /// Burr strategy code when the plant sheds hooked seeds.
    pub burr_strategy: Option<u8>,
}

/// Read-only world access handed to behaviors each tick.
pub trait WorldView {
    fn creatures_within(&self, center: Position, radius: f32) -> Vec<CreatureView>;
    fn plants_within(&self, center: Position, radius: f32) -> Vec<PlantView>;
}

/// Side effect requested by a behavior, applied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldCommand {
    /// `nutrition` is the energy owed for the full `bite`; the host credits
    /// it in proportion to the biomass actually left on the plant.
    EatPlant {
        plant: PlantId,
        bite: f32,
        nutrition: f32,
    },
    DamageCreature {
        attacker: OrganismId,
        target: OrganismId,
        damage: f32,
    },
    SeedsIngested {
        origin_x: i32,
        origin_y: i32,
        count: u32,
        viability: f32,
    },
    BurrAttached {
        strategy: u8,
        origin_x: i32,
        origin_y: i32,
    },
    DisperseSeed(DispersalEvent),
}
