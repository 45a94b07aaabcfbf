//! The behavior contract and its standard implementations.
//!
//! A [`BehaviorController`] owns a list of boxed [`Behavior`]s and, each tick,
//! runs the single highest-priority applicable one. Behaviors that keep
//! per-organism side tables key them by [`OrganismId`] and drop them in
//! [`Behavior::clear_organism_data`].

use crate::organism::Organism;
use crate::rng::SimRng;
use crate::world::{WorldCommand, WorldView};
use std::any::Any;
use verdant_data::{EnvironmentState, OrganismId, OrganismState};

pub mod controller;
pub mod feeding;
pub mod hunting;
pub mod mating;
pub mod movement;
pub mod rest;
pub mod zoochory;

pub use controller::BehaviorController;
pub use feeding::FeedingBehavior;
pub use hunting::{escape_chance, HuntingBehavior};
pub use mating::{mating_fitness, MatingBehavior, Offspring, OffspringCallback};
pub use movement::{movement_speed, MovementBehavior};
pub use rest::RestBehavior;
pub use zoochory::ZoochoryBehavior;

/// Ordinal urgency scale; higher wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BehaviorPriority {
    Idle = 0,
    Low = 25,
    Normal = 50,
    High = 75,
    Critical = 100,
}

impl BehaviorPriority {
    #[must_use]
    pub fn value(self) -> f32 {
        f32::from(self as u8)
    }
}

/// Outcome of one `execute` call, discarded after the tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BehaviorResult {
    pub executed: bool,
    pub completed: bool,
    pub energy_cost: f32,
    pub debug_info: String,
    pub commands: Vec<WorldCommand>,
}

impl BehaviorResult {
    #[must_use]
    pub fn not_executed() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn completed(energy_cost: f32, debug_info: impl Into<String>) -> Self {
        Self {
            executed: true,
            completed: true,
            energy_cost,
            debug_info: debug_info.into(),
            commands: Vec::new(),
        }
    }

    /// Ran this tick but has not reached its goal.
    #[must_use]
    pub fn in_progress(energy_cost: f32, debug_info: impl Into<String>) -> Self {
        Self {
            executed: true,
            completed: false,
            energy_cost,
            debug_info: debug_info.into(),
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_command(mut self, command: WorldCommand) -> Self {
        self.commands.push(command);
        self
    }
}

/// Per-tick inputs handed to every behavior call.
pub struct BehaviorContext<'a> {
    pub world: Option<&'a dyn WorldView>,
    pub environment: EnvironmentState,
    pub state: OrganismState,
    pub delta_time: f32,
    pub tick: u64,
    pub world_width: u16,
    pub world_height: u16,
    pub rng: &'a mut SimRng,
}

impl<'a> BehaviorContext<'a> {
    #[must_use]
    pub fn new(state: OrganismState, tick: u64, rng: &'a mut SimRng) -> Self {
        Self {
            world: None,
            environment: EnvironmentState::default(),
            state,
            delta_time: 1.0,
            tick,
            world_width: u16::MAX,
            world_height: u16::MAX,
            rng,
        }
    }

    #[must_use]
    pub fn with_world(mut self, world: &'a dyn WorldView, width: u16, height: u16) -> Self {
        self.world = Some(world);
        self.world_width = width;
        self.world_height = height;
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: EnvironmentState) -> Self {
        self.environment = environment;
        self
    }
}

pub trait Behavior: Any {
    /// Stable identity, unique within a controller.
    fn id(&self) -> &str;

    fn is_applicable(&self, organism: &Organism, ctx: &BehaviorContext<'_>) -> bool;

    /// Urgency in `[0, 100]`.
    fn priority(&self, organism: &Organism) -> f32;

    fn execute(&mut self, organism: &mut Organism, ctx: &mut BehaviorContext<'_>)
        -> BehaviorResult;

    /// Estimated energy spent by one execution.
    fn energy_cost(&self, organism: &Organism) -> f32;

    /// Drops any side-table state kept for a dead organism.
    fn clear_organism_data(&mut self, _id: OrganismId) {}

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
