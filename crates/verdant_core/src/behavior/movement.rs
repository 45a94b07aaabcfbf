use super::{Behavior, BehaviorContext, BehaviorPriority, BehaviorResult};
use crate::genetics::traits;
use crate::organism::Organism;
use crate::rng::RandomExt;
use std::any::Any;
use std::collections::HashMap;
use verdant_data::{OrganismId, Position};

const ARRIVAL_DISTANCE: f32 = 0.1;
const MIN_SPEED: f32 = 0.1;
const DIAGONAL_FACTOR: f32 = 1.414;
const MOVE_COST_PER_UNIT: f32 = 0.01;
const LOCOMOTION_THRESHOLD: f32 = 0.3;

/// Tiles per tick for the given locomotion and body size.
#[must_use]
pub fn movement_speed(locomotion: f32, size: f32) -> f32 {
    let leg_length = 0.3 + 0.7 * locomotion;
    let mass = (0.5 + size).powi(3).max(0.1);
    (0.5 * locomotion * leg_length / mass.sqrt()).max(MIN_SPEED)
}

/// Speed read from the organism's phenotype.
#[must_use]
pub fn organism_speed(organism: &Organism) -> f32 {
    movement_speed(
        organism.phenotype.trait_or(traits::LOCOMOTION, 0.0),
        organism.phenotype.trait_or(traits::SIZE, 1.0),
    )
}

/// Energy for covering one step of (`dx`, `dy`).
#[must_use]
pub fn step_cost(dx: f32, dy: f32, metabolism: f32) -> f32 {
    let mut distance = (dx * dx + dy * dy).sqrt();
    if dx.abs() > ARRIVAL_DISTANCE && dy.abs() > ARRIVAL_DISTANCE {
        distance *= DIAGONAL_FACTOR;
    }
    MOVE_COST_PER_UNIT * distance * metabolism
}

fn clamp_to_world(position: Position, width: u16, height: u16) -> Position {
    let max_x = (f32::from(width) - 0.01).max(0.0);
    let max_y = (f32::from(height) - 0.01).max(0.0);
    Position::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
}

/// Moves `organism` up to `max_step` toward `target`; returns the energy spent.
pub fn step_toward(
    organism: &mut Organism,
    target: Position,
    max_step: f32,
    ctx: &BehaviorContext<'_>,
) -> f32 {
    let dx = target.x - organism.world_x();
    let dy = target.y - organism.world_y();
    let remaining = (dx * dx + dy * dy).sqrt();
    if remaining <= f32::EPSILON {
        return 0.0;
    }
    let step = max_step.min(remaining);
    let (sx, sy) = (dx / remaining * step, dy / remaining * step);
    let next = clamp_to_world(
        Position::new(organism.world_x() + sx, organism.world_y() + sy),
        ctx.world_width,
        ctx.world_height,
    );
    organism.set_world_position(next.x, next.y);
    step_cost(sx, sy, organism.phenotype.trait_or(traits::METABOLISM, 1.0))
}

/// Walks toward a target tile, or wanders when none is set.
#[derive(Debug, Default)]
pub struct MovementBehavior {
    targets: HashMap<OrganismId, (i32, i32)>,
}

impl MovementBehavior {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, id: OrganismId, tile_x: i32, tile_y: i32) {
        self.targets.insert(id, (tile_x, tile_y));
    }

    pub fn clear_target(&mut self, id: OrganismId) {
        self.targets.remove(&id);
    }

    #[must_use]
    pub fn target(&self, id: OrganismId) -> Option<(i32, i32)> {
        self.targets.get(&id).copied()
    }

    fn move_directed(
        &mut self,
        organism: &mut Organism,
        ctx: &BehaviorContext<'_>,
        tile: (i32, i32),
    ) -> BehaviorResult {
        let center = Position::tile_center(tile.0, tile.1);
        if organism.position.distance(&center) < ARRIVAL_DISTANCE {
            self.targets.remove(&organism.id);
            return BehaviorResult::completed(0.0, "arrived at target");
        }
        let speed = organism_speed(organism);
        let cost = step_toward(organism, center, speed, ctx);
        BehaviorResult::in_progress(cost, format!("moving toward ({}, {})", tile.0, tile.1))
    }

    fn wander(organism: &mut Organism, ctx: &mut BehaviorContext<'_>) -> BehaviorResult {
        let dx = ctx.rng.uniform(-1.0, 1.0);
        let dy = ctx.rng.uniform(-1.0, 1.0);
        let magnitude = (dx * dx + dy * dy).sqrt();
        if magnitude < ARRIVAL_DISTANCE {
            return BehaviorResult::completed(0.0, "resting in place");
        }
        let speed = organism_speed(organism);
        let target = Position::new(
            organism.world_x() + dx / magnitude * speed,
            organism.world_y() + dy / magnitude * speed,
        );
        let cost = step_toward(organism, target, speed, ctx);
        BehaviorResult::completed(cost, "wandering")
    }
}

impl Behavior for MovementBehavior {
    fn id(&self) -> &str {
        "movement"
    }

    fn is_applicable(&self, organism: &Organism, _ctx: &BehaviorContext<'_>) -> bool {
        organism.phenotype.trait_or(traits::LOCOMOTION, 0.0) > LOCOMOTION_THRESHOLD
    }

    fn priority(&self, organism: &Organism) -> f32 {
        if self.targets.contains_key(&organism.id) {
            BehaviorPriority::Normal.value()
        } else {
            BehaviorPriority::Low.value()
        }
    }

    fn execute(
        &mut self,
        organism: &mut Organism,
        ctx: &mut BehaviorContext<'_>,
    ) -> BehaviorResult {
        match self.targets.get(&organism.id).copied() {
            Some(tile) => self.move_directed(organism, ctx, tile),
            None => Self::wander(organism, ctx),
        }
    }

    fn energy_cost(&self, organism: &Organism) -> f32 {
        let speed = organism_speed(organism);
        MOVE_COST_PER_UNIT * speed * organism.phenotype.trait_or(traits::METABOLISM, 1.0)
    }

    fn clear_organism_data(&mut self, id: OrganismId) {
        self.targets.remove(&id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
