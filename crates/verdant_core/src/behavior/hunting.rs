use super::movement::step_toward;
use super::{Behavior, BehaviorContext, BehaviorPriority, BehaviorResult};
use crate::config::BehaviorConfig;
use crate::genetics::traits;
use crate::organism::Organism;
use crate::rng::RandomExt;
use crate::systems::{CombatSystem, PerceptionSystem};
use crate::world::WorldCommand;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use verdant_data::OrganismId;

const HUNT_INSTINCT_THRESHOLD: f32 = 0.4;
const LOCOMOTION_THRESHOLD: f32 = 0.3;
const DEFAULT_HUNGER_THRESHOLD: f32 = 0.5;
/// Cooldown entries older than this many windows are swept.
const SWEEP_WINDOWS: u64 = 10;

/// Probability that prey outruns its pursuer, in `[0, 1]`.
#[must_use]
pub fn escape_chance(prey_flee_speed: f32, predator_pursue_speed: f32) -> f32 {
    let flee = prey_flee_speed.max(0.0);
    let pursue = predator_pursue_speed.max(0.0);
    (flee / (flee + pursue + 0.1)).clamp(0.0, 1.0)
}

/// Pursues and attacks smaller creatures, one attempt per cooldown window.
pub struct HuntingBehavior {
    perception: Arc<PerceptionSystem>,
    combat: Arc<CombatSystem>,
    last_hunt: HashMap<OrganismId, u64>,
    cooldown_ticks: u64,
    satiation_threshold: f32,
    interaction_distance: f32,
    energy_cost: f32,
    last_sweep: u64,
}

impl HuntingBehavior {
    #[must_use]
    pub fn new(
        perception: Arc<PerceptionSystem>,
        combat: Arc<CombatSystem>,
        config: &BehaviorConfig,
    ) -> Self {
        Self {
            perception,
            combat,
            last_hunt: HashMap::new(),
            cooldown_ticks: config.hunt_cooldown_ticks,
            satiation_threshold: config.satiation_threshold,
            interaction_distance: config.interaction_distance,
            energy_cost: config.hunt_energy_cost,
            last_sweep: 0,
        }
    }

    #[must_use]
    pub fn is_on_cooldown(&self, id: OrganismId, tick: u64) -> bool {
        self.last_hunt
            .get(&id)
            .is_some_and(|&last| tick.saturating_sub(last) < self.cooldown_ticks)
    }

    /// Number of organisms with a recorded hunt attempt.
    #[must_use]
    pub fn tracked_organisms(&self) -> usize {
        self.last_hunt.len()
    }

    fn record_attempt(&mut self, id: OrganismId, tick: u64) {
        self.last_hunt.insert(id, tick);
        self.sweep(tick);
    }

    fn sweep(&mut self, tick: u64) {
        let window = self.cooldown_ticks.saturating_mul(SWEEP_WINDOWS);
        if tick.saturating_sub(self.last_sweep) < window {
            return;
        }
        let before = self.last_hunt.len();
        self.last_hunt
            .retain(|_, &mut last| tick.saturating_sub(last) < window);
        self.last_sweep = tick;
        tracing::trace!(
            removed = before - self.last_hunt.len(),
            "Swept stale hunt cooldowns"
        );
    }
}

impl Behavior for HuntingBehavior {
    fn id(&self) -> &str {
        "hunting"
    }

    fn is_applicable(&self, organism: &Organism, ctx: &BehaviorContext<'_>) -> bool {
        let phenotype = &organism.phenotype;
        phenotype.trait_or(traits::HUNT_INSTINCT, 0.0) > HUNT_INSTINCT_THRESHOLD
            && phenotype.trait_or(traits::LOCOMOTION, 0.0) > LOCOMOTION_THRESHOLD
            && ctx.state.energy_level < self.satiation_threshold
            && !self.is_on_cooldown(organism.id, ctx.tick)
    }

    fn priority(&self, organism: &Organism) -> f32 {
        let threshold = organism
            .phenotype
            .trait_or(traits::HUNGER_THRESHOLD, DEFAULT_HUNGER_THRESHOLD)
            .max(f32::EPSILON);
        let urgency = (1.0 - organism.energy_level() / threshold).clamp(0.0, 1.0);
        BehaviorPriority::Normal.value() + 25.0 * urgency
    }

    fn execute(
        &mut self,
        organism: &mut Organism,
        ctx: &mut BehaviorContext<'_>,
    ) -> BehaviorResult {
        let cost = self.energy_cost;
        self.record_attempt(organism.id, ctx.tick);

        let Some(world) = ctx.world else {
            return BehaviorResult::in_progress(cost, "no world access");
        };
        let range = self.perception.detection_range(organism);
        let Some(prey) = self.perception.find_prey(world, organism, range) else {
            return BehaviorResult::in_progress(cost, "no prey in range");
        };

        let pursue = organism.phenotype.trait_or(traits::PURSUE_SPEED, 1.0);
        if ctx.rng.chance(escape_chance(prey.flee_speed, pursue)) {
            return BehaviorResult::in_progress(cost, format!("{} escaped", prey.id));
        }

        if organism.position.distance(&prey.position) > self.interaction_distance {
            step_toward(organism, prey.position, pursue, ctx);
            if organism.position.distance(&prey.position) > self.interaction_distance {
                return BehaviorResult::in_progress(cost, format!("closing on {}", prey.id));
            }
        }

        let Some(action) = self.combat.select_best_action(organism, &prey) else {
            return BehaviorResult::in_progress(cost, "no usable attack");
        };
        let outcome = self.combat.resolve_attack(organism, &prey, &action, ctx.rng);
        if !outcome.hit {
            return BehaviorResult::in_progress(
                cost,
                format!("{:?} missed {}", outcome.kind, prey.id),
            );
        }
        BehaviorResult::completed(
            cost,
            format!("{:?} hit {} for {:.2}", outcome.kind, prey.id, outcome.damage),
        )
        .with_command(WorldCommand::DamageCreature {
            attacker: organism.id,
            target: prey.id,
            damage: outcome.damage,
        })
    }

    fn energy_cost(&self, _organism: &Organism) -> f32 {
        self.energy_cost
    }

    fn clear_organism_data(&mut self, id: OrganismId) {
        self.last_hunt.remove(&id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
