use super::movement::{organism_speed, step_toward};
use super::{Behavior, BehaviorContext, BehaviorPriority, BehaviorResult};
use crate::config::BehaviorConfig;
use crate::genetics::traits;
use crate::organism::Organism;
use crate::rng::RandomExt;
use crate::systems::{FeedingSystem, PerceptionSystem, SeedDispersalSystem};
use crate::world::WorldCommand;
use std::any::Any;
use std::sync::Arc;

const DIGESTION_THRESHOLD: f32 = 0.1;
const DEFAULT_HUNGER_THRESHOLD: f32 = 0.5;

/// Grazes the nearest edible plant when hungry.
pub struct FeedingBehavior {
    perception: Arc<PerceptionSystem>,
    feeding: Arc<FeedingSystem>,
    dispersal: Arc<SeedDispersalSystem>,
    interaction_distance: f32,
    base_energy_cost: f32,
}

impl FeedingBehavior {
    #[must_use]
    pub fn new(
        perception: Arc<PerceptionSystem>,
        feeding: Arc<FeedingSystem>,
        dispersal: Arc<SeedDispersalSystem>,
        config: &BehaviorConfig,
    ) -> Self {
        Self {
            perception,
            feeding,
            dispersal,
            interaction_distance: config.interaction_distance,
            base_energy_cost: config.feeding_energy_cost,
        }
    }
}

impl Behavior for FeedingBehavior {
    fn id(&self) -> &str {
        "feeding"
    }

    fn is_applicable(&self, organism: &Organism, ctx: &BehaviorContext<'_>) -> bool {
        let phenotype = &organism.phenotype;
        phenotype.trait_or(traits::PLANT_DIGESTION, 0.0) > DIGESTION_THRESHOLD
            && ctx.state.energy_level
                < phenotype.trait_or(traits::HUNGER_THRESHOLD, DEFAULT_HUNGER_THRESHOLD)
    }

    fn priority(&self, organism: &Organism) -> f32 {
        let hunger_ratio = organism.energy_level();
        (BehaviorPriority::Normal.value() + 25.0 * (1.0 - hunger_ratio))
            .min(BehaviorPriority::High.value())
    }

    fn execute(
        &mut self,
        organism: &mut Organism,
        ctx: &mut BehaviorContext<'_>,
    ) -> BehaviorResult {
        let cost = self.energy_cost(organism);
        let Some(world) = ctx.world else {
            return BehaviorResult::in_progress(cost, "no world access");
        };

        let range = self.perception.detection_range(organism);
        let Some(plant) = self.perception.nearest_plant(world, organism, range) else {
            return BehaviorResult::in_progress(cost, "no food in range");
        };

        if organism.position.distance(&plant.position) > self.interaction_distance {
            let speed = organism_speed(organism);
            let moved = step_toward(organism, plant.position, speed, ctx);
            return BehaviorResult::in_progress(cost + moved, "movement needed");
        }

        let outcome = self.feeding.attempt_to_eat(&organism.phenotype, &plant);
        if outcome.plant_damage <= 0.0 {
            return BehaviorResult::in_progress(cost, "plant too tough");
        }

        let (origin_x, origin_y) = plant.position.tile();
        let mut result = BehaviorResult::completed(
            cost,
            format!("ate {:.2} from plant {}", outcome.nutrition_gained, plant.id.0),
        )
        .with_command(WorldCommand::EatPlant {
            plant: plant.id,
            bite: outcome.plant_damage,
            nutrition: outcome.nutrition_gained,
        });

        if outcome.seeds_ingested > 0 {
            let acidity = organism.phenotype.trait_or(traits::GUT_ACIDITY, 0.0);
            result = result.with_command(WorldCommand::SeedsIngested {
                origin_x,
                origin_y,
                count: outcome.seeds_ingested,
                viability: self.dispersal.gut_survival(plant.seed_viability, acidity),
            });
        }
        if let Some(strategy) = plant.burr_strategy {
            let fur = organism.phenotype.trait_or(traits::FUR_DENSITY, 0.0);
            if ctx.rng.chance(self.dispersal.burr_attach_probability(fur)) {
                result = result.with_command(WorldCommand::BurrAttached {
                    strategy,
                    origin_x,
                    origin_y,
                });
            }
        }
        result
    }

    fn energy_cost(&self, organism: &Organism) -> f32 {
        self.base_energy_cost * organism.phenotype.trait_or(traits::METABOLISM, 1.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
