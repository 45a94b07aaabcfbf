use super::movement::{organism_speed, step_toward};
use super::{Behavior, BehaviorContext, BehaviorPriority, BehaviorResult};
use crate::config::{BehaviorConfig, EvolutionConfig};
use crate::genetics::{traits, GenomeLogic};
use crate::organism::Organism;
use crate::systems::PerceptionSystem;
use crate::world::CreatureView;
use std::any::Any;
use std::sync::Arc;
use verdant_data::{Genome, OrganismId, Position};

/// Newly recombined genome handed to the host for materialization.
#[derive(Debug, Clone)]
pub struct Offspring {
    pub genome: Genome,
    pub parents: (OrganismId, OrganismId),
    pub position: Position,
}

pub type OffspringCallback = Box<dyn FnMut(Offspring)>;

/// Pair fitness from distance and genome similarity.
///
/// Similarity past `ideal_similarity` is penalized superlinearly, so the
/// score never rises with further similarity beyond that point.
#[must_use]
pub fn mating_fitness(
    distance: f32,
    sight_range: f32,
    similarity: f32,
    ideal_similarity: f32,
) -> f32 {
    let proximity = if sight_range > 0.0 {
        1.0 - (distance / sight_range).min(1.0)
    } else {
        0.0
    };
    let genetic = if similarity > ideal_similarity {
        ideal_similarity - (similarity - ideal_similarity).powf(1.5)
    } else {
        similarity
    };
    proximity / 2.0 + genetic
}

pub struct MatingBehavior {
    perception: Arc<PerceptionSystem>,
    on_offspring: Option<OffspringCallback>,
    drive_threshold: f32,
    resource_threshold: f32,
    maturity_age: f32,
    ideal_similarity: f32,
    interaction_distance: f32,
    breeding_cost: f32,
    crossover_ratio: f32,
    mutation_rate: f32,
}

impl MatingBehavior {
    #[must_use]
    pub fn new(
        perception: Arc<PerceptionSystem>,
        behavior: &BehaviorConfig,
        evolution: &EvolutionConfig,
    ) -> Self {
        Self {
            perception,
            on_offspring: None,
            drive_threshold: behavior.mate_drive_threshold,
            resource_threshold: behavior.mate_resource_threshold,
            maturity_age: behavior.maturity_age,
            ideal_similarity: behavior.ideal_similarity,
            interaction_distance: behavior.interaction_distance,
            breeding_cost: behavior.breeding_cost,
            crossover_ratio: evolution.crossover_ratio,
            mutation_rate: evolution.mutation_rate,
        }
    }

    pub fn set_offspring_callback(&mut self, callback: OffspringCallback) {
        self.on_offspring = Some(callback);
    }

    fn best_candidate(
        &self,
        organism: &Organism,
        ctx: &BehaviorContext<'_>,
    ) -> Option<(CreatureView, f32)> {
        let world = ctx.world?;
        let sight = self.perception.detection_range(organism);
        let genome = organism.genome();
        self.perception
            .mate_candidates(world, organism, sight, self.maturity_age)
            .into_iter()
            .map(|candidate| {
                let fitness = mating_fitness(
                    organism.position.distance(&candidate.position),
                    sight,
                    genome.compare(&candidate.genome),
                    self.ideal_similarity,
                );
                (candidate, fitness)
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Behavior for MatingBehavior {
    fn id(&self) -> &str {
        "mating"
    }

    fn is_applicable(&self, organism: &Organism, ctx: &BehaviorContext<'_>) -> bool {
        let phenotype = &organism.phenotype;
        phenotype.trait_or(traits::MATE_DRIVE, 0.0) >= self.drive_threshold
            && ctx.state.age_normalized >= self.maturity_age
            && phenotype.trait_or(traits::HUNGER, 0.0) >= self.resource_threshold
    }

    fn priority(&self, organism: &Organism) -> f32 {
        let drive = organism.phenotype.trait_or(traits::MATE_DRIVE, 0.0);
        (BehaviorPriority::Normal.value() + (drive - self.drive_threshold).max(0.0) * 25.0)
            .min(BehaviorPriority::High.value())
    }

    fn execute(
        &mut self,
        organism: &mut Organism,
        ctx: &mut BehaviorContext<'_>,
    ) -> BehaviorResult {
        let cost = self.breeding_cost;
        if ctx.world.is_none() {
            return BehaviorResult::in_progress(cost, "no world access");
        }
        let Some((mate, fitness)) = self.best_candidate(organism, ctx) else {
            return BehaviorResult::in_progress(cost, "no mate found");
        };
        if fitness <= 0.0 {
            return BehaviorResult::in_progress(cost, format!("{} rejected", mate.id));
        }

        if organism.position.distance(&mate.position) > self.interaction_distance {
            let speed = organism_speed(organism);
            step_toward(organism, mate.position, speed, ctx);
            return BehaviorResult::in_progress(cost, format!("moving toward {}", mate.id));
        }

        let child = Genome::crossover(
            organism.genome(),
            &mate.genome,
            self.crossover_ratio,
            ctx.rng,
        )
        .map(|mut genome| {
            genome.mutate(self.mutation_rate, organism.phenotype.registry(), ctx.rng);
            genome
        });

        match (self.on_offspring.as_mut(), child) {
            (Some(callback), Ok(genome)) => {
                tracing::debug!(
                    parent = %organism.id,
                    mate = %mate.id,
                    fitness,
                    "Offspring conceived"
                );
                callback(Offspring {
                    genome,
                    parents: (organism.id, mate.id),
                    position: organism.position,
                });
                BehaviorResult::completed(cost, format!("mated with {}", mate.id))
            }
            (None, Ok(_)) => BehaviorResult::in_progress(cost, "no offspring callback"),
            (_, Err(err)) => BehaviorResult::in_progress(cost, format!("crossover failed: {err}")),
        }
    }

    fn energy_cost(&self, _organism: &Organism) -> f32 {
        self.breeding_cost
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
