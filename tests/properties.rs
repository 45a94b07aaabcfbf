mod common;

use common::organism_with_traits;
use proptest::prelude::*;
use std::sync::Arc;
use verdant_core::behavior::{
    escape_chance, mating_fitness, Behavior, FeedingBehavior, HuntingBehavior, MatingBehavior,
    MovementBehavior, RestBehavior, ZoochoryBehavior,
};
use verdant_core::config::{BehaviorConfig, DispersalConfig, EvolutionConfig};
use verdant_core::genetics::{traits, GeneLogic};
use verdant_core::rng::seeded;
use verdant_core::systems::{CombatSystem, FeedingSystem, PerceptionSystem, SeedDispersalSystem};
use verdant_data::{ChromosomeType, GeneDefinition, GeneLimits};

fn standard_behaviors() -> Vec<Box<dyn Behavior>> {
    let config = BehaviorConfig::default();
    let perception = Arc::new(PerceptionSystem::default());
    vec![
        Box::new(FeedingBehavior::new(
            Arc::clone(&perception),
            Arc::new(FeedingSystem::default()),
            Arc::new(SeedDispersalSystem::default()),
            &config,
        )),
        Box::new(HuntingBehavior::new(
            Arc::clone(&perception),
            Arc::new(CombatSystem),
            &config,
        )),
        Box::new(MatingBehavior::new(
            perception,
            &config,
            &EvolutionConfig::default(),
        )),
        Box::new(RestBehavior::new(&config)),
        Box::new(MovementBehavior::new()),
        Box::new(ZoochoryBehavior::new(&DispersalConfig::default())),
    ]
}

prop_compose! {
    fn arb_limits()(
        min in -100.0f32..100.0f32,
        span in 0.0f32..50.0f32,
        creep in 0.0f32..10.0f32
    ) -> GeneLimits {
        GeneLimits::new(min, min + span, creep)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn creep_never_leaves_limits(
        limits in arb_limits(),
        start in -500.0f32..500.0f32,
        steps in 1usize..50,
        seed in any::<u64>()
    ) {
        let gene = GeneDefinition::new("g", ChromosomeType::Morphology, limits);
        let mut rng = seeded(seed);
        let mut value = gene.clamp_value(start);
        for _ in 0..steps {
            value = gene.apply_creep(value, &mut rng);
            prop_assert!(value >= limits.min_value && value <= limits.max_value);
        }
    }

    #[test]
    fn random_values_within_limits(limits in arb_limits(), seed in any::<u64>()) {
        let gene = GeneDefinition::new("g", ChromosomeType::Sensory, limits);
        let mut rng = seeded(seed);
        let value = gene.create_random_value(&mut rng);
        prop_assert!(value >= limits.min_value && value <= limits.max_value);
    }

    #[test]
    fn escape_chance_is_probability(flee in 0.0f32..1e6, pursue in 0.0f32..1e6) {
        let chance = escape_chance(flee, pursue);
        prop_assert!((0.0..=1.0).contains(&chance));
    }

    #[test]
    fn fitness_non_increasing_past_ideal(
        distance in 0.0f32..20.0,
        sight in 1.0f32..30.0,
        a in 0.8f32..1.0,
        b in 0.8f32..1.0
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            mating_fitness(distance, sight, high, 0.8) <= mating_fitness(distance, sight, low, 0.8)
        );
    }

    #[test]
    fn priorities_stay_in_range(
        energy_level in 0.0f32..=1.0,
        fatigue in 0.0f32..50.0,
        hunger_threshold in 0.0f32..1.0,
        fatigue_threshold in 0.1f32..10.0,
        mate_drive in 0.0f32..5.0
    ) {
        let mut organism = organism_with_traits(&[
            (traits::HUNGER_THRESHOLD, hunger_threshold),
            (traits::FATIGUE_THRESHOLD, fatigue_threshold),
            (traits::MATE_DRIVE, mate_drive),
            (traits::LOCOMOTION, 1.0),
        ]);
        organism.energy = organism.max_energy * energy_level;
        organism.fatigue = fatigue;

        for behavior in standard_behaviors() {
            let priority = behavior.priority(&organism);
            prop_assert!((0.0..=100.0).contains(&priority), "{} -> {}", behavior.id(), priority);
            if matches!(behavior.id(), "feeding" | "hunting" | "mating" | "rest") {
                prop_assert!(
                    (50.0..=75.0).contains(&priority),
                    "{} -> {}",
                    behavior.id(),
                    priority
                );
            }
        }
    }
}
