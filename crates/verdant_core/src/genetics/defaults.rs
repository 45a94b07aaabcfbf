//! The universal gene set carried by every creature.

use super::traits;
use verdant_data::{
    ChromosomeType, DominanceType, EffectType, GeneDefinition, GeneLimits, TraitModulation,
};

/// Gene blueprints covering every trait the standard behaviors read.
#[must_use]
pub fn universal_genes() -> Vec<GeneDefinition> {
    vec![
        // Locomotion
        GeneDefinition::new(
            "locomotion",
            ChromosomeType::Locomotion,
            GeneLimits::new(0.0, 1.0, 0.05),
        )
        .with_effect(traits::LOCOMOTION, EffectType::Direct, 1.0)
        .with_effect(traits::PURSUE_SPEED, EffectType::Additive, 5.0)
        .with_effect(traits::FLEE_SPEED, EffectType::Additive, 5.0)
        .with_maintenance(0.02, 2.0)
        .with_modulation(TraitModulation::AgeAndHealth),
        GeneDefinition::new("sprint", ChromosomeType::Locomotion, GeneLimits::new(0.0, 10.0, 0.5))
            .with_effect(traits::PURSUE_SPEED, EffectType::Additive, 1.0)
            .with_maintenance(0.01, 1.5)
            .with_modulation(TraitModulation::Health),
        GeneDefinition::new("evasion", ChromosomeType::Locomotion, GeneLimits::new(0.0, 10.0, 0.5))
            .with_effect(traits::FLEE_SPEED, EffectType::Additive, 1.0)
            .with_maintenance(0.01, 1.5)
            .with_modulation(TraitModulation::Health),
        // Morphology
        GeneDefinition::new(
            "body_size",
            ChromosomeType::Morphology,
            GeneLimits::new(0.1, 2.0, 0.05),
        )
        .with_effect(traits::SIZE, EffectType::Direct, 1.0)
        .with_effect(traits::METABOLISM, EffectType::Additive, 0.25)
        .with_dominance(DominanceType::Complete)
        .with_maintenance(0.015, 1.0)
        .with_modulation(TraitModulation::Age),
        GeneDefinition::new(
            "fur_density",
            ChromosomeType::Morphology,
            GeneLimits::new(0.0, 1.0, 0.05),
        )
        .with_effect(traits::FUR_DENSITY, EffectType::Direct, 1.0)
        .with_effect(traits::COLD_TOLERANCE, EffectType::Conditional, 10.0)
        .with_maintenance(0.005, 1.0),
        // Metabolism
        GeneDefinition::new(
            "metabolic_rate",
            ChromosomeType::Metabolism,
            GeneLimits::new(0.5, 1.5, 0.05),
        )
        .with_effect(traits::METABOLISM, EffectType::Additive, 1.0)
        .with_maintenance(0.01, 1.0),
        GeneDefinition::new(
            "plant_digestion",
            ChromosomeType::Metabolism,
            GeneLimits::new(0.0, 1.0, 0.05),
        )
        .with_effect(traits::PLANT_DIGESTION, EffectType::Direct, 1.0)
        .with_maintenance(0.01, 1.5),
        GeneDefinition::new(
            "meat_digestion",
            ChromosomeType::Metabolism,
            GeneLimits::new(0.0, 1.0, 0.05),
        )
        .with_effect(traits::HUNT_INSTINCT, EffectType::Multiplicative, 1.2)
        .with_maintenance(0.01, 1.5),
        GeneDefinition::new(
            "gut_acidity",
            ChromosomeType::Metabolism,
            GeneLimits::new(0.0, 1.0, 0.05),
        )
        .with_effect(traits::GUT_ACIDITY, EffectType::Direct, 1.0),
        GeneDefinition::new(
            "fat_storage",
            ChromosomeType::Metabolism,
            GeneLimits::new(0.0, 10.0, 0.5),
        )
        .with_effect(traits::HUNGER, EffectType::Direct, 1.0)
        .with_maintenance(0.01, 1.0),
        GeneDefinition::new(
            "regeneration",
            ChromosomeType::Metabolism,
            GeneLimits::new(0.0, 1.0, 0.05),
        )
        .with_effect(traits::REGENERATION, EffectType::Direct, 1.0)
        .with_maintenance(0.02, 2.0)
        .with_modulation(TraitModulation::Age),
        // Behavior
        GeneDefinition::new("aggression", ChromosomeType::Behavior, GeneLimits::new(0.0, 1.0, 0.05))
            .with_effect(traits::HUNT_INSTINCT, EffectType::Multiplicative, 1.0)
            .with_dominance(DominanceType::Complete),
        GeneDefinition::new(
            "hunger_threshold",
            ChromosomeType::Behavior,
            GeneLimits::new(0.2, 0.9, 0.03),
        )
        .with_effect(traits::HUNGER_THRESHOLD, EffectType::Direct, 1.0),
        GeneDefinition::new("stamina", ChromosomeType::Behavior, GeneLimits::new(1.0, 6.0, 0.2))
            .with_effect(traits::FATIGUE_THRESHOLD, EffectType::Direct, 1.0)
            .with_maintenance(0.005, 1.0),
        // Sensory
        GeneDefinition::new("sight", ChromosomeType::Sensory, GeneLimits::new(2.0, 30.0, 1.0))
            .with_effect(traits::SIGHT_RANGE, EffectType::Direct, 1.0)
            .with_maintenance(0.02, 2.0)
            .with_modulation(TraitModulation::Age),
        // Reproduction
        GeneDefinition::new("libido", ChromosomeType::Reproduction, GeneLimits::new(0.0, 1.0, 0.05))
            .with_effect(traits::MATE_DRIVE, EffectType::Direct, 1.0)
            .with_dominance(DominanceType::Overdominant),
        // Defense and weapons
        GeneDefinition::new("teeth", ChromosomeType::Defense, GeneLimits::new(0.0, 1.0, 0.05))
            .with_effect(traits::TEETH, EffectType::Direct, 1.0)
            .with_effect(traits::JAW_STRENGTH, EffectType::Additive, 0.5)
            .with_maintenance(0.01, 1.5),
        GeneDefinition::new("jaw", ChromosomeType::Defense, GeneLimits::new(0.0, 1.0, 0.05))
            .with_effect(traits::JAW_STRENGTH, EffectType::Additive, 0.5),
        GeneDefinition::new("claws", ChromosomeType::Defense, GeneLimits::new(0.0, 1.0, 0.05))
            .with_effect(traits::CLAWS, EffectType::Direct, 1.0)
            .with_maintenance(0.01, 1.5),
        GeneDefinition::new(
            "armor_plating",
            ChromosomeType::Defense,
            GeneLimits::new(0.0, 1.0, 0.05),
        )
        .with_effect(traits::ARMOR, EffectType::Threshold, 0.3)
        .with_dominance(DominanceType::Recessive)
        .with_maintenance(0.03, 2.0),
    ]
}
