use crate::genetics::{traits, Phenotype};
use crate::world::PlantView;

/// Nutrient and plant-damage arithmetic for one bite.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeedingOutcome {
    pub nutrition_gained: f32,
    /// Biomass removed from the plant.
    pub plant_damage: f32,
    pub seeds_ingested: u32,
}

#[derive(Debug, Clone)]
pub struct FeedingSystem {
    base_bite: f32,
}

impl Default for FeedingSystem {
    fn default() -> Self {
        Self { base_bite: 1.0 }
    }
}

impl FeedingSystem {
    /// How much of a plant's toughness the eater's jaw overcomes, in `[0, 1]`.
    #[must_use]
    pub fn edibility(&self, eater: &Phenotype, plant: &PlantView) -> f32 {
        let jaw = eater.trait_or(traits::JAW_STRENGTH, 0.5);
        (1.0 - plant.toughness + jaw * 0.5).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn attempt_to_eat(&self, eater: &Phenotype, plant: &PlantView) -> FeedingOutcome {
        if !plant.edible || plant.nutrition <= 0.0 {
            return FeedingOutcome::default();
        }
        let edibility = self.edibility(eater, plant);
        let size = eater.trait_or(traits::SIZE, 1.0).max(0.1);
        let digestion = eater.trait_or(traits::PLANT_DIGESTION, 0.0).clamp(0.0, 1.0);

        let plant_damage = (self.base_bite * size * edibility).min(plant.nutrition);
        FeedingOutcome {
            nutrition_gained: plant_damage * digestion,
            plant_damage,
            seeds_ingested: if edibility > 0.0 { plant.fruit_seeds } else { 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{phenotype_with_traits, plant_view};
    use verdant_data::Position;

    #[test]
    fn test_bite_limited_by_plant_biomass() {
        let eater = phenotype_with_traits(&[
            (traits::PLANT_DIGESTION, 0.5),
            (traits::SIZE, 10.0),
            (traits::JAW_STRENGTH, 1.0),
        ]);
        let mut plant = plant_view(1, Position::default());
        plant.nutrition = 2.0;
        plant.toughness = 0.0;
        let outcome = FeedingSystem::default().attempt_to_eat(&eater, &plant);
        assert_eq!(outcome.plant_damage, 2.0);
        assert_eq!(outcome.nutrition_gained, 1.0);
    }

    #[test]
    fn test_tough_plant_resists_weak_jaw() {
        let eater = phenotype_with_traits(&[
            (traits::PLANT_DIGESTION, 1.0),
            (traits::JAW_STRENGTH, 0.0),
        ]);
        let mut plant = plant_view(1, Position::default());
        plant.toughness = 1.0;
        plant.fruit_seeds = 4;
        let outcome = FeedingSystem::default().attempt_to_eat(&eater, &plant);
        assert_eq!(outcome, FeedingOutcome::default());
    }

    #[test]
    fn test_fruit_seeds_swallowed() {
        let eater = phenotype_with_traits(&[(traits::PLANT_DIGESTION, 1.0)]);
        let mut plant = plant_view(1, Position::default());
        plant.fruit_seeds = 3;
        let outcome = FeedingSystem::default().attempt_to_eat(&eater, &plant);
        assert_eq!(outcome.seeds_ingested, 3);
        assert!(outcome.nutrition_gained > 0.0);
    }
}
