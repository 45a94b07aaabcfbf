use crate::genetics::traits;
use crate::organism::Organism;
use crate::world::{CreatureView, PlantView, WorldView};

/// Nearest-target queries by kind within a detection range.
#[derive(Debug, Clone)]
pub struct PerceptionSystem {
    default_range: f32,
}

impl Default for PerceptionSystem {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl PerceptionSystem {
    #[must_use]
    pub fn new(default_range: f32) -> Self {
        Self { default_range }
    }

    /// Sight range from the phenotype, scaled down by poor health.
    #[must_use]
    pub fn detection_range(&self, organism: &Organism) -> f32 {
        let sight = organism
            .phenotype
            .trait_or(traits::SIGHT_RANGE, self.default_range);
        (sight * (0.5 + 0.5 * organism.health.clamp(0.0, 1.0))).max(0.0)
    }

    #[must_use]
    pub fn nearest_plant(
        &self,
        world: &dyn WorldView,
        organism: &Organism,
        range: f32,
    ) -> Option<PlantView> {
        world
            .plants_within(organism.position, range)
            .into_iter()
            .filter(|plant| plant.edible && plant.nutrition > 0.0)
            .min_by(|a, b| {
                organism
                    .position
                    .distance(&a.position)
                    .total_cmp(&organism.position.distance(&b.position))
            })
    }

    /// Nearest other creature no larger than the hunter.
    #[must_use]
    pub fn find_prey(
        &self,
        world: &dyn WorldView,
        organism: &Organism,
        range: f32,
    ) -> Option<CreatureView> {
        let own_size = organism.phenotype.trait_or(traits::SIZE, 1.0);
        world
            .creatures_within(organism.position, range)
            .into_iter()
            .filter(|c| c.id != organism.id && c.size <= own_size && c.health > 0.0)
            .min_by(|a, b| {
                organism
                    .position
                    .distance(&a.position)
                    .total_cmp(&organism.position.distance(&b.position))
            })
    }

    /// Mature creatures other than `organism` within range.
    #[must_use]
    pub fn mate_candidates(
        &self,
        world: &dyn WorldView,
        organism: &Organism,
        range: f32,
        maturity_age: f32,
    ) -> Vec<CreatureView> {
        world
            .creatures_within(organism.position, range)
            .into_iter()
            .filter(|c| c.id != organism.id && c.age_normalized >= maturity_age)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{creature_view, organism_with_traits, plant_view, StaticWorld};
    use verdant_data::{OrganismId, Position};

    #[test]
    fn test_detection_range_defaults_and_health() {
        let perception = PerceptionSystem::new(8.0);
        let mut organism = organism_with_traits(&[]);
        assert_eq!(perception.detection_range(&organism), 8.0);
        organism.health = 0.0;
        assert_eq!(perception.detection_range(&organism), 4.0);

        let sharp = organism_with_traits(&[(traits::SIGHT_RANGE, 20.0)]);
        assert_eq!(perception.detection_range(&sharp), 20.0);
    }

    #[test]
    fn test_nearest_plant_skips_inedible() {
        let organism = organism_with_traits(&[]);
        let mut far = plant_view(1, Position::new(5.0, 5.0));
        far.position = Position::new(4.0, 0.0);
        let mut near_inedible = plant_view(2, Position::new(1.0, 0.0));
        near_inedible.edible = false;
        let world = StaticWorld {
            plants: vec![far, near_inedible],
            creatures: vec![],
        };
        let found = PerceptionSystem::default().nearest_plant(&world, &organism, 10.0);
        assert_eq!(found.map(|p| p.id.0), Some(1));
    }

    #[test]
    fn test_find_prey_respects_size_and_self() {
        let mut hunter = organism_with_traits(&[(traits::SIZE, 1.0)]);
        hunter.id = OrganismId(1);
        let mut big = creature_view(2, Position::new(1.0, 0.0));
        big.size = 2.0;
        let small = creature_view(3, Position::new(3.0, 0.0));
        let itself = creature_view(1, Position::new(0.0, 0.0));
        let world = StaticWorld {
            plants: vec![],
            creatures: vec![big, small, itself],
        };
        let prey = PerceptionSystem::default().find_prey(&world, &hunter, 10.0);
        assert_eq!(prey.map(|p| p.id), Some(OrganismId(3)));
    }

    #[test]
    fn test_mate_candidates_filter_juveniles() {
        let organism = organism_with_traits(&[]);
        let mut juvenile = creature_view(5, Position::new(1.0, 1.0));
        juvenile.age_normalized = 0.05;
        let adult = creature_view(6, Position::new(1.0, 1.0));
        let world = StaticWorld {
            plants: vec![],
            creatures: vec![juvenile, adult],
        };
        let mates = PerceptionSystem::default().mate_candidates(&world, &organism, 10.0, 0.1);
        assert_eq!(mates.len(), 1);
        assert_eq!(mates[0].id, OrganismId(6));
    }
}
