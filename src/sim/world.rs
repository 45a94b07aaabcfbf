//! In-memory plant field and the per-tick world view handed to behaviors.

use rand::Rng;
use verdant_core::genetics::traits;
use verdant_core::rng::RandomExt;
use verdant_core::{CreatureView, Organism, PlantView, WorldView};
use verdant_data::{PlantId, Position};

const FRUIT_SEEDS: u32 = 3;
const MAX_NUTRITION: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub id: PlantId,
    pub position: Position,
    pub nutrition: f32,
    pub toughness: f32,
    pub fruit_seeds: u32,
    pub seed_viability: f32,
    pub burr_strategy: Option<u8>,
}

impl Plant {
    #[must_use]
    pub fn view(&self) -> PlantView {
        PlantView {
            id: self.id,
            position: self.position,
            nutrition: self.nutrition,
            toughness: self.toughness,
            edible: self.nutrition > 0.0,
            fruit_seeds: self.fruit_seeds,
            seed_viability: self.seed_viability,
            burr_strategy: self.burr_strategy,
        }
    }
}

/// Plants on a bounded grid.
#[derive(Debug, Clone)]
pub struct PlantField {
    plants: Vec<Plant>,
    next_id: u64,
    width: u16,
    height: u16,
}

impl PlantField {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            plants: Vec::new(),
            next_id: 0,
            width,
            height,
        }
    }

    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Adds a plant at the center of tile `(x, y)`; returns `None` off-grid.
    pub fn plant_at<R: Rng>(&mut self, x: i32, y: i32, rng: &mut R) -> Option<PlantId> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let id = PlantId(self.next_id);
        self.next_id += 1;
        let fruiting = rng.chance(0.5);
        self.plants.push(Plant {
            id,
            position: Position::tile_center(x, y),
            nutrition: rng.uniform(2.0, MAX_NUTRITION),
            toughness: rng.uniform(0.0, 0.8),
            fruit_seeds: if fruiting { FRUIT_SEEDS } else { 0 },
            seed_viability: rng.uniform(0.5, 1.0),
            burr_strategy: (!fruiting && rng.chance(0.5)).then(|| rng.gen_range(0..4)),
        });
        Some(id)
    }

    pub fn plant_random<R: Rng>(&mut self, rng: &mut R) -> Option<PlantId> {
        let x = rng.uniform_int(0, i32::from(self.width) - 1);
        let y = rng.uniform_int(0, i32::from(self.height) - 1);
        self.plant_at(x, y, rng)
    }

    /// Removes up to `bite` biomass and returns how much was actually eaten.
    /// Fruit is eaten with the first bite.
    pub fn consume(&mut self, id: PlantId, bite: f32) -> f32 {
        let Some(plant) = self.plants.iter_mut().find(|p| p.id == id) else {
            return 0.0;
        };
        let eaten = bite.clamp(0.0, plant.nutrition);
        plant.nutrition -= eaten;
        plant.fruit_seeds = 0;
        eaten
    }

    pub fn regrow(&mut self, rate: f32) {
        for plant in &mut self.plants {
            plant.nutrition = (plant.nutrition + rate).min(MAX_NUTRITION);
        }
    }

    /// Drops plants grazed down to nothing; returns how many were removed.
    pub fn remove_depleted(&mut self) -> usize {
        let before = self.plants.len();
        self.plants.retain(|p| p.nutrition > 0.0);
        before - self.plants.len()
    }
}

/// Read-only snapshot of the world taken at the start of a tick.
pub struct WorldFrame {
    creatures: Vec<CreatureView>,
    plants: Vec<PlantView>,
}

impl WorldFrame {
    #[must_use]
    pub fn capture(organisms: &[Organism], plants: &PlantField) -> Self {
        let creatures = organisms
            .iter()
            .map(|organism| {
                let phenotype = &organism.phenotype;
                CreatureView {
                    id: organism.id,
                    position: organism.position,
                    genome: organism.genome().clone(),
                    size: phenotype.trait_or(traits::SIZE, 1.0),
                    flee_speed: phenotype.trait_or(traits::FLEE_SPEED, 1.0),
                    armor: phenotype.trait_or(traits::ARMOR, 0.0),
                    health: organism.health,
                    age_normalized: organism.age_normalized(),
                }
            })
            .collect();
        Self {
            creatures,
            plants: plants.plants().iter().map(Plant::view).collect(),
        }
    }
}

impl WorldView for WorldFrame {
    fn creatures_within(&self, center: Position, radius: f32) -> Vec<CreatureView> {
        self.creatures
            .iter()
            .filter(|c| c.position.distance(&center) <= radius)
            .cloned()
            .collect()
    }

    fn plants_within(&self, center: Position, radius: f32) -> Vec<PlantView> {
        self.plants
            .iter()
            .filter(|p| p.position.distance(&center) <= radius)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::rng::seeded;

    #[test]
    fn test_plant_at_rejects_off_grid() {
        let mut field = PlantField::new(4, 4);
        let mut rng = seeded(1);
        assert!(field.plant_at(-1, 0, &mut rng).is_none());
        assert!(field.plant_at(4, 0, &mut rng).is_none());
        let id = field.plant_at(3, 3, &mut rng).unwrap();
        assert_eq!(field.get(id).unwrap().position, Position::new(3.5, 3.5));
    }

    #[test]
    fn test_consume_and_remove() {
        let mut field = PlantField::new(4, 4);
        let mut rng = seeded(2);
        let id = field.plant_at(1, 1, &mut rng).unwrap();
        let biomass = field.get(id).unwrap().nutrition;
        assert_eq!(field.consume(id, 100.0), biomass);
        assert_eq!(field.consume(id, 1.0), 0.0);
        assert_eq!(field.get(id).unwrap().nutrition, 0.0);
        assert!(!field.get(id).unwrap().view().edible);
        assert_eq!(field.remove_depleted(), 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_frame_range_queries() {
        let mut field = PlantField::new(10, 10);
        let mut rng = seeded(3);
        field.plant_at(0, 0, &mut rng);
        field.plant_at(9, 9, &mut rng);
        let frame = WorldFrame::capture(&[], &field);
        assert_eq!(frame.plants_within(Position::new(0.0, 0.0), 2.0).len(), 1);
        assert!(frame.creatures_within(Position::new(0.0, 0.0), 100.0).is_empty());
    }
}
