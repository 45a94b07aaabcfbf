//! Fixtures shared by unit tests.

use crate::genetics::{GeneRegistry, Phenotype};
use crate::organism::Organism;
use crate::world::{CreatureView, PlantView, WorldView};
use std::sync::Arc;
use verdant_data::{
    ChromosomeType, DominanceType, EffectType, Gene, GeneDefinition, GeneLimits, Genome,
    OrganismId, PlantId, Position,
};

/// Phenotype whose traits equal the given values exactly.
pub fn phenotype_with_traits(values: &[(&str, f32)]) -> Phenotype {
    let mut registry = GeneRegistry::new();
    let mut genome = Genome::new();
    for &(name, value) in values {
        let gene_id = format!("{name}_gene");
        registry
            .register(
                GeneDefinition::new(
                    gene_id.clone(),
                    ChromosomeType::Behavior,
                    GeneLimits::new(-1000.0, 1000.0, 0.1),
                )
                .with_effect(name, EffectType::Direct, 1.0),
            )
            .unwrap();
        genome.insert(Gene::homozygous(gene_id, value, DominanceType::Incomplete));
    }
    Phenotype::new(Arc::new(registry), Arc::new(genome))
}

pub fn organism_with_traits(values: &[(&str, f32)]) -> Organism {
    Organism::new(
        OrganismId(0),
        phenotype_with_traits(values),
        Position::new(0.0, 0.0),
    )
}

pub fn creature_view(id: u64, position: Position) -> CreatureView {
    CreatureView {
        id: OrganismId(id),
        position,
        genome: Arc::new(Genome::new()),
        size: 0.5,
        flee_speed: 1.0,
        armor: 0.0,
        health: 1.0,
        age_normalized: 0.5,
    }
}

pub fn plant_view(id: u64, position: Position) -> PlantView {
    PlantView {
        id: PlantId(id),
        position,
        nutrition: 5.0,
        toughness: 0.2,
        edible: true,
        fruit_seeds: 0,
        seed_viability: 0.8,
        burr_strategy: None,
    }
}

/// World backed by fixed lists; range queries filter by distance.
#[derive(Default)]
pub struct StaticWorld {
    pub creatures: Vec<CreatureView>,
    pub plants: Vec<PlantView>,
}

impl WorldView for StaticWorld {
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
