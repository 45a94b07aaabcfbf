use std::sync::Arc;
use verdant_core::config::AppConfig;
use verdant_core::genetics::{GeneRegistry, GenomeLogic, Phenotype};
use verdant_core::rng::seeded;
use verdant_core::Organism;
use verdant_data::{
    ChromosomeType, DominanceType, EffectType, Gene, GeneDefinition, GeneLimits, Genome,
    OrganismId, Position,
};
use verdant_lib::Simulation;

struct CreatureSpec {
    position: Position,
    genes: Vec<(String, f32)>,
    energy_level: Option<f32>,
}

#[allow(dead_code)]
pub struct SimulationBuilder {
    config: AppConfig,
    creatures: Vec<CreatureSpec>,
    plants: Vec<(i32, i32)>,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.width = 20;
        config.world.height = 20;
        config.world.initial_creatures = 0;
        config.world.initial_plants = 0;
        config.world.plant_regrowth = 0.0;
        config.world.seed = Some(42);
        Self {
            config,
            creatures: Vec::new(),
            plants: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Random universal genome with the listed genes fixed homozygous.
    pub fn with_creature(mut self, x: f32, y: f32, genes: &[(&str, f32)]) -> Self {
        self.creatures.push(CreatureSpec {
            position: Position::new(x, y),
            genes: genes.iter().map(|(id, v)| ((*id).to_string(), *v)).collect(),
            energy_level: None,
        });
        self
    }

    /// Sets the starting energy ratio of the most recently added creature.
    pub fn with_energy_level(mut self, level: f32) -> Self {
        if let Some(last) = self.creatures.last_mut() {
            last.energy_level = Some(level);
        }
        self
    }

    pub fn with_plant(mut self, x: i32, y: i32) -> Self {
        self.plants.push((x, y));
        self
    }

    pub fn build(self) -> (Simulation, Vec<OrganismId>) {
        let seed = self.config.world.seed.unwrap_or(0);
        let mut sim =
            Simulation::new(self.config).expect("Failed to create simulation in test builder");
        let registry = Arc::clone(sim.services().registry());
        let mut rng = seeded(seed ^ 0x5eed);

        let mut ids = Vec::new();
        for creature in self.creatures {
            let mut genome = Genome::random_with_rng(&registry, &mut rng);
            for (id, value) in &creature.genes {
                let dominance = genome
                    .get(id)
                    .map_or(DominanceType::Incomplete, |g| g.dominance);
                genome.insert(Gene::homozygous(id.clone(), *value, dominance));
            }
            let id = sim.spawn(genome, creature.position, 0);
            if let Some(level) = creature.energy_level {
                let organism = sim.organism_mut(id).expect("just spawned");
                organism.energy = organism.max_energy * level;
            }
            ids.push(id);
        }
        for (x, y) in self.plants {
            sim.plant_at(x, y);
        }
        (sim, ids)
    }
}

/// Organism whose traits equal the given values exactly.
#[allow(dead_code)]
pub fn organism_with_traits(values: &[(&str, f32)]) -> Organism {
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
            .expect("unique trait names");
        genome.insert(Gene::homozygous(gene_id, value, DominanceType::Incomplete));
    }
    Organism::new(
        OrganismId(0),
        Phenotype::new(Arc::new(registry), Arc::new(genome)),
        Position::new(0.0, 0.0),
    )
}
