//! The tick driver.
//!
//! Each tick every organism is snapshotted, its phenotype refreshed, and its
//! controller asked for one behavior. Commands returned by behaviors are
//! applied after all organisms have acted, then seeds are processed, the dead
//! removed (with their behavior side tables cleared) and newborns added.

use super::climate::Climate;
use super::world::{PlantField, WorldFrame};
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Instant;
use verdant_core::behavior::{BehaviorContext, MatingBehavior, Offspring, ZoochoryBehavior};
use verdant_core::config::AppConfig;
use verdant_core::genetics::{traits, GeneRegistry, GenomeLogic, Phenotype, TraitCache};
use verdant_core::metrics::{self, Metrics};
use verdant_core::rng::{self, RandomExt, SimRng};
use verdant_core::{BehaviorController, IdAllocator, Organism, OrganismServices, WorldCommand};
use verdant_data::{DispersalEvent, EnvironmentState, Genome, OrganismId, Position};

/// Energy gained per unit of damage dealt.
const MEAT_ENERGY: f32 = 10.0;

/// Counts for one completed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub births: usize,
    pub deaths: usize,
    pub seeds_dispersed: usize,
    pub plants_germinated: usize,
    pub organisms: usize,
    pub plants: usize,
}

pub struct Simulation {
    config: AppConfig,
    services: OrganismServices,
    controller: BehaviorController,
    organisms: Vec<Organism>,
    plants: PlantField,
    climate: Climate,
    ids: IdAllocator,
    rng: SimRng,
    tick: u64,
    environment: EnvironmentState,
    metrics: Arc<Metrics>,
    births: Receiver<Offspring>,
}

impl Simulation {
    /// Builds an empty world; use [`Simulation::populate`] to seed it.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = config
            .world
            .seed
            .or(config.world.deterministic.then_some(0));
        let registry = Arc::new(GeneRegistry::universal());
        let services = OrganismServices::new(registry, &config);
        let mut controller = services.build_controller(&config);

        let (sender, births) = mpsc::channel();
        if let Some(mating) = controller.find_mut::<MatingBehavior>() {
            mating.set_offspring_callback(Box::new(move |offspring| {
                // receiver lives as long as the simulation
                let _ = sender.send(offspring);
            }));
        }

        let climate = Climate::from_config(&config.world);
        tracing::info!(
            width = config.world.width,
            height = config.world.height,
            seed = ?seed,
            fingerprint = %config.fingerprint(),
            "Simulation created"
        );

        Ok(Self {
            plants: PlantField::new(config.world.width, config.world.height),
            environment: climate.environment_at(0),
            climate,
            services,
            controller,
            organisms: Vec::new(),
            ids: IdAllocator::new(),
            rng: rng::from_seed_option(seed),
            tick: 0,
            metrics: Arc::new(Metrics::new()),
            births,
            config,
        })
    }

    /// Spawns the configured initial creatures and plants.
    pub fn populate(&mut self) {
        for _ in 0..self.config.world.initial_plants {
            self.plants.plant_random(&mut self.rng);
        }
        for _ in 0..self.config.world.initial_creatures {
            let genome = Genome::random_with_rng(self.services.registry(), &mut self.rng);
            let x = self.rng.uniform(0.0, f32::from(self.config.world.width));
            let y = self.rng.uniform(0.0, f32::from(self.config.world.height));
            self.spawn(genome, Position::new(x, y), 0);
        }
    }

    /// Adds an organism with the given genome and returns its id.
    pub fn spawn(&mut self, genome: Genome, position: Position, generation: u32) -> OrganismId {
        let cache = TraitCache::with_tolerances(
            self.config.cache.age_tolerance,
            self.config.cache.temperature_tolerance,
            self.config.cache.health_tolerance,
        );
        let phenotype =
            Phenotype::with_cache(Arc::clone(self.services.registry()), Arc::new(genome), cache);
        let mut organism = Organism::new(self.ids.next_id(), phenotype, position);
        organism.generation = generation;
        let id = organism.id;
        self.organisms.push(organism);
        id
    }

    pub fn plant_at(&mut self, x: i32, y: i32) -> Option<verdant_data::PlantId> {
        self.plants.plant_at(x, y, &mut self.rng)
    }

    #[must_use]
    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    #[must_use]
    pub fn organism(&self, id: OrganismId) -> Option<&Organism> {
        self.organisms.iter().find(|o| o.id == id)
    }

    pub fn organism_mut(&mut self, id: OrganismId) -> Option<&mut Organism> {
        self.organisms.iter_mut().find(|o| o.id == id)
    }

    #[must_use]
    pub fn plants(&self) -> &PlantField {
        &self.plants
    }

    #[must_use]
    pub fn controller(&self) -> &BehaviorController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut BehaviorController {
        &mut self.controller
    }

    #[must_use]
    pub fn services(&self) -> &OrganismServices {
        &self.services
    }

    #[must_use]
    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn environment(&self) -> EnvironmentState {
        self.environment
    }

    /// Runs `ticks` ticks, stopping early on extinction.
    pub fn run(&mut self, ticks: u64) -> Vec<TickReport> {
        let mut reports = Vec::new();
        for _ in 0..ticks {
            let report = self.tick();
            reports.push(report);
            if report.organisms == 0 {
                self.metrics.log_event("extinction", &format!("tick {}", report.tick));
                break;
            }
        }
        reports
    }

    pub fn tick(&mut self) -> TickReport {
        let started = Instant::now();
        self.tick += 1;
        self.environment = self.climate.environment_at(self.tick);
        let mut report = TickReport {
            tick: self.tick,
            ..Default::default()
        };

        let commands = self.run_behaviors();
        let mut events = self.apply_commands(commands);
        events.extend(self.process_carried_seeds());
        report.seeds_dispersed = events.len();
        report.plants_germinated = self.germinate(&events);
        report.deaths = self.remove_dead();
        report.births = self.deliver_births();
        self.grow_plants();

        report.organisms = self.organisms.len();
        report.plants = self.plants.len();
        self.metrics
            .record_tick(started.elapsed(), report.organisms, report.plants);
        report
    }

    fn run_behaviors(&mut self) -> Vec<(OrganismId, WorldCommand)> {
        let frame = WorldFrame::capture(&self.organisms, &self.plants);
        let energy = &self.config.energy;
        let (width, height) = (self.config.world.width, self.config.world.height);
        let health = self.services.health();
        let mut commands = Vec::new();

        for organism in &mut self.organisms {
            organism.age_ticks += 1;
            let state = organism.snapshot();
            organism.phenotype.update_context(&self.environment, &state);

            let mut ctx = BehaviorContext::new(state, self.tick, &mut self.rng)
                .with_world(&frame, width, height)
                .with_environment(self.environment);
            let result = self.controller.update(organism, &mut ctx);
            if result.executed {
                if let Some(id) = self.controller.current_behavior() {
                    self.metrics.record_behavior(id);
                }
            }

            let upkeep = energy.idle_cost
                + organism.phenotype.maintenance_cost() * energy.maintenance_multiplier;
            organism.energy -= result.energy_cost + upkeep;
            organism.fatigue += result.energy_cost * energy.fatigue_per_energy;
            if !health.is_dead(organism.health) {
                organism.health = health.regenerate(
                    organism.health,
                    organism.phenotype.trait_or(traits::REGENERATION, 0.0),
                    0.1,
                );
            }
            commands.extend(result.commands.into_iter().map(|c| (organism.id, c)));
        }
        commands
    }

    fn apply_commands(&mut self, commands: Vec<(OrganismId, WorldCommand)>) -> Vec<DispersalEvent> {
        let index: HashMap<OrganismId, usize> = self
            .organisms
            .iter()
            .enumerate()
            .map(|(i, o)| (o.id, i))
            .collect();
        let mut events = Vec::new();

        for (actor, command) in commands {
            match command {
                WorldCommand::EatPlant {
                    plant,
                    bite,
                    nutrition,
                } => {
                    let eaten = self.plants.consume(plant, bite);
                    if eaten <= 0.0 {
                        continue;
                    }
                    if let Some(&eater_idx) = index.get(&actor) {
                        let eater = &mut self.organisms[eater_idx];
                        let gained = nutrition * eaten / bite;
                        eater.energy = (eater.energy + gained).min(eater.max_energy);
                    }
                }
                WorldCommand::DamageCreature {
                    attacker,
                    target,
                    damage,
                } => {
                    let Some(&target_idx) = index.get(&target) else {
                        continue;
                    };
                    let victim = &mut self.organisms[target_idx];
                    if !victim.is_alive() {
                        continue;
                    }
                    // armor was already applied when the attack was resolved
                    victim.health = self.services.health().apply_damage(victim.health, damage, 0.0);
                    if let Some(&attacker_idx) = index.get(&attacker) {
                        let hunter = &mut self.organisms[attacker_idx];
                        hunter.energy =
                            (hunter.energy + damage * MEAT_ENERGY).min(hunter.max_energy);
                    }
                }
                WorldCommand::SeedsIngested {
                    origin_x,
                    origin_y,
                    count,
                    viability,
                } => {
                    if let Some(zoochory) = self.controller.find_mut::<ZoochoryBehavior>() {
                        zoochory.consume_seeds(actor, origin_x, origin_y, count, viability);
                    }
                }
                WorldCommand::BurrAttached {
                    strategy,
                    origin_x,
                    origin_y,
                } => {
                    if let Some(zoochory) = self.controller.find_mut::<ZoochoryBehavior>() {
                        zoochory.attach_burr(actor, strategy, origin_x, origin_y);
                    }
                }
                WorldCommand::DisperseSeed(event) => events.push(event),
            }
        }
        self.plants.remove_depleted();
        events
    }

    fn process_carried_seeds(&mut self) -> Vec<DispersalEvent> {
        let Some(zoochory) = self.controller.find_mut::<ZoochoryBehavior>() else {
            return Vec::new();
        };
        let mut events = Vec::new();
        for organism in &self.organisms {
            let (x, y) = organism.position.tile();
            events.extend(zoochory.process_organism_seeds(organism.id, x, y, &mut self.rng));
        }
        events
    }

    fn germinate(&mut self, events: &[DispersalEvent]) -> usize {
        self.metrics
            .add_to_counter(metrics::SEEDS_DISPERSED, events.len() as u64);
        let mut germinated = 0;
        for event in events {
            tracing::debug!(
                method = %event.method,
                from = ?(event.origin_x, event.origin_y),
                to = ?(event.target_x, event.target_y),
                viability = event.seed_viability,
                "Seed dispersed"
            );
            if self.plants.len() >= self.config.world.max_plants {
                continue;
            }
            if self
                .services
                .dispersal()
                .germinates(event.seed_viability, &mut self.rng)
                && self
                    .plants
                    .plant_at(event.target_x, event.target_y, &mut self.rng)
                    .is_some()
            {
                germinated += 1;
            }
        }
        self.metrics
            .add_to_counter(metrics::PLANTS_GERMINATED, germinated as u64);
        germinated
    }

    fn remove_dead(&mut self) -> usize {
        let (alive, dead): (Vec<_>, Vec<_>) = std::mem::take(&mut self.organisms)
            .into_iter()
            .partition(Organism::is_alive);
        self.organisms = alive;
        for organism in &dead {
            tracing::debug!(
                organism = %organism.id,
                age = organism.age_ticks,
                generation = organism.generation,
                "Organism died"
            );
            self.controller.clear_organism_data(organism.id);
            self.metrics.increment_counter(metrics::DEATHS);
        }
        dead.len()
    }

    fn deliver_births(&mut self) -> usize {
        let offspring: Vec<Offspring> = self.births.try_iter().collect();
        let mut born = 0;
        for child in offspring {
            if self.organisms.len() >= self.config.world.max_creatures {
                break;
            }
            let generation = [child.parents.0, child.parents.1]
                .iter()
                .filter_map(|id| self.organism(*id).map(|o| o.generation))
                .max()
                .map_or(0, |g| g + 1);
            let id = self.spawn(child.genome, child.position, generation);
            let fraction = self.config.energy.offspring_energy_fraction;
            if let Some(newborn) = self.organism_mut(id) {
                newborn.energy = newborn.max_energy * fraction;
            }
            tracing::debug!(organism = %id, generation, parents = ?child.parents, "Organism born");
            self.metrics.increment_counter(metrics::BIRTHS);
            born += 1;
        }
        born
    }

    fn grow_plants(&mut self) {
        let multiplier = self.climate.season_at(self.tick).regrowth_multiplier();
        self.plants
            .regrow(self.config.world.plant_regrowth * multiplier);
        if self.plants.len() < self.config.world.max_plants
            && self.rng.chance(self.config.world.plant_regrowth * multiplier)
        {
            self.plants.plant_random(&mut self.rng);
        }
    }
}
