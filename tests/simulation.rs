mod common;

use common::SimulationBuilder;
use verdant_core::behavior::ZoochoryBehavior;
use verdant_core::config::AppConfig;
use verdant_core::metrics::{BIRTHS, DEATHS};
use verdant_lib::Simulation;

fn populated(seed: u64) -> Simulation {
    verdant_core::init_logging();
    let mut config = AppConfig::default();
    config.world.width = 24;
    config.world.height = 24;
    config.world.initial_creatures = 20;
    config.world.initial_plants = 80;
    config.world.seed = Some(seed);
    let mut sim = Simulation::new(config).unwrap();
    sim.populate();
    sim
}

#[test]
fn test_same_seed_replays_exactly() {
    let mut a = populated(7);
    let mut b = populated(7);
    let reports_a = a.run(200);
    let reports_b = b.run(200);
    assert_eq!(reports_a, reports_b);

    let positions = |sim: &Simulation| {
        sim.organisms()
            .iter()
            .map(|o| (o.id, o.position.x.to_bits(), o.position.y.to_bits()))
            .collect::<Vec<_>>()
    };
    assert_eq!(positions(&a), positions(&b));
}

#[test]
fn test_metrics_track_population_changes() {
    let mut sim = populated(11);
    let reports = sim.run(300);
    let births: usize = reports.iter().map(|r| r.births).sum();
    let deaths: usize = reports.iter().map(|r| r.deaths).sum();
    assert_eq!(sim.metrics().counter(BIRTHS), births as u64);
    assert_eq!(sim.metrics().counter(DEATHS), deaths as u64);
    assert_eq!(
        sim.organisms().len() as i64,
        20 + births as i64 - deaths as i64
    );
}

#[test]
fn test_death_clears_behavior_side_tables() {
    let (mut sim, ids) = SimulationBuilder::new()
        .with_creature(5.0, 5.0, &[])
        .with_creature(8.0, 8.0, &[])
        .build();
    let (doomed, survivor) = (ids[0], ids[1]);

    let zoochory = sim
        .controller_mut()
        .find_mut::<ZoochoryBehavior>()
        .unwrap();
    zoochory.consume_seeds(doomed, 1, 1, 4, 0.8);
    zoochory.attach_burr(doomed, 2, 1, 1);
    zoochory.consume_seeds(survivor, 1, 1, 1, 0.8);

    sim.organism_mut(doomed).unwrap().health = 0.0;
    let report = sim.tick();
    assert_eq!(report.deaths, 1);
    assert!(sim.organism(doomed).is_none());

    let zoochory = sim.controller().find::<ZoochoryBehavior>().unwrap();
    assert!(!zoochory.has_burrs(doomed));
    assert_eq!(zoochory.gut_seed_count(doomed), 0);
    assert_eq!(zoochory.gut_seed_count(survivor), 1);
    assert_eq!(zoochory.tracked_organisms(), 1);
}

#[test]
fn test_carried_seeds_germinate_at_carrier() {
    let (mut sim, ids) = SimulationBuilder::new()
        .with_config(|config| {
            config.dispersal.gut_transit_ticks = 5;
            config.dispersal.germination_chance = 1.0;
        })
        .with_creature(10.5, 10.5, &[("locomotion", 0.0)])
        .build();
    let carrier = ids[0];
    sim.controller_mut()
        .find_mut::<ZoochoryBehavior>()
        .unwrap()
        .consume_seeds(carrier, 2, 2, 3, 1.0);

    let reports = sim.run(5);
    let dispersed: usize = reports.iter().map(|r| r.seeds_dispersed).sum();
    let germinated: usize = reports.iter().map(|r| r.plants_germinated).sum();
    assert_eq!(dispersed, 3);
    assert_eq!(germinated, 3);

    let tile = sim.organism(carrier).unwrap().position.tile();
    assert!(sim
        .plants()
        .plants()
        .iter()
        .all(|p| p.position.tile() == tile));
}

#[test]
fn test_hungry_grazer_feeds() {
    let (mut sim, ids) = SimulationBuilder::new()
        .with_creature(
            5.5,
            5.5,
            &[
                ("plant_digestion", 1.0),
                ("hunger_threshold", 0.9),
                ("aggression", 0.0),
                ("libido", 0.0),
                ("stamina", 6.0),
            ],
        )
        .with_energy_level(0.2)
        .with_plant(6, 5)
        .build();
    let before = sim.organism(ids[0]).unwrap().energy;

    sim.tick();
    assert_eq!(sim.controller().current_behavior(), Some("feeding"));
    assert_eq!(sim.metrics().behavior_count("feeding"), 1);
    assert!(sim.organism(ids[0]).unwrap().energy > before - 0.5);
}

#[test]
fn test_predator_wounds_adjacent_prey() {
    let (mut sim, ids) = SimulationBuilder::new()
        .with_creature(
            5.5,
            5.5,
            &[
                ("aggression", 1.0),
                ("meat_digestion", 1.0),
                ("locomotion", 1.0),
                ("plant_digestion", 0.0),
                ("hunger_threshold", 0.9),
                ("libido", 0.0),
                ("stamina", 6.0),
                ("teeth", 1.0),
                ("body_size", 2.0),
            ],
        )
        .with_energy_level(0.3)
        .with_creature(
            6.5,
            5.5,
            &[
                ("locomotion", 0.0),
                ("evasion", 0.0),
                ("body_size", 0.1),
                ("armor_plating", 0.0),
                ("plant_digestion", 0.0),
                ("libido", 0.0),
                ("aggression", 0.0),
            ],
        )
        .build();
    let (hunter, prey) = (ids[0], ids[1]);

    let mut wounded = false;
    for _ in 0..600 {
        for id in [hunter, prey] {
            if let Some(o) = sim.organism_mut(id) {
                o.energy = o.max_energy * 0.3;
                o.fatigue = 0.0;
            }
        }
        sim.tick();
        match sim.organism(prey) {
            Some(p) if p.health < 0.99 => {
                wounded = true;
                break;
            }
            None => {
                wounded = true;
                break;
            }
            Some(_) => {}
        }
    }
    assert!(wounded);
    assert!(sim.metrics().behavior_count("hunting") >= 1);
}
