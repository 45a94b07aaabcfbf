//! Animal-mediated seed dispersal.
//!
//! Two channels are tracked per carrier: seeds swallowed with fruit travel
//! through the gut for a fixed transit time, while hooked burrs ride the coat
//! until a detachment roll succeeds. Both emit a [`DispersalEvent`] at the
//! carrier's current tile.

use super::{Behavior, BehaviorContext, BehaviorPriority, BehaviorResult};
use crate::config::DispersalConfig;
use crate::organism::Organism;
use crate::rng::RandomExt;
use rand::Rng;
use std::any::Any;
use std::collections::HashMap;
use verdant_data::{DispersalEvent, DispersalMethod, OrganismId};

#[derive(Debug, Clone, Copy, PartialEq)]
struct GutSeed {
    origin: u64,
    viability: f32,
    ticks_remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AttachedBurr {
    strategy: u8,
    origin_x: i32,
    origin_y: i32,
    ticks_attached: u32,
}

fn encode_origin(x: i32, y: i32) -> u64 {
    (u64::from(x as u32) << 32) | u64::from(y as u32)
}

fn decode_origin(origin: u64) -> (i32, i32) {
    ((origin >> 32) as u32 as i32, origin as u32 as i32)
}

#[derive(Debug)]
pub struct ZoochoryBehavior {
    gut_seeds: HashMap<OrganismId, Vec<GutSeed>>,
    burrs: HashMap<OrganismId, Vec<AttachedBurr>>,
    transit_ticks: u32,
    base_detach_chance: f32,
    detach_chance_per_tick: f32,
}

impl Default for ZoochoryBehavior {
    fn default() -> Self {
        Self::new(&DispersalConfig::default())
    }
}

impl ZoochoryBehavior {
    #[must_use]
    pub fn new(config: &DispersalConfig) -> Self {
        Self {
            gut_seeds: HashMap::new(),
            burrs: HashMap::new(),
            transit_ticks: config.gut_transit_ticks,
            base_detach_chance: config.base_detach_chance,
            detach_chance_per_tick: config.detach_chance_per_tick,
        }
    }

    pub fn attach_burr(&mut self, id: OrganismId, strategy: u8, origin_x: i32, origin_y: i32) {
        self.burrs.entry(id).or_default().push(AttachedBurr {
            strategy,
            origin_x,
            origin_y,
            ticks_attached: 0,
        });
    }

    pub fn consume_seeds(&mut self, id: OrganismId, x: i32, y: i32, count: u32, viability: f32) {
        let origin = encode_origin(x, y);
        let transit = self.transit_ticks;
        let gut = self.gut_seeds.entry(id).or_default();
        gut.extend((0..count).map(|_| GutSeed {
            origin,
            viability,
            ticks_remaining: transit,
        }));
    }

    /// Advances both channels one tick for an organism at `(x, y)`.
    pub fn process_organism_seeds<R: Rng>(
        &mut self,
        id: OrganismId,
        x: i32,
        y: i32,
        rng: &mut R,
    ) -> Vec<DispersalEvent> {
        let mut events = self.process_gut(id, x, y);
        events.extend(self.process_burrs(id, x, y, rng));
        events
    }

    fn process_gut(&mut self, id: OrganismId, x: i32, y: i32) -> Vec<DispersalEvent> {
        let Some(gut) = self.gut_seeds.get_mut(&id) else {
            return Vec::new();
        };
        let mut events = Vec::new();
        gut.retain_mut(|seed| {
            seed.ticks_remaining = seed.ticks_remaining.saturating_sub(1);
            if seed.ticks_remaining > 0 {
                return true;
            }
            let (origin_x, origin_y) = decode_origin(seed.origin);
            events.push(DispersalEvent {
                origin_x,
                origin_y,
                target_x: x,
                target_y: y,
                method: DispersalMethod::AnimalFruit,
                seed_viability: seed.viability,
                strategy: 0,
            });
            false
        });
        if gut.is_empty() {
            self.gut_seeds.remove(&id);
        }
        events
    }

    fn process_burrs<R: Rng>(
        &mut self,
        id: OrganismId,
        x: i32,
        y: i32,
        rng: &mut R,
    ) -> Vec<DispersalEvent> {
        let Some(burrs) = self.burrs.get_mut(&id) else {
            return Vec::new();
        };
        let (base, per_tick) = (self.base_detach_chance, self.detach_chance_per_tick);
        let mut events = Vec::new();
        burrs.retain_mut(|burr| {
            let chance = (base + burr.ticks_attached as f32 * per_tick).min(1.0);
            if !rng.chance(chance) {
                burr.ticks_attached += 1;
                return true;
            }
            events.push(DispersalEvent {
                origin_x: burr.origin_x,
                origin_y: burr.origin_y,
                target_x: x,
                target_y: y,
                method: DispersalMethod::AnimalBurr,
                seed_viability: 1.0,
                strategy: burr.strategy,
            });
            false
        });
        if burrs.is_empty() {
            self.burrs.remove(&id);
        }
        events
    }

    #[must_use]
    pub fn has_burrs(&self, id: OrganismId) -> bool {
        self.burrs.get(&id).is_some_and(|b| !b.is_empty())
    }

    #[must_use]
    pub fn gut_seed_count(&self, id: OrganismId) -> usize {
        self.gut_seeds.get(&id).map_or(0, Vec::len)
    }

    /// Organisms with any carried seed or burr.
    #[must_use]
    pub fn tracked_organisms(&self) -> usize {
        let mut ids: Vec<_> = self.gut_seeds.keys().chain(self.burrs.keys()).collect();
        ids.sort();
        ids.dedup();
        ids.len()
    }
}

impl Behavior for ZoochoryBehavior {
    fn id(&self) -> &str {
        "zoochory"
    }

    fn is_applicable(&self, _organism: &Organism, _ctx: &BehaviorContext<'_>) -> bool {
        true
    }

    fn priority(&self, _organism: &Organism) -> f32 {
        BehaviorPriority::Idle.value()
    }

    fn execute(
        &mut self,
        organism: &mut Organism,
        _ctx: &mut BehaviorContext<'_>,
    ) -> BehaviorResult {
        BehaviorResult::completed(
            0.0,
            format!(
                "carrying {} seeds, burrs: {}",
                self.gut_seed_count(organism.id),
                self.has_burrs(organism.id)
            ),
        )
    }

    fn energy_cost(&self, _organism: &Organism) -> f32 {
        0.0
    }

    fn clear_organism_data(&mut self, id: OrganismId) {
        self.gut_seeds.remove(&id);
        self.burrs.remove(&id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn test_origin_encoding_handles_negatives() {
        for (x, y) in [(0, 0), (5, 5), (-3, 7), (i32::MAX, i32::MIN)] {
            assert_eq!(decode_origin(encode_origin(x, y)), (x, y));
        }
    }

    #[test]
    fn test_gut_transit_releases_every_seed() {
        let mut zoochory = ZoochoryBehavior::default();
        let mut rng = seeded(1);
        let id = OrganismId(1);
        zoochory.consume_seeds(id, 5, 5, 3, 0.9);

        let mut events = Vec::new();
        for tick in 0..500 {
            let batch = zoochory.process_organism_seeds(id, 10, 12, &mut rng);
            if tick < 499 {
                assert!(batch.is_empty());
            }
            events.extend(batch);
        }
        assert_eq!(events.len(), 3);
        for event in &events {
            assert_eq!(event.seed_viability, 0.9);
            assert_eq!((event.origin_x, event.origin_y), (5, 5));
            assert_eq!((event.target_x, event.target_y), (10, 12));
            assert_eq!(event.method, DispersalMethod::AnimalFruit);
        }
        assert_eq!(zoochory.gut_seed_count(id), 0);
        assert_eq!(zoochory.tracked_organisms(), 0);
    }

    #[test]
    fn test_burrs_eventually_detach() {
        let mut zoochory = ZoochoryBehavior::default();
        let mut rng = seeded(2);
        let id = OrganismId(2);
        zoochory.attach_burr(id, 3, 1, 2);
        assert!(zoochory.has_burrs(id));

        let mut events = Vec::new();
        // detachment is certain once the chance reaches 1.0
        for _ in 0..1000 {
            events.extend(zoochory.process_organism_seeds(id, 4, 4, &mut rng));
        }
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].method, DispersalMethod::AnimalBurr);
        assert_eq!(events[0].strategy, 3);
        assert_eq!((events[0].origin_x, events[0].origin_y), (1, 2));
        assert!(!zoochory.has_burrs(id));
    }

    #[test]
    fn test_clear_organism_data() {
        let mut zoochory = ZoochoryBehavior::default();
        let id = OrganismId(3);
        zoochory.consume_seeds(id, 0, 0, 2, 0.5);
        zoochory.attach_burr(id, 1, 0, 0);
        zoochory.consume_seeds(OrganismId(4), 0, 0, 1, 0.5);
        assert_eq!(zoochory.tracked_organisms(), 2);

        zoochory.clear_organism_data(id);
        assert!(!zoochory.has_burrs(id));
        assert_eq!(zoochory.gut_seed_count(id), 0);
        assert_eq!(zoochory.tracked_organisms(), 1);
    }

    #[test]
    fn test_passive_contract() {
        let zoochory = ZoochoryBehavior::default();
        let organism = crate::test_support::organism_with_traits(&[]);
        assert_eq!(zoochory.priority(&organism), 0.0);
        assert_eq!(zoochory.energy_cost(&organism), 0.0);
    }
}
