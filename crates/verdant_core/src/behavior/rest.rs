use super::{Behavior, BehaviorContext, BehaviorPriority, BehaviorResult};
use crate::config::BehaviorConfig;
use crate::genetics::traits;
use crate::organism::Organism;
use std::any::Any;

const DEFAULT_FATIGUE_THRESHOLD: f32 = 3.0;
const BASE_RECOVERY: f32 = 0.01;

/// Sleeps off accumulated fatigue.
pub struct RestBehavior {
    energy_cost: f32,
}

impl RestBehavior {
    #[must_use]
    pub fn new(config: &BehaviorConfig) -> Self {
        Self {
            energy_cost: config.rest_energy_cost,
        }
    }

    fn threshold(organism: &Organism) -> f32 {
        organism
            .phenotype
            .trait_or(traits::FATIGUE_THRESHOLD, DEFAULT_FATIGUE_THRESHOLD)
    }

    /// Fatigue removed by one tick of rest.
    #[must_use]
    pub fn recovery_rate(organism: &Organism) -> f32 {
        let phenotype = &organism.phenotype;
        BASE_RECOVERY
            * (1.0 + phenotype.trait_or(traits::REGENERATION, 0.0))
            * phenotype.trait_or(traits::METABOLISM, 1.0)
    }
}

impl Behavior for RestBehavior {
    fn id(&self) -> &str {
        "rest"
    }

    fn is_applicable(&self, organism: &Organism, _ctx: &BehaviorContext<'_>) -> bool {
        organism.fatigue > Self::threshold(organism)
    }

    fn priority(&self, organism: &Organism) -> f32 {
        let threshold = Self::threshold(organism).max(f32::EPSILON);
        let excess = ((organism.fatigue - threshold) / (2.0 * threshold)).clamp(0.0, 1.0);
        BehaviorPriority::Normal.value() + 25.0 * excess
    }

    fn execute(
        &mut self,
        organism: &mut Organism,
        ctx: &mut BehaviorContext<'_>,
    ) -> BehaviorResult {
        let recovered = Self::recovery_rate(organism) * ctx.delta_time;
        organism.fatigue = (organism.fatigue - recovered).max(0.0);
        organism.is_sleeping = true;

        if organism.fatigue <= Self::threshold(organism) {
            organism.is_sleeping = false;
            return BehaviorResult::completed(self.energy_cost, "rested");
        }
        BehaviorResult::in_progress(
            self.energy_cost,
            format!("resting, fatigue {:.2}", organism.fatigue),
        )
    }

    fn energy_cost(&self, _organism: &Organism) -> f32 {
        self.energy_cost
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
    use crate::test_support::organism_with_traits;
    use verdant_data::OrganismState;

    #[test]
    fn test_applicable_above_threshold() {
        let rest = RestBehavior::new(&BehaviorConfig::default());
        let mut organism = organism_with_traits(&[]);
        let mut rng = seeded(1);
        let ctx = BehaviorContext::new(OrganismState::default(), 0, &mut rng);
        organism.fatigue = 3.0;
        assert!(!rest.is_applicable(&organism, &ctx));
        organism.fatigue = 3.1;
        assert!(rest.is_applicable(&organism, &ctx));
    }

    #[test]
    fn test_priority_scales_with_fatigue() {
        let rest = RestBehavior::new(&BehaviorConfig::default());
        let mut organism = organism_with_traits(&[(traits::FATIGUE_THRESHOLD, 2.0)]);
        organism.fatigue = 2.0;
        assert_eq!(rest.priority(&organism), 50.0);
        organism.fatigue = 4.0;
        assert!((rest.priority(&organism) - 62.5).abs() < 1e-4);
        organism.fatigue = 100.0;
        assert_eq!(rest.priority(&organism), 75.0);
    }

    #[test]
    fn test_rest_recovers_until_threshold() {
        let mut rest = RestBehavior::new(&BehaviorConfig::default());
        let mut organism = organism_with_traits(&[
            (traits::FATIGUE_THRESHOLD, 1.0),
            (traits::REGENERATION, 1.0),
            (traits::METABOLISM, 1.0),
        ]);
        organism.fatigue = 1.05;
        let mut rng = seeded(2);
        let mut ctx = BehaviorContext::new(OrganismState::default(), 0, &mut rng);

        let first = rest.execute(&mut organism, &mut ctx);
        assert!(!first.completed);
        assert!(organism.is_sleeping);
        assert!((organism.fatigue - 1.03).abs() < 1e-5);
        assert_eq!(first.energy_cost, 0.005);

        let mut done = false;
        for _ in 0..5 {
            if rest.execute(&mut organism, &mut ctx).completed {
                done = true;
                break;
            }
        }
        assert!(done);
        assert!(!organism.is_sleeping);
    }
}
