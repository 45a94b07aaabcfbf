//! Gene-to-trait expression for one organism.
//!
//! Each trait folds every gene bound to it through [`accumulate_effect`],
//! after the gene's expressed value has been clamped to its limits and scaled
//! by its age/health modulation policy. Results are memoized in a
//! [`TraitCache`] that [`Phenotype::update_context`] invalidates when the
//! organism ages or the ambient temperature moves.

use super::accumulate::{accumulate_effect, AccumulatedEffect};
use super::cache::TraitCache;
use super::gene::GeneLogic;
use super::genome::express_alleles;
use super::registry::GeneRegistry;
use std::sync::Arc;
use verdant_data::{EnvironmentState, Genome, OrganismState, TraitModulation};

/// Scale applied to a modulated gene for the given age and health.
#[must_use]
pub fn modulation_factor(policy: TraitModulation, age_normalized: f32, health: f32) -> f32 {
    let age_factor = || {
        if age_normalized < 0.2 {
            // juveniles ramp up from 60% expression
            0.6 + 2.0 * age_normalized
        } else if age_normalized > 0.8 {
            1.0 - (age_normalized - 0.8)
        } else {
            1.0
        }
    };
    let health_factor = || 0.5 + 0.5 * health.clamp(0.0, 1.0);

    match policy {
        TraitModulation::Never => 1.0,
        TraitModulation::Age => age_factor(),
        TraitModulation::Health => health_factor(),
        TraitModulation::AgeAndHealth => age_factor() * health_factor(),
    }
}

fn compute_trait(
    registry: &GeneRegistry,
    genome: &Genome,
    trait_name: &str,
    age_normalized: f32,
    health: f32,
) -> AccumulatedEffect {
    registry
        .contributions(trait_name)
        .iter()
        .fold(AccumulatedEffect::default(), |acc, contribution| {
            let (Some(gene), Some(definition)) = (
                genome.get(&contribution.gene_id),
                registry.get(&contribution.gene_id),
            ) else {
                return acc;
            };
            let expressed = definition.clamp_value(express_alleles(gene.alleles, gene.dominance));
            let value =
                expressed * modulation_factor(definition.modulation, age_normalized, health);
            accumulate_effect(
                acc,
                contribution.effect_type,
                value,
                contribution.scale_factor,
            )
        })
}

#[derive(Debug, Clone)]
pub struct Phenotype {
    registry: Arc<GeneRegistry>,
    genome: Arc<Genome>,
    cache: TraitCache,
    age_normalized: f32,
    health: f32,
}

impl Phenotype {
    #[must_use]
    pub fn new(registry: Arc<GeneRegistry>, genome: Arc<Genome>) -> Self {
        Self::with_cache(registry, genome, TraitCache::new())
    }

    #[must_use]
    pub fn with_cache(registry: Arc<GeneRegistry>, genome: Arc<Genome>, cache: TraitCache) -> Self {
        Self {
            registry,
            genome,
            cache,
            age_normalized: 0.5,
            health: 1.0,
        }
    }

    #[must_use]
    pub fn genome(&self) -> &Arc<Genome> {
        &self.genome
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<GeneRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn cache(&self) -> &TraitCache {
        &self.cache
    }

    /// Refreshes modulation inputs and recomputes stale traits.
    ///
    /// Traits are recomputed through the cache, so only entries invalidated by
    /// an age or temperature shift are evaluated again.
    pub fn update_context(&mut self, environment: &EnvironmentState, state: &OrganismState) {
        if self.cache.check_invalidation(environment, state) {
            tracing::trace!(
                age = state.age_normalized,
                temperature = environment.temperature,
                "Trait cache invalidated"
            );
        }
        self.age_normalized = state.age_normalized;
        self.health = state.health;

        let registry: &GeneRegistry = &self.registry;
        let genome: &Genome = &self.genome;
        let cache = &mut self.cache;
        let (age, health) = (state.age_normalized, state.health);
        for trait_name in registry.trait_names() {
            let mut absent = false;
            cache.get_or_compute(trait_name, || {
                let effect = compute_trait(registry, genome, trait_name, age, health);
                absent = !effect.has_contribution;
                effect.value
            });
            // absent traits stay stale so lookups fall through to the caller's default
            if absent {
                cache.invalidate(trait_name);
            }
        }
    }

    /// Trait value, or `None` when no gene contributes to it.
    #[must_use]
    pub fn try_trait(&self, name: &str) -> Option<f32> {
        if let Some(value) = self.cache.peek(name) {
            return Some(value);
        }
        let effect = compute_trait(
            &self.registry,
            &self.genome,
            name,
            self.age_normalized,
            self.health,
        );
        effect.has_contribution.then_some(effect.value)
    }

    #[must_use]
    pub fn has_trait(&self, name: &str) -> bool {
        self.try_trait(name).is_some()
    }

    /// Trait value, 0.0 when absent.
    #[must_use]
    pub fn get_trait(&self, name: &str) -> f32 {
        self.try_trait(name).unwrap_or(0.0)
    }

    /// Trait value with a caller-supplied fallback for absent traits.
    #[must_use]
    pub fn trait_or(&self, name: &str, default: f32) -> f32 {
        self.try_trait(name).unwrap_or(default)
    }

    /// Upkeep of every expressed gene at its normalized expression level.
    #[must_use]
    pub fn maintenance_cost(&self) -> f32 {
        self.genome
            .genes
            .values()
            .filter_map(|gene| {
                let definition = self.registry.get(&gene.id)?;
                let expressed =
                    definition.clamp_value(express_alleles(gene.alleles, gene.dominance));
                Some(definition.calculate_maintenance_cost(definition.normalize_value(expressed)))
            })
            .sum()
    }
}
