//! Per-organism memoization of computed trait values.

use std::collections::HashMap;
use verdant_data::{EnvironmentState, OrganismState};

/// Age shift (normalized) that forces recomputation.
pub const AGE_TOLERANCE: f32 = 0.01;
/// Temperature shift that forces recomputation.
pub const TEMPERATURE_TOLERANCE: f32 = 5.0;
/// Health shift that forces recomputation of health-modulated traits.
pub const HEALTH_TOLERANCE: f32 = 0.05;

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    value: f32,
    valid: bool,
}

/// Trait values keyed by trait name.
///
/// Entries are never evicted; they live as long as the organism.
#[derive(Debug, Clone)]
pub struct TraitCache {
    entries: HashMap<String, CacheEntry>,
    last_age: Option<f32>,
    last_temperature: Option<f32>,
    last_health: Option<f32>,
    age_tolerance: f32,
    temperature_tolerance: f32,
    health_tolerance: f32,
    hits: u64,
    misses: u64,
}

impl Default for TraitCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TraitCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_tolerances(AGE_TOLERANCE, TEMPERATURE_TOLERANCE, HEALTH_TOLERANCE)
    }

    #[must_use]
    pub fn with_tolerances(
        age_tolerance: f32,
        temperature_tolerance: f32,
        health_tolerance: f32,
    ) -> Self {
        Self {
            entries: HashMap::new(),
            last_age: None,
            last_temperature: None,
            last_health: None,
            age_tolerance,
            temperature_tolerance,
            health_tolerance,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached value, or computes, stores and returns it.
    pub fn get_or_compute<F>(&mut self, trait_id: &str, compute: F) -> f32
    where
        F: FnOnce() -> f32,
    {
        if let Some(entry) = self.entries.get(trait_id) {
            if entry.valid {
                self.hits += 1;
                return entry.value;
            }
        }

        self.misses += 1;
        let value = compute();
        self.entries
            .insert(trait_id.to_string(), CacheEntry { value, valid: true });
        value
    }

    /// Valid cached value without touching the statistics.
    #[must_use]
    pub fn peek(&self, trait_id: &str) -> Option<f32> {
        self.entries
            .get(trait_id)
            .filter(|entry| entry.valid)
            .map(|entry| entry.value)
    }

    /// Marks one entry stale without removing it.
    pub fn invalidate(&mut self, trait_id: &str) {
        if let Some(entry) = self.entries.get_mut(trait_id) {
            entry.valid = false;
        }
    }

    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.valid = false;
        }
    }

    /// Invalidates everything when age, temperature or health drifted past
    /// tolerance.
    ///
    /// Returns `true` when the cache was invalidated. The first call records
    /// the baselines and always invalidates.
    pub fn check_invalidation(
        &mut self,
        environment: &EnvironmentState,
        state: &OrganismState,
    ) -> bool {
        let age_shifted = self
            .last_age
            .map_or(true, |last| (state.age_normalized - last).abs() > self.age_tolerance);
        let temperature_shifted = self.last_temperature.map_or(true, |last| {
            (environment.temperature - last).abs() > self.temperature_tolerance
        });

        let health_shifted = self
            .last_health
            .map_or(true, |last| (state.health - last).abs() > self.health_tolerance);

        if age_shifted || temperature_shifted || health_shifted {
            self.invalidate_all();
            self.last_age = Some(state.age_normalized);
            self.last_temperature = Some(environment.temperature);
            self.last_health = Some(state.health);
            true
        } else {
            false
        }
    }

    /// hits / (hits + misses), or 0 before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
