//! Metrics collection for the simulation.
//!
//! Provides structured logging and counters for behavior selection, births,
//! deaths and seed dispersal.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const BIRTHS: &str = "births";
pub const DEATHS: &str = "deaths";
pub const SEEDS_DISPERSED: &str = "seeds_dispersed";
pub const PLANTS_GERMINATED: &str = "plants_germinated";

/// Global metrics collector for simulation statistics.
pub struct Metrics {
    tick_count: AtomicU64,
    organism_count: AtomicU64,
    plant_count: AtomicU64,
    counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            organism_count: AtomicU64::new(0),
            plant_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, organisms: usize, plants: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.organism_count
            .store(organisms as u64, Ordering::Relaxed);
        self.plant_count.store(plants as u64, Ordering::Relaxed);

        // Log at info level every 1000 ticks
        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick % 1000 == 0 {
            tracing::info!(
                tick = tick,
                organisms = organisms,
                plants = plants,
                births = self.counter(BIRTHS),
                deaths = self.counter(DEATHS),
                seeds_dispersed = self.counter(SEEDS_DISPERSED),
                duration_ms = duration.as_millis() as u64,
                "Simulation tick"
            );
        }
    }

    /// Counts one execution of the named behavior.
    pub fn record_behavior(&self, behavior_id: &str) {
        self.increment_counter(&format!("behavior.{behavior_id}"));
    }

    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    pub fn add_to_counter(&self, name: &str, amount: u64) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(amount, Ordering::Relaxed);
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn behavior_count(&self, behavior_id: &str) -> u64 {
        self.counter(&format!("behavior.{behavior_id}"))
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn organism_count(&self) -> u64 {
        self.organism_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn plant_count(&self) -> u64 {
        self.plant_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(
            event_type = event_type,
            details = details,
            "Simulation event"
        );
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
