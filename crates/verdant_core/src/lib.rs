//! # Verdant Core
//!
//! The decision engine of every organism in the Verdant simulation.
//!
//! This crate contains the deterministic creature logic, including:
//! - Gene definitions, genomes and the gene-to-trait expression pipeline
//! - Trait caching with age and temperature invalidation
//! - A priority-based behavior scheduler with six standard behaviors
//! - Collaborator systems (perception, health, feeding, combat, seed dispersal)
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! Each tick the host builds an [`OrganismState`](verdant_data::OrganismState)
//! snapshot, refreshes the organism's [`Phenotype`](genetics::Phenotype), and
//! asks its [`BehaviorController`](behavior::BehaviorController) to run exactly
//! one applicable behavior. Behaviors never touch the world directly: they read
//! it through [`WorldView`](world::WorldView) and return
//! [`WorldCommand`](world::WorldCommand)s for the host to apply.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use verdant_core::genetics::{GeneRegistry, GenomeLogic, Phenotype};
//! use verdant_core::rng::seeded;
//! use verdant_data::Genome;
//!
//! let registry = Arc::new(GeneRegistry::universal());
//! let mut rng = seeded(42);
//! let genome = Arc::new(Genome::random_with_rng(&registry, &mut rng));
//! let phenotype = Phenotype::new(registry, genome);
//! assert!(phenotype.has_trait("locomotion"));
//! ```

/// Behavior contract, scheduler and the standard behaviors
pub mod behavior;
/// Configuration management for simulation parameters
pub mod config;
/// Fallible genetics operations
pub mod error;
/// Gene definitions, genomes and phenotype expression
pub mod genetics;
/// Performance metrics collection and logging
pub mod metrics;
/// Organism state and identity allocation
pub mod organism;
/// Seedable random source and sampling helpers
pub mod rng;
/// Shared collaborator systems owned by the service container
pub mod services;
/// Perception, health, feeding, combat and dispersal calculators
pub mod systems;
/// World access contracts used by behaviors
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

pub use behavior::{
    Behavior, BehaviorContext, BehaviorController, BehaviorPriority, BehaviorResult,
};
pub use error::GeneticsError;
pub use genetics::{GeneLogic, GeneRegistry, GenomeLogic, Phenotype};
pub use metrics::{init_logging, Metrics};
pub use organism::{IdAllocator, Organism};
pub use services::OrganismServices;
pub use world::{CreatureView, PlantView, WorldCommand, WorldView};
