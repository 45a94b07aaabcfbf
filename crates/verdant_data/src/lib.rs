//! # Verdant Data
//!
//! Plain data shared between the simulation core and its hosts: organism
//! identity and snapshots, gene blueprints, genomes, environment readings and
//! seed-dispersal events. Logic lives in `verdant_core`.

pub mod data;

pub use data::dispersal::{DispersalEvent, DispersalMethod};
pub use data::environment::EnvironmentState;
pub use data::genetics::{
    ChromosomeType, DominanceType, EffectBinding, EffectType, Gene, GeneDefinition, GeneLimits,
    Genome, TraitModulation,
};
pub use data::organism::{OrganismId, OrganismState, PlantId, Position};
