//! Error types for fallible genetics operations.
//!
//! Behavior evaluation itself never fails; only registry and genome
//! construction report errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticsError {
    #[error("Gene already registered: {0}")]
    DuplicateGene(String),

    #[error("Unknown gene: {0}")]
    UnknownGene(String),

    #[error("Invalid limits for gene {gene}: min {min} exceeds max {max}")]
    InvalidLimits { gene: String, min: f32, max: f32 },

    #[error("Genomes share no genes")]
    IncompatibleGenomes,
}

pub type Result<T> = std::result::Result<T, GeneticsError>;
