//! Core data structures for the Verdant simulation.

pub mod dispersal;
pub mod environment;
pub mod genetics;
pub mod organism;
