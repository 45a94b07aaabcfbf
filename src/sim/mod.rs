//! Headless host for the organism engine.

pub mod climate;
pub mod simulation;
pub mod world;

pub use climate::{Climate, Season};
pub use simulation::{Simulation, TickReport};
pub use world::{Plant, PlantField, WorldFrame};
