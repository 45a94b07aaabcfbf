//! # Verdant
//!
//! A headless reference host for the `verdant_core` organism engine: a plant
//! field on a bounded grid, a seasonal climate, and a tick driver that wires
//! snapshots, phenotype refresh, behavior selection, command application,
//! seed dispersal, deaths and births together.

pub mod sim;

pub use sim::{Simulation, TickReport};
