use serde::{Deserialize, Serialize};
use std::fmt;

/// How a seed travelled from its parent plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispersalMethod {
    /// Eaten with fruit and passed through the gut (endozoochory).
    AnimalFruit,
    /// Carried on fur as a burr (epizoochory).
    AnimalBurr,
}

impl DispersalMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DispersalMethod::AnimalFruit => "ANIMAL_FRUIT",
            DispersalMethod::AnimalBurr => "ANIMAL_BURR",
        }
    }
}

impl fmt::Display for DispersalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seed deposited away from its parent plant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersalEvent {
    pub origin_x: i32,
    pub origin_y: i32,
    pub target_x: i32,
    pub target_y: i32,
    pub method: DispersalMethod,
    pub seed_viability: f32,
    /// Burr strategy code for epizoochory, zero for gut-passed seeds.
    pub strategy: u8,
}
