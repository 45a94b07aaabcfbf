use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable organism identity, assigned once at creation and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct OrganismId(pub u64);

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "org#{}", self.0)
    }
}

/// Stable plant identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct PlantId(pub u64);

/// Continuous world position measured in tile units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of the tile at `(tx, ty)`.
    #[must_use]
    pub fn tile_center(tx: i32, ty: i32) -> Self {
        Self {
            x: tx as f32 + 0.5,
            y: ty as f32 + 0.5,
        }
    }

    #[must_use]
    pub fn distance(&self, other: &Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Tile containing this position.
    #[must_use]
    pub fn tile(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Per-tick view of an organism's condition, consumed read-only by behaviors.
///
/// All ratios are normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrganismState {
    pub age_normalized: f32,
    pub energy_level: f32,
    pub health: f32,
    pub is_pregnant: bool,
    pub is_sleeping: bool,
}

impl Default for OrganismState {
    fn default() -> Self {
        Self {
            age_normalized: 0.0,
            energy_level: 1.0,
            health: 1.0,
            is_pregnant: false,
            is_sleeping: false,
        }
    }
}

impl OrganismState {
    /// Threshold used by [`OrganismState::differs_significantly`].
    pub const DEFAULT_CHANGE_THRESHOLD: f32 = 0.1;

    /// Builds a snapshot, clamping every ratio into `[0, 1]`.
    #[must_use]
    pub fn new(
        age_normalized: f32,
        energy_level: f32,
        health: f32,
        is_pregnant: bool,
        is_sleeping: bool,
    ) -> Self {
        Self {
            age_normalized: age_normalized.clamp(0.0, 1.0),
            energy_level: energy_level.clamp(0.0, 1.0),
            health: health.clamp(0.0, 1.0),
            is_pregnant,
            is_sleeping,
        }
    }

    /// True when any ratio moved by more than `threshold` or a flag flipped.
    #[must_use]
    pub fn differs_from(&self, other: &OrganismState, threshold: f32) -> bool {
        (self.age_normalized - other.age_normalized).abs() > threshold
            || (self.energy_level - other.energy_level).abs() > threshold
            || (self.health - other.health).abs() > threshold
            || self.is_pregnant != other.is_pregnant
            || self.is_sleeping != other.is_sleeping
    }

    #[must_use]
    pub fn differs_significantly(&self, other: &OrganismState) -> bool {
        self.differs_from(other, Self::DEFAULT_CHANGE_THRESHOLD)
    }
}
