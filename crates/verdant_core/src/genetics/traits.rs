//! Trait names read by behaviors and produced by the universal gene set.

pub const LOCOMOTION: &str = "locomotion";
pub const SIZE: &str = "size";
pub const METABOLISM: &str = "metabolism";
pub const PLANT_DIGESTION: &str = "plant_digestion";
pub const HUNT_INSTINCT: &str = "hunt_instinct";
pub const HUNGER_THRESHOLD: &str = "hunger_threshold";
/// Stored resource reserve; gates mating.
pub const HUNGER: &str = "hunger";
pub const MATE_DRIVE: &str = "mate_drive";
pub const SIGHT_RANGE: &str = "sight_range";
pub const FATIGUE_THRESHOLD: &str = "fatigue_threshold";
pub const REGENERATION: &str = "regeneration";
pub const PURSUE_SPEED: &str = "pursue_speed";
pub const FLEE_SPEED: &str = "flee_speed";
pub const TEETH: &str = "teeth";
pub const CLAWS: &str = "claws";
pub const ARMOR: &str = "armor";
pub const JAW_STRENGTH: &str = "jaw_strength";
pub const FUR_DENSITY: &str = "fur_density";
pub const GUT_ACIDITY: &str = "gut_acidity";
pub const COLD_TOLERANCE: &str = "cold_tolerance";
