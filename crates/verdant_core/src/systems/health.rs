/// Damage mitigation and regeneration on normalized health.
#[derive(Debug, Clone)]
pub struct HealthSystem {
    max_armor_mitigation: f32,
    regeneration_rate: f32,
}

impl Default for HealthSystem {
    fn default() -> Self {
        Self {
            max_armor_mitigation: 0.9,
            regeneration_rate: 0.01,
        }
    }
}

impl HealthSystem {
    /// Health left after `damage`, reduced by `armor`.
    #[must_use]
    pub fn apply_damage(&self, health: f32, damage: f32, armor: f32) -> f32 {
        let mitigation = armor.clamp(0.0, self.max_armor_mitigation);
        (health - damage.max(0.0) * (1.0 - mitigation)).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn regenerate(&self, health: f32, regeneration: f32, delta_time: f32) -> f32 {
        let gain = self.regeneration_rate * (1.0 + regeneration.max(0.0)) * delta_time.max(0.0);
        (health + gain).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_dead(&self, health: f32) -> bool {
        health <= 0.0
    }
}
