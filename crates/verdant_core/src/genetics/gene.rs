use crate::error::{GeneticsError, Result};
use crate::rng::RandomExt;
use rand::Rng;
use verdant_data::GeneDefinition;

/// Value-level operations on a gene blueprint.
///
/// Every value produced or mutated through this trait lies in
/// `[min_value, max_value]`.
pub trait GeneLogic {
    fn validate(&self) -> Result<()>;
    fn create_random_value<R: Rng>(&self, rng: &mut R) -> f32;
    fn clamp_value(&self, value: f32) -> f32;
    fn apply_creep<R: Rng>(&self, value: f32, rng: &mut R) -> f32;
    /// Position of `value` inside the limits, in `[0, 1]`.
    fn normalize_value(&self, value: f32) -> f32;
    fn calculate_maintenance_cost(&self, expression_level: f32) -> f32;
}

impl GeneLogic for GeneDefinition {
    fn validate(&self) -> Result<()> {
        let limits = &self.limits;
        if limits.min_value.is_nan()
            || limits.max_value.is_nan()
            || limits.min_value > limits.max_value
        {
            return Err(GeneticsError::InvalidLimits {
                gene: self.id.clone(),
                min: limits.min_value,
                max: limits.max_value,
            });
        }
        Ok(())
    }

    fn create_random_value<R: Rng>(&self, rng: &mut R) -> f32 {
        let value = rng.uniform(self.limits.min_value, self.limits.max_value);
        self.clamp_value(value)
    }

    fn clamp_value(&self, value: f32) -> f32 {
        // NaN collapses to the lower bound
        value.max(self.limits.min_value).min(self.limits.max_value)
    }

    fn apply_creep<R: Rng>(&self, value: f32, rng: &mut R) -> f32 {
        let creep = self.limits.creep_amount.abs();
        let delta = if creep > 0.0 {
            rng.gen_range(-creep..=creep)
        } else {
            0.0
        };
        self.clamp_value(value + delta)
    }

    fn normalize_value(&self, value: f32) -> f32 {
        let span = self.limits.max_value - self.limits.min_value;
        if span <= f32::EPSILON {
            return 1.0;
        }
        ((value - self.limits.min_value) / span).clamp(0.0, 1.0)
    }

    fn calculate_maintenance_cost(&self, expression_level: f32) -> f32 {
        let level = expression_level.clamp(0.0, 1.0);
        self.maintenance_cost * level.powf(self.cost_scaling)
    }
}
