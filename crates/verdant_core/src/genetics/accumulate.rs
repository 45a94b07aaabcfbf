//! Folding of pleiotropic gene contributions into a single trait value.

use verdant_data::EffectType;

/// Running value while folding genes into one trait.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccumulatedEffect {
    pub value: f32,
    pub has_contribution: bool,
}

/// Combines one gene's expressed value into the accumulator.
///
/// For [`EffectType::Threshold`] the `scale` is the threshold and the raw
/// gene value is added only when it reaches it.
#[must_use]
pub fn accumulate_effect(
    acc: AccumulatedEffect,
    effect: EffectType,
    gene_value: f32,
    scale: f32,
) -> AccumulatedEffect {
    match effect {
        EffectType::Direct => AccumulatedEffect {
            value: gene_value * scale,
            has_contribution: true,
        },
        EffectType::Additive | EffectType::Conditional => AccumulatedEffect {
            value: acc.value + gene_value * scale,
            has_contribution: true,
        },
        EffectType::Multiplicative => {
            let base = if acc.has_contribution { acc.value } else { 1.0 };
            AccumulatedEffect {
                value: base * gene_value * scale,
                has_contribution: true,
            }
        }
        EffectType::Threshold => {
            if gene_value >= scale {
                AccumulatedEffect {
                    value: acc.value + gene_value,
                    has_contribution: true,
                }
            } else {
                acc
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(steps: &[(EffectType, f32, f32)]) -> AccumulatedEffect {
        steps
            .iter()
            .fold(AccumulatedEffect::default(), |acc, &(e, v, s)| {
                accumulate_effect(acc, e, v, s)
            })
    }

    #[test]
    fn test_direct_overwrites() {
        let acc = fold(&[
            (EffectType::Additive, 2.0, 1.0),
            (EffectType::Direct, 0.5, 2.0),
        ]);
        assert_eq!(acc.value, 1.0);
        assert!(acc.has_contribution);
    }

    #[test]
    fn test_additive_sums() {
        let acc = fold(&[
            (EffectType::Additive, 1.0, 0.5),
            (EffectType::Additive, 2.0, 0.25),
        ]);
        assert!((acc.value - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_multiplicative_starts_from_one() {
        let acc = fold(&[(EffectType::Multiplicative, 0.5, 2.0)]);
        assert!((acc.value - 1.0).abs() < 1e-6);

        let acc = fold(&[
            (EffectType::Additive, 3.0, 1.0),
            (EffectType::Multiplicative, 0.5, 1.0),
        ]);
        assert!((acc.value - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_adds_raw_value() {
        let below = fold(&[(EffectType::Threshold, 0.2, 0.3)]);
        assert_eq!(below, AccumulatedEffect::default());

        let above = fold(&[(EffectType::Threshold, 0.4, 0.3)]);
        assert!((above.value - 0.4).abs() < 1e-6);
        assert!(above.has_contribution);
    }

    #[test]
    fn test_conditional_matches_additive() {
        let a = fold(&[(EffectType::Conditional, 1.5, 2.0)]);
        let b = fold(&[(EffectType::Additive, 1.5, 2.0)]);
        assert_eq!(a, b);
    }
}
