use crate::genetics::traits;
use crate::organism::Organism;
use crate::rng::RandomExt;
use crate::world::CreatureView;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Bite,
    Claw,
    Charge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackAction {
    pub kind: AttackKind,
    pub base_damage: f32,
    pub accuracy: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackResult {
    pub kind: AttackKind,
    pub hit: bool,
    pub damage: f32,
}

/// Attack choice and resolution between a hunter and its target.
#[derive(Debug, Clone, Default)]
pub struct CombatSystem;

impl CombatSystem {
    fn available_actions(attacker: &Organism) -> [AttackAction; 3] {
        let phenotype = &attacker.phenotype;
        let teeth = phenotype.trait_or(traits::TEETH, 0.0);
        let claws = phenotype.trait_or(traits::CLAWS, 0.0);
        let size = phenotype.trait_or(traits::SIZE, 1.0);
        let locomotion = phenotype.trait_or(traits::LOCOMOTION, 0.0);
        [
            AttackAction {
                kind: AttackKind::Bite,
                base_damage: 0.4 * teeth,
                accuracy: 0.6,
            },
            AttackAction {
                kind: AttackKind::Claw,
                base_damage: 0.25 * claws,
                accuracy: 0.8,
            },
            AttackAction {
                kind: AttackKind::Charge,
                base_damage: 0.15 * size,
                accuracy: (0.3 + 0.5 * locomotion).min(0.9),
            },
        ]
    }

    /// Attack with the highest expected damage against `defender`, if any deals damage.
    #[must_use]
    pub fn select_best_action(
        &self,
        attacker: &Organism,
        defender: &CreatureView,
    ) -> Option<AttackAction> {
        let mitigation = 1.0 - defender.armor.clamp(0.0, 0.9);
        Self::available_actions(attacker)
            .into_iter()
            .filter(|action| action.base_damage > 0.0)
            .max_by(|a, b| {
                (a.base_damage * a.accuracy * mitigation)
                    .total_cmp(&(b.base_damage * b.accuracy * mitigation))
            })
    }

    pub fn resolve_attack<R: Rng>(
        &self,
        _attacker: &Organism,
        defender: &CreatureView,
        action: &AttackAction,
        rng: &mut R,
    ) -> AttackResult {
        let hit = rng.chance(action.accuracy);
        let damage = if hit {
            action.base_damage * (1.0 - defender.armor.clamp(0.0, 0.9))
        } else {
            0.0
        };
        AttackResult {
            kind: action.kind,
            hit,
            damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::test_support::{creature_view, organism_with_traits};
    use verdant_data::Position;

    #[test]
    fn test_prefers_highest_expected_damage() {
        let attacker = organism_with_traits(&[(traits::TEETH, 1.0), (traits::CLAWS, 0.1)]);
        let defender = creature_view(2, Position::default());
        let action = CombatSystem.select_best_action(&attacker, &defender).unwrap();
        assert_eq!(action.kind, AttackKind::Bite);
    }

    #[test]
    fn test_no_weapons_still_allows_charge() {
        let attacker = organism_with_traits(&[(traits::SIZE, 1.0)]);
        let defender = creature_view(2, Position::default());
        let action = CombatSystem.select_best_action(&attacker, &defender).unwrap();
        assert_eq!(action.kind, AttackKind::Charge);
    }

    #[test]
    fn test_armor_reduces_damage() {
        let attacker = organism_with_traits(&[(traits::TEETH, 1.0)]);
        let mut defender = creature_view(2, Position::default());
        defender.armor = 0.5;
        let action = AttackAction {
            kind: AttackKind::Bite,
            base_damage: 0.4,
            accuracy: 1.0,
        };
        let result = CombatSystem.resolve_attack(&attacker, &defender, &action, &mut seeded(1));
        assert!(result.hit);
        assert!((result.damage - 0.2).abs() < 1e-6);
    }
}
