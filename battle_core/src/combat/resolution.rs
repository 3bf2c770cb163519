//! Attack resolution - Apply an attacker's strike to a defender

use super::result::{AttackReason, AttackResult};
use crate::combatant::Combatant;
use crate::effectiveness::EffectivenessTable;

/// Resolve an attack against the standard effectiveness table
///
/// This is the main combat resolution function that:
/// 1. Refuses to act if the attacker is knocked out
/// 2. Refuses to act if the defender is already knocked out
/// 3. Looks up the element matchup and scales attack power (truncating)
/// 4. Lowers the defender's health, flooring at zero
pub fn resolve_attack(attacker: &Combatant, defender: &mut Combatant) -> AttackResult {
    resolve_attack_with_table(&EffectivenessTable::STANDARD, attacker, defender)
}

/// Resolve an attack with a provided effectiveness table
pub fn resolve_attack_with_table(
    table: &EffectivenessTable,
    attacker: &Combatant,
    defender: &mut Combatant,
) -> AttackResult {
    let health_before = defender.health();
    let mut result = AttackResult {
        applied: false,
        damage: 0,
        reason: AttackReason::Ok,
        attacker: attacker.name().to_string(),
        attacker_element: attacker.element(),
        defender: defender.name().to_string(),
        defender_element: defender.element(),
        effectiveness: None,
        health_before,
        health_after: health_before,
        is_knockout: false,
    };

    // Guards, in order
    if attacker.is_defeated() {
        tracing::debug!("{} is KO and cannot attack {}", attacker.name(), defender.name());
        result.reason = AttackReason::AttackerDefeated;
        return result;
    }
    if defender.is_defeated() {
        tracing::debug!("{} targeted {} who is already KO", attacker.name(), defender.name());
        result.reason = AttackReason::DefenderAlreadyDefeated;
        return result;
    }

    let effectiveness = table.lookup(attacker.element(), defender.element());
    let damage = effectiveness.apply(attacker.attack_power());
    let health_after = defender.take_damage(damage);

    result.applied = true;
    result.damage = damage;
    result.effectiveness = Some(effectiveness);
    result.health_after = health_after;
    result.is_knockout = health_after == 0;

    tracing::debug!(
        "{} ({}) -> {} ({}): x{} = {} damage, hp {} -> {}",
        attacker.name(),
        attacker.element(),
        defender.name(),
        defender.element(),
        effectiveness.multiplier(),
        damage,
        health_before,
        health_after
    );
    if result.is_knockout {
        tracing::info!("{} knocked out {}", attacker.name(), defender.name());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effectiveness::Effectiveness;
    use crate::types::{Element, ELEMENT_COUNT};
    use proptest::prelude::*;

    fn pikachu() -> Combatant {
        Combatant::new("Pikachu", 100, 20, Element::Normal)
    }
    fn charmander() -> Combatant {
        Combatant::new("Charmander", 60, 25, Element::Fire)
    }
    fn squirtle() -> Combatant {
        Combatant::new("Squirtle", 90, 22, Element::Water)
    }
    fn bulbasaur() -> Combatant {
        Combatant::new("Bulbasaur", 85, 18, Element::Plant)
    }

    #[test]
    fn test_neutral_hit() {
        let attacker = pikachu();
        let mut defender = charmander();

        let result = resolve_attack(&attacker, &mut defender);

        assert!(result.applied);
        assert_eq!(result.reason, AttackReason::Ok);
        assert_eq!(result.effectiveness, Some(Effectiveness::Neutral));
        assert_eq!(result.damage, 20);
        assert_eq!(defender.health(), 40);
        assert_eq!(result.defender_health(), 40);
        assert!(!result.is_knockout);
    }

    #[test]
    fn test_super_effective_hit() {
        let attacker = bulbasaur();
        let mut defender = squirtle();

        let result = resolve_attack(&attacker, &mut defender);

        assert_eq!(result.effectiveness, Some(Effectiveness::SuperEffective));
        assert_eq!(result.damage, 36);
        assert_eq!(defender.health(), 54);
    }

    #[test]
    fn test_overkill_floors_at_zero() {
        let attacker = squirtle();
        let mut defender = Combatant::new("Charmander", 40, 25, Element::Fire);

        let result = resolve_attack(&attacker, &mut defender);

        assert_eq!(result.damage, 44);
        assert_eq!(defender.health(), 0);
        assert!(defender.is_defeated());
        assert!(result.is_knockout);
        assert_eq!(result.health_change(), 40);
    }

    #[test]
    fn test_resisted_damage_truncates() {
        let attacker = charmander();
        let mut defender = Combatant::new("Vulpix", 100, 10, Element::Fire);

        let result = resolve_attack(&attacker, &mut defender);

        // 25 * 0.5 = 12.5 -> 12
        assert_eq!(result.damage, 12);
        assert_eq!(defender.health(), 88);
    }

    #[test]
    fn test_defeated_attacker_cannot_act() {
        let attacker = Combatant::new("Charmander", 0, 25, Element::Fire);
        let mut defender = bulbasaur();

        let result = resolve_attack(&attacker, &mut defender);

        assert!(!result.applied);
        assert_eq!(result.reason, AttackReason::AttackerDefeated);
        assert_eq!(result.damage, 0);
        assert_eq!(result.effectiveness, None);
        assert_eq!(defender.health(), 85);
    }

    #[test]
    fn test_attacker_guard_checked_first() {
        let attacker = Combatant::new("Husk", 0, 25, Element::Fire);
        let mut defender = Combatant::new("Shell", 0, 5, Element::Plant);

        let result = resolve_attack(&attacker, &mut defender);
        assert_eq!(result.reason, AttackReason::AttackerDefeated);
    }

    #[test]
    fn test_defeated_defender_is_skipped() {
        let attacker = pikachu();
        let mut defender = Combatant::new("Charmander", 0, 25, Element::Fire);

        let result = resolve_attack(&attacker, &mut defender);

        assert!(!result.applied);
        assert_eq!(result.reason, AttackReason::DefenderAlreadyDefeated);
        assert_eq!(defender.health(), 0);
        assert!(!result.is_knockout);
    }

    #[test]
    fn test_zero_attack_power_lands_without_damage() {
        let attacker = Combatant::new("Magikarp", 10, 0, Element::Water);
        let mut defender = charmander();

        let result = resolve_attack(&attacker, &mut defender);

        assert!(result.applied);
        assert_eq!(result.damage, 0);
        assert_eq!(defender.health(), 60);
    }

    #[test]
    fn test_resisted_single_point_rounds_to_zero() {
        // 1 * 0.5 truncates to 0; there is no minimum-damage floor
        let attacker = Combatant::new("Poliwag", 10, 1, Element::Water);
        let mut defender = squirtle();

        let result = resolve_attack(&attacker, &mut defender);

        assert!(result.applied);
        assert_eq!(result.effectiveness, Some(Effectiveness::Resisted));
        assert_eq!(result.damage, 0);
        assert_eq!(defender.health(), 90);
        assert!(!result.is_knockout);
    }

    #[test]
    fn test_custom_table() {
        let all_super = EffectivenessTable::from_rows(
            [[Effectiveness::SuperEffective; ELEMENT_COUNT]; ELEMENT_COUNT],
        );
        let attacker = pikachu();
        let mut defender = charmander();

        let result = resolve_attack_with_table(&all_super, &attacker, &mut defender);
        assert_eq!(result.damage, 40);
        assert_eq!(defender.health(), 20);
    }

    fn element_strategy() -> impl Strategy<Value = Element> {
        prop::sample::select(Element::all().to_vec())
    }

    fn combatant_strategy() -> impl Strategy<Value = Combatant> {
        (0u32..500, 0u32..200, element_strategy())
            .prop_map(|(hp, atk, element)| Combatant::new("c", hp, atk, element))
    }

    proptest! {
        #[test]
        fn prop_damage_matches_table(attacker in combatant_strategy(), defender in combatant_strategy()) {
            prop_assume!(!attacker.is_defeated() && !defender.is_defeated());
            let mut defender = defender;
            let before = defender.health();
            let m = EffectivenessTable::STANDARD.multiplier(attacker.element(), defender.element());

            let result = resolve_attack(&attacker, &mut defender);

            let expected = (f64::from(attacker.attack_power()) * m).trunc() as u32;
            prop_assert_eq!(result.damage, expected);
            prop_assert_eq!(defender.health(), before.saturating_sub(expected));
        }

        #[test]
        fn prop_health_never_negative(
            roster in prop::collection::vec(combatant_strategy(), 2..6),
            moves in prop::collection::vec((0usize..6, 0usize..6), 0..60),
        ) {
            let mut roster = roster;
            let n = roster.len();
            for (a, d) in moves {
                let (a, d) = (a % n, d % n);
                if a == d {
                    continue;
                }
                let attacker = roster[a].clone();
                let before: Vec<u32> = roster.iter().map(Combatant::health).collect();
                resolve_attack(&attacker, &mut roster[d]);

                for (i, c) in roster.iter().enumerate() {
                    // Only the defender may change, and only downwards
                    if i == d {
                        prop_assert!(c.health() <= before[i]);
                    } else {
                        prop_assert_eq!(c.health(), before[i]);
                    }
                    prop_assert_eq!(c.is_defeated(), c.health() == 0);
                }
            }
        }

        #[test]
        fn prop_defeated_attacker_is_inert(
            atk in 0u32..200,
            element in element_strategy(),
            defender in combatant_strategy(),
            repeats in 1usize..20,
        ) {
            let attacker = Combatant::new("ko", 0, atk, element);
            let mut defender = defender;
            let before = defender.health();

            for _ in 0..repeats {
                let result = resolve_attack(&attacker, &mut defender);
                prop_assert_eq!(result.reason, AttackReason::AttackerDefeated);
                prop_assert!(!result.applied);
                prop_assert_eq!(attacker.health(), 0);
                prop_assert_eq!(defender.health(), before);
            }
        }
    }
}
