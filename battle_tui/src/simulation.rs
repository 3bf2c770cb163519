//! Skirmish simulation utilities

use battle_core::{Arena, AttackResult, AttackStep, BattleError};
use rand::Rng;

/// Random free-for-all between the active combatants of an arena
pub struct Skirmish {
    pub results: Vec<AttackResult>,
    pub knockouts: Vec<String>,
}

impl Skirmish {
    /// Pick a random active attacker and a different active defender
    pub fn pick(arena: &Arena, rng: &mut impl Rng) -> Option<AttackStep> {
        let active: Vec<&str> = arena.active().map(|c| c.name()).collect();
        if active.len() < 2 {
            return None;
        }

        let a = rng.gen_range(0..active.len());
        // Skip over the attacker's slot
        let mut d = rng.gen_range(0..active.len() - 1);
        if d >= a {
            d += 1;
        }

        Some(AttackStep::new(active[a], active[d]))
    }

    /// Resolve one random attack; `None` once the battle is decided
    pub fn step(arena: &mut Arena, rng: &mut impl Rng) -> Result<Option<AttackResult>, BattleError> {
        match Self::pick(arena, rng) {
            Some(step) => arena.attack(&step.attacker, &step.defender).map(Some),
            None => Ok(None),
        }
    }

    /// Run random attacks until one combatant is left or `max_steps` is hit
    pub fn run(arena: &mut Arena, max_steps: u32, rng: &mut impl Rng) -> Result<Self, BattleError> {
        let mut skirmish = Skirmish {
            results: Vec::new(),
            knockouts: Vec::new(),
        };

        for _ in 0..max_steps {
            let Some(result) = Self::step(arena, rng)? else {
                break;
            };
            if result.is_knockout {
                skirmish.knockouts.push(result.defender.clone());
            }
            skirmish.results.push(result);
        }

        Ok(skirmish)
    }

    /// Total damage dealt across the skirmish
    pub fn total_damage(&self) -> u64 {
        self.results.iter().map(|r| u64::from(r.damage)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{default_roster, AttackReason, Combatant, Element};
    use rand::SeedableRng;

    #[test]
    fn test_skirmish_runs_to_a_winner() {
        let mut arena = default_roster().build_arena().unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let skirmish = Skirmish::run(&mut arena, 1000, &mut rng).unwrap();

        assert!(arena.is_decided());
        assert!(arena.winner().is_some());
        assert_eq!(skirmish.knockouts.len(), 3);
        assert!(skirmish.total_damage() > 0);
        // Only active combatants are picked, so every attack lands
        assert!(skirmish.results.iter().all(|r| r.reason == AttackReason::Ok));
    }

    #[test]
    fn test_pick_needs_two_active() {
        let arena = Arena::from_combatants(vec![
            Combatant::new("Alone", 10, 5, Element::Fire),
            Combatant::new("Down", 0, 5, Element::Water),
        ])
        .unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        assert!(Skirmish::pick(&arena, &mut rng).is_none());
    }

    #[test]
    fn test_pick_never_targets_self() {
        let arena = default_roster().build_arena().unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        for _ in 0..200 {
            let step = Skirmish::pick(&arena, &mut rng).unwrap();
            assert_ne!(step.attacker, step.defender);
        }
    }

    #[test]
    fn test_step_cap() {
        let mut arena = default_roster().build_arena().unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);

        let skirmish = Skirmish::run(&mut arena, 2, &mut rng).unwrap();
        assert_eq!(skirmish.results.len(), 2);
    }
}
