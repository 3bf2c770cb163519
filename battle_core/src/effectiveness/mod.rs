//! Type effectiveness - Attacker element vs defender element
//!
//! The matchup is pure data: a 4x4 table indexed by element. Fire beats
//! Plant, Water beats Fire, Plant beats Water. Each non-Normal element
//! resists its own kind and Normal is neutral in both directions.

mod table;

pub use table::EffectivenessTable;

use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Multiplier constants
pub mod constants {
    pub const RESISTED_MULTIPLIER: f64 = 0.5;
    pub const NEUTRAL_MULTIPLIER: f64 = 1.0;
    pub const SUPER_EFFECTIVE_MULTIPLIER: f64 = 2.0;
}

/// Outcome of a single element matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    Resisted,
    Neutral,
    SuperEffective,
}

impl Effectiveness {
    /// Damage multiplier for this matchup
    pub fn multiplier(self) -> f64 {
        match self {
            Effectiveness::Resisted => constants::RESISTED_MULTIPLIER,
            Effectiveness::Neutral => constants::NEUTRAL_MULTIPLIER,
            Effectiveness::SuperEffective => constants::SUPER_EFFECTIVE_MULTIPLIER,
        }
    }

    /// Scale attack power, truncating toward zero (25 at x0.5 deals 12)
    pub fn apply(self, attack_power: u32) -> u32 {
        // `as` saturates on overflow
        (f64::from(attack_power) * self.multiplier()).trunc() as u32
    }

    /// Battle-log phrase, if the matchup is worth mentioning
    pub fn label(self) -> Option<&'static str> {
        match self {
            Effectiveness::Resisted => Some("It's not very effective..."),
            Effectiveness::Neutral => None,
            Effectiveness::SuperEffective => Some("It's super effective!"),
        }
    }
}

/// Look up a matchup on the standard table
pub fn effectiveness(attacker: Element, defender: Element) -> Effectiveness {
    EffectivenessTable::STANDARD.lookup(attacker, defender)
}

/// Damage multiplier for a matchup on the standard table
pub fn multiplier(attacker: Element, defender: Element) -> f64 {
    effectiveness(attacker, defender).multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_resistance() {
        for &e in Element::all() {
            let expected = if e == Element::Normal { 1.0 } else { 0.5 };
            assert!((multiplier(e, e) - expected).abs() < f64::EPSILON, "{:?}", e);
        }
    }

    #[test]
    fn test_triangle() {
        let wins = [
            (Element::Fire, Element::Plant),
            (Element::Plant, Element::Water),
            (Element::Water, Element::Fire),
        ];
        for (strong, weak) in wins {
            assert!((multiplier(strong, weak) - 2.0).abs() < f64::EPSILON);
            assert!((multiplier(weak, strong) - 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_normal_is_neutral_both_ways() {
        for &e in Element::all() {
            assert_eq!(effectiveness(Element::Normal, e), Effectiveness::Neutral);
            assert_eq!(effectiveness(e, Element::Normal), Effectiveness::Neutral);
        }
    }

    #[test]
    fn test_no_immunities() {
        for &a in Element::all() {
            for &d in Element::all() {
                assert!(multiplier(a, d) > 0.0);
            }
        }
    }

    #[test]
    fn test_apply_truncates() {
        assert_eq!(Effectiveness::Resisted.apply(25), 12);
        assert_eq!(Effectiveness::Resisted.apply(22), 11);
        assert_eq!(Effectiveness::Resisted.apply(1), 0);
        assert_eq!(Effectiveness::Neutral.apply(20), 20);
        assert_eq!(Effectiveness::SuperEffective.apply(18), 36);
    }

    #[test]
    fn test_apply_saturates() {
        assert_eq!(Effectiveness::SuperEffective.apply(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_labels() {
        assert!(Effectiveness::SuperEffective.label().unwrap().contains("super"));
        assert!(Effectiveness::Resisted.label().unwrap().contains("not very"));
        assert!(Effectiveness::Neutral.label().is_none());
    }
}
