//! EffectivenessTable - Attacker row vs defender column

use super::Effectiveness;
use crate::types::{Element, ELEMENT_COUNT};

use super::Effectiveness::{Neutral as N, Resisted as R, SuperEffective as S};

/// A total matchup table, indexed by [`Element::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivenessTable {
    rows: [[Effectiveness; ELEMENT_COUNT]; ELEMENT_COUNT],
}

impl EffectivenessTable {
    /// The standard matchups
    ///
    /// ```text
    ///            Normal  Fire  Water  Plant
    /// Normal      1.0    1.0   1.0    1.0
    /// Fire        1.0    0.5   0.5    2.0
    /// Water       1.0    2.0   0.5    0.5
    /// Plant       1.0    0.5   2.0    0.5
    /// ```
    pub const STANDARD: EffectivenessTable = EffectivenessTable {
        rows: [
            [N, N, N, N],
            [N, R, R, S],
            [N, S, R, R],
            [N, R, S, R],
        ],
    };

    /// Build a table from explicit rows (attacker-major)
    pub const fn from_rows(rows: [[Effectiveness; ELEMENT_COUNT]; ELEMENT_COUNT]) -> Self {
        EffectivenessTable { rows }
    }

    /// Matchup of `attacker` hitting `defender`
    pub fn lookup(&self, attacker: Element, defender: Element) -> Effectiveness {
        self.rows[attacker.index()][defender.index()]
    }

    /// Multiplier of `attacker` hitting `defender`
    pub fn multiplier(&self, attacker: Element, defender: Element) -> f64 {
        self.lookup(attacker, defender).multiplier()
    }

    /// All matchups for one attacker, in [`Element::all`] order
    pub fn row(&self, attacker: Element) -> &[Effectiveness; ELEMENT_COUNT] {
        &self.rows[attacker.index()]
    }
}

impl Default for EffectivenessTable {
    fn default() -> Self {
        EffectivenessTable::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_values() {
        use Element::*;
        let t = EffectivenessTable::STANDARD;
        let expected = [
            (Normal, [1.0, 1.0, 1.0, 1.0]),
            (Fire, [1.0, 0.5, 0.5, 2.0]),
            (Water, [1.0, 2.0, 0.5, 0.5]),
            (Plant, [1.0, 0.5, 2.0, 0.5]),
        ];

        for (attacker, row) in expected {
            for (defender, value) in Element::all().iter().zip(row) {
                assert!(
                    (t.multiplier(attacker, *defender) - value).abs() < f64::EPSILON,
                    "{:?} vs {:?}",
                    attacker,
                    defender
                );
            }
        }
    }

    #[test]
    fn test_row() {
        let row = EffectivenessTable::STANDARD.row(Element::Water);
        assert_eq!(row, &[N, S, R, R]);
    }

    #[test]
    fn test_custom_table() {
        let flat = EffectivenessTable::from_rows([[N; ELEMENT_COUNT]; ELEMENT_COUNT]);
        assert_eq!(flat.lookup(Element::Fire, Element::Plant), Effectiveness::Neutral);
        assert_eq!(EffectivenessTable::default(), EffectivenessTable::STANDARD);
    }
}
