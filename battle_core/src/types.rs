//! Core types shared across the battle engine

use crate::error::BattleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total number of elements (for table indexing)
pub const ELEMENT_COUNT: usize = 4;

/// Combatant element, selects the row/column of the effectiveness table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Normal,
    Fire,
    Water,
    Plant,
}

impl Element {
    /// Get all elements in table order
    pub fn all() -> &'static [Element] {
        &[Element::Normal, Element::Fire, Element::Water, Element::Plant]
    }

    /// Row/column index into the effectiveness table
    pub fn index(self) -> usize {
        match self {
            Element::Normal => 0,
            Element::Fire => 1,
            Element::Water => 2,
            Element::Plant => 3,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Element::Normal => "Normal",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Plant => "Plant",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::all()
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BattleError::InvalidArgument(format!("unknown element '{}'", s)))
    }
}
