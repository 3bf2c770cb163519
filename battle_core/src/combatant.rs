//! Combatant - A named creature with health, attack power and an element

use crate::error::BattleError;
use crate::types::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Life state of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vitality {
    /// health > 0
    Active,
    /// health == 0, terminal
    Defeated,
}

impl Vitality {
    pub fn label(self) -> &'static str {
        match self {
            Vitality::Active => "Alive",
            Vitality::Defeated => "KO",
        }
    }
}

/// A combatant taking part in a battle.
///
/// Identity, attack power and element are fixed at construction. Health is
/// only ever lowered by attack resolution and never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    health: u32,
    attack_power: u32,
    element: Element,
}

impl Combatant {
    /// Create a new combatant
    pub fn new(name: impl Into<String>, health: u32, attack_power: u32, element: Element) -> Self {
        Combatant {
            name: name.into(),
            health,
            attack_power,
            element,
        }
    }

    /// Create a combatant from signed values, rejecting anything out of range
    ///
    /// Negative health or attack power is refused rather than clamped.
    pub fn try_new(
        name: impl Into<String>,
        health: i64,
        attack_power: i64,
        element: Element,
    ) -> Result<Self, BattleError> {
        let name = name.into();
        let health = checked_stat(&name, "health", health)?;
        let attack_power = checked_stat(&name, "attack power", attack_power)?;
        Ok(Combatant::new(name, health, attack_power, element))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Check if the combatant is knocked out (health is exactly 0)
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Current life state
    pub fn status(&self) -> Vitality {
        if self.is_defeated() {
            Vitality::Defeated
        } else {
            Vitality::Active
        }
    }

    /// Render a one-line status for display
    pub fn describe(&self) -> String {
        format!(
            "{} [{}] HP: {} ATK: {} - {}",
            self.name,
            self.element,
            self.health,
            self.attack_power,
            self.status().label()
        )
    }

    /// Lower health by `damage`, flooring at zero. Returns the new health.
    pub(crate) fn take_damage(&mut self, damage: u32) -> u32 {
        self.health = self.health.saturating_sub(damage);
        self.health
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn checked_stat(name: &str, stat: &str, value: i64) -> Result<u32, BattleError> {
    u32::try_from(value).map_err(|_| {
        BattleError::InvalidArgument(format!("{} for '{}' out of range: {}", stat, name, value))
    })
}
