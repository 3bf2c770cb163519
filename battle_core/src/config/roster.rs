//! Roster configuration loading

use super::ConfigError;
use crate::arena::{Arena, AttackStep};
use crate::combatant::Combatant;
use crate::types::Element;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A combatant as written in a roster file
///
/// Stats are signed so that negative values reach validation instead of
/// failing as a TOML type error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantConfig {
    pub name: String,
    pub element: Element,
    pub health: i64,
    pub attack_power: i64,
}

impl CombatantConfig {
    pub fn build(&self) -> Result<Combatant, ConfigError> {
        Ok(Combatant::try_new(
            self.name.clone(),
            self.health,
            self.attack_power,
            self.element,
        )?)
    }
}

/// Roster file: combatants plus an optional attack script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub combatants: Vec<CombatantConfig>,
    #[serde(default)]
    pub script: Vec<AttackStep>,
}

impl RosterConfig {
    /// Build an arena, validating stats, unique names and script references
    pub fn build_arena(&self) -> Result<Arena, ConfigError> {
        let combatants = self
            .combatants
            .iter()
            .map(CombatantConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        let arena = Arena::from_combatants(combatants)?;

        for (i, step) in self.script.iter().enumerate() {
            for name in [&step.attacker, &step.defender] {
                if arena.get(name).is_none() {
                    return Err(ConfigError::ValidationError(format!(
                        "script step {} references unknown combatant '{}'",
                        i + 1,
                        name
                    )));
                }
            }
        }

        Ok(arena)
    }
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<RosterConfig, ConfigError> {
    super::load_toml(path)
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<RosterConfig, ConfigError> {
    super::parse_toml(content)
}

/// Get the built-in four-creature roster and its demo script
pub fn default_roster() -> RosterConfig {
    let toml = include_str!("../../config/roster.toml");
    parse_roster(toml).unwrap_or_else(|_| classic_roster())
}

fn classic_roster() -> RosterConfig {
    let combatant = |name: &str, element, health, attack_power| CombatantConfig {
        name: name.to_string(),
        element,
        health,
        attack_power,
    };

    RosterConfig {
        combatants: vec![
            combatant("Pikachu", Element::Normal, 100, 20),
            combatant("Charmander", Element::Fire, 60, 25),
            combatant("Squirtle", Element::Water, 90, 22),
            combatant("Bulbasaur", Element::Plant, 85, 18),
        ],
        script: vec![
            AttackStep::new("Pikachu", "Charmander"),
            AttackStep::new("Bulbasaur", "Squirtle"),
            AttackStep::new("Squirtle", "Charmander"),
            AttackStep::new("Pikachu", "Charmander"),
            AttackStep::new("Charmander", "Bulbasaur"),
        ],
    }
}
