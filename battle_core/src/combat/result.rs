//! AttackResult - Outcome of attack resolution

use crate::effectiveness::Effectiveness;
use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Why an attack did or did not land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackReason {
    /// Damage was applied
    Ok,
    /// The attacker is knocked out and cannot act
    AttackerDefeated,
    /// The target was already knocked out
    DefenderAlreadyDefeated,
}

/// Result of resolving one attack of attacker on defender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    // === Outcome ===
    /// Whether damage was applied
    pub applied: bool,
    /// Damage applied to the defender (0 when not applied)
    pub damage: u32,
    pub reason: AttackReason,

    // === Participants ===
    pub attacker: String,
    pub attacker_element: Element,
    pub defender: String,
    pub defender_element: Element,
    /// Matchup used, present only when the attack landed
    pub effectiveness: Option<Effectiveness>,

    // === State Changes ===
    /// Defender health before the attack
    pub health_before: u32,
    /// Defender health after the attack
    pub health_after: u32,

    // === Flags ===
    /// Whether this attack knocked the defender out
    pub is_knockout: bool,
}

impl AttackResult {
    /// Defender health after resolution
    pub fn defender_health(&self) -> u32 {
        self.health_after
    }

    /// Health lost by the defender (never negative)
    pub fn health_change(&self) -> u32 {
        self.health_before.saturating_sub(self.health_after)
    }

    /// Get a battle-log summary
    pub fn summary(&self) -> String {
        match self.reason {
            AttackReason::AttackerDefeated => {
                format!("{} is KO and cannot attack!", self.attacker)
            }
            AttackReason::DefenderAlreadyDefeated => {
                format!("{} is already KO.", self.defender)
            }
            AttackReason::Ok => {
                let mut parts = vec![format!(
                    "{} ({}) attacks {} ({}) and deals {} damage!",
                    self.attacker, self.attacker_element, self.defender, self.defender_element, self.damage
                )];

                if let Some(label) = self.effectiveness.and_then(Effectiveness::label) {
                    parts.push(label.to_string());
                }

                if self.is_knockout {
                    parts.push(format!("{} is KO!", self.defender));
                }

                parts.join(" ")
            }
        }
    }
}
