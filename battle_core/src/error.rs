//! Battle errors

use thiserror::Error;

/// Caller contract violations reported by the battle engine.
///
/// Guard outcomes of an attack (a knocked-out attacker or target) are not
/// errors; they are reported through [`crate::combat::AttackReason`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unknown combatant: {0}")]
    UnknownCombatant(String),
    #[error("Duplicate combatant: {0}")]
    DuplicateCombatant(String),
}
