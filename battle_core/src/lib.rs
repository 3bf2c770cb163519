//! battle_core - Element-typed combat resolution for creature battles
//!
//! This library provides:
//! - Combatant: A named creature with health, attack power and an element
//! - EffectivenessTable: The fixed element-vs-element damage multipliers
//! - Attack Resolution: Guarded, truncating damage from attacker to defender
//! - Arena: A named roster that sequences attacks and keeps a history

pub mod arena;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod effectiveness;
pub mod error;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use arena::{Arena, AttackStep, DEFAULT_HISTORY_LIMIT};
pub use combat::{resolve_attack, resolve_attack_with_table, AttackReason, AttackResult};
pub use combatant::{Combatant, Vitality};
pub use config::{default_roster, ConfigError, RosterConfig};
pub use effectiveness::{effectiveness, multiplier, Effectiveness, EffectivenessTable};
pub use error::BattleError;
pub use types::{Element, ELEMENT_COUNT};
