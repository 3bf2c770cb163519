//! Combat resolution - Apply attacks between combatants

mod resolution;
mod result;

pub use resolution::{resolve_attack, resolve_attack_with_table};
pub use result::{AttackReason, AttackResult};
