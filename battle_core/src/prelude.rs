//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{Combatant, Vitality};
pub use crate::types::Element;

// Effectiveness
pub use crate::effectiveness::{Effectiveness, EffectivenessTable};

// Combat
pub use crate::combat::{resolve_attack, AttackReason, AttackResult};
pub use crate::arena::{Arena, AttackStep};

// Errors and config
pub use crate::config::{default_roster, ConfigError, RosterConfig};
pub use crate::error::BattleError;
