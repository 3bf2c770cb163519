//! Arena - A roster of combatants addressed by name

use crate::combat::{resolve_attack, AttackResult};
use crate::combatant::Combatant;
use crate::error::BattleError;
use serde::{Deserialize, Serialize};

/// One scripted attack, by combatant name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackStep {
    pub attacker: String,
    pub defender: String,
}

impl AttackStep {
    pub fn new(attacker: impl Into<String>, defender: impl Into<String>) -> Self {
        AttackStep {
            attacker: attacker.into(),
            defender: defender.into(),
        }
    }
}

/// Attack results an arena keeps unless told otherwise
pub const DEFAULT_HISTORY_LIMIT: usize = 10_000;

/// Roster of uniquely named combatants plus the history of attacks between them
#[derive(Debug, Clone)]
pub struct Arena {
    combatants: Vec<Combatant>,
    history: Vec<AttackResult>,
    /// Oldest results are dropped past this many
    history_limit: usize,
}

impl Default for Arena {
    fn default() -> Self {
        Arena {
            combatants: Vec::new(),
            history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Arena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` attack results in the history
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self.trim_history();
        self
    }

    /// Create an arena from a roster; names must be unique
    pub fn from_combatants(combatants: Vec<Combatant>) -> Result<Self, BattleError> {
        let mut arena = Arena::new();
        for combatant in combatants {
            arena.add(combatant)?;
        }
        Ok(arena)
    }

    /// Add a combatant to the roster
    pub fn add(&mut self, combatant: Combatant) -> Result<(), BattleError> {
        if self.position(combatant.name()).is_some() {
            return Err(BattleError::DuplicateCombatant(combatant.name().to_string()));
        }
        self.combatants.push(combatant);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.name() == name)
    }

    /// All combatants in insertion order
    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Most recent attacks resolved through this arena, oldest first
    pub fn history(&self) -> &[AttackResult] {
        &self.history
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Resolve an attack between two combatants by name
    ///
    /// A combatant may target itself.
    pub fn attack(&mut self, attacker: &str, defender: &str) -> Result<AttackResult, BattleError> {
        let a = self
            .position(attacker)
            .ok_or_else(|| BattleError::UnknownCombatant(attacker.to_string()))?;
        let d = self
            .position(defender)
            .ok_or_else(|| BattleError::UnknownCombatant(defender.to_string()))?;

        // Snapshot the attacker so the defender can be borrowed mutably,
        // even when both names refer to the same entry.
        let snapshot = self.combatants[a].clone();
        let result = resolve_attack(&snapshot, &mut self.combatants[d]);

        self.history.push(result.clone());
        self.trim_history();
        Ok(result)
    }

    /// Run a sequence of attacks, stopping at the first unknown name
    pub fn run_script(&mut self, steps: &[AttackStep]) -> Result<Vec<AttackResult>, BattleError> {
        let mut results = Vec::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            tracing::debug!("Script step {}: {} -> {}", i + 1, step.attacker, step.defender);
            results.push(self.attack(&step.attacker, &step.defender)?);
        }
        Ok(results)
    }

    /// Combatants still able to fight
    pub fn active(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(|c| !c.is_defeated())
    }

    /// Whether at most one combatant is left standing
    pub fn is_decided(&self) -> bool {
        self.active().count() <= 1
    }

    /// The last combatant standing, if the battle is decided
    pub fn winner(&self) -> Option<&Combatant> {
        let mut active = self.active();
        match (active.next(), active.next()) {
            (Some(last), None) => Some(last),
            _ => None,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.combatants.iter().position(|c| c.name() == name)
    }

    fn trim_history(&mut self) {
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
    }
}
