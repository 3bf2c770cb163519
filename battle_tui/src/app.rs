//! Application state

use crate::simulation::Skirmish;
use battle_core::config::{default_roster, load_roster, ConfigError, RosterConfig};
use battle_core::{Arena, AttackResult, BattleError, Combatant};
use rand::SeedableRng;
use std::path::Path;

/// Attack cap for a fight-to-finish run
const MAX_SKIRMISH_STEPS: u32 = 1000;

/// Battle log lines kept; older lines are dropped
const MAX_LOG_LINES: usize = 500;

/// Log lines visible at once
const LOG_VIEW_LINES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Arena,
    Matchups,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Arena, Tab::Matchups, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Arena => "Arena",
            Tab::Matchups => "Matchups",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    /// Roster the arena is (re)built from
    pub roster: RosterConfig,
    pub arena: Arena,
    /// Cursor in the roster list
    pub selected: usize,
    /// Combatant marked to attack next
    pub attacker: Option<usize>,
    pub combat_log: Vec<String>,
    pub log_scroll: usize,
    pub rng: rand::rngs::StdRng,
    previous_tab: Tab,
}

impl App {
    pub fn new() -> Self {
        let roster = default_roster();
        Self::from_roster(roster).unwrap_or_else(|_| Self::with_arena(RosterConfig::default(), Arena::new()))
    }

    /// Build the app from a roster file
    pub fn from_roster_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_roster(load_roster(path)?)
    }

    pub fn from_roster(roster: RosterConfig) -> Result<Self, ConfigError> {
        let arena = roster.build_arena()?;
        Ok(Self::with_arena(roster, arena))
    }

    fn with_arena(roster: RosterConfig, arena: Arena) -> Self {
        let mut app = App {
            current_tab: Tab::Arena,
            roster,
            arena,
            selected: 0,
            attacker: None,
            combat_log: Vec::new(),
            log_scroll: 0,
            rng: rand::rngs::StdRng::from_entropy(),
            previous_tab: Tab::Arena,
        };
        app.log(format!("{} combatants enter the arena", app.arena.len()));
        app
    }

    // === Navigation ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, idx: usize) {
        if let Some(tab) = Tab::all().get(idx) {
            self.current_tab = *tab;
        }
    }

    pub fn toggle_help(&mut self) {
        if self.current_tab == Tab::Help {
            self.current_tab = self.previous_tab;
        } else {
            self.previous_tab = self.current_tab;
            self.current_tab = Tab::Help;
        }
    }

    pub fn on_up(&mut self) {
        if self.current_tab == Tab::Arena && self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn on_down(&mut self) {
        if self.current_tab == Tab::Arena && self.selected + 1 < self.arena.len() {
            self.selected += 1;
        }
    }

    // === Combat ===

    pub fn selected_combatant(&self) -> Option<&Combatant> {
        self.arena.combatants().get(self.selected)
    }

    pub fn attacker_combatant(&self) -> Option<&Combatant> {
        self.attacker.and_then(|i| self.arena.combatants().get(i))
    }

    /// Mark the selected combatant as the attacker (toggles off if already marked)
    pub fn mark_attacker(&mut self) {
        if self.arena.is_empty() {
            return;
        }
        if self.attacker == Some(self.selected) {
            self.attacker = None;
        } else {
            self.attacker = Some(self.selected);
        }
    }

    /// Marked attacker hits the selected combatant
    pub fn attack(&mut self) {
        let names = match (self.attacker_combatant(), self.selected_combatant()) {
            (Some(a), Some(d)) => (a.name().to_string(), d.name().to_string()),
            _ => {
                self.log("Mark an attacker with [Space] first".to_string());
                return;
            }
        };

        let outcome = self.arena.attack(&names.0, &names.1);
        self.record(outcome);
    }

    /// One random attack between active combatants
    pub fn skirmish_step(&mut self) {
        match Skirmish::step(&mut self.arena, &mut self.rng) {
            Ok(Some(result)) => self.record(Ok(result)),
            Ok(None) => self.announce_result(),
            Err(e) => self.record(Err(e)),
        }
    }

    /// Random attacks until the battle is decided
    pub fn fight_to_finish(&mut self) {
        match Skirmish::run(&mut self.arena, MAX_SKIRMISH_STEPS, &mut self.rng) {
            Ok(skirmish) => {
                let summary = format!(
                    "{} attacks, {} total damage, KO: {}",
                    skirmish.results.len(),
                    skirmish.total_damage(),
                    skirmish.knockouts.join(", ")
                );
                for result in skirmish.results {
                    self.record(Ok(result));
                }
                self.log(summary);
                self.announce_result();
            }
            Err(e) => self.record(Err(e)),
        }
    }

    /// Rebuild the arena from the roster
    pub fn reset(&mut self) {
        match self.roster.build_arena() {
            Ok(arena) => {
                self.arena = arena;
                self.attacker = None;
                self.selected = 0;
                self.combat_log.clear();
                self.log_scroll = 0;
                self.log("Arena reset".to_string());
            }
            Err(e) => self.log(format!("Reset failed: {}", e)),
        }
    }

    fn announce_result(&mut self) {
        let line = match self.arena.winner() {
            Some(winner) => format!("★ {} wins!", winner.name()),
            None if self.arena.is_decided() => "Nobody is left standing".to_string(),
            None => format!("{} combatants still standing", self.arena.active().count()),
        };
        self.log(line);
    }

    fn record(&mut self, outcome: Result<AttackResult, BattleError>) {
        match outcome {
            Ok(result) => self.log(result.summary()),
            Err(e) => self.log(format!("Error: {}", e)),
        }
    }

    fn log(&mut self, line: String) {
        self.combat_log.push(line);
        if self.combat_log.len() > MAX_LOG_LINES {
            let excess = self.combat_log.len() - MAX_LOG_LINES;
            self.combat_log.drain(..excess);
        }
        // Keep the newest lines in view
        self.log_scroll = self.combat_log.len().saturating_sub(LOG_VIEW_LINES);
    }
}
