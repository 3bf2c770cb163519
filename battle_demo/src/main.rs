//! Battle Demo - Scripted console replay of a creature battle
//!
//! Loads a roster (the built-in four-creature battle by default), prints the
//! initial status of every combatant, replays the roster's attack script and
//! prints the final standings.

use battle_core::config::{default_roster, load_roster, ConfigError, RosterConfig};
use battle_core::{Arena, BattleError};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Replay a scripted creature battle
#[derive(Parser, Debug)]
#[command(name = "battle_demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster TOML file (default: built-in four-creature battle)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Emit each attack result as a JSON line instead of text
    #[arg(long)]
    json: bool,

    /// Log every resolution step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Errors surfaced by the demo
#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Battle(#[from] BattleError),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(args: &Args) -> Result<(), DemoError> {
    let roster = match &args.roster {
        Some(path) => {
            tracing::info!("Loading roster from {}", path.display());
            load_roster(path)?
        }
        None => default_roster(),
    };

    let mut arena = roster.build_arena()?;
    tracing::info!(
        "{} combatants, {} scripted attacks",
        arena.len(),
        roster.script.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        replay_json(&mut arena, &roster, &mut out)
    } else {
        replay_text(&mut arena, &roster, &mut out)
    }
}

fn replay_text(arena: &mut Arena, roster: &RosterConfig, out: &mut impl Write) -> Result<(), DemoError> {
    writeln!(out, "\n*** Initial Status ***")?;
    write_status(arena, out)?;

    writeln!(out, "\n*** Battle ***")?;
    let results = arena.run_script(&roster.script)?;
    for result in &results {
        writeln!(out, "  {}", result.summary())?;
    }

    writeln!(out, "\n*** Final Status ***")?;
    write_status(arena, out)?;

    match arena.winner() {
        Some(winner) => writeln!(out, "\nWinner: {}", winner.name())?,
        None => writeln!(out, "\n{} combatants still standing", arena.active().count())?,
    }

    Ok(())
}

/// One JSON object per attack, one per line
fn replay_json(arena: &mut Arena, roster: &RosterConfig, out: &mut impl Write) -> Result<(), DemoError> {
    let results = arena.run_script(&roster.script)?;
    for result in &results {
        serde_json::to_writer(&mut *out, result)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_status(arena: &Arena, out: &mut impl Write) -> io::Result<()> {
    for combatant in arena.combatants() {
        writeln!(out, "  {}", combatant.describe())?;
    }
    Ok(())
}
