//! battle_tui - Interactive TUI arena for creature battles

mod app;
mod simulation;
mod ui;

use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Interactive creature battle arena
#[derive(Parser, Debug)]
#[command(name = "battle_tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster TOML file (default: built-in four-creature battle)
    #[arg(short, long)]
    roster: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let app = match &args.roster {
        Some(path) => match App::from_roster_file(path) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("Failed to load roster {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => App::new(),
    };

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Terminal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Char(' '), _) => app.mark_attacker(),
                    (KeyCode::Enter, _) | (KeyCode::Char('a'), _) => app.attack(),
                    (KeyCode::Char('s'), _) => app.skirmish_step(),
                    (KeyCode::Char('f'), _) => app.fight_to_finish(),
                    (KeyCode::Char('r'), _) => app.reset(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["battle_tui", "-r", "roster.toml"]).unwrap();
        assert_eq!(args.roster, Some(PathBuf::from("roster.toml")));

        let args = Args::try_parse_from(["battle_tui"]).unwrap();
        assert!(args.roster.is_none());
    }

    #[test]
    fn test_help_is_not_a_roster_path() {
        let err = Args::try_parse_from(["battle_tui", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["battle_tui", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_positional_path_rejected() {
        assert!(Args::try_parse_from(["battle_tui", "roster.toml"]).is_err());
    }
}
