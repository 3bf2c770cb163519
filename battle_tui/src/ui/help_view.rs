//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("1-3", "Jump to tab (Arena/Matchups/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Move the roster cursor"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Arena ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("Space", "Mark/unmark the selected combatant as attacker"),
        key_line("Enter / a", "Attacker hits the selected combatant"),
        key_line("s", "One random attack between standing combatants"),
        key_line("f", "Random attacks until one is left"),
        key_line("r", "Reset the roster"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Rules ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Damage:", Style::default().fg(Color::Yellow))),
        Line::from("  Damage = ATK × multiplier, fraction dropped (25 × 0.5 = 12)"),
        Line::from("  Health never drops below 0"),
        Line::from(""),
        Line::from(Span::styled("Elements:", Style::default().fg(Color::Yellow))),
        Line::from("  Fire > Plant > Water > Fire (×2, ×0.5 in reverse)"),
        Line::from("  Same element resists itself (×0.5), Normal is always ×1"),
        Line::from(""),
        Line::from(Span::styled("Knock-out:", Style::default().fg(Color::Yellow))),
        Line::from("  At 0 HP a combatant is KO for good"),
        Line::from("  KO combatants cannot attack and are not valid targets"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Rules "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
