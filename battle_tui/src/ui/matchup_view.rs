//! Matchups tab: the effectiveness table as a grid

use super::element_color;
use crate::app::App;
use battle_core::{Effectiveness, EffectivenessTable, Element};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    draw_table(f, chunks[0]);
    draw_selected(f, app, chunks[1]);
}

fn draw_table(f: &mut Frame, area: Rect) {
    let table = EffectivenessTable::STANDARD;

    let header = Row::new(
        std::iter::once(Cell::from("ATK \\ DEF")).chain(Element::all().iter().map(|e| {
            Cell::from(e.name()).style(Style::default().fg(element_color(*e)).add_modifier(Modifier::BOLD))
        })),
    );

    let rows: Vec<Row> = Element::all()
        .iter()
        .map(|&attacker| {
            let cells = table.row(attacker).iter().map(|m| {
                Cell::from(format!("x{}", m.multiplier())).style(Style::default().fg(matchup_color(*m)))
            });
            Row::new(
                std::iter::once(
                    Cell::from(attacker.name()).style(Style::default().fg(element_color(attacker))),
                )
                .chain(cells),
            )
        })
        .collect();

    let widths = [Constraint::Length(12); 5];
    let grid = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Effectiveness "));

    f.render_widget(grid, area);
}

fn draw_selected(f: &mut Frame, app: &App, area: Rect) {
    let Some(c) = app.selected_combatant() else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{} vs the roster", c.name()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];

    for target in app.arena.combatants().iter().filter(|t| t.name() != c.name()) {
        let m = battle_core::effectiveness(c.element(), target.element());
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", target.name()), Style::default().fg(Color::Gray)),
            Span::styled(format!("x{:<4}", m.multiplier()), Style::default().fg(matchup_color(m))),
            Span::styled(
                format!("{} damage", m.apply(c.attack_power())),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Selected "));
    f.render_widget(paragraph, area);
}

fn matchup_color(m: Effectiveness) -> Color {
    match m {
        Effectiveness::SuperEffective => Color::Green,
        Effectiveness::Neutral => Color::White,
        Effectiveness::Resisted => Color::Red,
    }
}
