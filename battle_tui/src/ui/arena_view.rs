//! Arena tab: roster, selection and battle log

use super::{element_color, health_bar};
use crate::app::App;
use battle_core::effectiveness;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(48), // Roster
            Constraint::Min(30),    // Log
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Roster list
            Constraint::Length(5), // Matchup preview
        ])
        .split(chunks[0]);

    draw_roster(f, app, left[0]);
    draw_preview(f, app, left[1]);
    draw_combat_log(f, app, chunks[1]);
}

fn draw_roster(f: &mut Frame, app: &App, area: Rect) {
    // Bars are scaled to the healthiest starting combatant
    let scale = app
        .roster
        .combatants
        .iter()
        .map(|c| u32::try_from(c.health).unwrap_or(0))
        .max()
        .unwrap_or(0);
    let bar_width = 16;

    let items: Vec<ListItem> = app
        .arena
        .combatants()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let marker = match (app.attacker == Some(i), app.selected == i) {
                (true, _) => "⚔",
                (false, true) => "▶",
                _ => " ",
            };
            let name_style = if c.is_defeated() {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else if app.selected == i {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{:12}", c.name()), name_style),
                    Span::styled(
                        format!("{:7}", c.element().name()),
                        Style::default().fg(element_color(c.element())),
                    ),
                    Span::styled(format!("ATK {:3}", c.attack_power()), Style::default().fg(Color::Gray)),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        health_bar(c.health(), scale, bar_width),
                        Style::default().fg(if c.is_defeated() { Color::DarkGray } else { Color::Green }),
                    ),
                    Span::styled(
                        format!(" {:>4} {}", c.health(), c.status().label()),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
            ])
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Roster "));
    f.render_widget(list, area);
}

fn draw_preview(f: &mut Frame, app: &App, area: Rect) {
    let lines = match (app.attacker_combatant(), app.selected_combatant()) {
        (Some(a), Some(d)) => {
            let matchup = effectiveness(a.element(), d.element());
            vec![
                Line::from(format!("{} → {}", a.name(), d.name())),
                Line::from(vec![
                    Span::styled(
                        format!("x{} ", matchup.multiplier()),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{} damage", matchup.apply(a.attack_power())),
                        Style::default().fg(Color::Red),
                    ),
                ]),
                Line::from(Span::styled(
                    matchup.label().unwrap_or(""),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        _ => vec![Line::from(Span::styled(
            "No attacker marked",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Preview "));
    f.render_widget(paragraph, area);
}

fn draw_combat_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .combat_log
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.contains("wins") {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if line.contains("is KO!") {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if line.contains("cannot attack") || line.contains("already KO") {
                Style::default().fg(Color::DarkGray)
            } else if line.contains("super effective") {
                Style::default().fg(Color::Green)
            } else if line.contains("not very effective") {
                Style::default().fg(Color::Blue)
            } else if line.starts_with("Error") {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Battle Log "));
    f.render_widget(list, area);
}
