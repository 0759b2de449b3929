//! Battle panel: monster description, enemy stats, turn and action lines.

use client_frontend_core::{
    MonsterView, ViewModel,
    format::{wrap_text, wrap_width},
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::vitals;
use crate::presentation::theme::Theme;

/// Rows the description may take before it is cut off.
const MAX_DESCRIPTION_ROWS: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &Theme) {
    let Some(monster) = view_model.monster.as_ref() else {
        return;
    };

    let description = wrap_text(&monster.description, wrap_width(area.width as usize));
    let description_rows = (description.lines().count() as u16).min(MAX_DESCRIPTION_ROWS);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(description_rows + 2),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let description_lines: Vec<_> = description
        .lines()
        .map(|line| Line::styled(line.to_string(), theme.description()))
        .collect();
    frame.render_widget(
        Paragraph::new(description_lines)
            .block(Block::default().borders(Borders::ALL).title("Description")),
        chunks[0],
    );

    render_enemy(frame, chunks[1], monster, theme);
    render_exchange(frame, chunks[2], view_model, theme);
    vitals::render(frame, chunks[3], &view_model.player, theme);
}

fn render_enemy(frame: &mut Frame, area: Rect, monster: &MonsterView, theme: &Theme) {
    let mut name = vec![Span::styled(monster.name.clone(), theme.monster_name())];
    if !monster.challenge_rating.is_empty() {
        name.push(Span::styled(
            format!("  CR {}", monster.challenge_rating),
            theme.label(),
        ));
    }

    let lines = vec![
        Line::from(name),
        Line::from(vec![
            Span::styled("HP: ", theme.label()),
            Span::styled(monster.hit_points.to_string(), theme.value()),
            Span::styled("  AC: ", theme.label()),
            Span::styled(monster.armor_class.to_string(), theme.value()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Enemy")),
        area,
    );
}

fn render_exchange(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &Theme) {
    let wrap = wrap_width(area.width as usize);
    let monster_turn = view_model.is_monster_turn();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Turn: ", theme.label()),
            Span::styled(view_model.turn.to_string(), theme.turn(monster_turn)),
        ]),
        Line::raw(""),
    ];

    for text in [&view_model.monster_action, &view_model.player_action]
        .into_iter()
        .flatten()
    {
        lines.extend(
            wrap_text(text, wrap)
                .lines()
                .map(|line| Line::styled(line.to_string(), theme.value())),
        );
    }

    if let Some(intent) = view_model.monster_intent() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(intent, theme.monster_name()));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Combat")),
        area,
    );
}
