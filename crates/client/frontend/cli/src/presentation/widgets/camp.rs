//! Camp panel: last outcome, fetch errors, and the loading spinner.

use client_frontend_core::{
    ViewModel,
    format::{LOADING_TEXT, wrap_text, wrap_width},
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::vitals;
use crate::{presentation::theme::Theme, state::AppState};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    app_state: &AppState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let wrap = wrap_width(chunks[0].width as usize);
    let mut lines = Vec::new();

    if let Some(notice) = &view_model.notice {
        lines.extend(
            wrap_text(notice, wrap)
                .lines()
                .map(|line| Line::styled(line.to_string(), theme.notice())),
        );
        lines.push(Line::raw(""));
    }

    if view_model.loading {
        lines.push(Line::from(vec![
            Span::styled(app_state.spinner(), theme.key()),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, theme.value()),
        ]));
    } else {
        if let Some(error) = &view_model.error {
            lines.extend(
                wrap_text(&format!("Error: {error}"), wrap)
                    .lines()
                    .map(|line| Line::styled(line.to_string(), theme.error())),
            );
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            "You are resting at camp. A fresh challenger awaits.",
            theme.label(),
        ));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Camp"));
    frame.render_widget(paragraph, chunks[0]);

    vitals::render(frame, chunks[1], &view_model.player, theme);
}
