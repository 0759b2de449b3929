//! Message history panel, newest line at the bottom.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

/// `entries` are newest first, as returned by `MessageLog::recent`.
pub fn render(frame: &mut Frame, area: Rect, entries: &[MessageEntry], theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<_> = entries
        .iter()
        .take(visible)
        .rev()
        .map(|entry| Line::styled(entry.text.clone(), theme.message(entry.level)))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"));

    frame.render_widget(paragraph, area);
}
