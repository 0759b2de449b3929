//! Footer widget showing the keys that do something right now.

use client_frontend_core::ViewModel;
use game_core::Turn;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::Theme;

/// Key hints for the current view, as `(key, label)` pairs.
pub fn hints(view_model: &ViewModel) -> Vec<(&'static str, &'static str)> {
    if view_model.in_battle() {
        return match view_model.turn {
            Turn::Player => vec![("1", "Attack"), ("q", "Give up")],
            Turn::Monster => vec![("q", "Give up")],
        };
    }

    if view_model.loading {
        return vec![("q", "Quit")];
    }

    let mut hints = vec![("n", "Next battle")];
    if view_model.can_rest {
        hints.push(("r", "Rest"));
    }
    hints.push(("q", "Quit"));
    hints
}

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &Theme) {
    let mut spans = Vec::new();
    for (index, (key, label)) in hints(view_model).into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{key}]"), theme.key()));
        spans.push(Span::styled(format!(" {label}"), theme.label()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
