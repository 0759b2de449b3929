//! Header widget displaying title, kill streak, scene and turn.

use client_frontend_core::{ViewModel, format::GAME_TITLE};
use game_core::{Scene, Turn};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

/// Render the header panel.
///
/// "Level N" is only shown once the player has a kill streak.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &Theme) {
    let mut spans = vec![Span::styled(GAME_TITLE, theme.title())];

    if view_model.level > 0 {
        spans.push(Span::raw(" - "));
        spans.push(Span::styled(
            format!("Level {}", view_model.level),
            theme.level(),
        ));
    }

    let scene = match view_model.scene {
        Scene::Spawn => "Camp",
        Scene::Battle => "Battle",
    };
    spans.push(Span::styled(" | Scene: ", theme.label()));
    spans.push(Span::styled(scene, theme.value()));

    if view_model.in_battle() {
        let monster_turn = view_model.turn == Turn::Monster;
        spans.push(Span::styled(" | Turn: ", theme.label()));
        spans.push(Span::styled(
            view_model.turn.to_string(),
            theme.turn(monster_turn),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Arena"));

    frame.render_widget(paragraph, area);
}
