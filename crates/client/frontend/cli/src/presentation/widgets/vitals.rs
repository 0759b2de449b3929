//! Player health gauge shared by the camp and battle panels.

use client_frontend_core::PlayerView;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Gauge},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, player: &PlayerView, theme: &Theme) {
    let ratio = player.health_ratio();
    let label = format!(
        "HP {}/{}  AC {}",
        player.hit_points, player.max_hit_points, player.armor_class
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (you)", player.race)),
        )
        .gauge_style(theme.health(ratio))
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, area);
}
