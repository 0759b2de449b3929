//! UI rendering entry point composing all widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    presentation::{terminal::Tui, theme::Theme, widgets},
    state::AppState,
};
use client_frontend_core::{MessageLog, ViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Draw one frame: header, camp or battle panel, message log, footer.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = Theme;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Camp or battle
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(1),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.view_model, &theme);

        if ctx.view_model.in_battle() {
            widgets::battle::render(frame, chunks[1], ctx.view_model, &theme);
        } else {
            widgets::camp::render(frame, chunks[1], ctx.view_model, ctx.app_state, &theme);
        }

        let recent: Vec<_> = ctx
            .messages
            .recent(ctx.message_panel_height as usize)
            .cloned()
            .collect();
        widgets::messages::render(frame, chunks[2], &recent, &theme);

        widgets::footer::render(frame, chunks[3], ctx.view_model, &theme);
    })?;

    Ok(())
}
