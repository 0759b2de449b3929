//! Colors and text styles for the terminal UI.

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Consistent styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct Theme;

impl Theme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn level(&self) -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    pub fn monster_name(&self) -> Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn description(&self) -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn notice(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Whose turn it is: player in green, monster in red.
    pub fn turn(&self, monster_turn: bool) -> Style {
        let color = if monster_turn {
            Color::LightRed
        } else {
            Color::LightGreen
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Gauge color by remaining health.
    pub fn health(&self, ratio: f64) -> Style {
        let color = if ratio > 0.5 {
            Color::Green
        } else if ratio > 0.25 {
            Color::Yellow
        } else {
            Color::Red
        };
        Style::default().fg(color)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }
}
