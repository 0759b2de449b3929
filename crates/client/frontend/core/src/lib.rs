//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, event handling, view-model types, and the plain
//! text render contract that both the CLI and future clients can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{ChannelConfig, FrontendConfig, MessageConfig};
pub use event::{EventImpact, GameEventConsumer};
pub use format::{render_text, wrap_text};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{MonsterView, PlayerView, ViewModel};
