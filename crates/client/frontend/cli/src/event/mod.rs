//! Event handling for CLI client.
//!
//! This module contains the event loop that coordinates runtime events,
//! user input, and UI updates.

mod r#loop;

pub use r#loop::EventLoop;
