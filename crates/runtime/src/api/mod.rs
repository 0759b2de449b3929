//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the worker can stay focused on applying events.

pub mod command;
pub mod errors;
pub mod handle;

pub use command::PlayerCommand;
pub use errors::{Result, RuntimeError};
pub use handle::RuntimeHandle;
