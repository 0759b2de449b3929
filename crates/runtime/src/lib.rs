//! Runtime orchestration for the arena battle loop.
//!
//! This crate owns the single event loop that feeds [`game_core::BattleEngine`]
//! and executes the effects it returns. Consumers embed [`Runtime`] and talk to
//! it through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] defines what subscribers receive
//! - `workers` keeps the battle worker internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{PlayerCommand, Result, RuntimeError, RuntimeHandle};
pub use events::RuntimeEvent;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
