//! Environment collaborators consumed by the engine.
//!
//! The only collaborator the battle rules need is a source of randomness,
//! expressed as [`RngOracle`] so tests can replace it with a scripted one.
mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
