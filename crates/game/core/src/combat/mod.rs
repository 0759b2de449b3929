//! Combat resolution.
//!
//! Pure functions only: the engine decides who attacks, these functions
//! decide how hard.

pub mod damage;

pub use damage::{apply_damage, max_damage, roll_damage};
