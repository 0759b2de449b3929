//! Open5e REST API access.
//!
//! Only challenge rating 1 monsters are requested.

mod client;
mod wire;

pub use client::{DEFAULT_BASE_URL, Open5eClient};
pub use wire::{ActionRecord, MonsterRecord, Paginated};

/// Challenge rating every request is filtered on.
pub const CHALLENGE_RATING: &str = "1";

/// Entries per page returned by the monsters endpoint.
pub const PAGE_SIZE: usize = 20;
