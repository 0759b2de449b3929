//! Monster content fetched from the Open5e API.
//!
//! This crate is the game's only content provider:
//! - [`source`]: the [`MonsterSource`] seam the runtime calls, and the
//!   lower-level [`PageSource`] it is built on
//! - [`fetcher`]: random page selection with bounded retries
//! - [`open5e`]: the HTTP client and wire types
//!
//! Content is mapped into [`game_core::Monster`] before it leaves the crate.

pub mod error;
pub mod fetcher;
pub mod open5e;
pub mod source;

pub use error::ContentError;
pub use fetcher::RandomMonsterFetcher;
pub use open5e::{ActionRecord, DEFAULT_BASE_URL, MonsterRecord, Open5eClient, Paginated};
pub use source::{MonsterSource, PageSource};
