//! Trait seams between the runtime and the content backend.
use async_trait::async_trait;
use game_core::Monster;

use crate::error::Result;
use crate::open5e::MonsterRecord;

/// Produces one monster per call.
///
/// Each call is atomic and final: the caller never retries on its own.
#[async_trait]
pub trait MonsterSource: Send + Sync {
    async fn fetch_random_monster(&self) -> Result<Monster>;
}

/// Paged access to the monster catalogue.
///
/// Pages are 1-based and hold [`PAGE_SIZE`](crate::open5e::PAGE_SIZE) entries.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Total number of monsters in the catalogue.
    async fn monster_count(&self) -> Result<usize>;

    /// Monsters on `page`.
    async fn monster_page(&self, page: usize) -> Result<Vec<MonsterRecord>>;
}
