//! Random monster selection on top of a [`PageSource`].
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use game_core::Monster;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::{ContentError, Result};
use crate::open5e::{CHALLENGE_RATING, MonsterRecord, PAGE_SIZE};
use crate::source::{MonsterSource, PageSource};

/// Pages tried before giving up on finding a described monster.
pub const MAX_ATTEMPTS: usize = 5;

/// Picks a random page, shuffles it and returns the first monster that has
/// a description.
///
/// Transport and decode errors end the fetch immediately; only pages
/// without a described monster are retried.
pub struct RandomMonsterFetcher<P> {
    pages: P,
    rng: Mutex<StdRng>,
    max_attempts: usize,
}

impl<P: PageSource> RandomMonsterFetcher<P> {
    pub fn new(pages: P) -> Self {
        Self::with_rng(pages, StdRng::from_entropy())
    }

    pub fn with_seed(pages: P, seed: u64) -> Self {
        Self::with_rng(pages, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pages: P, rng: StdRng) -> Self {
        Self {
            pages,
            rng: Mutex::new(rng),
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Lowers the attempt budget. Values are clamped to `1..=MAX_ATTEMPTS`.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.clamp(1, MAX_ATTEMPTS);
        self
    }

    pub fn pages(&self) -> &P {
        &self.pages
    }

    fn random_page(&self, page_count: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(1..=page_count)
    }

    fn pick_described(&self, mut records: Vec<MonsterRecord>) -> Option<MonsterRecord> {
        {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            records.shuffle(&mut *rng);
        }
        records.into_iter().find(MonsterRecord::is_described)
    }
}

#[async_trait]
impl<P: PageSource> MonsterSource for RandomMonsterFetcher<P> {
    async fn fetch_random_monster(&self) -> Result<Monster> {
        let count = self.pages.monster_count().await?;
        if count == 0 {
            return Err(ContentError::NoMonsters {
                challenge_rating: CHALLENGE_RATING,
            });
        }
        let page_count = count.div_ceil(PAGE_SIZE);

        for attempt in 1..=self.max_attempts {
            let page = self.random_page(page_count);
            let records = self.pages.monster_page(page).await?;

            match self.pick_described(records) {
                Some(record) => {
                    info!(
                        target: "content::fetcher",
                        monster = %record.name,
                        page,
                        attempt,
                        "monster selected"
                    );
                    return Ok(record.into());
                }
                None => {
                    debug!(target: "content::fetcher", page, attempt, "no described monster on page");
                }
            }
        }

        Err(ContentError::NoDescribedMonster {
            challenge_rating: CHALLENGE_RATING,
            attempts: self.max_attempts,
        })
    }
}
