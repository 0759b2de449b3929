//! Builds the runtime and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::{MonsterSource, Open5eClient, RandomMonsterFetcher};
use game_core::PcgRng;
use runtime::Runtime;
use tracing::info;

use crate::config::RuntimeConfig;

/// Builder that assembles the monster source, RNG, and runtime for clients.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    source: Option<Arc<dyn MonsterSource>>,
}

impl RuntimeBuilder {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// Provide a custom monster source instead of the Open5e API.
    pub fn source(mut self, source: impl MonsterSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let source = match self.source {
            Some(source) => source,
            None => open5e_source(&self.config)?,
        };

        let rng = match self.config.seed {
            Some(seed) => {
                info!(seed, "using fixed damage seed");
                PcgRng::new(seed)
            }
            None => PcgRng::from_entropy(),
        };

        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .shared_source(source)
            .rng(rng)
            .build()
            .await
            .context("failed to start battle runtime")?;

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

fn open5e_source(config: &RuntimeConfig) -> Result<Arc<dyn MonsterSource>> {
    let client = Open5eClient::new(config.content.base_url.clone(), config.content.timeout)
        .context("failed to create Open5e client")?;
    info!(base_url = client.base_url(), "monster source: Open5e");

    let fetcher = match config.seed {
        Some(seed) => RandomMonsterFetcher::with_seed(client, seed),
        None => RandomMonsterFetcher::new(client),
    };
    Ok(Arc::new(fetcher))
}

pub struct RuntimeSetup {
    pub config: RuntimeConfig,
    pub runtime: Runtime,
}
