use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{CHALLENGE_RATING, MonsterRecord, Paginated};
use crate::error::{ContentError, Result};
use crate::source::PageSource;

pub const DEFAULT_BASE_URL: &str = "https://api.open5e.com";

/// HTTP client for the Open5e monsters endpoint.
#[derive(Debug, Clone)]
pub struct Open5eClient {
    base_url: String,
    http: reqwest::Client,
}

impl Open5eClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ContentError::Client)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn count_url(&self) -> String {
        format!(
            "{}/monsters/?challenge_rating={}&limit=1",
            self.base_url, CHALLENGE_RATING
        )
    }

    fn page_url(&self, page: usize) -> String {
        format!(
            "{}/monsters/?challenge_rating={}&page={}",
            self.base_url, CHALLENGE_RATING, page
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(target: "content::open5e", url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ContentError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(target: "content::open5e", url = %url, status = status.as_u16(), "request rejected");
            return Err(ContentError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| ContentError::Http {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| ContentError::Decode { url, source })
    }
}

#[async_trait]
impl PageSource for Open5eClient {
    async fn monster_count(&self) -> Result<usize> {
        let page: Paginated<MonsterRecord> = self.get_json(self.count_url()).await?;
        Ok(page.count)
    }

    async fn monster_page(&self, page: usize) -> Result<Vec<MonsterRecord>> {
        let page: Paginated<MonsterRecord> = self.get_json(self.page_url(page)).await?;
        Ok(page.results)
    }
}
