//! Errors surfaced by the content provider.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no CR {challenge_rating} monsters found")]
    NoMonsters { challenge_rating: &'static str },

    #[error(
        "no CR {challenge_rating} monster with description found after {attempts} attempts"
    )]
    NoDescribedMonster {
        challenge_rating: &'static str,
        attempts: usize,
    },
}
