use async_trait::async_trait;
use thiserror::Error;

/// Outcomes of a completion attempt that the caller must distinguish.
///
/// `RateLimited` and `Filtered` are soft signals: the backend answered but
/// declined to produce usable text. `Unavailable` covers everything else,
/// including transport failures that survived the retry policy.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("rate limited by the completion backend")]
    RateLimited,

    #[error("response withheld by the backend's content filter")]
    Filtered,

    #[error("completion backend unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, CompletionError>;

/// A blocking-style text completion capability.
///
/// Implementations own their authentication and retry/backoff policy; a
/// single `complete` call settles exactly once with the final outcome.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Send one prompt and return the raw model text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
