pub mod error;
pub mod model;
pub mod service;

pub use error::SubredditServiceError;
pub use model::Post;
pub use service::{SubredditService, SubredditServiceApi};

use async_trait::async_trait;

/// Port to the Reddit API. The HTTP client in infrastructure implements it
/// for production; tests substitute an in-process fake.
#[async_trait]
pub trait RedditGateway: Send + Sync {
    /// Whether the subreddit is recognized and non-empty.
    async fn subreddit_exists(&self, name: &str) -> Result<bool, RedditGatewayError>;

    /// One randomly selected post, or None when the subreddit yields
    /// nothing.
    async fn random_post(&self, name: &str) -> Result<Option<Post>, RedditGatewayError>;
}

/// Failures of the Reddit collaborator itself, as opposed to "the subreddit
/// does not exist". Kept separate so callers can tell the user the
/// difference.
#[derive(Debug, thiserror::Error)]
pub enum RedditGatewayError {
    #[error("reddit request failed: {0}")]
    Transport(String),
    #[error("unexpected reddit response: {0}")]
    Malformed(String),
}
