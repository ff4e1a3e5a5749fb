#[derive(Debug, thiserror::Error)]
pub enum SubredditServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("subreddit {0} not found")]
    NotFound(String),
    #[error("subreddit {0} already listed")]
    AlreadyListed(String),
    #[error("subreddit {0} not listed")]
    NotListed(String),
    #[error("channel list is empty")]
    EmptyList,
    #[error("subreddit {0} returned no posts")]
    Unsupported(String),
    #[error("reddit unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
