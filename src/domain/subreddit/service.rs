use super::error::SubredditServiceError;
use crate::domain::subreddit::{Post, RedditGateway, RedditGatewayError};
use crate::infrastructure::repositories::ChannelListRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SubredditService {
    channel_lists: Arc<ChannelListRepository>,
    reddit: Arc<dyn RedditGateway>,
}

impl SubredditService {
    pub fn new(channel_lists: Arc<ChannelListRepository>, reddit: Arc<dyn RedditGateway>) -> Self {
        Self {
            channel_lists,
            reddit,
        }
    }
}

#[async_trait]
pub trait SubredditServiceApi: Send + Sync {
    /// Random post from a uniformly random subreddit on the channel's list.
    async fn random_from_channel(&self, channel_id: &str) -> Result<Post, SubredditServiceError>;

    /// Add a subreddit to the channel's list after confirming it exists.
    async fn add_subreddit(
        &self,
        channel_id: &str,
        subreddit: &str,
    ) -> Result<(), SubredditServiceError>;

    /// Remove a subreddit from the channel's list.
    async fn remove_subreddit(
        &self,
        channel_id: &str,
        subreddit: &str,
    ) -> Result<(), SubredditServiceError>;

    /// The channel's subreddits in insertion order.
    async fn list_subreddits(&self, channel_id: &str) -> Vec<String>;

    /// Random post from a specific subreddit, regardless of whether any
    /// channel lists it.
    async fn random_from(&self, subreddit: &str) -> Result<Post, SubredditServiceError>;
}

#[async_trait]
impl SubredditServiceApi for SubredditService {
    async fn random_from_channel(&self, channel_id: &str) -> Result<Post, SubredditServiceError> {
        let subreddit = self
            .channel_lists
            .pick_random(channel_id)
            .ok_or(SubredditServiceError::EmptyList)?;

        let post = self
            .reddit
            .random_post(&subreddit)
            .await
            .map_err(gateway_error)?;

        post.ok_or(SubredditServiceError::Unsupported(subreddit))
    }

    async fn add_subreddit(
        &self,
        channel_id: &str,
        subreddit: &str,
    ) -> Result<(), SubredditServiceError> {
        self.validate_name(subreddit)?;

        // Checked before the network round-trip so a duplicate add never
        // hits Reddit.
        if self.channel_lists.contains(channel_id, subreddit) {
            return Err(SubredditServiceError::AlreadyListed(subreddit.to_string()));
        }

        if !self
            .reddit
            .subreddit_exists(subreddit)
            .await
            .map_err(gateway_error)?
        {
            return Err(SubredditServiceError::NotFound(subreddit.to_string()));
        }

        // The repository re-checks membership under its lock; a concurrent
        // add of the same name surfaces here as already listed.
        if !self.channel_lists.add(channel_id, subreddit) {
            return Err(SubredditServiceError::AlreadyListed(subreddit.to_string()));
        }

        tracing::info!(channel_id = %channel_id, subreddit = %subreddit, "subreddit added");
        Ok(())
    }

    async fn remove_subreddit(
        &self,
        channel_id: &str,
        subreddit: &str,
    ) -> Result<(), SubredditServiceError> {
        if !self.channel_lists.remove(channel_id, subreddit) {
            return Err(SubredditServiceError::NotListed(subreddit.to_string()));
        }

        tracing::info!(channel_id = %channel_id, subreddit = %subreddit, "subreddit removed");
        Ok(())
    }

    async fn list_subreddits(&self, channel_id: &str) -> Vec<String> {
        self.channel_lists.list(channel_id)
    }

    async fn random_from(&self, subreddit: &str) -> Result<Post, SubredditServiceError> {
        self.validate_name(subreddit)?;

        if !self
            .reddit
            .subreddit_exists(subreddit)
            .await
            .map_err(gateway_error)?
        {
            return Err(SubredditServiceError::NotFound(subreddit.to_string()));
        }

        let post = self
            .reddit
            .random_post(subreddit)
            .await
            .map_err(gateway_error)?;

        post.ok_or_else(|| SubredditServiceError::Unsupported(subreddit.to_string()))
    }
}

impl SubredditService {
    fn validate_name(&self, subreddit: &str) -> Result<(), SubredditServiceError> {
        if subreddit.trim().is_empty() {
            return Err(SubredditServiceError::Invalid(
                "subreddit name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn gateway_error(err: RedditGatewayError) -> SubredditServiceError {
    tracing::warn!(error = %err, "reddit call failed");
    SubredditServiceError::Unavailable(err.to_string())
}
