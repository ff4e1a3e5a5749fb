use std::sync::Arc;

use crate::domain::command::Command;
use crate::domain::subreddit::{Post, SubredditServiceApi, SubredditServiceError};

/// Turns one parsed slash command into the single reply string the gateway
/// sends back. Registry side effects happen inside the service before the
/// reply is produced.
pub struct InteractionController {
    subreddit_service: Arc<dyn SubredditServiceApi>,
}

impl InteractionController {
    pub fn new(subreddit_service: Arc<dyn SubredditServiceApi>) -> Self {
        Self { subreddit_service }
    }

    pub async fn handle(&self, channel_id: &str, command: Command) -> String {
        tracing::info!(channel_id = %channel_id, command = command.name(), "handling command");

        match command {
            Command::Random => match self.subreddit_service.random_from_channel(channel_id).await {
                Ok(post) => render_post(&post),
                Err(err) => render_error(&err),
            },
            Command::Add { subreddit } => {
                match self
                    .subreddit_service
                    .add_subreddit(channel_id, &subreddit)
                    .await
                {
                    Ok(()) => format!("{} has been added to the channel's list.", subreddit),
                    Err(err) => render_error(&err),
                }
            }
            Command::Remove { subreddit } => {
                match self
                    .subreddit_service
                    .remove_subreddit(channel_id, &subreddit)
                    .await
                {
                    Ok(()) => format!("{} has been removed from this channel's list.", subreddit),
                    Err(err) => render_error(&err),
                }
            }
            Command::List => {
                let subreddits = self.subreddit_service.list_subreddits(channel_id).await;
                render_list(&subreddits)
            }
            Command::Sub { subreddit } => {
                match self.subreddit_service.random_from(&subreddit).await {
                    Ok(post) => render_post(&post),
                    Err(err) => render_error(&err),
                }
            }
        }
    }
}

/// Title, source subreddit and link, one per line.
pub fn render_post(post: &Post) -> String {
    format!("{}\n`r/{}`\n{}", post.title, post.subreddit, post.url)
}

pub fn render_list(subreddits: &[String]) -> String {
    if subreddits.is_empty() {
        return "There are no subreddits on this channel's list.".to_string();
    }
    format!(
        "The following subreddits are available:\n```\n{}\n```",
        subreddits.join("\n")
    )
}

pub fn render_error(err: &SubredditServiceError) -> String {
    match err {
        SubredditServiceError::Invalid(_) => "Subreddit name cannot be empty.".to_string(),
        SubredditServiceError::NotFound(name) => {
            format!("The subreddit {} was not found. Try again.", name)
        }
        SubredditServiceError::AlreadyListed(name) => {
            format!("The subreddit {} is already on this channel's list.", name)
        }
        SubredditServiceError::NotListed(name) => {
            format!("{} is not on this channel's list.", name)
        }
        SubredditServiceError::EmptyList => {
            "There are no subreddits in this channel's list.".to_string()
        }
        SubredditServiceError::Unsupported(name) => {
            format!("`r/{}` is not a supported subreddit.", name)
        }
        SubredditServiceError::Unavailable(_) => {
            "Reddit is temporarily unavailable. Try again later.".to_string()
        }
        SubredditServiceError::Other(_) => "Something went wrong. Try again later.".to_string(),
    }
}
