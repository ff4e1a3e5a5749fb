use crate::domain::subreddit::{Post, RedditGateway, RedditGatewayError};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Reddit's public JSON mirror of a subreddit's metadata and a random post.
/// Both endpoints are plain GETs; Reddit requires an identifying User-Agent
/// and answers nonexistent subreddits with a 404 or a payload without a
/// subreddit URL.
pub struct RedditClient {
    base_url: String,
    http_client: reqwest::Client,
}

#[derive(Debug, Default, Deserialize)]
struct SubredditAbout {
    #[serde(default)]
    data: SubredditAboutData,
}

#[derive(Debug, Default, Deserialize)]
struct SubredditAboutData {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    #[serde(default)]
    data: PostData,
}

#[derive(Debug, Default, Deserialize)]
struct PostData {
    #[serde(default)]
    subreddit: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
}

impl RedditClient {
    pub fn new(base_url: String, user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, RedditGatewayError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| RedditGatewayError::Transport(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(RedditGatewayError::Transport(format!(
                "unexpected status {} from {}",
                response.status(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RedditGatewayError::Transport(e.to_string()))?;

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| RedditGatewayError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl RedditGateway for RedditClient {
    async fn subreddit_exists(&self, name: &str) -> Result<bool, RedditGatewayError> {
        let url = format!("{}/r/{}/about.json", self.base_url, name);
        let about: Option<SubredditAbout> = self.get_json(&url).await?;

        // Unknown subreddits come back as a search listing whose data has
        // no url field.
        Ok(about.map(|a| !a.data.url.is_empty()).unwrap_or(false))
    }

    async fn random_post(&self, name: &str) -> Result<Option<Post>, RedditGatewayError> {
        let url = format!("{}/r/{}/random.json", self.base_url, name);
        let listings: Option<Vec<Listing>> = self.get_json(&url).await?;

        // The post itself is the first child of the first listing; the
        // second listing holds comments.
        let post = listings.and_then(|listings| {
            listings.into_iter().next().and_then(|listing| {
                listing.data.children.into_iter().next().map(|child| Post {
                    title: child.data.title,
                    subreddit: child.data.subreddit,
                    url: child.data.url,
                })
            })
        });

        Ok(post)
    }
}
