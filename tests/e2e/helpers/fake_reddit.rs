use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use subdeck_bot::domain::subreddit::{Post, RedditGateway, RedditGatewayError};

/// Programmable stand-in for the Reddit API. Subreddits and their posts are
/// seeded by each test; `set_outage` makes every call fail the way a network
/// error would. Call counters let tests assert which collaborator calls a
/// command makes.
pub struct FakeRedditGateway {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    subreddits: HashMap<String, Vec<Post>>,
    outage: bool,
    existence_checks: u32,
    random_fetches: u32,
}

impl FakeRedditGateway {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
        }
    }

    /// Register a subreddit that exists but yields no posts.
    pub fn add_empty_subreddit(&self, name: &str) {
        self.lock().subreddits.insert(name.to_string(), Vec::new());
    }

    /// Register a subreddit whose random fetch returns `post`.
    pub fn add_subreddit_with_post(&self, name: &str, post: Post) {
        self.lock().subreddits.insert(name.to_string(), vec![post]);
    }

    /// When set, every call fails with a transport error.
    pub fn set_outage(&self, outage: bool) {
        self.lock().outage = outage;
    }

    pub fn existence_checks(&self) -> u32 {
        self.lock().existence_checks
    }

    pub fn random_fetches(&self) -> u32 {
        self.lock().random_fetches
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RedditGateway for FakeRedditGateway {
    async fn subreddit_exists(&self, name: &str) -> Result<bool, RedditGatewayError> {
        let mut state = self.lock();
        state.existence_checks += 1;
        if state.outage {
            return Err(RedditGatewayError::Transport(
                "connection refused".to_string(),
            ));
        }
        Ok(state.subreddits.contains_key(name))
    }

    async fn random_post(&self, name: &str) -> Result<Option<Post>, RedditGatewayError> {
        let mut state = self.lock();
        state.random_fetches += 1;
        if state.outage {
            return Err(RedditGatewayError::Transport(
                "connection refused".to_string(),
            ));
        }
        Ok(state
            .subreddits
            .get(name)
            .and_then(|posts| posts.first().cloned()))
    }
}
