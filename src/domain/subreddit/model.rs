use serde::{Deserialize, Serialize};

/// One Reddit post, as far as the bot cares: enough to format a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title. Reddit omits it for some kinds of posts, in which case
    /// it is empty.
    pub title: String,
    /// Subreddit the post came from, without the `r/` prefix.
    pub subreddit: String,
    /// Link target of the post.
    pub url: String,
}
