/// The closed set of slash commands the bot understands.
///
/// Dispatch is an exhaustive match over this enum rather than a runtime
/// name-to-handler map, so a missing handler is a compile error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Random post from a random subreddit on the channel's list.
    Random,
    /// Add a subreddit to the channel's list.
    Add { subreddit: String },
    /// Remove a subreddit from the channel's list.
    Remove { subreddit: String },
    /// Show the channel's list.
    List,
    /// Random post from a specific subreddit, listed or not.
    Sub { subreddit: String },
}

impl Command {
    /// Parse a gateway command name and its optional string argument.
    ///
    /// Returns None for unknown names, which the caller ignores silently,
    /// and for argument-taking commands delivered without their argument.
    pub fn parse(name: &str, subreddit: Option<&str>) -> Option<Self> {
        match name {
            "random" => Some(Self::Random),
            "list" => Some(Self::List),
            "add" => subreddit.map(|s| Self::Add {
                subreddit: s.to_string(),
            }),
            "remove" => subreddit.map(|s| Self::Remove {
                subreddit: s.to_string(),
            }),
            "sub" => subreddit.map(|s| Self::Sub {
                subreddit: s.to_string(),
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::List => "list",
            Self::Sub { .. } => "sub",
        }
    }
}
