use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// In-memory store of each channel's subreddit list, plus the RNG used for
/// random picks. One mutex guards both, so concurrent command bursts against
/// the same channel are serialized and the no-duplicate invariant holds.
///
/// Lists live for the lifetime of the process. Removing the last subreddit
/// leaves an empty list behind, and absent channels behave as empty.
pub struct ChannelListRepository {
    state: Mutex<RegistryState>,
}

struct RegistryState {
    lists: HashMap<String, Vec<String>>,
    rng: StdRng,
}

impl ChannelListRepository {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic picks for tests.
    pub fn with_rng_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                lists: HashMap::new(),
                rng,
            }),
        }
    }

    /// Append a subreddit to the channel's list. Returns false without
    /// mutating when the subreddit is already listed.
    pub fn add(&self, channel_id: &str, subreddit: &str) -> bool {
        let mut state = self.lock_state();
        let list = state.lists.entry(channel_id.to_string()).or_default();
        if list.iter().any(|s| s == subreddit) {
            return false;
        }
        list.push(subreddit.to_string());
        true
    }

    /// Remove a subreddit from the channel's list, preserving the order of
    /// the remaining entries. Returns false when it was not listed.
    pub fn remove(&self, channel_id: &str, subreddit: &str) -> bool {
        let mut state = self.lock_state();
        let Some(list) = state.lists.get_mut(channel_id) else {
            return false;
        };
        let Some(position) = list.iter().position(|s| s == subreddit) else {
            return false;
        };
        list.remove(position);
        true
    }

    /// Whether the subreddit is on the channel's list.
    pub fn contains(&self, channel_id: &str, subreddit: &str) -> bool {
        let state = self.lock_state();
        state
            .lists
            .get(channel_id)
            .map(|list| list.iter().any(|s| s == subreddit))
            .unwrap_or(false)
    }

    /// The channel's subreddits in insertion order, empty if none.
    pub fn list(&self, channel_id: &str) -> Vec<String> {
        let state = self.lock_state();
        state.lists.get(channel_id).cloned().unwrap_or_default()
    }

    /// A uniformly random subreddit from the channel's list, or None when
    /// the list is empty.
    pub fn pick_random(&self, channel_id: &str) -> Option<String> {
        let mut guard = self.lock_state();
        let state = &mut *guard;
        let list = state.lists.get(channel_id)?;
        if list.is_empty() {
            return None;
        }
        let index = state.rng.gen_range(0..list.len());
        list.get(index).cloned()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, RegistryState> {
        // List mutations are single-step, so state stays valid even if a
        // holder panicked.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ChannelListRepository {
    fn default() -> Self {
        Self::new()
    }
}
