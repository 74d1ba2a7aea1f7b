//! Local copies of query results, reconciled after mutations so the UI does
//! not have to refetch.

use crate::api::types::{Thought, User};

/// Cached result of the feed query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedCache {
    thoughts: Vec<Thought>,
}

impl FeedCache {
    pub fn new(thoughts: Vec<Thought>) -> Self {
        Self { thoughts }
    }

    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    /// A freshly added thought goes to the front (the feed is newest first).
    pub fn prepend(&mut self, thought: Thought) {
        self.thoughts.retain(|t| t.id != thought.id);
        self.thoughts.insert(0, thought);
    }

    /// Replace the cached thought with the same id; returns false when it
    /// is not cached.
    pub fn replace(&mut self, thought: Thought) -> bool {
        match self.thoughts.iter_mut().find(|t| t.id == thought.id) {
            Some(slot) => {
                *slot = thought;
                true
            }
            None => false,
        }
    }
}

/// Apply an `addFriend` result to the cached `me`; ids must match.
pub fn merge_me(me: &mut User, updated: User) -> bool {
    if me.id != updated.id {
        return false;
    }
    me.friend_count = updated.friend_count;
    me.friends = updated.friends;
    true
}
