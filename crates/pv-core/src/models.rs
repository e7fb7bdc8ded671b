//! # Domain Models
//!
//! These structs represent the core entities of Postview: the fetched post
//! record and the display state the view owns across its lifetime.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single post as served by the remote endpoint.
///
/// The endpoint ships extra fields (e.g. `userId`); serde ignores them, and
/// no validation happens beyond decoding these three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique within a fetched batch; doubles as the render key.
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// The zero-valued record shown before any successful fetch completes.
///
/// An explicit constant rather than an `Option`: the view's sequence is
/// never null, it starts out holding exactly this.
pub static PLACEHOLDER_POST: Lazy<Post> = Lazy::new(|| Post {
    id: 0,
    title: String::new(),
    body: String::new(),
});

/// Which side of the one-way placeholder → loaded transition the state is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial: only the sentinel has ever been shown.
    Placeholder,
    /// A fetch succeeded and replaced the sequence. There is no way back.
    Loaded,
}

/// The ordered sequence of posts currently shown to the user.
///
/// Mutated only by wholesale replacement, never by incremental append.
/// Created at mount, dropped at unmount; nothing persists across mounts.
#[derive(Debug, Clone)]
pub struct DisplayState {
    posts: Vec<Post>,
    phase: Phase,
}

impl DisplayState {
    /// Seeds the state with exactly the sentinel post.
    pub fn new() -> Self {
        Self {
            posts: vec![PLACEHOLDER_POST.clone()],
            phase: Phase::Placeholder,
        }
    }

    /// Replaces the whole sequence in one step and marks the state loaded.
    ///
    /// Callers hand over the batch in response order; it is kept as-is.
    pub fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.phase = Phase::Loaded;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
