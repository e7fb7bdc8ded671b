//! # Core Traits (Ports)
//!
//! Any source plugin must implement these traits to be mounted by the view.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Post;

/// Contract for anything that can produce the post batch shown by the view.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetches the full batch in one shot.
    ///
    /// Implementations must return the posts in the order the backing
    /// endpoint produced them; the view renders the sequence as-is.
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}
