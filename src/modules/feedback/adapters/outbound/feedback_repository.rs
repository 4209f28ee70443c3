use crate::modules::feedback::core::feedback_item::FeedbackItem;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Storage port for feedback items.
///
/// Implementations own the collection and allocate ids; callers only ever see clones.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Stores a new item with the next id and zero votes.
    async fn create(&self, text: String, created_at: i64)
    -> Result<FeedbackItem, RepositoryError>;

    /// All items in insertion order.
    async fn list(&self) -> Result<Vec<FeedbackItem>, RepositoryError>;

    /// `Ok(None)` when no item has `id`.
    async fn upvote(&self, id: u64) -> Result<Option<FeedbackItem>, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;
}
