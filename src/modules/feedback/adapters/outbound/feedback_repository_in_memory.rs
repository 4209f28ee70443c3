// In memory feedback repository.
//
// Purpose
// - Hold the whole board in process memory. State vanishes on restart.
//
// Responsibilities
// - Allocate ids from a monotonic counter, independent of the collection size.
// - Serialize writers behind one lock so concurrent upvotes are never lost.

use crate::modules::feedback::adapters::outbound::feedback_repository::{
    FeedbackRepository, RepositoryError,
};
use crate::modules::feedback::core::feedback_item::FeedbackItem;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryFeedbackRepository {
    items: RwLock<Vec<FeedbackItem>>,
    last_id: AtomicU64,
    is_offline: bool,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend(
                "Feedback repository offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn create(
        &self,
        text: String,
        created_at: i64,
    ) -> Result<FeedbackItem, RepositoryError> {
        self.ensure_online()?;

        // Allocate under the write lock so insertion order matches id order.
        let mut guard = self.items.write().await;
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let item = FeedbackItem::new(id, text, created_at);
        guard.push(item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<FeedbackItem>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.items.read().await.clone())
    }

    async fn upvote(&self, id: u64) -> Result<Option<FeedbackItem>, RepositoryError> {
        self.ensure_online()?;

        let mut guard = self.items.write().await;
        Ok(guard.iter_mut().find(|item| item.id == id).map(|item| {
            item.upvote();
            item.clone()
        }))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        Ok(self.items.read().await.len())
    }
}
