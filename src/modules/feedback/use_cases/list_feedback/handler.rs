use crate::modules::feedback::adapters::outbound::feedback_repository::FeedbackRepository;
use crate::modules::feedback::application::errors::ApplicationError;
use crate::modules::feedback::core::feedback_item::{FeedbackItem, sort_by_popularity};
use std::sync::Arc;

/// Returns the whole board in popularity order. No pagination.
pub struct ListFeedbackHandler<TRepository>
where
    TRepository: FeedbackRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListFeedbackHandler<TRepository>
where
    TRepository: FeedbackRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<FeedbackItem>, ApplicationError> {
        let mut items = self.repository.list().await?;
        sort_by_popularity(&mut items);
        Ok(items)
    }

    pub async fn count(&self) -> Result<usize, ApplicationError> {
        Ok(self.repository.count().await?)
    }
}
