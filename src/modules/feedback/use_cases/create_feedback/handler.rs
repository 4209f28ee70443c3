use crate::modules::feedback::adapters::outbound::feedback_repository::FeedbackRepository;
use crate::modules::feedback::application::errors::ApplicationError;
use crate::modules::feedback::core::feedback_item::FeedbackItem;
use crate::modules::feedback::use_cases::create_feedback::command::CreateFeedback;
use crate::modules::feedback::use_cases::create_feedback::decide::decide_create;
use crate::modules::feedback::use_cases::create_feedback::decision::Decision;
use std::sync::Arc;
use tracing::{debug, info};

pub struct CreateFeedbackHandler<TRepository>
where
    TRepository: FeedbackRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateFeedbackHandler<TRepository>
where
    TRepository: FeedbackRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: CreateFeedback) -> Result<FeedbackItem, ApplicationError> {
        match decide_create(&command) {
            Decision::Accepted { text } => {
                let item = self.repository.create(text, command.created_at).await?;
                info!(feedback_id = item.id, "feedback created");
                Ok(item)
            }
            Decision::Rejected { reason } => {
                debug!(%reason, "feedback rejected");
                Err(ApplicationError::Validation(reason))
            }
        }
    }
}
