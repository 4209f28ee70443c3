use crate::modules::feedback::adapters::outbound::feedback_repository::FeedbackRepository;
use crate::modules::feedback::application::errors::ApplicationError;
use crate::modules::feedback::core::feedback_item::FeedbackItem;
use crate::modules::feedback::use_cases::upvote_feedback::command::UpvoteFeedback;
use std::sync::Arc;
use tracing::{debug, info};

pub struct UpvoteFeedbackHandler<TRepository>
where
    TRepository: FeedbackRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UpvoteFeedbackHandler<TRepository>
where
    TRepository: FeedbackRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: UpvoteFeedback) -> Result<FeedbackItem, ApplicationError> {
        let UpvoteFeedback { feedback_id } = command;
        // Ids are allocated from 1, so a negative id can never match.
        let upvoted = match u64::try_from(feedback_id) {
            Ok(id) => self.repository.upvote(id).await?,
            Err(_) => None,
        };
        match upvoted {
            Some(item) => {
                info!(feedback_id, votes = item.votes, "feedback upvoted");
                Ok(item)
            }
            None => {
                debug!(feedback_id, "upvote for unknown feedback");
                Err(ApplicationError::NotFound { feedback_id })
            }
        }
    }
}
