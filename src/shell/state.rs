use crate::modules::feedback::adapters::outbound::feedback_repository::FeedbackRepository;
use crate::modules::feedback::use_cases::create_feedback::handler::CreateFeedbackHandler;
use crate::modules::feedback::use_cases::list_feedback::handler::ListFeedbackHandler;
use crate::modules::feedback::use_cases::upvote_feedback::handler::UpvoteFeedbackHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateFeedbackHandler<dyn FeedbackRepository>>,
    pub list_handler: Arc<ListFeedbackHandler<dyn FeedbackRepository>>,
    pub upvote_handler: Arc<UpvoteFeedbackHandler<dyn FeedbackRepository>>,
}

impl AppState {
    /// Wires every use case handler onto the same repository.
    pub fn new<TRepository>(repository: Arc<TRepository>) -> Self
    where
        TRepository: FeedbackRepository + 'static,
    {
        let repository: Arc<dyn FeedbackRepository> = repository;
        Self {
            create_handler: Arc::new(CreateFeedbackHandler::new(repository.clone())),
            list_handler: Arc::new(ListFeedbackHandler::new(repository.clone())),
            upvote_handler: Arc::new(UpvoteFeedbackHandler::new(repository)),
        }
    }
}
