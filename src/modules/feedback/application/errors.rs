use crate::modules::feedback::adapters::outbound::feedback_repository::RepositoryError;
use crate::modules::feedback::use_cases::create_feedback::decision::DecideError;
use thiserror::Error;

/// Failure of any feedback use case, as seen by inbound adapters.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] DecideError),

    #[error("Not found")]
    NotFound { feedback_id: i64 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
