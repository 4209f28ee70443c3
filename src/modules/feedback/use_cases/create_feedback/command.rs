#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFeedback {
    pub text: String,
    pub created_at: i64,
}
