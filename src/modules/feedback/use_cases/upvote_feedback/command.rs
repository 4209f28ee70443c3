#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpvoteFeedback {
    pub feedback_id: i64,
}
