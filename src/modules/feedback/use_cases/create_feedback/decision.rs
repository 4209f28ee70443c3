#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Text required")]
    TextRequired,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { text: String },
    Rejected { reason: DecideError },
}
