use crate::modules::feedback::use_cases::create_feedback::command::CreateFeedback;
use crate::modules::feedback::use_cases::create_feedback::decision::{DecideError, Decision};

/// Accepts the command with its text trimmed, or rejects it when nothing is left.
pub fn decide_create(command: &CreateFeedback) -> Decision {
    let text = command.text.trim();
    if text.is_empty() {
        return Decision::Rejected {
            reason: DecideError::TextRequired,
        };
    }

    Decision::Accepted {
        text: text.to_string(),
    }
}
