// Shared test fixture for the CreateFeedback command.

use crate::modules::feedback::use_cases::create_feedback::command::CreateFeedback;

pub const FIXED_CREATED_AT: i64 = 1_700_000_000;

pub struct CreateFeedbackBuilder {
    inner: CreateFeedback,
}

impl Default for CreateFeedbackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateFeedbackBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateFeedback {
                text: "Add dark mode".to_string(),
                created_at: FIXED_CREATED_AT,
            },
        }
    }

    pub fn text(mut self, v: impl Into<String>) -> Self {
        self.inner.text = v.into();
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> CreateFeedback {
        self.inner
    }
}

#[cfg(test)]
mod create_feedback_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = CreateFeedbackBuilder::default().build();
        assert_eq!(built.text, "Add dark mode");
        assert_eq!(built.created_at, FIXED_CREATED_AT);
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = CreateFeedbackBuilder::new()
            .text("Fix typo")
            .created_at(1234)
            .build();
        assert_eq!(
            built,
            CreateFeedback {
                text: "Fix typo".into(),
                created_at: 1234,
            }
        );
    }
}
