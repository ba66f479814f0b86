//! Error types for inference sessions.

use knowledge_rules::KnowledgeError;
use thiserror::Error;

/// A specialized `Result` type for inference operations.
pub type Result<T> = std::result::Result<T, InferenceError>;

/// Errors that can occur while driving an inference session.
///
/// An unreachable goal is not an error; see [`crate::Outcome::NoGoalReachable`].
#[derive(Error, Debug)]
pub enum InferenceError {
    /// The answer does not fit the presented question. Nothing was changed.
    #[error("Invalid answer to question '{question}': {reason}")]
    InvalidAnswer { question: String, reason: String },

    /// An answer was submitted while no question was waiting for one.
    #[error("No question is waiting for an answer")]
    NoPendingQuestion,

    /// The session already reached a terminal state.
    #[error("Inference session has already finished")]
    SessionFinished,

    /// The collaborator kept answering without producing a usable selection.
    #[error("Question '{question}' was not answered after {attempts} attempts")]
    AskAttemptsExhausted { question: String, attempts: u32 },

    /// The ask collaborator itself failed (e.g. its input was closed).
    #[error("Ask collaborator failed: {0}")]
    Collaborator(String),

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

impl InferenceError {
    pub(crate) fn invalid_answer(question: &str, reason: impl Into<String>) -> Self {
        InferenceError::InvalidAnswer {
            question: question.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the session can continue by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InferenceError::InvalidAnswer { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_answer_is_recoverable() {
        let err = InferenceError::invalid_answer("weather", "'Snow' was not offered");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("'Snow' was not offered"));
    }

    #[test]
    fn test_knowledge_error_is_fatal() {
        let err: InferenceError = KnowledgeError::MalformedKnowledgeBase("bad".into()).into();
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("bad"));
    }
}
