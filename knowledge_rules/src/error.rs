//! Error types for loading and querying a knowledge base.

use thiserror::Error;

/// A specialized `Result` type for knowledge base operations.
pub type Result<T> = std::result::Result<T, KnowledgeError>;

/// Errors raised while loading, validating or querying a knowledge base.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    /// A fact name was used that the fact store does not hold.
    #[error("Unknown fact '{name}' referenced by {referenced_by}")]
    UnknownFact { name: String, referenced_by: String },

    /// The knowledge base document violates the expected structure.
    #[error("Malformed knowledge base: {0}")]
    MalformedKnowledgeBase(String),

    /// The knowledge base file could not be read.
    #[error("Failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),
}

impl KnowledgeError {
    pub(crate) fn unknown_fact(name: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        KnowledgeError::UnknownFact {
            name: name.into(),
            referenced_by: referenced_by.into(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        KnowledgeError::MalformedKnowledgeBase(message.into())
    }
}

impl From<serde_json::Error> for KnowledgeError {
    fn from(e: serde_json::Error) -> Self {
        KnowledgeError::MalformedKnowledgeBase(e.to_string())
    }
}

impl From<toml::de::Error> for KnowledgeError {
    fn from(e: toml::de::Error) -> Self {
        KnowledgeError::MalformedKnowledgeBase(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fact_display() {
        let err = KnowledgeError::unknown_fact("Foo", "rule #0 antecedent");
        let message = err.to_string();
        assert!(message.contains("'Foo'"));
        assert!(message.contains("rule #0 antecedent"));
    }

    #[test]
    fn test_json_error_is_malformed() {
        let err: KnowledgeError = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, KnowledgeError::MalformedKnowledgeBase(_)));
    }
}
