//! Session bookkeeping - identity, configuration and counters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an inference session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for an inference session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Consecutive unusable answers tolerated per question before giving up.
    /// `None` keeps asking forever.
    pub max_ask_attempts: Option<u32>,
}

impl EngineConfig {
    /// Limit the number of attempts per question.
    pub fn with_max_ask_attempts(mut self, attempts: u32) -> Self {
        self.max_ask_attempts = Some(attempts.max(1));
        self
    }
}

/// Counters collected over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rule passes over all fixpoint runs.
    pub passes: usize,
    pub rules_fired: usize,
    pub questions_asked: usize,
}
