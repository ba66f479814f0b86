//! Question definitions - grouped sets of facts resolved by one interaction.

use serde::{Deserialize, Serialize};

/// An interactive question whose options are fact names.
///
/// Answering a question resolves each of its offered options to true
/// (selected) or false (not selected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub name: String,

    /// Text shown to the user.
    #[serde(rename = "question")]
    pub prompt: String,

    /// Whether at most one option may be picked.
    #[serde(rename = "uniselect")]
    pub single_choice: bool,

    /// One-way latch, set once the question has been answered.
    #[serde(default)]
    asked: bool,

    /// Fact names, in presentation order.
    pub options: Vec<String>,
}

impl Question {
    /// Create a multi-choice question with no options.
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            single_choice: false,
            asked: false,
            options: Vec::new(),
        }
    }

    /// Make the question single-choice.
    pub fn as_single_choice(mut self) -> Self {
        self.single_choice = true;
        self
    }

    /// Add an option.
    pub fn with_option(mut self, fact: impl Into<String>) -> Self {
        self.options.push(fact.into());
        self
    }

    /// Add multiple options.
    pub fn with_options<S: Into<String>>(mut self, facts: impl IntoIterator<Item = S>) -> Self {
        self.options.extend(facts.into_iter().map(Into::into));
        self
    }

    pub fn is_asked(&self) -> bool {
        self.asked
    }

    /// Latch the question as asked. There is no way back.
    pub fn mark_asked(&mut self) {
        self.asked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_builder() {
        let question = Question::new("weather", "How is the weather?")
            .as_single_choice()
            .with_options(["Sunny", "Warm"]);

        assert!(question.single_choice);
        assert!(!question.is_asked());
        assert_eq!(question.options, vec!["Sunny", "Warm"]);
    }

    #[test]
    fn test_asked_latch() {
        let mut question = Question::new("weather", "How is the weather?").with_option("Sunny");
        question.mark_asked();
        question.mark_asked();
        assert!(question.is_asked());
    }

    #[test]
    fn test_deserialize_document_fields() {
        let question: Question = serde_json::from_str(
            r#"{"name": "q1", "question": "Pick one", "uniselect": true, "options": ["A", "B"]}"#,
        )
        .unwrap();
        assert_eq!(question.prompt, "Pick one");
        assert!(question.single_choice);
        assert!(!question.is_asked());
    }
}
