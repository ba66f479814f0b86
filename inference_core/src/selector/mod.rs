//! Question Selector - finds the next question that can still resolve facts.

use knowledge_rules::{FactStore, Question, TriState};

use crate::ask::PresentedQuestion;

/// Chooses questions in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionSelector;

impl QuestionSelector {
    pub fn new() -> Self {
        Self
    }

    /// A question is useful while it is unasked and one of its options is unknown.
    pub fn is_useful(&self, question: &Question, facts: &FactStore) -> bool {
        !question.is_asked()
            && question
                .options
                .iter()
                .any(|option| facts.is(option, TriState::Unknown))
    }

    /// Index of the first useful question, if any.
    pub fn next(&self, questions: &[Question], facts: &FactStore) -> Option<usize> {
        questions.iter().position(|q| self.is_useful(q, facts))
    }

    /// Build the user-facing view, dropping options that are already resolved.
    pub fn present(&self, question: &Question, facts: &FactStore) -> PresentedQuestion {
        PresentedQuestion {
            name: question.name.clone(),
            prompt: question.prompt.clone(),
            single_choice: question.single_choice,
            options: question
                .options
                .iter()
                .filter(|option| facts.is(option, TriState::Unknown))
                .cloned()
                .collect(),
        }
    }
}
