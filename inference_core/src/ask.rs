//! Ask collaborator contract - how the engine talks to whatever renders
//! questions and collects answers.

use serde::{Deserialize, Serialize};

use crate::error::{InferenceError, Result};

/// A question as shown to the user.
///
/// Only options whose facts are still unknown are listed, and indices refer
/// to this filtered list, never to the declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedQuestion {
    pub name: String,
    pub prompt: String,
    pub single_choice: bool,
    pub options: Vec<String>,
}

impl PresentedQuestion {
    /// Option shown at `index`.
    pub fn option_at(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Translate shown indices into option names.
    pub fn select_indices(&self, indices: &[usize]) -> Result<Vec<String>> {
        indices
            .iter()
            .map(|&index| {
                self.option_at(index).map(str::to_string).ok_or_else(|| {
                    InferenceError::invalid_answer(
                        &self.name,
                        format!("option index {index} is out of range"),
                    )
                })
            })
            .collect()
    }
}

/// What a collaborator returned for a presented question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The user has not decided yet; ask again.
    Pending,
    /// Picked option names, from the presented list.
    Selected(Vec<String>),
}

impl Answer {
    /// Answer with a single option.
    pub fn one(option: impl Into<String>) -> Self {
        Answer::Selected(vec![option.into()])
    }

    /// Answer with a list of options.
    pub fn many<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Answer::Selected(options.into_iter().map(Into::into).collect())
    }
}

/// Something that can put a question to a user.
///
/// Implementations handle rendering and input only; they never touch facts.
pub trait AskCollaborator {
    /// Present the question and return the user's selection.
    ///
    /// Called again for the same question when the previous answer was
    /// pending or invalid. Returning an error aborts the session.
    fn ask(&mut self, question: &PresentedQuestion) -> Result<Answer>;

    /// Told why the previous answer was rejected, before being asked again.
    fn rejected(&mut self, _question: &PresentedQuestion, _error: &InferenceError) {}
}

impl<F> AskCollaborator for F
where
    F: FnMut(&PresentedQuestion) -> Result<Answer>,
{
    fn ask(&mut self, question: &PresentedQuestion) -> Result<Answer> {
        self(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presented() -> PresentedQuestion {
        PresentedQuestion {
            name: "weather".into(),
            prompt: "What is the weather like?".into(),
            single_choice: false,
            options: vec!["Warm".into(), "Windy".into()],
        }
    }

    #[test]
    fn test_indices_refer_to_presented_list() {
        let question = presented();
        assert_eq!(question.option_at(0), Some("Warm"));
        assert_eq!(question.option_at(2), None);
        assert_eq!(
            question.select_indices(&[1, 0]).unwrap(),
            vec!["Windy".to_string(), "Warm".to_string()]
        );
    }

    #[test]
    fn test_out_of_range_index_is_invalid_answer() {
        let err = presented().select_indices(&[2]).unwrap_err();
        assert!(matches!(err, InferenceError::InvalidAnswer { .. }));
    }

    #[test]
    fn test_closure_collaborator() {
        let mut asker =
            |q: &PresentedQuestion| -> Result<Answer> { Ok(Answer::one(q.options[0].clone())) };
        let answer = asker.ask(&presented()).unwrap();
        assert_eq!(answer, Answer::one("Warm"));
    }
}
