//! Inference Controller - the session state machine.
//!
//! Each step of a session works as follows:
//! 1. **Derive**: Run the rule evaluator to a fixpoint
//! 2. **Check**: Stop successfully if any goal fact is true
//! 3. **Select**: Pick the next useful question, or stop with no result
//! 4. **Ask**: Hand the filtered question out and wait for an answer
//! 5. **Apply**: Resolve every presented option, then go back to 1
//!
//! The ask step is the only suspension point. [`InferenceController::advance`]
//! and [`InferenceController::submit`] expose it directly for event-driven
//! hosts; [`InferenceController::run`] drives a blocking [`AskCollaborator`].

mod session;

pub use session::*;

use knowledge_rules::{KnowledgeBase, TriState};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use crate::ask::{Answer, AskCollaborator, PresentedQuestion};
use crate::error::{InferenceError, Result};
use crate::evaluator::RuleEvaluator;
use crate::selector::QuestionSelector;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    Running,
    GoalReached,
    FailedNoQuestion,
}

/// Terminal result of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A goal fact became true.
    GoalReached { goal: String },
    /// No goal is true and no remaining question can add information.
    NoGoalReachable,
}

impl Outcome {
    /// Name of the reached goal, if any.
    pub fn goal(&self) -> Option<&str> {
        match self {
            Outcome::GoalReached { goal } => Some(goal),
            Outcome::NoGoalReachable => None,
        }
    }
}

/// What the host has to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Present this question and submit the answer.
    Ask(PresentedQuestion),
    /// The session is over.
    Finished(Outcome),
}

/// Effect of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Facts were updated and the question is latched as asked.
    Applied,
    /// Nothing changed; the same question is still waiting.
    AwaitingAnswer,
}

/// A question handed out and not yet answered.
#[derive(Debug, Clone)]
struct PendingQuestion {
    index: usize,
    presented: PresentedQuestion,
}

/// Drives one expert system session over an exclusively owned knowledge base.
#[derive(Debug)]
pub struct InferenceController {
    id: SessionId,
    kb: KnowledgeBase,
    config: EngineConfig,
    evaluator: RuleEvaluator,
    selector: QuestionSelector,
    pending: Option<PendingQuestion>,
    outcome: Option<Outcome>,
    stats: SessionStats,
}

impl InferenceController {
    /// Start a session over a knowledge base.
    ///
    /// The knowledge base is validated first, so every fact a rule, question
    /// or goal names is known before any rule can fire.
    pub fn new(kb: KnowledgeBase, config: EngineConfig) -> Result<Self> {
        kb.validate()?;
        Ok(Self {
            id: SessionId::new(),
            kb,
            config,
            evaluator: RuleEvaluator::new(),
            selector: QuestionSelector::new(),
            pending: None,
            outcome: None,
            stats: SessionStats::default(),
        })
    }

    /// Start a session with default configuration.
    pub fn with_defaults(kb: KnowledgeBase) -> Result<Self> {
        Self::new(kb, EngineConfig::default())
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Read-only view of the knowledge base, e.g. for printing fact tables.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// End the session and take the knowledge base back.
    pub fn into_knowledge_base(self) -> KnowledgeBase {
        self.kb
    }

    pub fn state(&self) -> ControllerState {
        match &self.outcome {
            None => ControllerState::Running,
            Some(Outcome::GoalReached { .. }) => ControllerState::GoalReached,
            Some(Outcome::NoGoalReachable) => ControllerState::FailedNoQuestion,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The question currently waiting for an answer.
    pub fn pending_question(&self) -> Option<&PresentedQuestion> {
        self.pending.as_ref().map(|p| &p.presented)
    }

    /// Move the session forward until it needs an answer or is finished.
    ///
    /// While a question is pending this returns it again without deriving
    /// anything, so the answer always applies to the state it was asked in.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn advance(&mut self) -> Result<Step> {
        if let Some(outcome) = &self.outcome {
            return Ok(Step::Finished(outcome.clone()));
        }
        if let Some(pending) = &self.pending {
            return Ok(Step::Ask(pending.presented.clone()));
        }

        let (rules, facts) = self.kb.rules_and_facts_mut();
        let report = self.evaluator.run_to_fixpoint(rules, facts)?;
        self.stats.passes += report.passes;
        self.stats.rules_fired += report.fired.len();
        debug!(
            passes = report.passes,
            fired = report.fired.len(),
            unknown = self.kb.facts().unknown_count(),
            "Reached fixpoint"
        );

        if let Some(goal) = self.kb.reached_goal().map(str::to_string) {
            info!(goal = %goal, "Goal reached");
            return Ok(self.finish(Outcome::GoalReached { goal }));
        }

        let Some(index) = self.selector.next(self.kb.questions(), self.kb.facts()) else {
            info!("No useful question left, no goal reachable");
            return Ok(self.finish(Outcome::NoGoalReachable));
        };

        let presented = self
            .selector
            .present(&self.kb.questions()[index], self.kb.facts());
        info!(
            question = %presented.name,
            options = presented.options.len(),
            "Asking question"
        );
        self.pending = Some(PendingQuestion {
            index,
            presented: presented.clone(),
        });
        Ok(Step::Ask(presented))
    }

    /// Apply an answer to the pending question.
    ///
    /// Selected options become true and the other presented options false.
    /// Options that were filtered out as already resolved keep their value.
    /// Rejected or pending answers change nothing.
    #[instrument(skip(self, answer), fields(session = %self.id))]
    pub fn submit(&mut self, answer: Answer) -> Result<Submission> {
        if self.outcome.is_some() {
            return Err(InferenceError::SessionFinished);
        }
        let pending = self.pending.as_ref().ok_or(InferenceError::NoPendingQuestion)?;
        let question = &pending.presented;

        let selection = match answer {
            Answer::Pending => {
                debug!(question = %question.name, "Answer still pending");
                return Ok(Submission::AwaitingAnswer);
            }
            Answer::Selected(selection) => selection,
        };

        if question.single_choice && selection.is_empty() {
            debug!(question = %question.name, "Single-choice question has no selection yet");
            return Ok(Submission::AwaitingAnswer);
        }
        Self::check_selection(question, &selection)?;

        let PendingQuestion { index, presented } = self
            .pending
            .take()
            .ok_or(InferenceError::NoPendingQuestion)?;

        if let Some(asked) = self.kb.question_mut(index) {
            asked.mark_asked();
        }
        let facts = self.kb.facts_mut();
        for option in &presented.options {
            let picked = selection.contains(option);
            facts.set(option, TriState::from(picked))?;
        }
        self.stats.questions_asked += 1;

        info!(
            question = %presented.name,
            selected = ?selection,
            "Answer applied"
        );
        Ok(Submission::Applied)
    }

    /// Run the whole session, asking `asker` whenever facts are missing.
    ///
    /// Pending and invalid answers cause the same question to be asked again.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn run<A: AskCollaborator + ?Sized>(&mut self, asker: &mut A) -> Result<Outcome> {
        loop {
            let question = match self.advance()? {
                Step::Finished(outcome) => return Ok(outcome),
                Step::Ask(question) => question,
            };

            let mut attempts = 0;
            loop {
                attempts += 1;
                let answer = asker.ask(&question)?;
                match self.submit(answer) {
                    Ok(Submission::Applied) => break,
                    Ok(Submission::AwaitingAnswer) => {
                        warn!(question = %question.name, "No answer given, asking again");
                    }
                    Err(err) if err.is_recoverable() => {
                        warn!(
                            question = %question.name,
                            error = %err,
                            "Rejected answer, asking again"
                        );
                        asker.rejected(&question, &err);
                    }
                    Err(err) => return Err(err),
                }

                if let Some(max) = self.config.max_ask_attempts {
                    if attempts >= max {
                        return Err(InferenceError::AskAttemptsExhausted {
                            question: question.name.clone(),
                            attempts,
                        });
                    }
                }
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Step {
        self.outcome = Some(outcome.clone());
        Step::Finished(outcome)
    }

    fn check_selection(question: &PresentedQuestion, selection: &[String]) -> Result<()> {
        if question.single_choice && selection.len() > 1 {
            return Err(InferenceError::invalid_answer(
                &question.name,
                format!(
                    "single-choice question got {} selections",
                    selection.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for option in selection {
            if !question.contains(option) {
                return Err(InferenceError::invalid_answer(
                    &question.name,
                    format!("'{}' is not one of the presented options", option),
                ));
            }
            if !seen.insert(option.as_str()) {
                return Err(InferenceError::invalid_answer(
                    &question.name,
                    format!("'{}' was selected more than once", option),
                ));
            }
        }
        Ok(())
    }
}
