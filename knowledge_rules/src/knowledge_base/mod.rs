//! Knowledge Base module - the complete state of one expert system session.
//!
//! A knowledge base bundles:
//! - **Facts**: every proposition and its current value
//! - **Rules**: forward-chaining implications, in declaration order
//! - **Questions**: the catalogue of interactions that resolve facts
//! - **Goals**: facts whose truth ends a session successfully

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::error::{KnowledgeError, Result};
use crate::facts::{Fact, FactStore, TriState};
use crate::questions::Question;
use crate::rules::Rule;

/// Document formats a knowledge base can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Facts, rules, questions and goals of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    rules: Vec<Rule>,
    facts: FactStore,
    questions: Vec<Question>,
    goals: Vec<String>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base for programmatic construction.
    ///
    /// Call [`KnowledgeBase::validate`] once it is filled in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a knowledge base file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let kb = Self::parse(&source, DocumentFormat::from_path(path))?;
        debug!(
            path = %path.display(),
            facts = kb.facts.len(),
            rules = kb.rules.len(),
            questions = kb.questions.len(),
            "Loaded knowledge base"
        );
        Ok(kb)
    }

    /// Parse and validate a knowledge base document.
    pub fn parse(source: &str, format: DocumentFormat) -> Result<Self> {
        let kb: KnowledgeBase = match format {
            DocumentFormat::Json => serde_json::from_str(source)?,
            DocumentFormat::Toml => toml::from_str(source)?,
        };
        kb.validate()?;
        Ok(kb)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Self::parse(source, DocumentFormat::Json)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::parse(source, DocumentFormat::Toml)
    }

    /// Declare a fact.
    pub fn with_fact(mut self, fact: Fact) -> Result<Self> {
        self.facts.insert(fact)?;
        Ok(self)
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a question after the existing ones.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Add a goal fact.
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.push(goal.into());
        self
    }

    /// Check structure and that every referenced fact is declared.
    pub fn validate(&self) -> Result<()> {
        if self.goals.is_empty() {
            return Err(KnowledgeError::malformed("at least one goal is required"));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.consequent.is_empty() {
                return Err(KnowledgeError::malformed(format!(
                    "rule #{index} has an empty consequent"
                )));
            }
            self.require_facts(rule.antecedent.keys(), || {
                format!("rule #{index} antecedent")
            })?;
            self.require_facts(rule.consequent.keys(), || {
                format!("rule #{index} consequent")
            })?;
        }

        let mut question_names = HashSet::new();
        for question in &self.questions {
            if !question_names.insert(question.name.as_str()) {
                return Err(KnowledgeError::malformed(format!(
                    "duplicate question '{}'",
                    question.name
                )));
            }
            if question.options.is_empty() {
                return Err(KnowledgeError::malformed(format!(
                    "question '{}' has no options",
                    question.name
                )));
            }
            self.require_facts(question.options.iter(), || {
                format!("question '{}'", question.name)
            })?;
        }

        self.require_facts(self.goals.iter(), || "goals".to_string())
    }

    fn require_facts<'a>(
        &self,
        names: impl IntoIterator<Item = &'a String>,
        referenced_by: impl Fn() -> String,
    ) -> Result<()> {
        match names.into_iter().find(|name| !self.facts.contains(name)) {
            Some(name) => Err(KnowledgeError::unknown_fact(name.as_str(), referenced_by())),
            None => Ok(()),
        }
    }

    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    pub fn facts_mut(&mut self) -> &mut FactStore {
        &mut self.facts
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules and a mutable fact store at the same time, for rule application.
    pub fn rules_and_facts_mut(&mut self) -> (&[Rule], &mut FactStore) {
        (&self.rules, &mut self.facts)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_mut(&mut self, index: usize) -> Option<&mut Question> {
        self.questions.get_mut(index)
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// First true fact, in fact declaration order, that is also a goal.
    pub fn reached_goal(&self) -> Option<&str> {
        self.facts
            .iter()
            .find(|(name, value)| *value == TriState::True && self.goals.iter().any(|g| g == name))
            .map(|(name, _)| name)
    }
}
