//! Rule Evaluator - forward chaining over the fact store.
//!
//! The fixpoint algorithm works as follows:
//! 1. **Scan**: Walk every rule in declaration order
//! 2. **Match**: A rule is applicable when its antecedent holds exactly and at
//!    least one of its consequent facts is still unknown
//! 3. **Fire**: Applicable rules assign their whole consequent
//! 4. **Repeat**: Start another pass if anything fired, stop after a quiet pass
//!
//! Every firing moves at least one fact out of UNKNOWN, and nothing moves a
//! fact back, so the number of passes is bounded by the number of facts.

use knowledge_rules::{FactStore, KnowledgeError, Rule, TriState};
use tracing::{debug, trace};

/// Summary of one fixpoint run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixpointReport {
    /// Number of passes over the rule list, including the final quiet one.
    pub passes: usize,

    /// Indices of the rules that fired, in firing order.
    pub fired: Vec<usize>,
}

impl FixpointReport {
    /// Check whether the run changed nothing.
    pub fn is_noop(&self) -> bool {
        self.fired.is_empty()
    }
}

/// Decides whether rules fire and applies them to a fact store.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEvaluator;

impl RuleEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Check whether a rule holds and would produce new information.
    ///
    /// Facts missing from the store never match, so a rule that mentions one
    /// is simply not applicable.
    pub fn is_applicable(&self, rule: &Rule, facts: &FactStore) -> bool {
        let satisfied = rule
            .antecedent
            .iter()
            .all(|(name, required)| facts.is(name, *required));

        satisfied
            && rule
                .consequent
                .keys()
                .any(|name| facts.is(name, TriState::Unknown))
    }

    /// Assign every consequent fact, including ones already at that value.
    ///
    /// All-or-nothing: if any consequent fact is missing, nothing is written.
    pub fn apply(&self, rule: &Rule, facts: &mut FactStore) -> Result<(), KnowledgeError> {
        if let Some(missing) = rule.consequent.keys().find(|name| !facts.contains(name)) {
            return Err(KnowledgeError::UnknownFact {
                name: missing.clone(),
                referenced_by: format!("rule {}", rule),
            });
        }

        for (name, value) in &rule.consequent {
            facts.set(name, *value)?;
        }
        Ok(())
    }

    /// Fire applicable rules in declaration order until a full pass fires nothing.
    pub fn run_to_fixpoint(
        &self,
        rules: &[Rule],
        facts: &mut FactStore,
    ) -> Result<FixpointReport, KnowledgeError> {
        let mut report = FixpointReport::default();

        loop {
            report.passes += 1;
            let mut fired_this_pass = false;

            for (index, rule) in rules.iter().enumerate() {
                if !self.is_applicable(rule, facts) {
                    continue;
                }
                self.apply(rule, facts)?;
                debug!(rule = index, "Fired rule: {}", rule);
                report.fired.push(index);
                fired_this_pass = true;
            }

            trace!(pass = report.passes, fired = fired_this_pass, "Rule pass finished");
            if !fired_this_pass {
                break;
            }
        }

        Ok(report)
    }
}
