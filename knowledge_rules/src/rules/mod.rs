//! Rule definitions - implications from a conjunction of exact fact values
//! to a set of fact assignments.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::facts::TriState;

/// A forward-chaining rule.
///
/// The antecedent is an AND of exact matches; the consequent is applied as a
/// whole or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Fact name -> value that fact must currently hold.
    pub antecedent: IndexMap<String, TriState>,

    /// Fact name -> value assigned when the rule fires.
    pub consequent: IndexMap<String, TriState>,
}

impl Rule {
    /// Create a rule with no conditions and no assignments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a fact to hold a value.
    pub fn when(mut self, fact: impl Into<String>, value: TriState) -> Self {
        self.antecedent.insert(fact.into(), value);
        self
    }

    /// Assign a value to a fact when the rule fires.
    pub fn then(mut self, fact: impl Into<String>, value: TriState) -> Self {
        self.consequent.insert(fact.into(), value);
        self
    }

    /// Every fact name this rule mentions, antecedent first.
    pub fn referenced_facts(&self) -> impl Iterator<Item = &str> {
        self.antecedent
            .keys()
            .chain(self.consequent.keys())
            .map(String::as_str)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render = |terms: &IndexMap<String, TriState>| {
            terms
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join(" & ")
        };
        write!(f, "{} => {}", render(&self.antecedent), render(&self.consequent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new()
            .when("Sunny", TriState::True)
            .when("Warm", TriState::True)
            .then("GoodDay", TriState::True);

        assert_eq!(rule.antecedent.len(), 2);
        assert_eq!(rule.consequent.get("GoodDay"), Some(&TriState::True));

        let names: Vec<_> = rule.referenced_facts().collect();
        assert_eq!(names, vec!["Sunny", "Warm", "GoodDay"]);
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule::new()
            .when("Sunny", TriState::True)
            .then("GoodDay", TriState::False);
        assert_eq!(rule.to_string(), "Sunny=true => GoodDay=false");
    }

    #[test]
    fn test_deserialize_integer_values() {
        let rule: Rule = serde_json::from_str(
            r#"{"antecedent": {"Sunny": 1, "Rain": 0}, "consequent": {"GoodDay": 1}}"#,
        )
        .unwrap();
        assert_eq!(rule.antecedent.get("Rain"), Some(&TriState::False));
        let keys: Vec<_> = rule.antecedent.keys().collect();
        assert_eq!(keys, vec!["Sunny", "Rain"]);
    }

    #[test]
    fn test_missing_consequent_is_rejected() {
        let parsed: Result<Rule, _> = serde_json::from_str(r#"{"antecedent": {"Sunny": 1}}"#);
        assert!(parsed.is_err());
    }
}
