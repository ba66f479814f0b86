//! Fact store - the sole mutable ground truth of a session.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::TriState;
use crate::error::{KnowledgeError, Result};

/// A fact as declared in a knowledge base document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,

    /// Initial value; facts that are not pre-seeded start unknown.
    #[serde(default)]
    pub value: TriState,
}

impl Fact {
    /// Create a new unknown fact with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: TriState::Unknown,
        }
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: TriState) -> Self {
        self.value = value;
        self
    }
}

/// Keyed storage of fact values.
///
/// Lookups are by name; iteration follows declaration order so that
/// fact tables print the way the knowledge base declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Fact>", into = "Vec<Fact>")]
pub struct FactStore {
    values: IndexMap<String, TriState>,
}

impl FactStore {
    /// Create an empty fact store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new fact. Fact names are unique.
    pub fn insert(&mut self, fact: Fact) -> Result<()> {
        if self.values.contains_key(&fact.name) {
            return Err(KnowledgeError::malformed(format!(
                "duplicate fact '{}'",
                fact.name
            )));
        }
        self.values.insert(fact.name, fact.value);
        Ok(())
    }

    /// Current value of a fact.
    pub fn get(&self, name: &str) -> Result<TriState> {
        self.value(name)
            .ok_or_else(|| KnowledgeError::unknown_fact(name, "fact store lookup"))
    }

    /// Overwrite the value of an existing fact.
    pub fn set(&mut self, name: &str, value: TriState) -> Result<()> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(KnowledgeError::unknown_fact(name, "fact store update")),
        }
    }

    /// Current value of a fact, or `None` if it is not declared.
    pub fn value(&self, name: &str) -> Option<TriState> {
        self.values.get(name).copied()
    }

    /// Check whether a declared fact currently holds `value`.
    pub fn is(&self, name: &str, value: TriState) -> bool {
        self.value(name) == Some(value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over facts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TriState)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of facts that are still unknown.
    pub fn unknown_count(&self) -> usize {
        self.values.values().filter(|v| v.is_unknown()).count()
    }

    /// Copy of every fact value, in declaration order.
    pub fn snapshot(&self) -> IndexMap<String, TriState> {
        self.values.clone()
    }
}

impl TryFrom<Vec<Fact>> for FactStore {
    type Error = KnowledgeError;

    fn try_from(facts: Vec<Fact>) -> Result<Self> {
        let mut store = FactStore::new();
        for fact in facts {
            store.insert(fact)?;
        }
        Ok(store)
    }
}

impl From<FactStore> for Vec<Fact> {
    fn from(store: FactStore) -> Self {
        store
            .values
            .into_iter()
            .map(|(name, value)| Fact { name, value })
            .collect()
    }
}
