//! Tri-state fact values.

use serde::{Deserialize, Serialize};

/// Truth value of a fact.
///
/// Encoded as an integer in knowledge base documents: `-1` unknown,
/// `0` false, `1` true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum TriState {
    #[default]
    Unknown,
    False,
    True,
}

impl TriState {
    /// Check whether the value is still undetermined.
    pub fn is_unknown(&self) -> bool {
        matches!(self, TriState::Unknown)
    }

    /// Check whether the value has been resolved to true or false.
    pub fn is_resolved(&self) -> bool {
        !self.is_unknown()
    }

    /// Integer encoding used by knowledge base documents.
    pub fn as_code(&self) -> i8 {
        match self {
            TriState::Unknown => -1,
            TriState::False => 0,
            TriState::True => 1,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::True
        } else {
            TriState::False
        }
    }
}

impl TryFrom<i8> for TriState {
    type Error = String;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(TriState::Unknown),
            0 => Ok(TriState::False),
            1 => Ok(TriState::True),
            other => Err(format!(
                "invalid fact value {other}, expected -1 (unknown), 0 (false) or 1 (true)"
            )),
        }
    }
}

impl From<TriState> for i8 {
    fn from(value: TriState) -> Self {
        value.as_code()
    }
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TriState::Unknown => "unknown",
            TriState::False => "false",
            TriState::True => "true",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(TriState::default(), TriState::Unknown);
        assert!(TriState::default().is_unknown());
        assert!(TriState::True.is_resolved());
        assert!(TriState::False.is_resolved());
    }

    #[test]
    fn test_integer_codes() {
        assert_eq!(TriState::try_from(-1i8), Ok(TriState::Unknown));
        assert_eq!(TriState::try_from(0i8), Ok(TriState::False));
        assert_eq!(TriState::try_from(1i8), Ok(TriState::True));
        assert!(TriState::try_from(2i8).is_err());
        assert_eq!(i8::from(TriState::True), 1);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let parsed: Result<TriState, _> = serde_json::from_str("1");
        assert_eq!(parsed.unwrap(), TriState::True);

        let invalid: Result<TriState, _> = serde_json::from_str("5");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(TriState::from(true), TriState::True);
        assert_eq!(TriState::from(false), TriState::False);
    }
}
