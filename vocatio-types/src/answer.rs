use serde::{Deserialize, Serialize};

/// A recorded answer for a single question.
///
/// Serializes to the scoring service's wire shape: a plain string for
/// single-selection items, an object with `best`/`second` fields for
/// situational-judgment items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// One selected choice key (forced-choice and Likert items).
    Choice(String),

    /// Ranked best/second picks (situational-judgment items).
    Judgment(Judgment),
}

impl Answer {
    /// Create a single-selection answer.
    pub fn choice(key: impl Into<String>) -> Self {
        Self::Choice(key.into())
    }

    /// Try to get this answer as a selected choice key.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(key) => Some(key),
            Self::Judgment(_) => None,
        }
    }

    /// Try to get this answer as a judgment record.
    pub fn as_judgment(&self) -> Option<&Judgment> {
        match self {
            Self::Choice(_) => None,
            Self::Judgment(judgment) => Some(judgment),
        }
    }

    /// Check whether this record fully answers its item: a plain choice
    /// always does, a judgment needs both picks.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Choice(_) => true,
            Self::Judgment(judgment) => judgment.is_ranked(),
        }
    }
}

impl From<String> for Answer {
    fn from(key: String) -> Self {
        Self::Choice(key)
    }
}

impl From<&str> for Answer {
    fn from(key: &str) -> Self {
        Self::Choice(key.to_string())
    }
}

impl From<Judgment> for Answer {
    fn from(judgment: Judgment) -> Self {
        Self::Judgment(judgment)
    }
}

/// The two ranked picks of a situational-judgment item.
///
/// `best` and `second` never hold the same key; the session rejects such a
/// pick before it reaches this record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    best: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    second: Option<String>,
}

impl Judgment {
    /// Create a judgment with only the best pick set.
    pub fn with_best(key: impl Into<String>) -> Self {
        Self {
            best: Some(key.into()),
            second: None,
        }
    }

    /// Return this judgment with the second pick set.
    pub fn with_second(mut self, key: impl Into<String>) -> Self {
        self.second = Some(key.into());
        self
    }

    /// Get the best pick.
    pub fn best(&self) -> Option<&str> {
        self.best.as_deref()
    }

    /// Get the second pick.
    pub fn second(&self) -> Option<&str> {
        self.second.as_deref()
    }

    /// Check whether both picks are present.
    pub fn is_ranked(&self) -> bool {
        self.best.is_some() && self.second.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_is_always_complete() {
        assert!(Answer::choice("3").is_complete());
    }

    #[test]
    fn judgment_complete_only_when_ranked() {
        assert!(!Answer::from(Judgment::with_best("1")).is_complete());
        assert!(Answer::from(Judgment::with_best("1").with_second("4")).is_complete());
    }

    #[test]
    fn accessors() {
        let answer = Answer::choice("2");
        assert_eq!(answer.as_choice(), Some("2"));
        assert!(answer.as_judgment().is_none());

        let answer = Answer::from(Judgment::with_best("1"));
        assert!(answer.as_choice().is_none());
        assert_eq!(answer.as_judgment().unwrap().best(), Some("1"));
    }

    #[test]
    fn wire_shape() {
        let choice = serde_json::to_value(Answer::choice("3")).unwrap();
        assert_eq!(choice, serde_json::json!("3"));

        let partial = serde_json::to_value(Answer::from(Judgment::with_best("1"))).unwrap();
        assert_eq!(partial, serde_json::json!({ "best": "1" }));

        let ranked =
            serde_json::to_value(Answer::from(Judgment::with_best("1").with_second("4"))).unwrap();
        assert_eq!(ranked, serde_json::json!({ "best": "1", "second": "4" }));
    }

    #[test]
    fn wire_shape_parses_back() {
        let answer: Answer = serde_json::from_value(serde_json::json!("5")).unwrap();
        assert_eq!(answer, Answer::choice("5"));

        let answer: Answer =
            serde_json::from_value(serde_json::json!({ "best": "2", "second": "3" })).unwrap();
        assert_eq!(answer, Judgment::with_best("2").with_second("3").into());
    }
}
