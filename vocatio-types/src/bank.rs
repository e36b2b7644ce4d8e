use std::cmp::Ordering;
use std::collections::HashMap;
use std::iter::Peekable;

use serde::Deserialize;

use crate::{Choice, Question, QuestionKind};

/// One raw bank entry: a prompt plus numbered choice labels.
///
/// Mirrors the bank's JSON shape, where every entry is an object with a `Q`
/// field and `"1"`, `"2"`, ... label fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BankEntry {
    #[serde(rename = "Q")]
    prompt: String,

    #[serde(flatten)]
    labels: HashMap<String, String>,
}

impl BankEntry {
    /// Create an entry from a prompt and `(key, label)` pairs.
    pub fn new<K, V>(prompt: impl Into<String>, labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            labels: labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the label for a choice key, if present.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

/// The static question pool, partitioned into the three item kinds.
///
/// Deserializes the bank's JSON format:
///
/// ```json
/// {
///   "FC":     { "FC01": { "Q": "...", "1": "...", "2": "...", "3": "...", "4": "..." } },
///   "LIKERT": { "LI01": { "Q": "...", "1": "...", "2": "...", "3": "...", "4": "...", "5": "..." } },
///   "SJT":    { "SJT01": { "Q": "...", "1": "...", "2": "...", "3": "...", "4": "..." } }
/// }
/// ```
///
/// Entries missing labels are taken as-is with empty labels; bank integrity
/// is a precondition owned by whoever ships the bank.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionBank {
    #[serde(rename = "FC", default)]
    forced_choice: HashMap<String, BankEntry>,

    #[serde(rename = "LIKERT", default)]
    likert: HashMap<String, BankEntry>,

    #[serde(rename = "SJT", default)]
    situational: HashMap<String, BankEntry>,
}

impl QuestionBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bank from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Insert a forced-choice entry.
    pub fn insert_forced_choice(&mut self, id: impl Into<String>, entry: BankEntry) {
        self.forced_choice.insert(id.into(), entry);
    }

    /// Insert a Likert entry.
    pub fn insert_likert(&mut self, id: impl Into<String>, entry: BankEntry) {
        self.likert.insert(id.into(), entry);
    }

    /// Insert a situational-judgment entry.
    pub fn insert_situational(&mut self, id: impl Into<String>, entry: BankEntry) {
        self.situational.insert(id.into(), entry);
    }

    /// Total number of entries across all three groups.
    pub fn len(&self) -> usize {
        self.forced_choice.len() + self.likert.len() + self.situational.len()
    }

    /// Check whether the bank has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the ordered question sequence.
    ///
    /// Groups are concatenated in fixed order (forced-choice, Likert,
    /// situational-judgment), each sorted by a numeric-aware ordering of its
    /// ids so `FC2` precedes `FC10`. Deterministic for a given bank.
    pub fn sequence(&self) -> Vec<Question> {
        let mut questions = Vec::with_capacity(self.len());
        for (group, kind) in [
            (&self.forced_choice, QuestionKind::ForcedChoice),
            (&self.likert, QuestionKind::Likert),
            (&self.situational, QuestionKind::SituationalJudgment),
        ] {
            let mut ids: Vec<&String> = group.keys().collect();
            ids.sort_by(|a, b| natural_cmp(a, b));
            for id in ids {
                let entry = &group[id];
                let choices = kind
                    .choice_keys()
                    .iter()
                    .map(|key| {
                        Choice::new(*key, entry.labels.get(*key).cloned().unwrap_or_default())
                    })
                    .collect();
                questions.push(Question::new(id.clone(), entry.prompt.clone(), kind, choices));
            }
        }
        questions
    }
}

/// Compare strings with digit runs ordered by numeric value.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            // All chunks equal; fall back to plain ordering so ids like
            // `FC1` and `FC01` still compare deterministically.
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digits(&mut left);
                let run_b = take_digits(&mut right);
                let trimmed_a = run_a.trim_start_matches('0');
                let trimmed_b = run_b.trim_start_matches('0');
                let ordering = trimmed_a
                    .len()
                    .cmp(&trimmed_b.len())
                    .then_with(|| trimmed_a.cmp(trimmed_b));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                let ordering = x.cmp(&y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<impl Iterator<Item = char>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}
