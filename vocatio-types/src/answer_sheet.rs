use std::collections::BTreeMap;

use serde::Serialize;

use crate::Answer;

/// Answers collected during a session, keyed by question id.
///
/// Keys are kept ordered so a serialized sheet is deterministic for a given
/// set of answers; the scoring service treats the mapping as unordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    values: BTreeMap<String, Answer>,
}

impl AnswerSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert an answer for the given question id.
    pub fn insert(&mut self, id: impl Into<String>, answer: impl Into<Answer>) {
        self.values.insert(id.into(), answer.into());
    }

    /// Get the answer for a question id.
    pub fn get(&self, id: &str) -> Option<&Answer> {
        self.values.get(id)
    }

    /// Check whether an answer exists for a question id.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for a question id.
    pub fn remove(&mut self, id: &str) -> Option<Answer> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-answer pairs, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.values.iter().map(|(id, answer)| (id.as_str(), answer))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for AnswerSheet {
    type Item = (String, Answer);
    type IntoIter = std::collections::btree_map::IntoIter<String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnswerSheet {
    type Item = (&'a String, &'a Answer);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Judgment;

    #[test]
    fn insert_and_get() {
        let mut sheet = AnswerSheet::new();
        sheet.insert("FC01", "3");
        sheet.insert("SJT01", Judgment::with_best("1").with_second("4"));

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("FC01").unwrap().as_choice(), Some("3"));
        assert!(sheet.contains("SJT01"));
        assert!(sheet.get("FC02").is_none());
    }

    #[test]
    fn insert_overwrites() {
        let mut sheet = AnswerSheet::new();
        sheet.insert("FC01", "1");
        sheet.insert("FC01", "4");

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get("FC01").unwrap().as_choice(), Some("4"));
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let mut sheet = AnswerSheet::new();
        sheet.insert("FC01", "3");
        sheet.insert("SJT01", Judgment::with_best("1").with_second("4"));

        let value = serde_json::to_value(&sheet).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "FC01": "3",
                "SJT01": { "best": "1", "second": "4" }
            })
        );
    }
}
