use serde::{Deserialize, Serialize};

use crate::career::{Career, resolve_career};

/// The scoring service's response: ordered trait keys, the user's trait
/// vector, and ranked career matches.
///
/// Vectors are positionally aligned with `traits` and expected in `[0, 1]`,
/// though nothing here enforces that. The report is passed to the
/// presentation layer verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Ordered trait keys, e.g. `proto`, `ops`, `debug`.
    #[serde(default)]
    pub traits: Vec<String>,

    /// The user's per-trait vector.
    #[serde(default)]
    pub user_vector: Vec<f64>,

    /// Ranked career matches, best first.
    #[serde(default)]
    pub top: Vec<CareerMatch>,
}

impl ScoreReport {
    /// The `n` strongest traits, value-descending.
    ///
    /// Positions missing from the vector read as `0.0`; ties keep trait
    /// order.
    pub fn top_traits(&self, n: usize) -> Vec<(&str, f64)> {
        let mut scored: Vec<(&str, f64)> = self
            .traits
            .iter()
            .enumerate()
            .map(|(i, key)| (key.as_str(), self.user_vector.get(i).copied().unwrap_or(0.0)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(n);
        scored
    }

    /// Resolve every match against a career reference list.
    ///
    /// Matches without a reference entry get a synthetic placeholder card;
    /// the scorer's `role`, `score` and `vector` are kept alongside either
    /// way.
    pub fn resolve(&self, careers: &[Career]) -> Vec<RankedCareer> {
        self.top
            .iter()
            .map(|m| RankedCareer {
                career: resolve_career(&m.role, careers),
                role: m.role.clone(),
                score: m.score,
                vector: m.vector.clone(),
            })
            .collect()
    }
}

/// A scored career recommendation, one entry of [`ScoreReport::top`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    /// Role identifier as the scorer names it.
    pub role: String,

    /// Similarity score.
    pub score: f64,

    /// Per-trait vector aligned with the report's `traits`.
    #[serde(default)]
    pub vector: Vec<f64>,
}

/// A career match enriched with reference detail for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCareer {
    /// Reference detail, synthetic if the role had no entry.
    pub career: Career,

    /// Role identifier as the scorer named it.
    pub role: String,

    /// Similarity score.
    pub score: f64,

    /// Per-trait vector aligned with the report's `traits`.
    pub vector: Vec<f64>,
}
