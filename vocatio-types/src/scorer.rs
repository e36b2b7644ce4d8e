use serde::Serialize;

use crate::{AnswerSheet, ScoreReport};

/// The request body sent to the scoring service.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload<'a> {
    /// The full answers mapping, sent verbatim.
    pub answers: &'a AnswerSheet,
}

/// Trait for backends that score a completed quiz.
///
/// Backends receive the submission payload and return the scored report.
/// The core hands the report to the presentation layer as-is and does not
/// validate it beyond decoding.
pub trait Scorer {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Score a completed quiz.
    ///
    /// Called with a payload whose answer sheet covers every item of the
    /// sequence; at most one call is outstanding per session.
    fn score(
        &self,
        payload: &SubmissionPayload<'_>,
    ) -> impl Future<Output = Result<ScoreReport, Self::Error>>;
}
