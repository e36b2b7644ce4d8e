/// Error type for session navigation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A jump target that is not part of the sequence. A correctly driven
    /// caller only offers ids taken from the sequence itself.
    #[error("no question with id `{0}` in the sequence")]
    UnknownQuestion(String),
}

/// Error type for quiz submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Items remain unanswered; no request was issued. Carries the
    /// unanswered question ids in sequence order.
    #[error("{} unanswered question(s) remain", .0.len())]
    Incomplete(Vec<String>),

    /// The scoring request failed in transport or returned a non-success
    /// status. The answer sheet is untouched, so the caller can retry.
    #[error("scoring request failed: {0}")]
    Network(#[from] anyhow::Error),
}

impl SubmitError {
    /// Create a network error from any backend error type.
    pub fn network(err: impl Into<anyhow::Error>) -> Self {
        Self::Network(err.into())
    }

    /// Check if this error means the quiz was not finished.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete(_))
    }
}
