//! Canned scoring backend for driving sessions without a network.
//!
//! `TestScorer` returns a pre-configured report (or failure) from every
//! call and records each payload it receives, so tests can assert on the
//! exact request bodies a session produces.
//!
//! # Example
//!
//! ```rust
//! use vocatio::{ScoreReport, TestScorer};
//!
//! let scorer = TestScorer::new().with_report(ScoreReport {
//!     traits: vec!["proto".into()],
//!     user_vector: vec![0.8],
//!     top: Vec::new(),
//! });
//! ```

use std::sync::Mutex;

use serde_json::Value;
use vocatio_types::{ScoreReport, Scorer, SubmissionPayload};

/// A scorer that returns a pre-configured result without any network.
#[derive(Debug, Default)]
pub struct TestScorer {
    report: ScoreReport,
    fail_with: Option<String>,
    requests: Mutex<Vec<Value>>,
}

/// Error type for `TestScorer`.
#[derive(Debug, thiserror::Error)]
pub enum TestScorerError {
    /// The scorer was configured to fail.
    #[error("scoring failed: {0}")]
    Failure(String),
}

impl TestScorer {
    /// Create a scorer returning an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this report from every call.
    pub fn with_report(mut self, report: ScoreReport) -> Self {
        self.report = report;
        self
    }

    /// Create a scorer failing every call with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Payloads received so far, as serialized request bodies.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl Scorer for TestScorer {
    type Error = TestScorerError;

    async fn score(&self, payload: &SubmissionPayload<'_>) -> Result<ScoreReport, Self::Error> {
        let body = serde_json::to_value(payload)
            .map_err(|e| TestScorerError::Failure(e.to_string()))?;
        self.requests.lock().expect("request log poisoned").push(body);

        match &self.fail_with {
            Some(message) => Err(TestScorerError::Failure(message.clone())),
            None => Ok(self.report.clone()),
        }
    }
}
