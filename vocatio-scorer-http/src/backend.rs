//! Reqwest-based implementation of the Scorer trait.

use reqwest::{Client, Url};
use serde::Serialize;
use vocatio::{AnswerSheet, ScoreReport, Scorer, SubmissionPayload};

/// Error type for the HTTP scoring backend.
#[derive(Debug, thiserror::Error)]
pub enum HttpScorerError {
    /// The request failed in transport, returned a non-success status, or
    /// the response body did not decode as a score report. The service's
    /// error bodies are not interpreted.
    #[error("scoring request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Scoring backend that POSTs the answer sheet to a recommendation service.
///
/// One request per submission, no automatic retries; re-submitting the
/// session issues a fresh request with the same payload.
#[derive(Debug, Clone)]
pub struct HttpScorer {
    client: Client,
    endpoint: Url,
    top_k: Option<u32>,
}

/// Request body: the submission payload plus the optional match count.
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    answers: &'a AnswerSheet,

    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

impl HttpScorer {
    /// Create a backend posting to the given endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Create a backend reusing an existing client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self {
            client,
            endpoint,
            top_k: None,
        }
    }

    /// Ask the service for this many matches instead of its default.
    pub fn top_k(mut self, count: u32) -> Self {
        self.top_k = Some(count);
        self
    }

    /// The endpoint this backend posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Scorer for HttpScorer {
    type Error = HttpScorerError;

    async fn score(&self, payload: &SubmissionPayload<'_>) -> Result<ScoreReport, Self::Error> {
        let body = PredictRequest {
            answers: payload.answers,
            top_k: self.top_k,
        };
        log::debug!("scoring {} answers via {}", payload.answers.len(), self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let report: ScoreReport = response.json().await?;

        log::debug!(
            "scored: {} trait values, {} career matches",
            report.user_vector.len(),
            report.top.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocatio::Judgment;

    #[test]
    fn request_body_omits_top_k_by_default() {
        let mut answers = AnswerSheet::new();
        answers.insert("FC01", "2");
        answers.insert("SJT01", Judgment::with_best("1").with_second("3"));

        let body = PredictRequest {
            answers: &answers,
            top_k: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "answers": {
                    "FC01": "2",
                    "SJT01": { "best": "1", "second": "3" }
                }
            })
        );

        let body = PredictRequest {
            answers: &answers,
            top_k: Some(3),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["top_k"], serde_json::json!(3));
    }
}
