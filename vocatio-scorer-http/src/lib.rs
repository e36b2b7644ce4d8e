//! # vocatio-scorer-http
//!
//! HTTP scoring backend for vocatio.
//!
//! Submits the answer sheet of a completed session to a career
//! recommendation service as a JSON `POST` and decodes the score report
//! from the response. Transport failures and non-success statuses are
//! reported uniformly; the session's answers stay intact so the caller can
//! retry.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vocatio::Session;
//! use vocatio_scorer_http::HttpScorer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new(bank.sequence());
//!     // ... answer every item ...
//!
//!     let endpoint = reqwest::Url::parse("http://localhost:8000/api/predict")?;
//!     let scorer = HttpScorer::new(endpoint);
//!     let report = session.submit(&scorer).await?;
//!     println!("best match: {:?}", report.top.first());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{HttpScorer, HttpScorerError};
