//! # vocatio
//!
//! Career-aptitude quiz sessions with pluggable scoring backends.
//!
//! A quiz is a fixed sequence of three item kinds: forced-choice (pick one
//! of four), Likert (pick one of five agreement levels) and
//! situational-judgment (rank a best and a differing second pick out of
//! four). A [`Session`] tracks the cursor and the answer sheet for one
//! attempt; once every item is answered, the sheet is submitted to a
//! [`Scorer`] backend, which returns the scored trait profile and ranked
//! career matches.
//!
//! ## Usage
//!
//! ```rust
//! use vocatio::{BankEntry, QuestionBank, Session};
//!
//! # fn main() {
//! let mut bank = QuestionBank::new();
//! bank.insert_forced_choice(
//!     "FC01",
//!     BankEntry::new(
//!         "A service is down. What do you reach for first?",
//!         [("1", "The logs"), ("2", "The dashboard"), ("3", "The code"), ("4", "The phone")],
//!     ),
//! );
//!
//! let mut session = Session::new(bank.sequence());
//! session.record("1");
//! assert!(session.is_complete());
//! # }
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement [`Scorer`]:
//! - `vocatio-scorer-http` - submits to a recommendation service over HTTP
//!
//! [`TestScorer`] ships here for driving sessions in tests without a
//! network.

// Re-export all types from vocatio-types
pub use vocatio_types::*;

// Test scorer for driving sessions without a network
mod test_scorer;
pub use test_scorer::{TestScorer, TestScorerError};
