//! Core types for the vocatio crate.
//!
//! This crate provides the foundational pieces for running a career-aptitude
//! quiz session:
//! - `QuestionBank` and `Question` - the static question pool and the ordered
//!   sequence built from it
//! - `Session` - the per-attempt state machine (cursor, answer sheet,
//!   completion views, submission)
//! - `Answer`, `Judgment` and `AnswerSheet` - recorded picks and their wire
//!   format
//! - `Scorer` trait and `ScoreReport` - the boundary to the external scoring
//!   service
//! - `Career` lookup - enriching scored roles with reference detail

mod question;
pub use question::{Choice, Question, QuestionKind};

mod bank;
pub use bank::{BankEntry, QuestionBank};

mod answer;
pub use answer::{Answer, Judgment};

mod answer_sheet;
pub use answer_sheet::AnswerSheet;

mod session;
pub use session::{JudgmentStage, RecordOutcome, Session};

mod scorer;
pub use scorer::{Scorer, SubmissionPayload};

mod report;
pub use report::{CareerMatch, RankedCareer, ScoreReport};

mod career;
pub use career::{Career, find_career, resolve_career};

mod error;
pub use error::{SessionError, SubmitError};
