use crate::{
    Answer, AnswerSheet, Judgment, Question, ScoreReport, Scorer, SessionError, SubmissionPayload,
    SubmitError,
};

/// Which pick a situational-judgment item expects next.
///
/// Always derived from the current item and its record, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgmentStage {
    /// The best pick is still missing.
    Best,

    /// The best pick exists; the second pick is still missing.
    Second,

    /// Nothing to pick: both picks exist, or the item is single-stage.
    None,
}

/// Outcome of recording a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The answer sheet changed.
    Recorded,

    /// The pick was invalid for the current state; nothing changed.
    Rejected,
}

impl RecordOutcome {
    /// Check whether the pick was taken.
    pub fn is_recorded(self) -> bool {
        matches!(self, Self::Recorded)
    }
}

/// One quiz attempt: a fixed question sequence, the answers collected so
/// far, and a cursor over the sequence.
///
/// The caller owns exactly one `Session` per attempt and discards it after a
/// successful submission. All transitions are synchronous; the only
/// suspension point is [`Session::submit`], which takes `&mut self` so a
/// second submission cannot start while one is outstanding.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    sequence: Vec<Question>,
    current: usize,
    answers: AnswerSheet,
}

impl Session {
    /// Start a fresh attempt over the given sequence.
    pub fn new(sequence: Vec<Question>) -> Self {
        Self {
            sequence,
            current: 0,
            answers: AnswerSheet::new(),
        }
    }

    /// Get the full question sequence.
    pub fn sequence(&self) -> &[Question] {
        &self.sequence
    }

    /// Number of items in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check whether the sequence has no items.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Get the answers collected so far.
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Index of the item under the cursor.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The item under the cursor; `None` only for an empty sequence.
    pub fn current(&self) -> Option<&Question> {
        self.sequence.get(self.current)
    }

    /// Check whether the cursor is on the last item.
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.sequence.len()
    }

    /// Stage of the current item, recomputed on every call.
    pub fn stage(&self) -> JudgmentStage {
        let Some(question) = self.current() else {
            return JudgmentStage::None;
        };
        if !question.kind().is_two_stage() {
            return JudgmentStage::None;
        }
        match self.answers.get(question.id()).and_then(Answer::as_judgment) {
            None => JudgmentStage::Best,
            Some(judgment) if judgment.best().is_none() => JudgmentStage::Best,
            Some(judgment) if judgment.second().is_none() => JudgmentStage::Second,
            Some(_) => JudgmentStage::None,
        }
    }

    /// Record a pick for the current item.
    ///
    /// Single-stage items overwrite their answer and advance the cursor
    /// unless they are the last item. Two-stage items take the best pick
    /// first (staying put), then a differing second pick (advancing). Any
    /// other pick is rejected without touching the sheet: an unknown choice
    /// key, a second pick equal to the best pick, or a pick on a two-stage
    /// item whose record is already settled.
    pub fn record(&mut self, choice_key: &str) -> RecordOutcome {
        let Some(question) = self.current() else {
            return RecordOutcome::Rejected;
        };
        if !question.has_choice(choice_key) {
            return RecordOutcome::Rejected;
        }
        let two_stage = question.kind().is_two_stage();
        let id = question.id().to_string();

        match self.stage() {
            JudgmentStage::None if two_stage => RecordOutcome::Rejected,
            JudgmentStage::None => {
                self.answers.insert(id, Answer::choice(choice_key));
                self.advance();
                RecordOutcome::Recorded
            }
            JudgmentStage::Best => {
                self.answers.insert(id, Judgment::with_best(choice_key));
                RecordOutcome::Recorded
            }
            JudgmentStage::Second => {
                let judgment = self
                    .answers
                    .get(&id)
                    .and_then(Answer::as_judgment)
                    .cloned()
                    .unwrap_or_default();
                if judgment.best() == Some(choice_key) {
                    return RecordOutcome::Rejected;
                }
                self.answers.insert(id, judgment.with_second(choice_key));
                self.advance();
                RecordOutcome::Recorded
            }
        }
    }

    fn advance(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    /// Move the cursor one item forward, clamped at the end.
    pub fn go_next(&mut self) {
        self.advance();
    }

    /// Move the cursor one item back, clamped at the start.
    pub fn go_prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to the item with the given id.
    pub fn jump_to(&mut self, id: &str) -> Result<(), SessionError> {
        let index = self
            .sequence
            .iter()
            .position(|q| q.id() == id)
            .ok_or_else(|| SessionError::UnknownQuestion(id.to_string()))?;
        self.current = index;
        Ok(())
    }

    /// Check whether the item with this id has a complete answer.
    pub fn is_answered(&self, id: &str) -> bool {
        self.answers.get(id).is_some_and(Answer::is_complete)
    }

    /// Number of completely answered items.
    pub fn answered_count(&self) -> usize {
        self.sequence
            .iter()
            .filter(|q| self.is_answered(q.id()))
            .count()
    }

    /// Check whether every item is answered.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.sequence.len()
    }

    /// Unanswered items, in sequence order.
    pub fn unanswered(&self) -> Vec<&Question> {
        self.sequence
            .iter()
            .filter(|q| !self.is_answered(q.id()))
            .collect()
    }

    /// The request body for the scoring service.
    pub fn payload(&self) -> SubmissionPayload<'_> {
        SubmissionPayload {
            answers: &self.answers,
        }
    }

    /// Submit the completed quiz to a scoring backend.
    ///
    /// With unanswered items remaining, this returns their ids without
    /// issuing a request. On a backend failure the answer sheet is left
    /// untouched, so re-invoking retries with the same payload.
    pub async fn submit<S: Scorer>(&mut self, scorer: &S) -> Result<ScoreReport, SubmitError> {
        if !self.is_complete() {
            let unanswered = self
                .unanswered()
                .into_iter()
                .map(|q| q.id().to_string())
                .collect();
            return Err(SubmitError::Incomplete(unanswered));
        }
        scorer
            .score(&self.payload())
            .await
            .map_err(SubmitError::network)
    }
}
