/// A single item in a quiz sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Unique id within the sequence, e.g. `FC01`.
    id: String,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of item (determines stages and choice count).
    kind: QuestionKind,

    /// The selectable choices, in presentation order.
    choices: Vec<Choice>,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        kind: QuestionKind,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            choices,
        }
    }

    /// Get the question id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Get the choices.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Get the choice with the given key, if any.
    pub fn choice(&self, key: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.key() == key)
    }

    /// Check whether a choice with the given key exists.
    pub fn has_choice(&self, key: &str) -> bool {
        self.choice(key).is_some()
    }
}

/// The kind of quiz item, determining choice count and answer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Four mutually exclusive options, single selection.
    ForcedChoice,

    /// Five ordered agreement levels, single selection.
    Likert,

    /// Four options, two distinct ranked selections (best, then second).
    SituationalJudgment,
}

impl QuestionKind {
    /// Check whether answering takes two stages (best and second pick).
    pub fn is_two_stage(self) -> bool {
        matches!(self, Self::SituationalJudgment)
    }

    /// The choice keys items of this kind carry, in order.
    pub fn choice_keys(self) -> &'static [&'static str] {
        match self {
            Self::Likert => &["1", "2", "3", "4", "5"],
            Self::ForcedChoice | Self::SituationalJudgment => &["1", "2", "3", "4"],
        }
    }
}

/// One selectable choice of a question.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Key recorded in the answer sheet, e.g. `"3"`.
    key: String,

    /// Label shown to the user.
    label: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Get the choice key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}
