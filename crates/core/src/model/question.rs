use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::topic::{TopicError, TopicName};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error(transparent)]
    Topic(#[from] TopicError),

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two choices, got {0}")]
    TooFewChoices(usize),

    #[error("choice #{0} is blank")]
    BlankChoice(usize),

    #[error("duplicate choice: {0}")]
    DuplicateChoice(String),

    #[error("answer {answer:?} is not one of the choices")]
    AnswerNotInChoices { answer: String },
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Raw question data before validation, as read from a bank source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub topic: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: String,
}

impl QuestionDraft {
    /// Validate the draft into a `ValidatedQuestion`.
    ///
    /// Checks that the prompt is non-empty, there are at least two
    /// distinct non-blank choices, and the answer is one of the choices.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` describing the first violated rule.
    pub fn validate(self) -> Result<ValidatedQuestion, QuestionError> {
        let topic = TopicName::new(&self.topic)?;

        let prompt = self.prompt.trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        if self.choices.len() < 2 {
            return Err(QuestionError::TooFewChoices(self.choices.len()));
        }

        let mut choices = Vec::with_capacity(self.choices.len());
        for (i, raw) in self.choices.iter().enumerate() {
            let choice = raw.trim().to_owned();
            if choice.is_empty() {
                return Err(QuestionError::BlankChoice(i));
            }
            if choices.contains(&choice) {
                return Err(QuestionError::DuplicateChoice(choice));
            }
            choices.push(choice);
        }

        let answer = self.answer.trim().to_owned();
        if !choices.contains(&answer) {
            return Err(QuestionError::AnswerNotInChoices { answer });
        }

        Ok(ValidatedQuestion {
            topic,
            prompt,
            choices,
            answer,
        })
    }
}

/// A question that passed validation but has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    topic: TopicName,
    prompt: String,
    choices: Vec<String>,
    answer: String,
}

impl ValidatedQuestion {
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            topic: self.topic,
            prompt: self.prompt,
            choices: self.choices,
            answer: self.answer,
        }
    }
}

/// A single bank question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    topic: TopicName,
    prompt: String,
    choices: Vec<String>,
    answer: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn topic(&self) -> &TopicName {
        &self.topic
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether the given choice is the correct answer (exact match).
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
