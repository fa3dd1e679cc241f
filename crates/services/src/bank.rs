//! Question bank loading and lookup.
//!
//! The bank is a static catalog: questions are validated once at load time
//! and immutable afterwards. The source format is a JSON array of records
//! `{ id?, topic, question, options, answer }`; ids are optional and fall
//! back to the 1-based record position.

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use trainer_core::model::{Question, QuestionDraft, QuestionId, TopicName};

use crate::error::BankError;

//
// ─── SOURCE RECORDS ────────────────────────────────────────────────────────────
//

/// Raw question record as it appears in the bank file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub topic: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuestionRecord {
    /// Validate the record into a domain `Question`.
    ///
    /// `index` is the zero-based position in the source file, used both
    /// for error reporting and as the id fallback.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` when validation fails.
    pub fn into_question(self, index: usize) -> Result<Question, BankError> {
        let id = QuestionId::new(self.id.unwrap_or(index as u64 + 1));
        let draft = QuestionDraft {
            topic: self.topic,
            prompt: self.question,
            choices: self.options,
            answer: self.answer,
        };
        let validated = draft
            .validate()
            .map_err(|source| BankError::InvalidQuestion { index, source })?;
        Ok(validated.assign_id(id))
    }
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Immutable catalog of validated questions, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_id: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    /// Assemble a bank from already-validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateId` if two questions share an id.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, BankError> {
        let mut by_id = HashMap::with_capacity(questions.len());
        for (i, question) in questions.iter().enumerate() {
            if by_id.insert(question.id(), i).is_some() {
                return Err(BankError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions, by_id })
    }

    /// Parse a bank from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON and
    /// `BankError::InvalidQuestion`/`BankError::DuplicateId` for bad records.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_question(i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_questions(questions)
    }

    /// Load a bank from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` when the file cannot be read, plus any
    /// parse/validation error from `from_json_str`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.by_id.get(&id).map(|&i| &self.questions[i])
    }

    /// Distinct topics in the bank, sorted.
    #[must_use]
    pub fn topics(&self) -> Vec<TopicName> {
        self.questions
            .iter()
            .map(|q| q.topic().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Questions whose topic matches `topic`, in bank order.
    pub fn questions_for_topic<'a>(
        &'a self,
        topic: &'a TopicName,
    ) -> impl Iterator<Item = &'a Question> {
        self.questions.iter().filter(move |q| q.topic() == topic)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
