use chrono::{DateTime, Utc};
use std::fmt;

use trainer_core::model::{Attempt, Question, QuestionId};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── ANSWER FEEDBACK ───────────────────────────────────────────────────────────
//

/// Outcome of answering the current question, shown before advancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_id: QuestionId,
    pub chosen: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// In-memory state for one quiz run (diagnostic or practice).
///
/// Steps through its questions sequentially in two beats per question:
/// `submit_answer` records the result and produces feedback, `advance`
/// moves on. Created when a quiz starts and dropped when the caller is
/// done with the final score; nothing here outlives the run.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    feedback: Option<AnswerFeedback>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over the given questions.
    ///
    /// `started_at` should come from the services layer clock to keep
    /// time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            score: 0,
            feedback: None,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Number of correctly answered questions so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions answered so far, including the current one if
    /// its feedback is still pending advancement.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        if self.feedback.is_some() {
            self.current + 1
        } else {
            self.current
        }
    }

    /// Number of questions not yet answered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.answered_count())
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Feedback for the current question, if it was already answered.
    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    /// Record an answer for the current question.
    ///
    /// Returns the feedback to display plus the `Attempt` for the caller's
    /// accuracy log. The session stays on the same question until
    /// `advance` is called, mirroring a submit-then-next flow.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if the session is finished, or
    /// `QuizError::AlreadyAnswered` if the current question already has
    /// an answer recorded.
    pub fn submit_answer(
        &mut self,
        choice: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<(AnswerFeedback, Attempt), QuizError> {
        if self.feedback.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        let Some(question) = self.current_question() else {
            return Err(QuizError::Completed);
        };

        let is_correct = question.is_correct(choice);
        let feedback = AnswerFeedback {
            question_id: question.id(),
            chosen: choice.to_owned(),
            correct_answer: question.answer().to_owned(),
            is_correct,
        };
        let attempt = Attempt::new(
            question.id(),
            question.topic().clone(),
            is_correct,
            answered_at,
        );

        if is_correct {
            self.score = self.score.saturating_add(1);
        }
        self.feedback = Some(feedback.clone());

        Ok((feedback, attempt))
    }

    /// Move past the current question, completing the session after the
    /// last one.
    ///
    /// `now` becomes `completed_at` when this advance finishes the run.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if the session is finished, or
    /// `QuizError::NotAnswered` if the current question has no answer yet.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<(), QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if self.feedback.is_none() {
            return Err(QuizError::NotAnswered);
        }

        self.feedback = None;
        self.current += 1;
        if self.current >= self.questions.len() {
            self.completed_at = Some(now);
        }
        Ok(())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionRecord;
    use trainer_core::time::fixed_now;

    fn build_question(id: u64, topic: &str) -> Question {
        let record = QuestionRecord {
            id: Some(id),
            topic: topic.to_owned(),
            question: format!("Question {id}"),
            options: vec!["right".to_owned(), "wrong".to_owned()],
            answer: "right".to_owned(),
        };
        record.into_question(id as usize).unwrap()
    }

    #[test]
    fn empty_session_returns_error() {
        let err = QuizSession::new(Vec::new(), fixed_now()).unwrap_err();
        assert!(matches!(err, QuizError::Empty));
    }

    #[test]
    fn session_advances_scores_and_completes() {
        let questions = vec![build_question(1, "history"), build_question(2, "science")];
        let mut session = QuizSession::new(questions, fixed_now()).unwrap();

        assert!(!session.is_complete());
        assert_eq!(session.progress().remaining, 2);

        let (feedback, attempt) = session.submit_answer("right", fixed_now()).unwrap();
        assert!(feedback.is_correct);
        assert!(attempt.is_correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.answered_count(), 1);

        session.advance(fixed_now()).unwrap();
        assert!(!session.is_complete());

        let (feedback, attempt) = session.submit_answer("wrong", fixed_now()).unwrap();
        assert!(!feedback.is_correct);
        assert!(!attempt.is_correct);
        assert_eq!(feedback.correct_answer, "right");
        assert_eq!(session.score(), 1);

        session.advance(fixed_now()).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert!(session.current_question().is_none());
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut session =
            QuizSession::new(vec![build_question(1, "history")], fixed_now()).unwrap();

        session.submit_answer("right", fixed_now()).unwrap();
        let err = session.submit_answer("right", fixed_now()).unwrap_err();
        assert!(matches!(err, QuizError::AlreadyAnswered));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session =
            QuizSession::new(vec![build_question(1, "history")], fixed_now()).unwrap();

        let err = session.advance(fixed_now()).unwrap_err();
        assert!(matches!(err, QuizError::NotAnswered));
    }

    #[test]
    fn completed_session_rejects_further_input() {
        let mut session =
            QuizSession::new(vec![build_question(1, "history")], fixed_now()).unwrap();
        session.submit_answer("right", fixed_now()).unwrap();
        session.advance(fixed_now()).unwrap();

        assert!(matches!(
            session.submit_answer("right", fixed_now()).unwrap_err(),
            QuizError::Completed
        ));
        assert!(matches!(
            session.advance(fixed_now()).unwrap_err(),
            QuizError::Completed
        ));
    }

    #[test]
    fn feedback_is_cleared_on_advance() {
        let questions = vec![build_question(1, "history"), build_question(2, "science")];
        let mut session = QuizSession::new(questions, fixed_now()).unwrap();

        session.submit_answer("wrong", fixed_now()).unwrap();
        assert!(session.feedback().is_some());

        session.advance(fixed_now()).unwrap();
        assert!(session.feedback().is_none());
    }
}
