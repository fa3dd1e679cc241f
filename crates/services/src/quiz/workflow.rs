use rand::rng;
use rand::seq::SliceRandom;

use trainer_core::Clock;
use trainer_core::model::{Attempt, Question, TopicName, TopicStats};
use trainer_core::selection;

use super::state::{AnswerFeedback, QuizSession};
use crate::bank::QuestionBank;
use crate::error::QuizError;
use crate::practice::PracticeComposer;

/// Default diagnostic quiz length.
pub const DEFAULT_DIAGNOSTIC_SIZE: usize = 10;

/// Default practice session length.
pub const DEFAULT_PRACTICE_SIZE: usize = 8;

/// How many weak topics bias a practice session.
pub const WEAK_TOPIC_COUNT: usize = 3;

/// Topics at or above this accuracy are not considered weak.
pub const WEAK_ACCURACY_THRESHOLD: f64 = 0.7;

/// Orchestrates quiz starts, answer recording, and practice composition.
///
/// Owns the run's attempt log and the question bank; each user action maps
/// to one handler call here, so there is no implicit re-computation
/// between interactions. Attempts accumulate across quizzes for the
/// lifetime of the service and feed the weak-topic ranking.
pub struct TrainerService {
    bank: QuestionBank,
    clock: Clock,
    attempts: Vec<Attempt>,
}

impl TrainerService {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            clock: Clock::default(),
            attempts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Start a diagnostic quiz: a uniform random sample of `n` questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the bank has no questions.
    pub fn start_diagnostic(&self, n: usize) -> Result<QuizSession, QuizError> {
        let mut questions: Vec<Question> = self.bank.questions().to_vec();
        questions.shuffle(&mut rng());
        questions.truncate(n);
        QuizSession::new(questions, self.clock.now())
    }

    /// Start a practice session weighted toward the current weak topics.
    ///
    /// With no attempts recorded yet (or no topic below the weakness
    /// threshold) this degrades to a uniform mix over the bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the bank has no questions.
    pub fn start_practice(&self, n: usize) -> Result<QuizSession, QuizError> {
        let weak = self.weakest_topics(WEAK_TOPIC_COUNT);
        let plan = PracticeComposer::new(&self.bank).compose(&weak, n);
        QuizSession::new(plan.questions, self.clock.now())
    }

    /// Answer the current question and log the attempt.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError` from the session (completed, double submit).
    pub fn submit_answer(
        &mut self,
        session: &mut QuizSession,
        choice: &str,
    ) -> Result<AnswerFeedback, QuizError> {
        let (feedback, attempt) = session.submit_answer(choice, self.clock.now())?;
        self.attempts.push(attempt);
        Ok(feedback)
    }

    /// Move the session past the current question.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError` from the session (completed, not answered).
    pub fn advance(&self, session: &mut QuizSession) -> Result<(), QuizError> {
        session.advance(self.clock.now())
    }

    /// Per-topic accuracy over every attempt recorded this run.
    #[must_use]
    pub fn topic_stats(&self) -> TopicStats {
        TopicStats::from_attempts(&self.attempts)
    }

    /// The `k` weakest attempted topics, weakest first.
    ///
    /// Rankings come from `trainer_core::selection`; topics whose accuracy
    /// has reached `WEAK_ACCURACY_THRESHOLD` are dropped, so a strong
    /// record yields an empty list and practice stays a plain mix.
    #[must_use]
    pub fn weakest_topics(&self, k: usize) -> Vec<TopicName> {
        let stats = self.topic_stats();
        selection::weakest_topics(&stats, stats.len())
            .into_iter()
            .filter(|topic| {
                stats
                    .get(topic)
                    .is_none_or(|s| s.accuracy() < WEAK_ACCURACY_THRESHOLD)
            })
            .take(k)
            .collect()
    }

    /// Forget every recorded attempt, resetting personalization.
    pub fn reset_progress(&mut self) {
        self.attempts.clear();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
