use chrono::{DateTime, Utc};

use crate::model::ids::QuestionId;
use crate::model::topic::TopicName;

/// Record of a single answered question.
///
/// Created once per answered question during a quiz, never mutated, and
/// appended to the run's in-memory attempt log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub question_id: QuestionId,
    pub topic: TopicName,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

impl Attempt {
    #[must_use]
    pub fn new(
        question_id: QuestionId,
        topic: TopicName,
        is_correct: bool,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question_id,
            topic,
            is_correct,
            answered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn attempt_creation_works() {
        let topic = TopicName::new("science").unwrap();
        let attempt = Attempt::new(QuestionId::new(3), topic.clone(), true, fixed_now());
        assert_eq!(attempt.question_id, QuestionId::new(3));
        assert_eq!(attempt.topic, topic);
        assert!(attempt.is_correct);
    }
}
