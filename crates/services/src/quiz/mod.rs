mod progress;
mod state;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use state::{AnswerFeedback, QuizSession};
pub use workflow::{
    DEFAULT_DIAGNOSTIC_SIZE, DEFAULT_PRACTICE_SIZE, TrainerService, WEAK_ACCURACY_THRESHOLD,
    WEAK_TOPIC_COUNT,
};
