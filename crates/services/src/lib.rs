#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod practice;
pub mod quiz;

pub use trainer_core::Clock;

pub use bank::{QuestionBank, QuestionRecord};
pub use error::{BankError, QuizError};
pub use practice::{PracticeComposer, PracticePlan};
pub use quiz::{
    AnswerFeedback, DEFAULT_DIAGNOSTIC_SIZE, DEFAULT_PRACTICE_SIZE, QuizProgress, QuizSession,
    TrainerService,
};
