mod attempt;
mod ids;
mod question;
mod stats;
mod topic;

pub use attempt::Attempt;
pub use ids::QuestionId;
pub use question::{Question, QuestionDraft, QuestionError, ValidatedQuestion};
pub use stats::{TopicStat, TopicStats};
pub use topic::{TopicError, TopicName};
