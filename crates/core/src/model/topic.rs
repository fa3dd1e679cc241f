use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("topic name cannot be empty")]
    Empty,
}

/// A labeled category questions belong to (e.g. "history", "science").
///
/// Trimmed and guaranteed non-empty. Ordering is lexical, which keeps
/// topic listings and ranking tie-breaks deterministic.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicName(String);

impl TopicName {
    /// Creates a topic name from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::Empty` if the trimmed input is empty.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TopicError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TopicError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TopicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicName({:?})", self.0)
    }
}

impl fmt::Display for TopicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_name_trims_whitespace() {
        let topic = TopicName::new("  history ").unwrap();
        assert_eq!(topic.as_str(), "history");
    }

    #[test]
    fn empty_topic_name_is_rejected() {
        let err = TopicName::new("   ").unwrap_err();
        assert_eq!(err, TopicError::Empty);
    }

    #[test]
    fn topic_names_order_lexically() {
        let a = TopicName::new("art").unwrap();
        let b = TopicName::new("science").unwrap();
        assert!(a < b);
    }
}
