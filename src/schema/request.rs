use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::length::Length;
use super::tone::Tone;

/// Minimum topic length, in characters, after trimming.
pub const MIN_TOPIC_CHARS: usize = 3;

/// A topic rejected before assembly. The messages are user-facing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a blog topic")]
    EmptyTopic,
    #[error("Blog topic must be at least 3 characters long")]
    TopicTooShort,
}

/// The form fields behind one Generate action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlogRequest {
    pub topic: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    /// Comma-separated, possibly empty.
    #[serde(default)]
    pub keywords: String,
}

impl BlogRequest {
    pub fn new(topic: impl Into<String>, tone: Tone, length: Length) -> Self {
        Self {
            topic: topic.into(),
            tone,
            length,
            keywords: String::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    /// The topic as it will be used: surrounding whitespace removed.
    pub fn topic(&self) -> &str {
        self.topic.trim()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let topic = self.topic();
        if topic.is_empty() {
            return Err(ValidationError::EmptyTopic);
        }
        if topic.chars().count() < MIN_TOPIC_CHARS {
            return Err(ValidationError::TopicTooShort);
        }
        Ok(())
    }

    /// Split the raw keyword field on commas, dropping blank entries.
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_topics_rejected() {
        let req = BlogRequest::new("", Tone::Casual, Length::Short);
        assert_eq!(req.validate(), Err(ValidationError::EmptyTopic));
        let req = BlogRequest::new("   \t ", Tone::Casual, Length::Short);
        assert_eq!(req.validate(), Err(ValidationError::EmptyTopic));
    }

    #[test]
    fn short_topics_rejected_after_trim() {
        for topic in ["a", "ab", "  ab  "] {
            let req = BlogRequest::new(topic, Tone::Casual, Length::Short);
            assert_eq!(req.validate(), Err(ValidationError::TopicTooShort), "{topic:?}");
        }
        assert!(BlogRequest::new(" abc ", Tone::Casual, Length::Short)
            .validate()
            .is_ok());
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            ValidationError::TopicTooShort.to_string(),
            "Blog topic must be at least 3 characters long"
        );
        assert_eq!(ValidationError::EmptyTopic.to_string(), "Please enter a blog topic");
    }

    #[test]
    fn keyword_list_trims_and_drops_blanks() {
        let req = BlogRequest::default().with_keywords(" rust, ,wasm ,, html ");
        assert_eq!(req.keyword_list(), vec!["rust", "wasm", "html"]);
        assert!(BlogRequest::default().keyword_list().is_empty());
    }
}
