/// Topic content — the built-in table, extra topic packs, and the generic
/// fallback for topics nobody wrote prose for.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::template::{Template, TemplateError};
use crate::schema::content::{TopicContent, POINT_COUNT};

const BUILTIN_TOPICS: &str = include_str!("../../content_data/topics.ron");

/// Sentences used when a topic has no entry in the library.
const GENERIC_POINTS: [&str; POINT_COUNT] = [
    "{topic} is a rapidly evolving field with significant implications for various industries",
    "Understanding the core principles and fundamentals of {topic} is essential for success",
    "Current applications and implementations of {topic} span multiple sectors and use cases",
    "Future developments and innovations in {topic} will bring new opportunities and challenges",
    "Best practices and methodologies in {topic} ensure optimal results and sustainable growth",
];

const GENERIC_CONCLUSION: &str = "{topic} represents an important area of focus for continued growth, innovation, and strategic development in the modern landscape.";

const GENERIC_KEYWORDS: [&str; 4] = [
    "innovation",
    "development",
    "best practices",
    "future trends",
];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("topic '{topic}' has {found} points, expected 5")]
    PointCount { topic: String, found: usize },
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

// The RON shape uses a plain list for points; the count is checked on load.
#[derive(Debug, Deserialize)]
#[serde(rename = "Topic")]
struct RonTopic {
    points: Vec<String>,
    conclusion: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Exact-match table of topic → content.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    topics: FxHashMap<String, TopicContent>,
}

impl ContentLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table compiled into the crate.
    pub fn builtin() -> Result<ContentLibrary, ContentError> {
        Self::parse_ron(BUILTIN_TOPICS)
    }

    /// Load a topic pack from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<ContentLibrary, ContentError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a topic pack from a RON string.
    pub fn parse_ron(input: &str) -> Result<ContentLibrary, ContentError> {
        let raw: FxHashMap<String, RonTopic> = ron::from_str(input)?;
        let mut topics = FxHashMap::default();

        for (topic, entry) in raw {
            let found = entry.points.len();
            let points: [String; POINT_COUNT] = entry
                .points
                .try_into()
                .map_err(|_| ContentError::PointCount {
                    topic: topic.clone(),
                    found,
                })?;
            topics.insert(
                topic,
                TopicContent {
                    points,
                    conclusion: entry.conclusion,
                    keywords: entry.keywords,
                },
            );
        }

        Ok(ContentLibrary { topics })
    }

    /// Merge another library into this one. Entries from `other` replace
    /// entries with the same topic.
    pub fn merge(&mut self, other: ContentLibrary) {
        self.topics.extend(other.topics);
    }

    pub fn insert(&mut self, topic: impl Into<String>, content: TopicContent) {
        self.topics.insert(topic.into(), content);
    }

    pub fn get(&self, topic: &str) -> Option<&TopicContent> {
        self.topics.get(topic)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Known topics, sorted.
    pub fn topics(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.topics.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TopicContent)> {
        self.topics.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look the topic up verbatim, synthesizing generic content on a miss.
    ///
    /// No case folding or whitespace normalisation happens here.
    pub fn resolve(&self, topic: &str) -> Result<Cow<'_, TopicContent>, ContentError> {
        match self.topics.get(topic) {
            Some(content) => Ok(Cow::Borrowed(content)),
            None => {
                debug!(topic, "topic not in content library, synthesizing");
                Ok(Cow::Owned(synthesize(topic)?))
            }
        }
    }
}

/// Build generic content with the topic substituted into every sentence.
pub fn synthesize(topic: &str) -> Result<TopicContent, ContentError> {
    let mut points: [String; POINT_COUNT] = Default::default();
    for (slot, sentence) in points.iter_mut().zip(GENERIC_POINTS) {
        *slot = Template::parse(sentence)?.render_topic(topic)?;
    }
    let conclusion = Template::parse(GENERIC_CONCLUSION)?.render_topic(topic)?;

    let mut keywords = Vec::with_capacity(GENERIC_KEYWORDS.len() + 1);
    keywords.push(topic.to_lowercase());
    keywords.extend(GENERIC_KEYWORDS.iter().map(|k| k.to_string()));

    Ok(TopicContent {
        points,
        conclusion,
        keywords,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_topics() {
        let lib = ContentLibrary::builtin().unwrap();
        assert_eq!(lib.len(), 5);
        assert_eq!(
            lib.topics(),
            vec![
                "Cybersecurity Fundamentals",
                "Digital Marketing Strategies",
                "Sustainable Business Practices",
                "The Future of Artificial Intelligence",
                "Web Development Best Practices",
            ]
        );
    }

    #[test]
    fn resolve_hit_borrows_table_entry() {
        let lib = ContentLibrary::builtin().unwrap();
        let content = lib.resolve("Cybersecurity Fundamentals").unwrap();
        assert!(matches!(content, Cow::Borrowed(_)));
        assert_eq!(content.keywords[0], "cybersecurity");
    }

    #[test]
    fn resolve_is_case_and_whitespace_sensitive() {
        let lib = ContentLibrary::builtin().unwrap();
        for miss in ["cybersecurity fundamentals", "Cybersecurity  Fundamentals"] {
            let content = lib.resolve(miss).unwrap();
            assert!(matches!(content, Cow::Owned(_)), "{miss}");
            assert_eq!(content.keywords[0], miss.to_lowercase());
        }
    }

    #[test]
    fn synthesized_content_mentions_topic_everywhere() {
        let content = synthesize("Quantum Computing").unwrap();
        for point in &content.points {
            assert!(point.contains("Quantum Computing"), "{point}");
        }
        assert!(content.conclusion.starts_with("Quantum Computing represents"));
        assert_eq!(
            content.keywords,
            vec![
                "quantum computing",
                "innovation",
                "development",
                "best practices",
                "future trends",
            ]
        );
    }

    #[test]
    fn wrong_point_count_rejected() {
        let input = r#"{
            "Short": Topic(points: ["a", "b"], conclusion: "c", keywords: []),
        }"#;
        match ContentLibrary::parse_ron(input) {
            Err(ContentError::PointCount { topic, found }) => {
                assert_eq!(topic, "Short");
                assert_eq!(found, 2);
            }
            other => panic!("expected point count error, got {other:?}"),
        }
    }

    #[test]
    fn merge_overrides_same_topic() {
        let mut base = ContentLibrary::builtin().unwrap();
        let mut extra = ContentLibrary::new();
        let mut replacement = synthesize("Cybersecurity Fundamentals").unwrap();
        replacement.keywords = vec!["replaced".to_string()];
        extra.insert("Cybersecurity Fundamentals", replacement);
        base.merge(extra);

        assert_eq!(base.len(), 5);
        assert_eq!(
            base.get("Cybersecurity Fundamentals").unwrap().keywords,
            vec!["replaced"]
        );
    }
}
