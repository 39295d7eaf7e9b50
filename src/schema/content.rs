use serde::{Deserialize, Serialize};

/// Number of content points every topic carries.
pub const POINT_COUNT: usize = 5;

/// Canned prose for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicContent {
    pub points: [String; POINT_COUNT],
    pub conclusion: String,
    pub keywords: Vec<String>,
}
