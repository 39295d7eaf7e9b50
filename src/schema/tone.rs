use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::template::{Template, TemplateError};

#[derive(Debug, Error, PartialEq)]
#[error("unknown tone '{0}' (expected one of: professional, casual, educational, conversational, technical)")]
pub struct UnknownTone(pub String);

/// The writing style of a generated post. Selects intro phrasing and
/// section titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Educational,
    Conversational,
    Technical,
}

/// Intro phrasing and section titles for one tone.
///
/// `style` and `vocabulary` are descriptive tags only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneTemplate {
    pub intro: &'static str,
    pub sections: [&'static str; 5],
    pub style: &'static str,
    pub vocabulary: &'static str,
}

const PROFESSIONAL: ToneTemplate = ToneTemplate {
    intro: "In today's rapidly evolving landscape, {topic} has emerged as a critical area of focus for businesses and professionals alike.",
    sections: [
        "Introduction",
        "Key Concepts",
        "Current Applications",
        "Future Implications",
        "Conclusion",
    ],
    style: "formal",
    vocabulary: "advanced",
};

const CASUAL: ToneTemplate = ToneTemplate {
    intro: "Hey there! Let's dive into {topic} and explore what makes it so fascinating.",
    sections: [
        "Getting Started",
        "The Fun Stuff",
        "Real-World Examples",
        "What's Next?",
        "Wrapping Up",
    ],
    style: "informal",
    vocabulary: "simple",
};

const EDUCATIONAL: ToneTemplate = ToneTemplate {
    intro: "Understanding {topic} is essential for anyone looking to stay informed about this important subject.",
    sections: [
        "Overview",
        "Fundamental Principles",
        "Practical Applications",
        "Case Studies",
        "Summary",
    ],
    style: "instructional",
    vocabulary: "clear",
};

const CONVERSATIONAL: ToneTemplate = ToneTemplate {
    intro: "Have you ever wondered about {topic}? Well, you're in for a treat because we're about to explore this fascinating subject together.",
    sections: [
        "Let's Start",
        "Here's What's Interesting",
        "Real Examples",
        "What This Means",
        "Final Thoughts",
    ],
    style: "friendly",
    vocabulary: "accessible",
};

const TECHNICAL: ToneTemplate = ToneTemplate {
    intro: "This comprehensive analysis examines {topic} from a technical perspective, exploring its mechanisms, implementation, and implications.",
    sections: [
        "Technical Overview",
        "System Architecture",
        "Implementation Details",
        "Performance Analysis",
        "Conclusions",
    ],
    style: "analytical",
    vocabulary: "technical",
};

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Educational,
        Tone::Conversational,
        Tone::Technical,
    ];

    /// Lowercase identifier, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Educational => "educational",
            Self::Conversational => "conversational",
            Self::Technical => "technical",
        }
    }

    /// Capitalized label shown in the post metadata.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Casual => "Casual",
            Self::Educational => "Educational",
            Self::Conversational => "Conversational",
            Self::Technical => "Technical",
        }
    }

    pub fn template(&self) -> &'static ToneTemplate {
        match self {
            Self::Professional => &PROFESSIONAL,
            Self::Casual => &CASUAL,
            Self::Educational => &EDUCATIONAL,
            Self::Conversational => &CONVERSATIONAL,
            Self::Technical => &TECHNICAL,
        }
    }
}

impl ToneTemplate {
    pub fn intro_template(&self) -> Result<Template, TemplateError> {
        Template::parse(self.intro)
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::Professional
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intro_has_one_topic_slot() {
        for tone in Tone::ALL {
            let intro = tone.template().intro_template().unwrap();
            assert_eq!(intro.slots().collect::<Vec<_>>(), vec!["topic"], "{tone}");
        }
    }

    #[test]
    fn labels_are_capitalized_names() {
        for tone in Tone::ALL {
            let mut chars = tone.name().chars();
            let first = chars.next().unwrap().to_ascii_uppercase();
            assert_eq!(tone.label(), format!("{}{}", first, chars.as_str()));
        }
    }

    #[test]
    fn parse_round_trips_names() {
        for tone in Tone::ALL {
            assert_eq!(tone.name().parse::<Tone>(), Ok(tone));
        }
        assert_eq!(
            "Professional".parse::<Tone>(),
            Err(UnknownTone("Professional".to_string()))
        );
    }

    #[test]
    fn casual_sections_in_order() {
        assert_eq!(Tone::Casual.template().sections[3], "What's Next?");
        assert_eq!(Tone::Casual.template().style, "informal");
    }
}
