/// The generation pipeline: request → validated fragment → export document.
///
/// Wires together request validation, content resolution, fragment
/// assembly and export formatting.

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::core::assembler::{assemble, AssemblyError};
use crate::core::content::{ContentError, ContentLibrary};
use crate::core::export::{export_document, ExportDocument};
use crate::schema::request::{BlogRequest, ValidationError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("assembly error: {0}")]
    Assembly(#[from] AssemblyError),
    #[error("content error: {0}")]
    Content(#[from] ContentError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An assembled fragment and the topic it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedPost {
    pub topic: String,
    pub fragment: String,
}

/// The top-level generator. Built via `BlogGenerator::builder()`.
#[derive(Debug, Clone)]
pub struct BlogGenerator {
    library: ContentLibrary,
    date: Option<NaiveDate>,
}

/// Builder for constructing a `BlogGenerator`.
pub struct BlogGeneratorBuilder {
    builtin: bool,
    topics_dirs: Vec<PathBuf>,
    /// Directly provided topics (for testing without files).
    library: Option<ContentLibrary>,
    /// Fixed date for metadata and footer (for reproducible output).
    date: Option<NaiveDate>,
}

impl BlogGenerator {
    pub fn builder() -> BlogGeneratorBuilder {
        BlogGeneratorBuilder {
            builtin: true,
            topics_dirs: Vec::new(),
            library: None,
            date: None,
        }
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    /// The date stamped into output: the fixed date if one was set,
    /// otherwise today in local time.
    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Validate a request and assemble its fragment.
    pub fn generate(&self, request: &BlogRequest) -> Result<GeneratedPost, PipelineError> {
        request.validate()?;
        let fragment = assemble(request, &self.library, self.today())?;
        info!(
            topic = request.topic(),
            tone = %request.tone,
            length = %request.length,
            bytes = fragment.len(),
            "generated blog post"
        );
        Ok(GeneratedPost {
            topic: request.topic().to_string(),
            fragment,
        })
    }

    /// Wrap a generated post in a standalone document.
    pub fn export(&self, post: &GeneratedPost) -> ExportDocument {
        export_document(&post.fragment, &post.topic, self.today())
    }
}

impl BlogGeneratorBuilder {
    /// Skip the compiled-in topic table.
    pub fn without_builtin(mut self) -> Self {
        self.builtin = false;
        self
    }

    /// Load every `.ron` topic pack in `path`. Packs override built-in topics.
    pub fn topics_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.topics_dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Provide topics directly (for testing without files).
    pub fn with_library(mut self, library: ContentLibrary) -> Self {
        self.library = Some(library);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn build(self) -> Result<BlogGenerator, PipelineError> {
        let mut library = if self.builtin {
            ContentLibrary::builtin()?
        } else {
            ContentLibrary::new()
        };

        for dir in &self.topics_dirs {
            if dir.is_file() {
                library.merge(ContentLibrary::load_from_ron(dir)?);
            } else if dir.is_dir() {
                load_ron_files_from_dir(dir, |path| {
                    library.merge(ContentLibrary::load_from_ron(path)?);
                    Ok(())
                })?;
            }
        }

        // Directly provided topics win over everything loaded from disk
        if let Some(direct) = self.library {
            library.merge(direct);
        }

        Ok(BlogGenerator {
            library,
            date: self.date,
        })
    }
}

/// Load all .ron files from a directory in name order, calling `loader` for each.
fn load_ron_files_from_dir<F>(dir: &Path, mut loader: F) -> Result<(), PipelineError>
where
    F: FnMut(&Path) -> Result<(), PipelineError>,
{
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    paths.sort();
    for path in &paths {
        loader(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::synthesize;
    use crate::schema::length::Length;
    use crate::schema::tone::Tone;

    fn build_test_generator() -> BlogGenerator {
        BlogGenerator::builder()
            .date(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn generate_produces_fragment() {
        let generator = build_test_generator();
        let req = BlogRequest::new("  Cloud Computing Benefits ", Tone::Casual, Length::Short);
        let post = generator.generate(&req).unwrap();
        assert_eq!(post.topic, "Cloud Computing Benefits");
        assert!(post.fragment.contains("<h2>Cloud Computing Benefits</h2>"));
    }

    #[test]
    fn generate_rejects_short_topic() {
        let generator = build_test_generator();
        let req = BlogRequest::new("ab", Tone::Casual, Length::Short);
        assert!(matches!(
            generator.generate(&req),
            Err(PipelineError::Validation(ValidationError::TopicTooShort))
        ));
    }

    #[test]
    fn generate_is_deterministic_with_fixed_date() {
        let req = BlogRequest::new("Rust", Tone::Technical, Length::Medium);
        let a = build_test_generator().generate(&req).unwrap();
        let b = build_test_generator().generate(&req).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn direct_library_overrides_builtin() {
        let mut extra = ContentLibrary::new();
        let mut content = synthesize("Digital Marketing Strategies").unwrap();
        content.conclusion = "Custom conclusion.".to_string();
        extra.insert("Digital Marketing Strategies", content);

        let generator = BlogGenerator::builder().with_library(extra).build().unwrap();
        let req = BlogRequest::new("Digital Marketing Strategies", Tone::Professional, Length::Long);
        let post = generator.generate(&req).unwrap();
        assert!(post.fragment.contains("<p>Custom conclusion. As we continue"));
    }

    #[test]
    fn without_builtin_starts_empty() {
        let generator = BlogGenerator::builder().without_builtin().build().unwrap();
        assert!(generator.library().is_empty());
    }

    #[test]
    fn export_uses_post_topic() {
        let generator = build_test_generator();
        let req = BlogRequest::new("AI & Ethics!", Tone::Professional, Length::Short);
        let post = generator.generate(&req).unwrap();
        let doc = generator.export(&post);
        assert_eq!(doc.filename, "ai---ethics--blog-post.html");
        assert!(doc.html.contains("Generated by AI Blog Generator on 10/15/2026"));
    }
}
