/// Export formatting — wraps an assembled fragment in a standalone HTML
/// document and derives its filename.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::html::escape_html;

pub const FILENAME_SUFFIX: &str = "-blog-post.html";

/// Date format of the document footer, e.g. "10/15/2026".
pub const FOOTER_DATE_FORMAT: &str = "%-m/%-d/%Y";

const DOCUMENT_STYLE: &str = r#"        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
            color: #333;
            background: #f8f9fa;
        }
        .blog-post {
            background: white;
            padding: 30px;
            border-radius: 12px;
            box-shadow: 0 5px 15px rgba(0, 0, 0, 0.1);
        }
        .blog-post h2 {
            color: #333;
            margin-bottom: 20px;
            font-size: 2em;
            line-height: 1.3;
            border-bottom: 3px solid #667eea;
            padding-bottom: 10px;
        }
        .blog-meta {
            display: flex;
            flex-wrap: wrap;
            gap: 15px;
            margin-bottom: 25px;
            color: #666;
            font-size: 14px;
            padding: 15px;
            background: #f8f9fa;
            border-radius: 8px;
        }
        .blog-meta span {
            display: flex;
            align-items: center;
            gap: 5px;
        }
        .blog-content {
            line-height: 1.8;
            color: #444;
        }
        .blog-content h3 {
            color: #333;
            margin: 25px 0 15px 0;
            font-size: 1.3em;
            border-left: 4px solid #667eea;
            padding-left: 15px;
        }
        .blog-content p {
            margin-bottom: 15px;
            text-align: justify;
        }
        .blog-content ul {
            margin: 15px 0;
            padding-left: 20px;
        }
        .blog-content li {
            margin-bottom: 8px;
            color: #555;
        }
        .blog-content li::marker {
            color: #667eea;
        }
        .footer {
            margin-top: 30px;
            padding-top: 20px;
            border-top: 1px solid #e0e0e0;
            text-align: center;
            color: #666;
            font-size: 14px;
        }
        @media (max-width: 768px) {
            body { padding: 10px; }
            .blog-post { padding: 20px; }
            .blog-meta { flex-direction: column; gap: 10px; }
        }
        @media print {
            body { background: white; }
            .blog-post { box-shadow: none; }
        }
"#;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A complete HTML document ready to be saved or downloaded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExportDocument {
    pub filename: String,
    pub html: String,
}

impl ExportDocument {
    /// Write the document into `dir` under its derived filename.
    pub fn write_into(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.html)?;
        Ok(path)
    }
}

/// Lowercase the topic and replace everything outside `[a-z0-9]` with `-`.
pub fn slugify(topic: &str) -> String {
    topic
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}

pub fn filename_for(topic: &str) -> String {
    format!("{}{}", slugify(topic), FILENAME_SUFFIX)
}

/// Wrap a fragment in a standalone document titled after `topic`.
pub fn export_document(fragment: &str, topic: &str, date: NaiveDate) -> ExportDocument {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - AI Generated Blog Post</title>
    <style>
{style}    </style>
</head>
<body>
    {fragment}
    <div class="footer">
        <p>Generated by AI Blog Generator on {date}</p>
    </div>
</body>
</html>"#,
        title = escape_html(topic),
        style = DOCUMENT_STYLE,
        fragment = fragment,
        date = date.format(FOOTER_DATE_FORMAT),
    );

    ExportDocument {
        filename: filename_for(topic),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn filename_replaces_every_non_alphanumeric() {
        assert_eq!(filename_for("AI & Ethics!"), "ai---ethics--blog-post.html");
        assert_eq!(filename_for("Web 3.0"), "web-3-0-blog-post.html");
    }

    #[test]
    fn slug_replaces_non_ascii_letters() {
        assert_eq!(slugify("Café"), "caf-");
    }

    #[test]
    fn document_title_is_escaped() {
        let doc = export_document("<p>body</p>", "<b>AI</b>", date());
        assert!(doc.html.contains("<title>&lt;b&gt;AI&lt;/b&gt; - AI Generated Blog Post</title>"));
        assert!(!doc.html.contains("<b>"));
    }

    #[test]
    fn document_embeds_fragment_and_footer_date() {
        let doc = export_document("<div class=\"blog-post\">x</div>", "Rust", date());
        assert!(doc.html.starts_with("<!DOCTYPE html>"));
        assert!(doc.html.contains("<div class=\"blog-post\">x</div>"));
        assert!(doc.html.contains("Generated by AI Blog Generator on 3/7/2026"));
        assert!(doc.html.contains(".blog-content li::marker"));
        assert_eq!(doc.filename, "rust-blog-post.html");
    }
}
