/// Fragment assembly: tone template + topic content → article markup.
///
/// Every string that came from the request or the content library is escaped
/// on the way in. Section titles and fixed sentences are trusted markup.

use chrono::NaiveDate;
use std::fmt::Write as _;
use thiserror::Error;

use crate::core::content::{ContentError, ContentLibrary};
use crate::core::html::escape_html;
use crate::core::template::TemplateError;
use crate::schema::content::TopicContent;
use crate::schema::request::BlogRequest;
use crate::schema::tone::{Tone, ToneTemplate};

/// How many keywords the metadata line and callout show.
pub const KEYWORD_PREVIEW_LIMIT: usize = 3;

/// Date format of the metadata line, e.g. "October 15, 2026".
pub const METADATA_DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("content error: {0}")]
    Content(#[from] ContentError),
}

/// Assemble the article fragment for a request.
///
/// The request is expected to have passed `BlogRequest::validate`.
pub fn assemble(
    request: &BlogRequest,
    library: &ContentLibrary,
    date: NaiveDate,
) -> Result<String, AssemblyError> {
    let topic = request.topic();
    let keywords = request.keyword_list();
    let content = library.resolve(topic)?;
    let template = request.tone.template();

    let metadata = metadata_line(request, &keywords, date);
    let body = structured_content(topic, template, &content, &keywords)?;

    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"blog-post\">");
    let _ = writeln!(out, "    <h2>{}</h2>", escape_html(topic));
    let _ = writeln!(out, "    <div class=\"blog-meta\">");
    out.push_str(&metadata);
    let _ = writeln!(out, "    </div>");
    let _ = writeln!(out, "    <div class=\"blog-content\">");
    out.push_str(&body);
    let _ = writeln!(out, "    </div>");
    let _ = writeln!(out, "</div>");
    Ok(out)
}

/// First `KEYWORD_PREVIEW_LIMIT` keywords, escaped and comma-joined.
fn keyword_preview(keywords: &[String]) -> String {
    keywords
        .iter()
        .take(KEYWORD_PREVIEW_LIMIT)
        .map(|k| escape_html(k))
        .collect::<Vec<_>>()
        .join(", ")
}

fn metadata_line(request: &BlogRequest, keywords: &[String], date: NaiveDate) -> String {
    let length = request.length.config();
    let mut out = String::new();

    let _ = writeln!(out, "        <span>📅 {}</span>", date.format(METADATA_DATE_FORMAT));
    let _ = writeln!(out, "        <span>📝 ~{} words</span>", length.target);
    let _ = writeln!(
        out,
        "        <span>⏱️ {} min read</span>",
        length.reading_minutes()
    );
    let _ = writeln!(out, "        <span>🎯 {} tone</span>", request.tone.label());

    if !keywords.is_empty() {
        let more = if keywords.len() > KEYWORD_PREVIEW_LIMIT {
            "..."
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "        <span>🏷️ {}{}</span>",
            keyword_preview(keywords),
            more
        );
    }

    out
}

fn structured_content(
    topic: &str,
    template: &ToneTemplate,
    content: &TopicContent,
    keywords: &[String],
) -> Result<String, AssemblyError> {
    let topic = escape_html(topic);
    let intro = template.intro_template()?.render_topic(&topic)?;
    let sections = &template.sections;
    let points: Vec<String> = content.points.iter().map(|p| escape_html(p)).collect();

    let mut out = String::new();

    let _ = writeln!(out, "        <h3>{}</h3>", sections[0]);
    let _ = writeln!(out, "        <p>{}</p>", intro);
    out.push('\n');

    let _ = writeln!(out, "        <h3>{}</h3>", sections[1]);
    let _ = writeln!(
        out,
        "        <p>{}. This foundational understanding helps us appreciate the complexity and potential of this field, providing a solid base for further exploration.</p>",
        points[0]
    );
    out.push('\n');

    let _ = writeln!(out, "        <h3>{}</h3>", sections[2]);
    let _ = writeln!(
        out,
        "        <p>{}. Let's explore the key elements that make this topic so compelling and relevant in today's context:</p>",
        points[1]
    );
    let _ = writeln!(out, "        <ul>");
    for point in &points[2..] {
        let _ = writeln!(out, "            <li>{}</li>", point);
    }
    let _ = writeln!(out, "        </ul>");
    out.push('\n');

    let _ = writeln!(out, "        <h3>{}</h3>", sections[3]);
    let _ = writeln!(
        out,
        "        <p>The practical applications of {} are vast and varied, spanning multiple industries and use cases. From startups to enterprise organizations, the impact is being felt across different sectors. This transformation is not just theoretical; it's happening right now, with tangible results and measurable outcomes.</p>",
        topic
    );
    if !keywords.is_empty() {
        let _ = writeln!(
            out,
            "        <p>Key areas of focus include {}, which represent critical components of successful implementation and adoption.</p>",
            keyword_preview(keywords)
        );
    }
    out.push('\n');

    let _ = writeln!(out, "        <h3>{}</h3>", sections[4]);
    let _ = writeln!(
        out,
        "        <p>{} As we continue to explore and develop in this area, the possibilities for innovation, growth, and positive impact are limitless.</p>",
        escape_html(&content.conclusion)
    );
    let _ = writeln!(
        out,
        "        <p>Thank you for reading this comprehensive exploration of {}. We hope you found it informative, engaging, and valuable for your understanding of this important subject.</p>",
        topic
    );

    Ok(out)
}

/// Section titles a fragment for `tone` contains, in emission order.
pub fn section_titles(tone: Tone) -> [&'static str; 5] {
    tone.template().sections
}
