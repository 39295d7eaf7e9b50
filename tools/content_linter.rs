/// Content Linter — validates topic packs before they are shipped.
///
/// Usage: content_linter <topics_file_or_dir> [--strict]

use anyhow::{bail, Result};
use blog_generator::core::content::ContentLibrary;
use blog_generator::logging::init_tracing;
use blog_generator::schema::content::TopicContent;
use blog_generator::schema::request::MIN_TOPIC_CHARS;
use clap::Parser;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "content_linter", version, about = "Validate blog topic packs")]
struct Cli {
    /// A topic pack (.ron) or a directory of them
    path: PathBuf,
    #[arg(long, help = "Treat warnings as errors")]
    strict: bool,
    #[arg(long, short, help = "Log debug output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut library = ContentLibrary::new();
    let mut load_errors = Vec::new();

    if cli.path.is_file() {
        load_pack(&cli.path, &mut library, &mut load_errors);
    } else if cli.path.is_dir() {
        load_packs_recursive(&cli.path, &mut library, &mut load_errors);
    } else {
        bail!("path '{}' does not exist", cli.path.display());
    }

    println!("Loaded {} topics", library.len());

    let (mut errors, warnings) = lint_library(&library);
    errors.extend(load_errors);

    println!("\n=== Content Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() && (!cli.strict || warnings.is_empty()) {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_pack(path: &Path, library: &mut ContentLibrary, errors: &mut Vec<String>) {
    match ContentLibrary::load_from_ron(path) {
        Ok(pack) => {
            println!("  Loaded: {}", path.display());
            library.merge(pack);
        }
        Err(e) => errors.push(format!("{}: {}", path.display(), e)),
    }
}

fn load_packs_recursive(dir: &Path, library: &mut ContentLibrary, errors: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        errors.push(format!("{}: cannot read directory", dir.display()));
        return;
    };
    let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            load_packs_recursive(&path, library, errors);
        } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            load_pack(&path, library, errors);
        } else {
            debug!(path = %path.display(), "skipping non-RON file");
        }
    }
}

fn lint_library(library: &ContentLibrary) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut topics: Vec<(&str, &TopicContent)> = library.iter().collect();
    topics.sort_by_key(|(name, _)| *name);

    for (topic, content) in topics {
        if topic.trim() != topic {
            errors.push(format!(
                "Topic '{}' has surrounding whitespace and can never be matched",
                topic
            ));
        }
        if topic.trim().chars().count() < MIN_TOPIC_CHARS {
            errors.push(format!(
                "Topic '{}' is shorter than {} characters and can never be requested",
                topic, MIN_TOPIC_CHARS
            ));
        }

        for (i, point) in content.points.iter().enumerate() {
            if point.trim().is_empty() {
                errors.push(format!("Topic '{}' point {} is empty", topic, i + 1));
            } else if point.trim_end().ends_with('.') {
                // The assembler appends its own period after the first two points
                warnings.push(format!(
                    "Topic '{}' point {} ends with a period",
                    topic,
                    i + 1
                ));
            }
        }

        if content.conclusion.trim().is_empty() {
            errors.push(format!("Topic '{}' has an empty conclusion", topic));
        }

        if content.keywords.is_empty() {
            warnings.push(format!("Topic '{}' has no keywords", topic));
        }
        let mut seen = FxHashSet::default();
        for keyword in &content.keywords {
            if keyword.trim().is_empty() {
                errors.push(format!("Topic '{}' has an empty keyword", topic));
            } else if !seen.insert(keyword.to_lowercase()) {
                warnings.push(format!(
                    "Topic '{}' repeats keyword '{}'",
                    topic, keyword
                ));
            }
        }
    }

    (errors, warnings)
}
