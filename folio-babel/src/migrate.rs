//! Import of legacy Markdown posts
//!
//! Before the rich-text editor, posts lived as Markdown files with a YAML
//! front matter block:
//!
//! ```text
//! ---
//! title: 'Dynamic Routing and Static Generation'
//! excerpt: 'Lorem ipsum dolor sit amet'
//! coverImage: '/assets/blog/dynamic-routing/cover.jpg'
//! date: '2020-03-16T05:35:07.322Z'
//! author:
//!   name: JJ Kasper
//!   picture: '/assets/blog/authors/jj.jpeg'
//! ---
//!
//! Body in Markdown.
//! ```
//!
//! Each file becomes a [`PostRecord`] whose content is the Markdown body,
//! stored as a plain string. The converters treat such content as legacy
//! Markdown, so imported posts need no tree.

use crate::error::MigrateError;
use crate::post::{parse_date, Author, MediaRef, PostRecord, PostStatus, DEFAULT_AUTHOR_NAME};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Status given to every imported post
    pub status: PostStatus,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            status: PostStatus::Published,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    title: Option<String>,
    excerpt: Option<String>,
    date: Option<String>,
    cover_image: Option<String>,
    #[serde(default)]
    author: FrontMatterAuthor,
}

#[derive(Debug, Default, Deserialize)]
struct FrontMatterAuthor {
    name: Option<String>,
    picture: Option<String>,
}

/// A file that could not be imported.
#[derive(Debug)]
pub struct MigrationFailure {
    pub slug: String,
    pub error: MigrateError,
}

/// Outcome of a directory import.
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub migrated: Vec<PostRecord>,
    /// Slugs that already existed
    pub skipped: Vec<String>,
    pub failed: Vec<MigrationFailure>,
}

/// Split a leading `---` delimited block from the body.
///
/// Returns `None` for the front matter when the source has no complete block.
fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let Some(rest) = source
        .strip_prefix("---")
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
    else {
        return (None, source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, source)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Build a post record from one Markdown file's text.
pub fn migrate_source(
    slug: &str,
    source: &str,
    options: &MigrateOptions,
) -> Result<PostRecord, MigrateError> {
    let (yaml, body) = split_front_matter(source);
    let front: FrontMatter = match yaml {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str(yaml)?,
        _ => FrontMatter::default(),
    };

    let title = non_empty(front.title).ok_or(MigrateError::MissingField("title"))?;
    let raw_date = non_empty(front.date).ok_or(MigrateError::MissingField("date"))?;
    let date = parse_date(&raw_date).ok_or(MigrateError::InvalidDate(raw_date))?;

    Ok(PostRecord {
        id: None,
        title,
        excerpt: front.excerpt.unwrap_or_default(),
        content: Value::String(body.to_string()),
        cover_image: non_empty(front.cover_image).map(MediaRef::Path),
        date,
        author: Author {
            name: non_empty(front.author.name).unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
            picture: non_empty(front.author.picture).map(MediaRef::Path),
        },
        slug: slug.to_string(),
        status: options.status,
    })
}

fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, MigrateError> {
    let io_error = |source| MigrateError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Import every `*.md` file in `dir`.
///
/// Files whose slug is in `existing` are skipped. A file that fails to import
/// is recorded in the report and the run continues; only an unreadable
/// directory fails the whole call.
pub fn migrate_dir(
    dir: &Path,
    existing: &HashSet<String>,
    options: &MigrateOptions,
) -> Result<MigrationReport, MigrateError> {
    let files = markdown_files(dir)?;
    tracing::info!(dir = %dir.display(), count = files.len(), "found markdown posts");

    let mut report = MigrationReport::default();
    for path in files {
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        if existing.contains(&slug) {
            tracing::info!(%slug, "post already exists, skipping");
            report.skipped.push(slug);
            continue;
        }

        let result = fs::read_to_string(&path)
            .map_err(|source| MigrateError::Io {
                path: path.clone(),
                source,
            })
            .and_then(|source| migrate_source(&slug, &source, options));
        match result {
            Ok(record) => {
                tracing::info!(%slug, "migrated post");
                report.migrated.push(record);
            }
            Err(error) => {
                tracing::warn!(%slug, %error, "failed to migrate post");
                report.failed.push(MigrationFailure { slug, error });
            }
        }
    }
    Ok(report)
}
