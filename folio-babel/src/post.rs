//! Post records and their rendered views
//!
//! A [`PostRecord`] is a post as the document database returns it. Its
//! `content` is kept as raw JSON so a record reads and writes back without
//! loss; it is resolved into [`Content`] only when a view is rendered.
//!
//! Two views exist:
//!
//! - [`PublicPost`] for article pages and the home feed: content as HTML,
//!   media references resolved to URLs, placeholders for missing images.
//! - [`AdminPost`] for the admin API: the record with content as Markdown,
//!   which is what the admin editor's source view works with.

use crate::formats::html::{serialize_to_html, HtmlOptions};
use crate::formats::markdown::serialize_to_markdown;
use crate::tree::Content;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_COVER_IMAGE: &str = "/assets/blog/preview/cover.jpg";
pub const DEFAULT_AUTHOR_PICTURE: &str = "/assets/blog/authors/jj.jpeg";
pub const DEFAULT_AUTHOR_NAME: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

/// A reference to an uploaded image.
///
/// Older records store a path string directly; newer ones reference a media
/// document, which is either populated (an object with `url`) or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    Path(String),
    Media(Media),
    Unresolved(Value),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl MediaRef {
    /// The URL to load this image from, if the reference carries one.
    pub fn url(&self) -> Option<&str> {
        let url = match self {
            MediaRef::Path(path) => Some(path.as_str()),
            MediaRef::Media(media) => media.url.as_deref(),
            MediaRef::Unresolved(_) => None,
        };
        url.filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<MediaRef>,
}

/// A stored post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Markdown string or editor tree, exactly as stored.
    #[serde(default)]
    pub content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<MediaRef>,
    #[serde(with = "iso_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub author: Author,
    pub slug: String,
    #[serde(default)]
    pub status: PostStatus,
}

/// Placeholders used when a post lacks an image or author name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDefaults {
    pub cover_image: String,
    pub author_picture: String,
    pub author_name: String,
}

impl Default for PostDefaults {
    fn default() -> Self {
        Self {
            cover_image: DEFAULT_COVER_IMAGE.to_string(),
            author_picture: DEFAULT_AUTHOR_PICTURE.to_string(),
            author_name: DEFAULT_AUTHOR_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicAuthor {
    pub name: String,
    pub picture: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
}

/// A post as shown on the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPost {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub cover_image: String,
    pub author: PublicAuthor,
    pub excerpt: String,
    pub og_image: OgImage,
    /// Rendered HTML
    pub content: String,
}

/// A post as returned by the admin API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub excerpt: String,
    /// Markdown
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<MediaRef>,
    #[serde(with = "iso_date")]
    pub date: DateTime<Utc>,
    pub author: Author,
    pub slug: String,
    pub status: PostStatus,
}

impl PostRecord {
    pub fn content(&self) -> Content {
        Content::from_json(&self.content)
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// The record id as a string. Accepts plain strings and `{"$oid": ...}`.
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(id) => Some(id.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(map) => map.get("$oid").and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }

    pub fn to_public(&self, defaults: &PostDefaults, options: &HtmlOptions) -> PublicPost {
        let cover_image = self
            .cover_image
            .as_ref()
            .and_then(MediaRef::url)
            .unwrap_or(&defaults.cover_image)
            .to_string();
        let picture = self
            .author
            .picture
            .as_ref()
            .and_then(MediaRef::url)
            .unwrap_or(&defaults.author_picture)
            .to_string();
        let name = if self.author.name.is_empty() {
            defaults.author_name.clone()
        } else {
            self.author.name.clone()
        };

        PublicPost {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: iso_string(&self.date),
            og_image: OgImage {
                url: cover_image.clone(),
            },
            cover_image,
            author: PublicAuthor { name, picture },
            excerpt: self.excerpt.clone(),
            content: serialize_to_html(&self.content(), options),
        }
    }

    pub fn to_admin(&self) -> AdminPost {
        AdminPost {
            id: self.id_string(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: serialize_to_markdown(&self.content()),
            cover_image: self.cover_image.clone(),
            date: self.date,
            author: self.author.clone(),
            slug: self.slug.clone(),
            status: self.status,
        }
    }
}

/// Render the public feed: published posts only, newest first.
pub fn render_feed(
    posts: &[PostRecord],
    defaults: &PostDefaults,
    options: &HtmlOptions,
) -> Vec<PublicPost> {
    let mut published: Vec<&PostRecord> = posts.iter().filter(|p| p.is_published()).collect();
    published.sort_by(|a, b| b.date.cmp(&a.date));
    render_all(&published, defaults, options)
}

#[cfg(feature = "parallel")]
fn render_all(
    posts: &[&PostRecord],
    defaults: &PostDefaults,
    options: &HtmlOptions,
) -> Vec<PublicPost> {
    use rayon::prelude::*;
    posts
        .par_iter()
        .map(|post| post.to_public(defaults, options))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn render_all(
    posts: &[&PostRecord],
    defaults: &PostDefaults,
    options: &HtmlOptions,
) -> Vec<PublicPost> {
    posts
        .iter()
        .map(|post| post.to_public(defaults, options))
        .collect()
}

/// `2020-03-16T05:35:07.322Z`
pub fn iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// RFC 3339 timestamps, or bare `YYYY-MM-DD` dates taken as UTC midnight.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|date| date.and_utc())
        })
}

/// Dates as the database exports them: strings, epoch milliseconds, or
/// extended JSON `{"$date": ...}`.
mod iso_date {
    use super::{iso_string, parse_date};
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&iso_string(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).ok_or_else(|| D::Error::custom(format!("invalid date: {value}")))
    }

    fn from_value(value: &Value) -> Option<DateTime<Utc>> {
        match value {
            Value::String(raw) => parse_date(raw),
            Value::Number(millis) => millis.as_i64().and_then(DateTime::from_timestamp_millis),
            Value::Object(map) => map.get("$date").and_then(from_value),
            _ => None,
        }
    }
}
