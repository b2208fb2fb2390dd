//! Article records and their on-disk format
//!
//! An article file is TOML front matter between two `+++` lines, followed by
//! the mdlite body:
//!
//! ```text
//! +++
//! title = "How to brew tea"
//! description = "Step by step"
//! keywords = ["tea", "kitchen"]
//! author = "Editorial team"
//! date = "2024-01-15"
//! +++
//!
//! # How to brew tea
//! ...
//! ```

use chrono::{DateTime, NaiveDate};
use md2site_core::{WriterOptions, markdown_to_html_with_options};
use serde::{Deserialize, Serialize};

use crate::{Result, SiteError};

/// Front matter delimiter line
pub const FRONT_MATTER_DELIMITER: &str = "+++";

/// A single article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// URL path segment (`/{slug}`)
    pub slug: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    /// Publication date
    pub date: NaiveDate,
    /// mdlite Markdown body
    pub content: String,
}

/// Raw front matter as written by authors
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    author: String,
    date: String,
    slug: Option<String>,
}

impl Article {
    /// Parse an article file
    ///
    /// `default_slug` is used when the front matter has no `slug` key
    /// (usually the file stem).
    pub fn parse(default_slug: &str, source: &str) -> Result<Self> {
        let (front, body) = split_front_matter(source);
        let front = front.ok_or_else(|| SiteError::MissingFrontMatter {
            slug: default_slug.to_string(),
        })?;

        let fm: FrontMatter = toml::from_str(front).map_err(|e| SiteError::FrontMatter {
            slug: default_slug.to_string(),
            message: e.to_string(),
        })?;

        let slug = fm.slug.unwrap_or_else(|| default_slug.to_string());
        validate_slug(&slug)?;

        let date = parse_date(&fm.date).ok_or_else(|| SiteError::InvalidDate {
            slug: slug.clone(),
            value: fm.date.clone(),
        })?;

        Ok(Self {
            slug,
            title: fm.title,
            description: fm.description,
            keywords: fm.keywords,
            author: fm.author,
            date,
            content: body.to_string(),
        })
    }

    /// Site-relative path of the article page
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }

    /// Publication date as `YYYY-MM-DD`
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Render the body as an HTML fragment
    pub fn to_html(&self, options: &WriterOptions) -> String {
        markdown_to_html_with_options(&self.content, options)
    }
}

/// Split `+++` front matter from the body
///
/// Returns `(None, source)` when the first line is not a delimiter or the
/// block is never closed.
pub fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let src = source.strip_prefix('\u{feff}').unwrap_or(source);

    let (first, rest) = match src.find('\n') {
        Some(idx) => (&src[..idx], &src[idx + 1..]),
        None => (src, ""),
    };
    if first.trim_end() != FRONT_MATTER_DELIMITER {
        return (None, source);
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, source)
}

/// Parse an ISO-8601 date (`2024-01-15`) or date-time (`2024-01-15T10:00:00Z`)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Slugs are URL path segments: ASCII alphanumerics, `-` and `_`
pub fn validate_slug(slug: &str) -> Result<()> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SiteError::InvalidSlug(slug.to_string()))
    }
}
