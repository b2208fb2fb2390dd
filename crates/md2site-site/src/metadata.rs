//! SEO metadata and JSON-LD structured data
//!
//! [`PageMetadata`] carries everything that goes into a page `<head>`:
//! title, description, keywords, robots, canonical URL, Open Graph and
//! Twitter card tags.

use chrono::NaiveDate;
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::article::Article;
use crate::locale::Labels;

/// Site-wide information shared by every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Site name, used in titles and `og:site_name`
    pub name: String,
    /// Absolute base URL, e.g. `https://example.com`
    pub base_url: String,
    /// Language tag for `<html lang>` and interface strings
    pub language: String,
    /// Open Graph locale, e.g. `ru_RU`
    pub locale: String,
    /// Home page description
    pub description: String,
    /// Home page keywords
    pub keywords: Vec<String>,
    /// Page title template; `%s` is replaced by the page title.
    /// Defaults to `%s | {name}`.
    pub title_template: Option<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Knowledge Base".to_string(),
            base_url: "https://example.com".to_string(),
            language: "en".to_string(),
            locale: "en_US".to_string(),
            description: String::new(),
            keywords: Vec::new(),
            title_template: None,
        }
    }
}

impl SiteInfo {
    /// Apply the title template to a page title
    pub fn page_title(&self, title: &str) -> String {
        match &self.title_template {
            Some(template) => template.replace("%s", title),
            None => format!("{} | {}", title, self.name),
        }
    }

    /// Absolute URL for a site-relative path
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() || path == "/" {
            base.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Open Graph object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

/// Open Graph tags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub og_type: OgType,
    pub url: Option<String>,
    pub site_name: String,
    pub locale: String,
    /// `article:published_time`
    pub published_time: Option<NaiveDate>,
    /// `article:author`
    pub authors: Vec<String>,
}

/// Twitter card tags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

/// Metadata of one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    /// Full `<title>` text (template already applied)
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    /// Absolute canonical URL
    pub canonical: Option<String>,
    pub index: bool,
    pub follow: bool,
    pub open_graph: OpenGraph,
    pub twitter: Option<TwitterCard>,
}

impl PageMetadata {
    /// Metadata for an article page
    pub fn for_article(article: &Article, site: &SiteInfo) -> Self {
        let canonical = site.url(&article.path());
        let authors = if article.author.is_empty() {
            Vec::new()
        } else {
            vec![article.author.clone()]
        };

        Self {
            title: site.page_title(&article.title),
            description: article.description.clone(),
            keywords: article.keywords.clone(),
            authors: authors.clone(),
            canonical: Some(canonical.clone()),
            index: true,
            follow: true,
            open_graph: OpenGraph {
                title: article.title.clone(),
                description: article.description.clone(),
                og_type: OgType::Article,
                url: Some(canonical),
                site_name: site.name.clone(),
                locale: site.locale.clone(),
                published_time: Some(article.date),
                authors,
            },
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_string(),
                title: article.title.clone(),
                description: article.description.clone(),
            }),
        }
    }

    /// Metadata for the home page (article listing)
    pub fn for_home(site: &SiteInfo) -> Self {
        let canonical = site.url("/");
        Self {
            title: site.name.clone(),
            description: site.description.clone(),
            keywords: site.keywords.clone(),
            authors: vec![site.name.clone()],
            canonical: Some(canonical.clone()),
            index: true,
            follow: true,
            open_graph: OpenGraph {
                title: site.name.clone(),
                description: site.description.clone(),
                og_type: OgType::Website,
                url: Some(canonical),
                site_name: site.name.clone(),
                locale: site.locale.clone(),
                published_time: None,
                authors: Vec::new(),
            },
            twitter: None,
        }
    }

    /// Metadata for the "article not found" page
    pub fn not_found(site: &SiteInfo) -> Self {
        let title = Labels::for_language(&site.language).not_found_title;
        Self {
            title: site.page_title(title),
            description: String::new(),
            keywords: Vec::new(),
            authors: Vec::new(),
            canonical: None,
            index: false,
            follow: true,
            open_graph: OpenGraph {
                title: title.to_string(),
                description: String::new(),
                og_type: OgType::Website,
                url: None,
                site_name: site.name.clone(),
                locale: site.locale.clone(),
                published_time: None,
                authors: Vec::new(),
            },
            twitter: None,
        }
    }

    /// `robots` meta value
    pub fn robots(&self) -> String {
        format!(
            "{}, {}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" }
        )
    }

    /// Render the metadata as `<head>` tags, one per line
    pub fn to_head_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", encode_text(&self.title)));

        push_meta(&mut out, "name", "description", &self.description);
        push_meta(&mut out, "name", "keywords", &self.keywords.join(", "));
        for author in &self.authors {
            push_meta(&mut out, "name", "author", author);
        }
        push_meta(&mut out, "name", "robots", &self.robots());
        if let Some(canonical) = &self.canonical {
            out.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                encode_double_quoted_attribute(canonical)
            ));
        }

        let og = &self.open_graph;
        push_meta(&mut out, "property", "og:title", &og.title);
        push_meta(&mut out, "property", "og:description", &og.description);
        push_meta(&mut out, "property", "og:type", og.og_type.as_str());
        if let Some(url) = &og.url {
            push_meta(&mut out, "property", "og:url", url);
        }
        push_meta(&mut out, "property", "og:site_name", &og.site_name);
        push_meta(&mut out, "property", "og:locale", &og.locale);
        if let Some(date) = og.published_time {
            let date = date.format("%Y-%m-%d").to_string();
            push_meta(&mut out, "property", "article:published_time", &date);
        }
        for author in &og.authors {
            push_meta(&mut out, "property", "article:author", author);
        }

        if let Some(twitter) = &self.twitter {
            push_meta(&mut out, "name", "twitter:card", &twitter.card);
            push_meta(&mut out, "name", "twitter:title", &twitter.title);
            push_meta(&mut out, "name", "twitter:description", &twitter.description);
        }

        out
    }
}

/// Append `<meta {attr}="{key}" content="{value}">`; empty values are skipped
fn push_meta(out: &mut String, attr: &str, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push_str(&format!(
        "<meta {}=\"{}\" content=\"{}\">\n",
        attr,
        key,
        encode_double_quoted_attribute(value)
    ));
}

/// schema.org `Article` structured data
pub fn article_json_ld(article: &Article) -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "description": article.description,
        "datePublished": article.date_iso(),
        "author": {
            "@type": "Person",
            "name": article.author,
        },
        "keywords": article.keywords.join(", "),
    })
}

/// JSON-LD wrapped in a `<script>` element
///
/// `</` is escaped so article text cannot close the script element early.
pub fn json_ld_script(value: &serde_json::Value) -> String {
    let json = value.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{}</script>", json)
}
