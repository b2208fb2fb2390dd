//! sitemaps.org XML sitemap

use chrono::NaiveDate;
use html_escape::encode_text;
use serde::Serialize;

use crate::store::ArticleStore;

/// How often a page is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// One `<url>` entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Home page priority
pub const HOME_PRIORITY: f32 = 1.0;
/// Article page priority
pub const ARTICLE_PRIORITY: f32 = 0.8;

/// Build sitemap entries: the home page first, then every article
///
/// The home page is stamped with `today`; articles with their publication
/// date.
pub fn build_sitemap(store: &ArticleStore, base_url: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');

    let mut entries = Vec::with_capacity(store.len() + 1);
    entries.push(SitemapEntry {
        url: base_url.to_string(),
        last_modified: today,
        change_frequency: ChangeFrequency::Daily,
        priority: HOME_PRIORITY,
    });

    for article in store.all() {
        entries.push(SitemapEntry {
            url: format!("{}/{}", base_url, article.slug),
            last_modified: article.date,
            change_frequency: ChangeFrequency::Monthly,
            priority: ARTICLE_PRIORITY,
        });
    }

    entries
}

/// Serialize entries as sitemap XML
pub fn sitemap_to_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", encode_text(&entry.url)));
        out.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        out.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        out.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}
