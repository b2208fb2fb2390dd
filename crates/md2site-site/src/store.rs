//! Article store
//!
//! Holds every article of the site, newest first, with lookup by slug.

use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::article::Article;
use crate::{Result, SiteError};

/// All articles of a site
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    /// Articles ordered by date (newest first), then slug
    articles: Vec<Article>,
    /// Slug -> position in `articles`
    index: HashMap<String, usize>,
}

impl ArticleStore {
    /// Build a store from already-parsed articles
    pub fn new(mut articles: Vec<Article>) -> Result<Self> {
        articles.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        let mut index = HashMap::with_capacity(articles.len());
        for (i, article) in articles.iter().enumerate() {
            if index.insert(article.slug.clone(), i).is_some() {
                return Err(SiteError::DuplicateSlug(article.slug.clone()));
            }
        }

        Ok(Self { articles, index })
    }

    /// Load every `.md` article in a directory
    ///
    /// The file stem is the default slug. Any article that fails to parse
    /// fails the whole load.
    pub fn from_directory(path: &Path, recursive: bool) -> Result<Self> {
        if !path.is_dir() {
            return Err(SiteError::DirectoryNotFound(path.to_path_buf()));
        }

        let mut files = collect_md_files(path, recursive)?;
        files.sort();

        let mut articles = Vec::with_capacity(files.len());
        for file in &files {
            let content = fs::read_to_string(file)?;
            let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            let article = Article::parse(stem, &content).map_err(|e| SiteError::Parse {
                file: file.clone(),
                message: e.to_string(),
            })?;
            debug!("Loaded article '{}' from {}", article.slug, file.display());
            articles.push(article);
        }

        Self::new(articles)
    }

    /// Look up an article by slug
    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.index.get(slug).map(|&i| &self.articles[i])
    }

    /// All articles, newest first
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    /// Slugs of all articles, in listing order
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(|a| a.slug.as_str())
    }

    /// Up to `limit` other articles, in listing order
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.slug != slug)
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Listing of all articles without their bodies
    pub fn index(&self) -> ArticleIndex {
        ArticleIndex {
            articles: self
                .articles
                .iter()
                .map(|a| ArticleSummary {
                    slug: a.slug.clone(),
                    path: a.path(),
                    title: a.title.clone(),
                    description: a.description.clone(),
                    keywords: a.keywords.clone(),
                    author: a.author.clone(),
                    date: a.date_iso(),
                })
                .collect(),
        }
    }
}

/// Article metadata for listings
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub slug: String,
    /// Site-relative page path
    pub path: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub author: String,
    pub date: String,
}

/// Index of all articles of a site
#[derive(Debug, Clone, Serialize)]
pub struct ArticleIndex {
    pub articles: Vec<ArticleSummary>,
}

impl ArticleIndex {
    /// Serialize the index to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Collect all .md files in a directory
fn collect_md_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension()
                && ext.eq_ignore_ascii_case("md")
            {
                files.push(path);
            }
        } else if path.is_dir() && recursive {
            files.extend(collect_md_files(&path, recursive)?);
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn article(slug: &str, date: (i32, u32, u32)) -> Article {
        Article {
            slug: slug.to_string(),
            title: format!("Title {}", slug),
            description: format!("About {}", slug),
            keywords: vec!["k".to_string()],
            author: "Author".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            content: "body".to_string(),
        }
    }

    fn write_article(dir: &Path, file: &str, title: &str, date: &str) {
        let source = format!(
            "+++\ntitle = \"{}\"\ndescription = \"d\"\nauthor = \"a\"\ndate = \"{}\"\n+++\n# {}\n",
            title, date, title
        );
        fs::write(dir.join(file), source).unwrap();
    }

    #[test]
    fn test_store_orders_newest_first() {
        let store = ArticleStore::new(vec![
            article("old", (2023, 5, 1)),
            article("new", (2024, 2, 1)),
            article("b-same-day", (2023, 6, 1)),
            article("a-same-day", (2023, 6, 1)),
        ])
        .unwrap();

        let slugs: Vec<_> = store.slugs().collect();
        assert_eq!(slugs, vec!["new", "a-same-day", "b-same-day", "old"]);
    }

    #[test]
    fn test_get_by_slug() {
        let store = ArticleStore::new(vec![article("a", (2024, 1, 1)), article("b", (2024, 1, 2))])
            .unwrap();
        assert_eq!(store.get("a").map(|a| a.title.as_str()), Some("Title a"));
        assert!(store.get("missing").is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = ArticleStore::new(vec![article("a", (2024, 1, 1)), article("a", (2024, 1, 2))])
            .unwrap_err();
        assert!(matches!(err, SiteError::DuplicateSlug(s) if s == "a"));
    }

    #[test]
    fn test_related_excludes_current() {
        let store = ArticleStore::new(vec![
            article("a", (2024, 1, 3)),
            article("b", (2024, 1, 2)),
            article("c", (2024, 1, 1)),
        ])
        .unwrap();

        let related: Vec<_> = store.related("a", 2).iter().map(|a| a.slug.clone()).collect();
        assert_eq!(related, vec!["b", "c"]);

        let related: Vec<_> = store.related("b", 2).iter().map(|a| a.slug.clone()).collect();
        assert_eq!(related, vec!["a", "c"]);

        assert!(ArticleStore::new(vec![article("solo", (2024, 1, 1))])
            .unwrap()
            .related("solo", 2)
            .is_empty());
    }

    #[test]
    fn test_from_directory() {
        let dir = tempdir().unwrap();
        write_article(dir.path(), "brew-tea.md", "Brew tea", "2024-01-15");
        write_article(dir.path(), "fix-bike.MD", "Fix a bike", "2024-02-01");
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let store = ArticleStore::from_directory(dir.path(), false).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].slug, "fix-bike");
        assert_eq!(store.get("brew-tea").unwrap().title, "Brew tea");
    }

    #[test]
    fn test_from_directory_recursive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("2024");
        fs::create_dir_all(&nested).unwrap();
        write_article(dir.path(), "top.md", "Top", "2024-01-01");
        write_article(&nested, "nested.md", "Nested", "2024-01-02");

        assert_eq!(ArticleStore::from_directory(dir.path(), false).unwrap().len(), 1);
        assert_eq!(ArticleStore::from_directory(dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_from_directory_reports_file_on_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.md"), "no front matter").unwrap();

        let err = ArticleStore::from_directory(dir.path(), false).unwrap_err();
        match err {
            SiteError::Parse { file, .. } => assert!(file.ends_with("broken.md")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_missing_directory() {
        let err = ArticleStore::from_directory(Path::new("/nonexistent/articles"), false)
            .unwrap_err();
        assert!(matches!(err, SiteError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_index_json() {
        let mut no_keywords = article("b", (2024, 1, 1));
        no_keywords.keywords.clear();
        let store = ArticleStore::new(vec![article("a", (2024, 1, 2)), no_keywords]).unwrap();

        let json = store.index().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let articles = parsed["articles"].as_array().unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0]["slug"], "a");
        assert_eq!(articles[0]["path"], "/a");
        assert_eq!(articles[0]["date"], "2024-01-02");
        assert_eq!(articles[0]["keywords"], serde_json::json!(["k"]));
        assert!(articles[0].get("content").is_none());
        assert!(articles[1].get("keywords").is_none());
    }
}
