//! md2site-site: Site-level operations for the md2site knowledge base
//!
//! This crate turns a directory of articles into a static site:
//! - Article loading (`+++` TOML front matter plus an mdlite body)
//! - SEO metadata, Open Graph tags and JSON-LD
//! - Page rendering for the article list, article pages and the 404 page
//! - sitemap.xml generation
//! - Parallel site builds
//!
//! It is used by the `md2site` CLI but has no dependency on it.

pub mod article;
pub mod locale;
pub mod metadata;
pub mod page;
pub mod sitemap;
pub mod store;

pub use article::{Article, FRONT_MATTER_DELIMITER, parse_date, split_front_matter};
pub use locale::{Labels, format_date};
pub use metadata::{OgType, OpenGraph, PageMetadata, SiteInfo, TwitterCard, article_json_ld};
pub use page::{render_article_page, render_index_page, render_not_found_page};
pub use sitemap::{ChangeFrequency, SitemapEntry, build_sitemap, sitemap_to_xml};
pub use store::{ArticleIndex, ArticleStore, ArticleSummary};

use chrono::NaiveDate;
use log::{debug, info, warn};
use md2site_core::WriterOptions;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur during site operations
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Article '{slug}' has no front matter (expected a leading `+++` block)")]
    MissingFrontMatter { slug: String },

    #[error("Invalid front matter in article '{slug}': {message}")]
    FrontMatter { slug: String, message: String },

    #[error("Invalid date '{value}' in article '{slug}'")]
    InvalidDate { slug: String, value: String },

    #[error("Invalid slug '{0}': only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidSlug(String),

    #[error("Duplicate article slug: {0}")]
    DuplicateSlug(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Number of related articles shown under each article
pub const RELATED_ARTICLES: usize = 2;

/// Options for a site build
#[derive(Debug, Clone)]
pub struct SiteBuildOptions {
    /// Output directory for the generated site
    pub output_dir: PathBuf,
    /// Site-wide metadata
    pub site: SiteInfo,
    /// Converter options for article bodies
    pub writer: WriterOptions,
    /// Whether to write sitemap.xml
    pub sitemap: bool,
    /// Whether to write articles.json (article listing without bodies)
    pub index_json: bool,
    /// Number of parallel jobs (None = use all CPUs)
    pub parallel_jobs: Option<usize>,
    /// Date stamped on the home page sitemap entry
    pub today: NaiveDate,
}

impl Default for SiteBuildOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("_site"),
            site: SiteInfo::default(),
            writer: WriterOptions::default(),
            sitemap: true,
            index_json: false,
            parallel_jobs: None,
            today: chrono::Local::now().date_naive(),
        }
    }
}

/// Result of a site build
#[derive(Debug)]
pub struct BuildResult {
    /// Number of article pages written
    pub success_count: usize,
    /// Article pages that failed, as (slug, error)
    pub failed_pages: Vec<(String, String)>,
    /// Every file written, in write order
    pub output_files: Vec<PathBuf>,
}

/// Outcome of writing a single article page
enum PageOutcome {
    Success(PathBuf),
    Failed(String, String),
}

/// Builds a static site from an article store
pub struct SiteBuilder<'a> {
    store: &'a ArticleStore,
    options: SiteBuildOptions,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(store: &'a ArticleStore, options: SiteBuildOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &SiteBuildOptions {
        &self.options
    }

    /// Write the whole site
    ///
    /// Listing, 404 and sitemap failures abort the build. Individual
    /// article pages that fail are reported in [`BuildResult::failed_pages`].
    pub fn build(&self) -> Result<BuildResult> {
        let options = &self.options;

        if let Some(n) = options.parallel_jobs {
            rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build_global()
                .ok();
        }

        fs::create_dir_all(&options.output_dir)?;
        info!(
            "Building {} article(s) into {}",
            self.store.len(),
            options.output_dir.display()
        );

        let mut output_files = Vec::new();

        let index_path = options.output_dir.join("index.html");
        fs::write(&index_path, render_index_page(self.store, &options.site))?;
        output_files.push(index_path);

        let not_found_path = options.output_dir.join("404.html");
        fs::write(&not_found_path, render_not_found_page(&options.site))?;
        output_files.push(not_found_path);

        let results: Vec<_> = self
            .store
            .all()
            .par_iter()
            .map(|article| self.write_article(article))
            .collect();

        let mut success_count = 0;
        let mut failed_pages = Vec::new();
        for result in results {
            match result {
                PageOutcome::Success(path) => {
                    success_count += 1;
                    output_files.push(path);
                }
                PageOutcome::Failed(slug, error) => {
                    warn!("Failed to write page for '{}': {}", slug, error);
                    failed_pages.push((slug, error));
                }
            }
        }

        if options.sitemap {
            let entries = build_sitemap(self.store, &options.site.base_url, options.today);
            let sitemap_path = options.output_dir.join("sitemap.xml");
            fs::write(&sitemap_path, sitemap_to_xml(&entries))?;
            info!("Wrote sitemap with {} entries", entries.len());
            output_files.push(sitemap_path);
        }

        if options.index_json {
            let index_path = options.output_dir.join("articles.json");
            fs::write(&index_path, self.store.index().to_json()?)?;
            output_files.push(index_path);
        }

        Ok(BuildResult {
            success_count,
            failed_pages,
            output_files,
        })
    }

    fn write_article(&self, article: &Article) -> PageOutcome {
        let dir = self.options.output_dir.join(&article.slug);
        let related = self.store.related(&article.slug, RELATED_ARTICLES);
        let html = render_article_page(article, &related, &self.options.site, &self.options.writer);

        match write_page(&dir, &html) {
            Ok(path) => {
                debug!("Wrote {}", path.display());
                PageOutcome::Success(path)
            }
            Err(e) => PageOutcome::Failed(article.slug.clone(), e.to_string()),
        }
    }
}

/// Write `index.html` inside `dir`, creating it if needed
fn write_page(dir: &Path, html: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join("index.html");
    fs::write(&path, html)?;
    Ok(path)
}
