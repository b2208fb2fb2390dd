//! HTML page shells
//!
//! Each page is a complete document: metadata in `<head>`, a minimal body
//! around the content. Article bodies are embedded verbatim from the
//! converter; every other string is escaped here.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use md2site_core::WriterOptions;

use crate::article::Article;
use crate::locale::{Labels, format_date};
use crate::metadata::{PageMetadata, SiteInfo, article_json_ld, json_ld_script};
use crate::store::ArticleStore;

/// Number of keywords shown per article on the listing page
pub const LISTING_KEYWORDS: usize = 3;

/// Render an article page
pub fn render_article_page(
    article: &Article,
    related: &[&Article],
    site: &SiteInfo,
    writer_options: &WriterOptions,
) -> String {
    let labels = Labels::for_language(&site.language);
    let meta = PageMetadata::for_article(article, site);
    let json_ld = json_ld_script(&article_json_ld(article));

    let mut body = String::new();
    body.push_str(&format!(
        "<header><a href=\"/\">{}</a></header>\n",
        text(labels.back_to_articles)
    ));
    body.push_str("<main>\n<article>\n<header>\n");
    body.push_str(&format!("<h1>{}</h1>\n", text(&article.title)));
    body.push_str(&format!(
        "<p class=\"meta\"><time datetime=\"{}\">{}</time>",
        article.date_iso(),
        text(&format_date(article.date, &site.language))
    ));
    if !article.author.is_empty() {
        body.push_str(&format!(
            " <span class=\"author\">{}</span>",
            text(&article.author)
        ));
    }
    body.push_str("</p>\n");
    if !article.description.is_empty() {
        body.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            text(&article.description)
        ));
    }
    push_keywords(&mut body, &article.keywords, "#");
    body.push_str("</header>\n");

    body.push_str("<div class=\"markdown-content\">\n");
    body.push_str(&article.to_html(writer_options));
    body.push_str("\n</div>\n</article>\n");

    if !related.is_empty() {
        body.push_str("<section class=\"related\">\n");
        body.push_str(&format!("<h2>{}</h2>\n<ul>\n", text(labels.read_also)));
        for other in related {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a>",
                attr(&other.path()),
                text(&other.title)
            ));
            if !other.description.is_empty() {
                body.push_str(&format!("<p>{}</p>", text(&other.description)));
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n</section>\n");
    }
    body.push_str("</main>");

    document(site, &meta, Some(&json_ld), &body)
}

/// Render the home page listing every article
pub fn render_index_page(store: &ArticleStore, site: &SiteInfo) -> String {
    let labels = Labels::for_language(&site.language);
    let meta = PageMetadata::for_home(site);

    let mut body = String::new();
    body.push_str(&format!("<header><h1>{}</h1>", text(&site.name)));
    if !site.description.is_empty() {
        body.push_str(&format!("<p>{}</p>", text(&site.description)));
    }
    body.push_str("</header>\n<main>\n");
    body.push_str(&format!("<h2>{}</h2>\n", text(labels.latest_articles)));

    for article in store.all() {
        let path = attr(&article.path()).into_owned();
        body.push_str("<article>\n");
        body.push_str(&format!(
            "<p class=\"meta\"><time datetime=\"{}\">{}</time>",
            article.date_iso(),
            text(&format_date(article.date, &site.language))
        ));
        if !article.author.is_empty() {
            body.push_str(&format!(" <span class=\"author\">{}</span>", text(&article.author)));
        }
        body.push_str("</p>\n");
        body.push_str(&format!(
            "<h3><a href=\"{}\">{}</a></h3>\n",
            path,
            text(&article.title)
        ));
        if !article.description.is_empty() {
            body.push_str(&format!("<p>{}</p>\n", text(&article.description)));
        }
        let shown = article.keywords.len().min(LISTING_KEYWORDS);
        push_keywords(&mut body, &article.keywords[..shown], "");
        body.push_str(&format!(
            "<a href=\"{}\">{}</a>\n</article>\n",
            path,
            text(labels.read_more)
        ));
    }
    body.push_str("</main>");

    document(site, &meta, None, &body)
}

/// Render the "article not found" page
pub fn render_not_found_page(site: &SiteInfo) -> String {
    let labels = Labels::for_language(&site.language);
    let meta = PageMetadata::not_found(site);

    let body = format!(
        "<header><a href=\"/\">{}</a></header>\n<main>\n<h1>{}</h1>\n<p>{}</p>\n</main>",
        text(labels.back_to_articles),
        text(labels.not_found_title),
        text(labels.not_found_text)
    );

    document(site, &meta, None, &body)
}

fn push_keywords(out: &mut String, keywords: &[String], prefix: &str) {
    if keywords.is_empty() {
        return;
    }
    out.push_str("<ul class=\"keywords\">");
    for keyword in keywords {
        out.push_str(&format!("<li>{}{}</li>", prefix, text(keyword)));
    }
    out.push_str("</ul>\n");
}

/// Wrap a body in the document shell
fn document(site: &SiteInfo, meta: &PageMetadata, json_ld: Option<&str>, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", attr(&site.language)));
    out.push_str("<head>\n");
    out.push_str(&meta.to_head_html());
    if let Some(script) = json_ld {
        out.push_str(script);
        out.push('\n');
    }
    out.push_str("</head>\n<body>\n");
    out.push_str(body);
    out.push_str("\n</body>\n</html>\n");
    out
}
