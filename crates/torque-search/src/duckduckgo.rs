//! DuckDuckGo HTML result page parser.
//!
//! The class names below are an external contract owned by DuckDuckGo.  When
//! their markup changes, this module is the only thing that has to follow.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{Result, SearchError};
use crate::types::SearchResult;

/// One organic result block.
pub const RESULT_BLOCK_SELECTOR: &str = "div.result__body";

/// The title link inside a block; its `href` is the result URL.
pub const TITLE_SELECTOR: &str = "a.result__a";

/// The optional excerpt inside a block.
pub const SNIPPET_SELECTOR: &str = ".result__snippet";

/// Parse a result page into at most `max_results` hits, in page order.
///
/// Blocks without a title link are skipped.  Malformed markup never fails:
/// the HTML parser recovers and the page simply yields fewer hits.
pub fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchResult>> {
    let block_sel = selector(RESULT_BLOCK_SELECTOR)?;
    let title_sel = selector(TITLE_SELECTOR)?;
    let snippet_sel = selector(SNIPPET_SELECTOR)?;

    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for block in document.select(&block_sel) {
        if results.len() >= max_results {
            break;
        }

        let Some(link) = block.select(&title_sel).next() else {
            continue;
        };

        let snippet = block
            .select(&snippet_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(SearchResult {
            title: element_text(link),
            url: link.value().attr("href").map(clean_ddg_url).unwrap_or_default(),
            snippet,
        });
    }

    Ok(results)
}

/// Unwrap DuckDuckGo redirect links to their destination.
///
/// `//duckduckgo.com/l/?uddg=<encoded>&rut=...` becomes the decoded `uddg`
/// target; other protocol-relative links get an `https:` scheme.
pub fn clean_ddg_url(href: &str) -> String {
    let href = href.trim();
    let absolute = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_owned()
    };

    if absolute.contains("duckduckgo.com/l/")
        && let Ok(parsed) = Url::parse(&absolute)
        && let Some((_, target)) = parsed.query_pairs().find(|(key, _)| key == "uddg")
    {
        return target.into_owned();
    }

    absolute
}

/// Text content of an element with runs of whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SearchError::Selector {
        selector: css.to_owned(),
        reason: e.to_string(),
    })
}
