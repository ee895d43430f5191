//! HTML fallback: pull headline anchors from known listing pages when
//! every feed comes back empty.

use scraper::{Html, Selector};

use crate::error::{IngestError, IngestResult};

/// A listing page and the CSS selector matching its headline anchors.
pub struct FallbackPage {
    pub url: &'static str,
    pub selector: &'static str,
}

/// Listing pages scraped when the RSS sources yield nothing.
pub const FALLBACK_PAGES: &[FallbackPage] = &[
    FallbackPage {
        url: "https://www.gov.br/agricultura/pt-br/assuntos/noticias",
        selector: "a[href*='/assuntos/noticias/']",
    },
    FallbackPage {
        url: "https://www.embrapa.br/busca-de-noticias",
        selector: "a.nome-noticia, a.card-title, h3 a",
    },
];

/// Anchors considered per page.
const MAX_ANCHORS: usize = 25;

/// Extract (title, link) pairs from a listing page.
///
/// Keeps at most [`MAX_ANCHORS`] matches with non-empty text and an
/// absolute http(s) href. Relative links are dropped: without a resolved
/// base they cannot serve as the signal's identity.
pub fn extract_headlines(html: &str, selector: &str) -> IngestResult<Vec<(String, String)>> {
    let selector = Selector::parse(selector)
        .map_err(|e| IngestError::Scrape(format!("invalid selector: {e}")))?;
    let document = Html::parse_document(html);

    let mut headlines = Vec::new();
    for anchor in document.select(&selector).take(MAX_ANCHORS) {
        let title = crate::sources::normalize_whitespace(&anchor.text().collect::<String>());
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !title.is_empty() && href.starts_with("http") {
            headlines.push((title, href.to_string()));
        }
    }
    Ok(headlines)
}
