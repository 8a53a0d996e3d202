use scraper::{ElementRef, Html, Selector};
use tracker_core::RawObservation;
use tracker_logging::{tracker_debug, tracker_warn};
use url::Url;

use crate::config::{ConfigError, SelectorSettings};
use crate::points::{default_strategies, extract_points, PointsStrategy};

pub trait Extractor: Send + Sync {
    /// Reads the listing in document order.
    fn extract(&self, html: &str, base_url: &str) -> Vec<RawObservation>;
}

/// Listing extractor:
/// - items from the primary selector, or the fallback selector when it finds none
/// - items without an `a[href]` are skipped
/// - name from a title child, else the link text
/// - points from the first strategy that matches, else 0.
pub struct ListingExtractor {
    primary: Selector,
    fallback: Selector,
    title: Selector,
    link: Selector,
    primary_query: String,
    fallback_query: String,
    strategies: Vec<Box<dyn PointsStrategy>>,
}

impl ListingExtractor {
    pub fn new(settings: &SelectorSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            primary: compile("primary", &settings.primary)?,
            fallback: compile("fallback", &settings.fallback)?,
            title: compile("title", &settings.title)?,
            link: compile("link", "a[href]")?,
            primary_query: settings.primary.clone(),
            fallback_query: settings.fallback.clone(),
            strategies: default_strategies(compile("score_label", &settings.score_label)?),
        })
    }

    fn observe(&self, item: ElementRef<'_>, base: Option<&Url>) -> Option<RawObservation> {
        let Some(link) = self.locate_link(item) else {
            tracker_debug!("Skipping item without link");
            return None;
        };
        let href = link.value().attr("href").unwrap_or_default();

        let name = item
            .select(&self.title)
            .map(|title| normalize_whitespace(&element_text(title)))
            .find(|name| !name.is_empty())
            .unwrap_or_else(|| normalize_whitespace(&element_text(link)));
        let url = resolve_url(href, base);
        if name.is_empty() && url.is_empty() {
            return None;
        }

        let points = extract_points(item, &self.strategies);
        Some(RawObservation { name, url, points })
    }

    fn locate_link<'a>(&self, item: ElementRef<'a>) -> Option<ElementRef<'a>> {
        let element = item.value();
        if element.name().eq_ignore_ascii_case("a") && element.attr("href").is_some() {
            return Some(item);
        }
        item.select(&self.link).next()
    }
}

impl Extractor for ListingExtractor {
    fn extract(&self, html: &str, base_url: &str) -> Vec<RawObservation> {
        let doc = Html::parse_document(html);
        let base = Url::parse(base_url).ok();

        let mut items: Vec<ElementRef<'_>> = doc.select(&self.primary).collect();
        if items.is_empty() {
            tracker_warn!(
                "Selector {:?} matched no items; retrying with {:?}",
                self.primary_query,
                self.fallback_query
            );
            items = doc.select(&self.fallback).collect();
        }
        if items.is_empty() {
            tracker_warn!("No items found on page");
            return Vec::new();
        }

        items
            .into_iter()
            .filter_map(|item| self.observe(item, base.as_ref()))
            .collect()
    }
}

fn compile(field: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|err| ConfigError::InvalidSelector {
        field,
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Collapses whitespace runs to one space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves `href` against `base`; an href that cannot be resolved is kept verbatim.
pub fn resolve_url(href: &str, base: Option<&Url>) -> String {
    let trimmed = href.trim();
    if let Ok(url) = Url::parse(trimmed) {
        return url.into();
    }
    base.and_then(|base| base.join(trimmed).ok())
        .map(String::from)
        .unwrap_or_else(|| href.to_string())
}
