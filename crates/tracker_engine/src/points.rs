use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};
use tracker_logging::tracker_debug;

static LABEL_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,5}").expect("valid regex"));
static CLASS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^pt-([0-9]+)$").expect("valid regex"));
static MARKUP_POINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[(\s]([0-9]+)\s*(?:points?\b|pts?\b|</|\))").expect("valid regex")
});

/// One way of reading an item's points. Returns `None` when it finds nothing.
pub trait PointsStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn points(&self, item: ElementRef<'_>) -> Option<u32>;
}

/// First 1-5 digit run in the text of a dedicated score label child.
#[derive(Debug, Clone)]
pub struct ScoreLabelStrategy {
    label: Selector,
}

impl ScoreLabelStrategy {
    pub fn new(label: Selector) -> Self {
        Self { label }
    }
}

impl PointsStrategy for ScoreLabelStrategy {
    fn name(&self) -> &'static str {
        "score-label"
    }

    fn points(&self, item: ElementRef<'_>) -> Option<u32> {
        let label = item.select(&self.label).next()?;
        let text: String = label.text().collect();
        LABEL_DIGITS.find(&text)?.as_str().parse().ok()
    }
}

/// A `pt-<digits>` class token on the item or any element inside it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassTokenStrategy;

impl PointsStrategy for ClassTokenStrategy {
    fn name(&self) -> &'static str {
        "class-token"
    }

    fn points(&self, item: ElementRef<'_>) -> Option<u32> {
        item.descendants()
            .filter_map(ElementRef::wrap)
            .flat_map(|element| element.value().classes())
            .find_map(|class| CLASS_TOKEN.captures(class)?.get(1)?.as_str().parse().ok())
    }
}

/// Scans the raw inner markup for e.g. `(12 pt)`, ` 12 points` or ` 12</span>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupScanStrategy;

impl PointsStrategy for MarkupScanStrategy {
    fn name(&self) -> &'static str {
        "markup-scan"
    }

    fn points(&self, item: ElementRef<'_>) -> Option<u32> {
        let markup = item.inner_html();
        MARKUP_POINTS
            .captures_iter(&markup)
            .find_map(|caps| caps.get(1)?.as_str().parse().ok())
    }
}

/// Label, then class token, then markup scan.
pub fn default_strategies(label: Selector) -> Vec<Box<dyn PointsStrategy>> {
    vec![
        Box::new(ScoreLabelStrategy::new(label)),
        Box::new(ClassTokenStrategy),
        Box::new(MarkupScanStrategy),
    ]
}

/// Tries each strategy in order; the first hit wins, otherwise 0.
pub fn extract_points(item: ElementRef<'_>, strategies: &[Box<dyn PointsStrategy>]) -> u32 {
    for strategy in strategies {
        if let Some(points) = strategy.points(item) {
            tracker_debug!("Points {} read by {}", points, strategy.name());
            return points;
        }
    }
    tracker_debug!("No points found; defaulting to 0");
    0
}
