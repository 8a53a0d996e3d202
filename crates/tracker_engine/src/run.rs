use chrono::{DateTime, Utc};
use tracker_core::{reconcile, ReconcileSummary};
use tracker_logging::{tracker_debug, tracker_info};

use crate::config::TrackerConfig;
use crate::decode::decode_page;
use crate::extract::{Extractor, ListingExtractor};
use crate::fetch::Fetcher;
use crate::store::HistoryStore;
use crate::{RunError, RunReport};

/// One fetch, extract, reconcile and save cycle.
///
/// Fetch and save failures abort the run before anything is written;
/// everything else degrades with a logged warning.
pub async fn run_once(
    config: &TrackerConfig,
    fetcher: &dyn Fetcher,
    started_at: DateTime<Utc>,
) -> Result<RunReport, RunError> {
    let extractor = ListingExtractor::new(&config.selectors)?;
    let store = HistoryStore::new(config.output_path.clone());

    tracker_info!("Fetching {}", config.page_url);
    let fetched = fetcher.fetch(&config.page_url).await?;
    tracker_debug!(
        "Fetched {} bytes from {}",
        fetched.metadata.byte_len,
        fetched.metadata.final_url
    );

    let page = decode_page(&fetched.bytes, fetched.metadata.content_type.as_deref());
    let observations = extractor.extract(&page.html, &fetched.metadata.final_url);
    tracker_info!("Found {} items", observations.len());

    let history = store.load();
    let (history, events) = reconcile(history, &observations, started_at);
    for event in &events {
        tracker_info!("{event}");
    }

    let saved_to = store.save(&history)?;
    let summary = ReconcileSummary::from_events(&events);
    tracker_info!(
        "Saved {} entries to {} ({} new, {} changed, {} unchanged)",
        history.len(),
        saved_to.display(),
        summary.new,
        summary.changed,
        summary.unchanged
    );

    Ok(RunReport {
        observed: observations.len(),
        summary,
        entry_count: history.len(),
        saved_to,
    })
}

