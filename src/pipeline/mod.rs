use tracing::info;

use crate::config::CleanerConfig;
use crate::domain::{NormalizedEvent, RawEvent};
use crate::pipeline::processing::cleaner::EventCleaner;
use crate::pipeline::processing::dedupe::dedupe;

pub mod processing;

/// Run one batch of raw events through the whole pipeline: merge parallel-site
/// duplicates first (on raw fields), then clean each surviving event.
///
/// Synchronous and infallible; an empty batch yields an empty batch. Fetching
/// the upstream feed and rendering the result belong to the caller.
pub fn process_events(events: Vec<RawEvent>, config: &CleanerConfig) -> Vec<NormalizedEvent> {
    let total = events.len();
    let surviving = dedupe(events);
    let merged = total - surviving.len();

    let cleaner = EventCleaner::new(config.clone());
    let normalized: Vec<NormalizedEvent> = surviving.iter().map(|e| cleaner.clean(e)).collect();

    info!(
        "Processed {} events: {} merged as duplicates, {} cleaned",
        total,
        merged,
        normalized.len()
    );
    normalized
}
