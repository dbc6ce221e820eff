use tracing::debug;

use crate::config::CleanerConfig;
use crate::domain::{NormalizedEvent, RawEvent};
use crate::pipeline::processing::location::resolve_location;
use crate::pipeline::processing::status::map_status;
use crate::pipeline::processing::summary::{normalize_summary, unescape};

/// Per-event cleanup: title abbreviation, location resolution and status
/// mapping, with the original title (and, on a location rewrite, the
/// original location) folded into the description as a provenance trail.
///
/// The lookup tables are injected at construction and never mutated, so one
/// cleaner can serve any number of events or threads.
pub struct EventCleaner {
    config: CleanerConfig,
}

impl EventCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    /// Produce exactly one normalized event per raw event. Cannot fail:
    /// every rewrite degrades to leaving the field unchanged.
    pub fn clean(&self, e: &RawEvent) -> NormalizedEvent {
        let summary = unescape(&e.summary);
        let raw_description = unescape(&e.description);
        let location = unescape(&e.location);

        // The abbreviated title loses information, so keep the original
        // above the upstream description.
        let mut description = format!("{summary}\n{raw_description}");

        let summary = normalize_summary(&e.summary, &self.config.replacements);

        let location = match resolve_location(&location, &self.config.buildings) {
            Some(resolved) => {
                debug!(uid = %e.uid, room = %resolved.room, "resolved location to street address");
                description = format!("{location}\n{description}");
                resolved.location
            }
            None => location,
        };

        NormalizedEvent {
            uid: e.uid.clone(),
            summary,
            description,
            location,
            dt_start: e.dt_start,
            dt_end: e.dt_end,
            dt_stamp: e.dt_stamp,
            status: map_status(&e.status),
        }
    }
}
