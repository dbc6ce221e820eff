use tracing::debug;

use crate::domain::RawEvent;

/// Description substring marking an event as the video-transmission copy of
/// an in-person lecture.
pub const LIVESTREAM_MARKER: &str = "Videoübertragung";

/// Collapse events that represent the same lecture taught in parallel at
/// multiple sites, keeping one entry whose location lists all rooms.
///
/// Runs before per-event cleaning, on raw fields. Events are duplicates of
/// each other when start time, end time and summary all match; locations are
/// expected to differ. The output is sorted by `(dt_start, summary)` with
/// merged-away entries removed.
pub fn dedupe(mut events: Vec<RawEvent>) -> Vec<RawEvent> {
    // Chronological first, title second, so duplicates become adjacent.
    events.sort_by(|a, b| {
        a.dt_start
            .cmp(&b.dt_start)
            .then_with(|| a.summary.cmp(&b.summary))
    });

    // Rebuild instead of deleting in place; the predecessor is always the
    // tail of the output. Merging only touches location/description, so the
    // duplicate check against an already-merged tail still compares the
    // original key fields.
    let mut merged: Vec<RawEvent> = Vec::with_capacity(events.len());
    for mut curr in events {
        let is_duplicate = merged.last().is_some_and(|prev| {
            prev.dt_start == curr.dt_start
                && prev.dt_end == curr.dt_end
                && prev.summary == curr.summary
        });

        if is_duplicate {
            if let Some(prev) = merged.pop() {
                if curr.description.contains(LIVESTREAM_MARKER) {
                    // The livestream copy survives, but its description is
                    // the transmission note; keep the in-person description
                    // and put the in-person room first.
                    debug!(uid = %curr.uid, summary = %curr.summary, "merging livestream duplicate");
                    curr.location = format!("{}\n{}", prev.location, curr.location);
                    curr.description = prev.description;
                } else {
                    debug!(uid = %curr.uid, summary = %curr.summary, "merging duplicate");
                    curr.location = format!("{}\n{}", curr.location, prev.location);
                }
            }
        }
        merged.push(curr);
    }
    merged
}
