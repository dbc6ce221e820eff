//! Event normalization core for a university calendar proxy.
//!
//! Takes the raw events of an upstream academic scheduling export and
//! produces a cleaned, deduplicated set ready for re-export as a calendar
//! feed: abbreviated titles, coded room strings resolved to street
//! addresses, mapped statuses, and parallel-site duplicates merged into one
//! entry (with a livestream-aware merge policy).
//!
//! Fetching the feed, parsing the wire format and rendering the output are
//! the host's job; this crate operates purely on in-memory event records and
//! two injected lookup tables.

pub mod common;
pub mod config;
pub mod domain;
pub mod observability;
pub mod pipeline;

pub use common::error::{CleanerError, Result};
pub use config::{BuildingDirectory, CleanerConfig, Replacement, ReplacementTable};
pub use domain::{EventStatus, NormalizedEvent, RawEvent};
pub use pipeline::process_events;
pub use pipeline::processing::cleaner::EventCleaner;
pub use pipeline::processing::dedupe::{dedupe, LIVESTREAM_MARKER};
