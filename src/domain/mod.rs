use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar entry as delivered by the upstream scheduling export,
/// after wire-format parsing but before any cleanup.
///
/// Text fields still carry the upstream backslash-escaping; `status` is the
/// raw upstream token. Timestamps are timezone-resolved by the upstream
/// parser, so comparing them compares instants, not string encodings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Opaque stable identifier from the upstream system
    pub uid: String,
    /// Free-text title, upstream-escaped
    pub summary: String,
    /// Free-text body, upstream-escaped, possibly empty
    pub description: String,
    /// Free-text location string, possibly empty, upstream-escaped
    pub location: String,
    pub dt_start: DateTime<Utc>,
    pub dt_end: DateTime<Utc>,
    /// Last upstream modification time
    pub dt_stamp: DateTime<Utc>,
    /// Raw status token, one of a small known vocabulary or unknown
    pub status: String,
}

/// A cleaned calendar entry, ready for the external renderer.
///
/// `description` preserves provenance: the original title, and if the
/// location was rewritten, the original raw location line above it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedEvent {
    pub uid: String,
    /// Cleaned, abbreviated title
    pub summary: String,
    pub description: String,
    /// Either the untouched raw location or "room, street address"
    pub location: String,
    pub dt_start: DateTime<Utc>,
    pub dt_end: DateTime<Utc>,
    pub dt_stamp: DateTime<Utc>,
    pub status: EventStatus,
}

/// Event status after mapping the raw upstream token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventStatus {
    Confirmed,
    Cancelled,
    Tentative,
}
