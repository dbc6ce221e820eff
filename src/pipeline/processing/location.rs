use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::BuildingDirectory;

/// Matches the structured part of a raw location string, e.g.
/// "N1190, Seminarraum 5 (5501.01.190)": the room label before the first
/// comma, and the 4-digit building code inside the dotted room id
/// (floor is two digits or EG/UG/DG/Z<d>/U<d>).
static RE_ROOM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?),.*(\d{4})\.(?:\d\d|EG|UG|DG|Z\d|U\d)\.\d+").unwrap());

/// A location successfully rewritten to a street address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// "<room-label>, <street address>"
    pub location: String,
    /// The architect room label, e.g. "N1190"
    pub room: String,
}

/// Resolve a coded room string into "room, street address".
///
/// The building code is the only structured, reliable substring in the
/// otherwise free-text field, so anything that does not match the pattern,
/// or carries an unknown code, is left for the caller to pass through
/// verbatim (`None`).
pub fn resolve_location(location: &str, buildings: &BuildingDirectory) -> Option<ResolvedLocation> {
    let caps = RE_ROOM.captures(location)?;
    let room = caps.get(1)?.as_str();
    let code = caps.get(2)?.as_str();
    let address = buildings.address(code)?;
    Some(ResolvedLocation {
        location: format!("{room}, {address}"),
        room: room.to_string(),
    })
}
