use crate::domain::EventStatus;

/// Map a raw upstream status token onto the status enum.
///
/// Exact, case-sensitive matching; anything unknown (empty included)
/// defaults to confirmed. Never signals an error.
pub fn map_status(token: &str) -> EventStatus {
    match token {
        "CONFIRMED" => EventStatus::Confirmed,
        "CANCELLED" => EventStatus::Cancelled,
        "TENTATIVE" => EventStatus::Tentative,
        _ => EventStatus::Confirmed,
    }
}
