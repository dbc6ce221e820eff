use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};

use campus_cal_cleaner::{process_events, CleanerConfig, EventStatus, RawEvent};

fn ts(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 16, hour, min, 0).unwrap()
}

fn raw_event(uid: &str, summary: &str, location: &str, description: &str) -> RawEvent {
    RawEvent {
        uid: uid.to_string(),
        summary: summary.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        dt_start: ts(10, 0),
        dt_end: ts(12, 0),
        dt_stamp: ts(0, 0),
        status: "CONFIRMED".to_string(),
    }
}

fn test_config() -> Result<CleanerConfig> {
    let config = CleanerConfig::from_json_strs(
        r#"{
            "Einführung in die Theoretische Informatik": "THEO",
            "Diskrete Strukturen": "DS"
        }"#,
        r#"{
            "5606": "Boltzmannstraße 3, 85748 Garching bei München",
            "5510": "Boltzmannstraße 15, 85748 Garching bei München"
        }"#,
    )?;
    Ok(config)
}

#[test]
fn test_full_pipeline_merges_and_cleans() -> Result<()> {
    let config = test_config()?;

    let events = vec![
        raw_event(
            "a@campus",
            "Einführung in die Theoretische Informatik (IN0011) Vorlesung",
            "MI HS1, Hörsaal 1 (5606.EG.011)",
            "Woche 1",
        ),
        raw_event(
            "b@campus",
            "Einführung in die Theoretische Informatik (IN0011) Vorlesung",
            "MW 2001, Rudolf-Diesel-Hörsaal (5510.02.001)",
            "Videoübertragung aus MI HS1",
        ),
    ];

    let normalized = process_events(events, &config);

    assert_eq!(normalized.len(), 1);
    let event = &normalized[0];

    assert_eq!(event.summary, "THEO");
    // The merged location starts with the in-person room, so the resolver
    // rewrites it to that room's street address
    assert_eq!(
        event.location,
        "MI HS1, Boltzmannstraße 3, 85748 Garching bei München"
    );
    // Both rooms survive in the provenance trail, livestream room included
    assert_eq!(
        event.description,
        "MI HS1, Hörsaal 1 (5606.EG.011)\nMW 2001, Rudolf-Diesel-Hörsaal (5510.02.001)\n\
         Einführung in die Theoretische Informatik (IN0011) Vorlesung\nWoche 1"
    );
    assert_eq!(event.status, EventStatus::Confirmed);
    Ok(())
}

#[test]
fn test_full_pipeline_provenance_layers() -> Result<()> {
    let config = test_config()?;

    let events = vec![raw_event(
        "c@campus",
        "Diskrete Strukturen (IN0015)",
        "MI HS1, Hörsaal 1 (5606.EG.011)",
        "Blatt 3 besprechen",
    )];

    let normalized = process_events(events, &config);

    assert_eq!(normalized.len(), 1);
    let event = &normalized[0];
    assert_eq!(event.summary, "DS");
    assert_eq!(
        event.location,
        "MI HS1, Boltzmannstraße 3, 85748 Garching bei München"
    );
    // Old location above the original title above the original body
    assert_eq!(
        event.description,
        "MI HS1, Hörsaal 1 (5606.EG.011)\nDiskrete Strukturen (IN0015)\nBlatt 3 besprechen"
    );
    Ok(())
}

#[test]
fn test_full_pipeline_distinct_events_survive() -> Result<()> {
    let config = test_config()?;

    let mut early = raw_event("d@campus", "Diskrete Strukturen (IN0015)", "Raum 1", "");
    early.dt_start = ts(8, 0);
    let late = raw_event("e@campus", "Diskrete Strukturen (IN0015)", "Raum 2", "");

    let normalized = process_events(vec![late, early], &config);

    assert_eq!(normalized.len(), 2);
    // Output follows the sort order, not input order
    assert_eq!(normalized[0].uid, "d@campus");
    assert_eq!(normalized[1].uid, "e@campus");
    Ok(())
}

#[test]
fn test_full_pipeline_empty_batch() -> Result<()> {
    let config = test_config()?;
    assert!(process_events(Vec::new(), &config).is_empty());
    Ok(())
}

#[test]
fn test_config_loading_from_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let courses = dir.path().join("courses.json");
    let buildings = dir.path().join("buildings.json");
    std::fs::write(&courses, r#"{"Analysis für Informatik": "Analysis"}"#)?;
    std::fs::write(&buildings, r#"{"0101": "Arcisstraße 21, 80333 München"}"#)?;

    let config = CleanerConfig::from_files(&courses, &buildings)?;
    let events = vec![raw_event(
        "f@campus",
        "Analysis für Informatik (MA0902)",
        "N1190, Seminarraum (0101.02.033)",
        "",
    )];

    let normalized = process_events(events, &config);
    assert_eq!(normalized[0].summary, "Analysis");
    assert_eq!(normalized[0].location, "N1190, Arcisstraße 21, 80333 München");
    Ok(())
}
