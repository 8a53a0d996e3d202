use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tracker_core::{History, ScorePoint, TextEntry};

#[test]
fn history_serializes_as_plain_array_with_stable_field_order() {
    let history = History::from_entries(vec![TextEntry {
        name: "Item".to_string(),
        url: "https://example.com/item".to_string(),
        score: vec![ScorePoint::new(
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            42,
        )],
    }]);

    let json = serde_json::to_string(&history).unwrap();

    assert_eq!(
        json,
        r#"[{"name":"Item","url":"https://example.com/item","score":[{"timestamp":"2024-01-02T03:04:05Z","points":42}]}]"#
    );
}

#[test]
fn history_reads_offset_timestamps_and_missing_score() {
    let json = r#"[
        {"name": "A", "url": "", "score": [{"timestamp": "2024-01-02T05:04:05+02:00", "points": 1}]},
        {"name": "B", "url": "u2"}
    ]"#;

    let history: History = serde_json::from_str(json).unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(
        history.entries()[0].score[0].timestamp,
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    );
    assert!(history.entries()[1].score.is_empty());
}
