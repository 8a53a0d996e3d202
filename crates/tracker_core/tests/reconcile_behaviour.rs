use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tracker_core::{
    reconcile, History, RawObservation, ReconcileEvent, ReconcileSummary, ScorePoint, TextEntry,
};

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

fn entry(name: &str, url: &str, points: &[(u32, u32)]) -> TextEntry {
    TextEntry {
        name: name.to_string(),
        url: url.to_string(),
        score: points
            .iter()
            .map(|&(day, p)| ScorePoint::new(at(day), p))
            .collect(),
    }
}

#[test]
fn new_entry_is_created_from_first_observation() {
    let (history, events) = reconcile(
        History::new(),
        &[RawObservation::new("A", "u1", 5)],
        at(1),
    );

    assert_eq!(history.entries(), &[entry("A", "u1", &[(1, 5)])]);
    assert_eq!(
        events,
        vec![ReconcileEvent::New {
            name: "A".to_string(),
            points: 5
        }]
    );
}

#[test]
fn changed_points_append_exactly_one_point() {
    let history = History::from_entries(vec![entry("A", "u1", &[(1, 5)])]);

    let (next, events) = reconcile(history, &[RawObservation::new("A", "u1", 7)], at(2));

    assert_eq!(next.entries(), &[entry("A", "u1", &[(1, 5), (2, 7)])]);
    assert_eq!(
        events,
        vec![ReconcileEvent::Changed {
            name: "A".to_string(),
            before: Some(5),
            after: 7
        }]
    );
}

#[test]
fn equal_points_do_not_append() {
    let history = History::from_entries(vec![entry("A", "u1", &[(1, 5)])]);

    let (next, events) = reconcile(
        history.clone(),
        &[RawObservation::new("A", "u1", 5)],
        at(2),
    );

    assert_eq!(next, history);
    assert_eq!(
        events,
        vec![ReconcileEvent::Unchanged {
            name: "A".to_string(),
            points: 5
        }]
    );
}

#[test]
fn reconciling_twice_is_idempotent() {
    let observations = vec![
        RawObservation::new("A", "u1", 5),
        RawObservation::new("B", "u2", 3),
        RawObservation::new("C", "", 8),
    ];

    let (first, _) = reconcile(History::new(), &observations, at(1));
    let (second, events) = reconcile(first.clone(), &observations, at(2));

    assert_eq!(second, first);
    let summary = ReconcileSummary::from_events(&events);
    assert_eq!(summary.unchanged, 3);
    assert_eq!(summary.new + summary.changed, 0);
}

#[test]
fn history_never_shrinks() {
    let history = History::from_entries(vec![
        entry("Gone", "u-gone", &[(1, 10)]),
        entry("Stays", "u-stays", &[(1, 1)]),
    ]);

    let (next, _) = reconcile(
        history.clone(),
        &[
            RawObservation::new("Stays", "u-stays", 2),
            RawObservation::new("Fresh", "u-fresh", 4),
        ],
        at(2),
    );

    assert_eq!(next.len(), 3);
    for before in history.entries() {
        let after = next.find(before.identity_key()).expect("entry retained");
        assert!(after.score.len() >= before.score.len());
        assert_eq!(&after.score[..before.score.len()], &before.score[..]);
    }
    assert_eq!(
        next.find("u-gone").unwrap(),
        &entry("Gone", "u-gone", &[(1, 10)])
    );
}

#[test]
fn url_wins_over_name_for_identity() {
    let (history, events) = reconcile(
        History::new(),
        &[
            RawObservation::new("Original title", "u1", 5),
            RawObservation::new("Renamed title", "u1", 6),
        ],
        at(1),
    );

    assert_eq!(history.len(), 1);
    // The stored name stays the one first seen.
    assert_eq!(history.entries()[0].name, "Original title");
    assert_eq!(history.entries()[0].score.len(), 2);
    assert_eq!(events[1].name(), "Original title");
}

#[test]
fn empty_urls_collapse_by_name() {
    let (history, _) = reconcile(
        History::new(),
        &[
            RawObservation::new("Same", "", 1),
            RawObservation::new("Same", "", 1),
            RawObservation::new("Other", "", 1),
        ],
        at(1),
    );

    assert_eq!(history.len(), 2);
    assert_eq!(history.find("Same").unwrap().score.len(), 1);
}

#[test]
fn existing_name_is_not_refreshed_from_observation() {
    let history = History::from_entries(vec![entry("Old name", "u1", &[(1, 5)])]);

    let (next, _) = reconcile(history, &[RawObservation::new("New name", "u1", 9)], at(2));

    assert_eq!(next.entries()[0].name, "Old name");
    assert_eq!(next.entries()[0].url, "u1");
}

#[test]
fn output_is_sorted_case_insensitively() {
    let observations = [
        RawObservation::new("delta", "u4", 1),
        RawObservation::new("Bravo", "u2", 1),
        RawObservation::new("charlie", "u3", 1),
        RawObservation::new("alpha", "u1", 1),
    ];
    let mut reversed = observations.to_vec();
    reversed.reverse();

    let (forward, _) = reconcile(History::new(), &observations, at(1));
    let (backward, _) = reconcile(History::new(), &reversed, at(1));

    let names: Vec<_> = forward.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "Bravo", "charlie", "delta"]);
    assert_eq!(forward, backward);
}

#[test]
fn umlaut_names_sort_next_to_their_base_letter() {
    let observations = [
        RawObservation::new("Zebra", "u1", 1),
        RawObservation::new("Äpfel", "u2", 1),
        RawObservation::new("Birne", "u3", 1),
        RawObservation::new("Österreich", "u4", 1),
    ];

    let (history, _) = reconcile(History::new(), &observations, at(1));

    let names: Vec<_> = history.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Äpfel", "Birne", "Österreich", "Zebra"]);
}
