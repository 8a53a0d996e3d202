use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{History, RawObservation, ReconcileEvent, ScorePoint, TextEntry};

/// Pure merge: folds a batch of observations into the history and returns the
/// updated history together with one event per observation.
///
/// Scores only ever grow. Entries missing from `observations` are kept as
/// they are, and the name/url of an existing entry is never rewritten.
pub fn reconcile(
    history: History,
    observations: &[RawObservation],
    observed_at: DateTime<Utc>,
) -> (History, Vec<ReconcileEvent>) {
    // Later duplicates in a loaded history overwrite earlier ones.
    let mut by_key: HashMap<String, TextEntry> = history
        .into_entries()
        .into_iter()
        .map(|entry| (entry.identity_key().to_owned(), entry))
        .collect();

    let mut events = Vec::with_capacity(observations.len());
    for observation in observations {
        let event = match by_key.get_mut(observation.identity_key()) {
            None => {
                by_key.insert(
                    observation.identity_key().to_owned(),
                    TextEntry {
                        name: observation.name.clone(),
                        url: observation.url.clone(),
                        score: vec![ScorePoint::new(observed_at, observation.points)],
                    },
                );
                ReconcileEvent::New {
                    name: observation.name.clone(),
                    points: observation.points,
                }
            }
            Some(entry) => match entry.last_points() {
                Some(last) if last == observation.points => ReconcileEvent::Unchanged {
                    name: entry.name.clone(),
                    points: last,
                },
                before => {
                    entry
                        .score
                        .push(ScorePoint::new(observed_at, observation.points));
                    ReconcileEvent::Changed {
                        name: entry.name.clone(),
                        before,
                        after: observation.points,
                    }
                }
            },
        };
        events.push(event);
    }

    let mut merged: History = by_key.into_values().collect();
    merged.sort_by_name();
    (merged, events)
}
