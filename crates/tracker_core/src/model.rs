use chrono::{DateTime, Utc};
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use serde::{Deserialize, Serialize};

/// One recorded reading of an entry's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub timestamp: DateTime<Utc>,
    pub points: u32,
}

impl ScorePoint {
    pub fn new(timestamp: DateTime<Utc>, points: u32) -> Self {
        Self { timestamp, points }
    }
}

/// A tracked item and its append-only score timeline (oldest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub score: Vec<ScorePoint>,
}

impl TextEntry {
    pub fn identity_key(&self) -> &str {
        identity_key(&self.name, &self.url)
    }

    pub fn last_points(&self) -> Option<u32> {
        self.score.last().map(|point| point.points)
    }
}

/// A single scrape-time reading, before it is merged into the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObservation {
    pub name: String,
    pub url: String,
    pub points: u32,
}

impl RawObservation {
    pub fn new(name: impl Into<String>, url: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            points,
        }
    }

    pub fn identity_key(&self) -> &str {
        identity_key(&self.name, &self.url)
    }
}

/// The URL when present, otherwise the name.
pub fn identity_key<'a>(name: &'a str, url: &'a str) -> &'a str {
    if url.is_empty() {
        name
    } else {
        url
    }
}

/// The full persisted set of tracked entries.
///
/// Serializes as a bare JSON array of entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<TextEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<TextEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TextEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TextEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&TextEntry> {
        self.entries.iter().find(|entry| entry.identity_key() == key)
    }

    /// Orders entries by name using root-locale collation at secondary
    /// strength, so case is ignored and accented letters sort next to their
    /// base letter.
    ///
    /// Ties fall back to the exact name and then the identity key so the
    /// order never depends on how the entries were collected.
    pub fn sort_by_name(&mut self) {
        let collator = name_collator();
        self.entries.sort_by(|a, b| {
            collator
                .compare(&a.name, &b.name)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.identity_key().cmp(b.identity_key()))
        });
    }
}

fn name_collator() -> CollatorBorrowed<'static> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(Default::default(), options).expect("compiled root collation data")
}

impl FromIterator<TextEntry> for History {
    fn from_iter<I: IntoIterator<Item = TextEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
