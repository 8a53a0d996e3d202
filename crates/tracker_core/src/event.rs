use std::fmt;

/// Classification of one processed observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileEvent {
    /// First time this identity key was seen.
    New { name: String, points: u32 },
    /// Points differ from the last recorded value; a point was appended.
    /// `before` is `None` when the stored score was empty.
    Changed {
        name: String,
        before: Option<u32>,
        after: u32,
    },
    /// Points equal the last recorded value; nothing was appended.
    Unchanged { name: String, points: u32 },
}

impl ReconcileEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ReconcileEvent::New { .. } => EventKind::New,
            ReconcileEvent::Changed { .. } => EventKind::Changed,
            ReconcileEvent::Unchanged { .. } => EventKind::Unchanged,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ReconcileEvent::New { name, .. }
            | ReconcileEvent::Changed { name, .. }
            | ReconcileEvent::Unchanged { name, .. } => name,
        }
    }
}

impl fmt::Display for ReconcileEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileEvent::New { name, points } => write!(f, "new: {name} ({points})"),
            ReconcileEvent::Changed {
                name,
                before: Some(before),
                after,
            } => write!(f, "changed: {name} ({before} -> {after})"),
            ReconcileEvent::Changed {
                name,
                before: None,
                after,
            } => write!(f, "changed: {name} (none -> {after})"),
            ReconcileEvent::Unchanged { name, points } => {
                write!(f, "unchanged: {name} ({points})")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    New,
    Changed,
    Unchanged,
}

/// Event counts for one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileSummary {
    pub new: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl ReconcileSummary {
    pub fn from_events(events: &[ReconcileEvent]) -> Self {
        events.iter().fold(Self::default(), |mut summary, event| {
            match event.kind() {
                EventKind::New => summary.new += 1,
                EventKind::Changed => summary.changed += 1,
                EventKind::Unchanged => summary.unchanged += 1,
            }
            summary
        })
    }
}
