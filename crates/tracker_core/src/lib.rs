//! Tracker core: data model and the pure history reconciler.
mod event;
mod model;
mod reconcile;

pub use event::{EventKind, ReconcileEvent, ReconcileSummary};
pub use model::{identity_key, History, RawObservation, ScorePoint, TextEntry};
pub use reconcile::reconcile;
