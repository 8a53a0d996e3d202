//! Tracker engine: fetch, extraction, history storage and the run cycle.
mod config;
mod decode;
mod extract;
mod fetch;
mod persist;
mod points;
mod run;
mod store;
mod types;

pub use config::{
    default_output_path, ConfigError, SelectorSettings, TrackerConfig, DEFAULT_OUTPUT_DIR,
    DEFAULT_PAGE_URL,
};
pub use decode::{decode_page, DecodedPage};
pub use extract::{normalize_whitespace, resolve_url, Extractor, ListingExtractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use points::{
    default_strategies, extract_points, ClassTokenStrategy, MarkupScanStrategy, PointsStrategy,
    ScoreLabelStrategy,
};
pub use run::run_once;
pub use store::HistoryStore;
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, RunError, RunReport};
