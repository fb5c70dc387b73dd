//! Otawatch engine: IO pipeline for one synchronization run.
mod digest;
mod extract;
mod fetch;
mod index;
mod persist;
mod store;
mod sync;
mod types;

pub use digest::sha256_hex;
pub use extract::{RowExtractor, ScraperRowExtractor};
pub use fetch::{ArtifactFetcher, FetchSettings, PageFetcher, ReqwestFetcher};
pub use index::render_index;
pub use persist::{atomic_write, ensure_dir, PersistError};
pub use store::{load_manifest, save_manifest};
pub use sync::{
    run_sync, run_sync_blocking, SyncSettings, ARTIFACT_SUBDIR, INDEX_FILENAME, MANIFEST_FILENAME,
};
pub use types::{DownloadedArtifact, FailureKind, FetchError, RunOutcome, SyncError};
