use std::path::PathBuf;
use std::sync::Arc;

use otawatch_core::{plan_run, ManifestEntry, RunPlan, SelectionCriterion};
use watch_logging::watch_info;

use crate::digest::sha256_hex;
use crate::extract::RowExtractor;
use crate::fetch::{ArtifactFetcher, PageFetcher};
use crate::index::render_index;
use crate::persist::{atomic_write, ensure_dir};
use crate::store::{load_manifest, save_manifest};
use crate::types::{RunOutcome, SyncError};

pub const MANIFEST_FILENAME: &str = "updates.json";
pub const INDEX_FILENAME: &str = "index.html";
pub const ARTIFACT_SUBDIR: &str = "ota";

/// Everything one run needs, read once at process start.
#[derive(Clone)]
pub struct SyncSettings {
    pub page_url: String,
    /// Device filter token matched against row ids.
    pub device: String,
    /// Acknowledgement cookie sent with the page request, if the vendor
    /// requires one.
    pub ack_cookie: Option<String>,
    pub criterion: SelectionCriterion,
    /// Primary output directory: manifest, index and artifacts live here.
    pub output_dir: PathBuf,
    /// Extra directories the manifest is mirrored to, byte-identical.
    pub mirror_dirs: Vec<PathBuf>,
    /// Fixed changes annotation recorded with every new entry.
    pub changes: Vec<String>,
    /// Clock used for manifest timestamps, injected for testability.
    pub timestamp: Arc<dyn Fn() -> String + Send + Sync>,
}

/// One synchronization run:
/// fetch page, extract candidates, select, check identity, acquire, merge,
/// publish. Any fatal error leaves the manifest exactly as it was.
pub async fn run_sync(
    page_fetcher: &dyn PageFetcher,
    artifact_fetcher: &dyn ArtifactFetcher,
    extractor: &dyn RowExtractor,
    settings: &SyncSettings,
) -> Result<RunOutcome, SyncError> {
    let html = page_fetcher
        .fetch_page(&settings.page_url, settings.ack_cookie.as_deref())
        .await?;
    let page_sha256 = sha256_hex(html.as_bytes());

    let records = extractor.extract(&html, &settings.device);
    watch_info!(
        "extracted {} candidate row(s) for device {}",
        records.len(),
        settings.device
    );

    let manifest_path = settings.output_dir.join(MANIFEST_FILENAME);
    let mut manifest = load_manifest(&manifest_path);

    let record = match plan_run(&records, &settings.criterion, &manifest) {
        RunPlan::NoCandidates => {
            watch_info!("no candidates on page, nothing to do");
            return Ok(RunOutcome::NoCandidates);
        }
        RunPlan::NoQualifying => {
            watch_info!("no qualifying release for configured region, nothing to do");
            return Ok(RunOutcome::NoQualifying);
        }
        RunPlan::AlreadyProcessed { build } => {
            watch_info!("build {build} already processed");
            return Ok(RunOutcome::AlreadyProcessed { build });
        }
        RunPlan::Acquire { record } => record,
    };

    let build = record.build_id();
    let filename = record.canonical_file_name();
    if filename.is_empty() {
        return Err(SyncError::BadDownloadUrl(record.download_url.clone()));
    }
    watch_info!("new release {build}, acquiring {}", record.download_url);

    let artifact_dir = settings.output_dir.join(ARTIFACT_SUBDIR);
    ensure_dir(&artifact_dir)?;
    let artifact = artifact_fetcher
        .download(&record.download_url, &artifact_dir, &filename)
        .await?;

    let entry = ManifestEntry {
        build: build.clone(),
        timestamp: (settings.timestamp)(),
        filename: filename.clone(),
        relative_url: format!("{ARTIFACT_SUBDIR}/{filename}"),
        size_bytes: artifact.size_bytes,
        sha256: artifact.sha256,
        source_url: settings.page_url.clone(),
        source_sha256: page_sha256,
        changes: settings.changes.clone(),
    };
    manifest.record(entry);

    let mut manifest_paths = vec![manifest_path];
    manifest_paths.extend(
        settings
            .mirror_dirs
            .iter()
            .map(|dir| dir.join(MANIFEST_FILENAME)),
    );
    save_manifest(&manifest, &manifest_paths)?;

    let index = render_index(&manifest);
    atomic_write(&settings.output_dir, INDEX_FILENAME, index.as_bytes())?;

    watch_info!("recorded build {build} ({filename}, {} bytes)", artifact.size_bytes);
    Ok(RunOutcome::Updated { build, filename })
}

/// Blocking wrapper for callers without their own async runtime.
pub fn run_sync_blocking(
    page_fetcher: &dyn PageFetcher,
    artifact_fetcher: &dyn ArtifactFetcher,
    extractor: &dyn RowExtractor,
    settings: &SyncSettings,
) -> Result<RunOutcome, SyncError> {
    let runtime =
        tokio::runtime::Runtime::new().map_err(|err| SyncError::Runtime(err.to_string()))?;
    runtime.block_on(run_sync(page_fetcher, artifact_fetcher, extractor, settings))
}
