use std::fs;
use std::path::Path;

use otawatch_core::Manifest;
use watch_logging::watch_warn;

use crate::persist::atomic_write;
use crate::types::SyncError;

/// Reads the persisted manifest.
///
/// A missing file is the normal first-run case; an unreadable or malformed
/// file degrades to the empty manifest with a diagnostic. Neither is fatal —
/// the run proceeds as if nothing had been processed yet.
pub fn load_manifest(path: &Path) -> Manifest {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Manifest::empty();
        }
        Err(err) => {
            watch_warn!("failed to read manifest {:?}: {}", path, err);
            return Manifest::empty();
        }
    };

    match serde_json::from_str(&text) {
        Ok(manifest) => manifest,
        Err(err) => {
            watch_warn!("malformed manifest {:?}, starting empty: {}", path, err);
            Manifest::empty()
        }
    }
}

/// Writes the manifest to every mirror path from one serialization, so all
/// mirrors stay byte-identical. Each write is atomic.
pub fn save_manifest(manifest: &Manifest, paths: &[impl AsRef<Path>]) -> Result<(), SyncError> {
    let json = serde_json::to_string_pretty(manifest)?;
    for path in paths {
        let path = path.as_ref();
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let dir = dir.unwrap_or_else(|| Path::new("."));
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| SyncError::BadManifestPath(path.display().to_string()))?;
        atomic_write(dir, filename, json.as_bytes())?;
    }
    Ok(())
}
