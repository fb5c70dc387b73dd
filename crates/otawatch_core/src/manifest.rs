use serde::{Deserialize, Serialize};

/// One processed release. Field names follow the persisted JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub build: String,
    /// ISO-8601 timestamp of the run that recorded this entry.
    pub timestamp: String,
    pub filename: String,
    pub relative_url: String,
    pub size_bytes: u64,
    /// Hex SHA-256 of the downloaded artifact.
    pub sha256: String,
    pub source_url: String,
    /// Hex SHA-256 of the vendor page the release was discovered on.
    pub source_sha256: String,
    pub changes: Vec<String>,
}

/// The persisted, append-only history of processed releases.
///
/// New entries are prepended, so `updates` is newest-first by construction
/// and `current_build` mirrors the head entry. Build uniqueness is enforced
/// by the synchronizer's idempotence check, not by this container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Manifest {
    pub updates: Vec<ManifestEntry>,
    pub current_build: String,
    pub last_updated: String,
}

impl Manifest {
    /// The state a first run, a missing file, or a corrupt file all start
    /// from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when `build` is the most recently recorded release.
    pub fn is_current(&self, build: &str) -> bool {
        self.current_build == build
    }

    /// Prepends a new release and updates the current-state pointers.
    pub fn record(&mut self, entry: ManifestEntry) {
        self.current_build = entry.build.clone();
        self.last_updated = entry.timestamp.clone();
        self.updates.insert(0, entry);
    }
}
