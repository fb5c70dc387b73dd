use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    /// The artifact body completed with zero bytes.
    EmptyBody,
    /// Writing the artifact to local storage failed.
    Storage,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::EmptyBody => write!(f, "empty body"),
            FailureKind::Storage => write!(f, "storage error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Transport failure from either the page or the artifact fetcher. Always
/// fatal for the run it happens in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A fully downloaded, hashed artifact sitting at its final path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedArtifact {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub sha256: String,
}

/// Terminal outcome of one run. Every variant is a success exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No row on the page matched the device filter.
    NoCandidates,
    /// Rows matched but none passed the region criterion.
    NoQualifying,
    /// The selected release was already recorded on a prior run.
    AlreadyProcessed { build: String },
    /// A new release was acquired and published.
    Updated { build: String, filename: String },
}

/// Fatal failure of one run. The manifest is untouched in every case.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("persist failed: {0}")]
    Persist(#[from] PersistError),
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot derive an artifact filename from {0}")]
    BadDownloadUrl(String),
    #[error("manifest path has no usable file name: {0}")]
    BadManifestPath(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}
