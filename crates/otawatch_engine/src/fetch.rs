use std::io::Write;
use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::digest::to_hex;
use crate::types::{DownloadedArtifact, FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    /// Total request timeout for the update page.
    pub page_timeout: Duration,
    /// Total request timeout for the artifact transfer. Firmware images are
    /// large, so this is generous.
    pub artifact_timeout: Duration,
    pub redirect_limit: usize,
    pub max_page_bytes: u64,
    pub allowed_page_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            page_timeout: Duration::from_secs(30),
            artifact_timeout: Duration::from_secs(60 * 60),
            redirect_limit: 5,
            max_page_bytes: 5 * 1024 * 1024,
            allowed_page_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
            ],
        }
    }
}

/// Retrieves the vendor update page as text.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str, ack_cookie: Option<&str>)
        -> Result<String, FetchError>;
}

/// Streams an artifact to `{dest_dir}/{filename}`, hashing as it goes.
#[async_trait::async_trait]
pub trait ArtifactFetcher: Send + Sync {
    async fn download(
        &self,
        url: &str,
        dest_dir: &Path,
        filename: &str,
    ) -> Result<DownloadedArtifact, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self, timeout: Duration) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(
                self.settings.redirect_limit,
            ))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_page_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_page_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_page(
        &self,
        url: &str,
        ack_cookie: Option<&str>,
    ) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client(self.settings.page_timeout)?;

        let mut request = client.get(parsed);
        if let Some(cookie) = ack_cookie {
            request = request.header(COOKIE, cookie);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(ct) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !self.is_page_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_page_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_page_bytes,
                        actual: Some(next_len),
                    },
                    "page too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait::async_trait]
impl ArtifactFetcher for ReqwestFetcher {
    async fn download(
        &self,
        url: &str,
        dest_dir: &Path,
        filename: &str,
    ) -> Result<DownloadedArtifact, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client(self.settings.artifact_timeout)?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // Stream to a temp file in the destination directory; the temp file
        // is deleted on drop, so a failed transfer leaves nothing behind.
        let mut tmp = NamedTempFile::new_in(dest_dir)
            .map_err(|err| FetchError::new(FailureKind::Storage, err.to_string()))?;
        let mut hasher = Sha256::new();
        let mut size_bytes: u64 = 0;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            hasher.update(&chunk);
            size_bytes += chunk.len() as u64;
            tmp.write_all(&chunk)
                .map_err(|err| FetchError::new(FailureKind::Storage, err.to_string()))?;
        }

        if size_bytes == 0 {
            return Err(FetchError::new(FailureKind::EmptyBody, "zero-length body"));
        }

        tmp.flush()
            .and_then(|_| tmp.as_file_mut().sync_all())
            .map_err(|err| FetchError::new(FailureKind::Storage, err.to_string()))?;

        let target = dest_dir.join(filename);
        if target.exists() {
            std::fs::remove_file(&target)
                .map_err(|err| FetchError::new(FailureKind::Storage, err.to_string()))?;
        }
        tmp.persist(&target)
            .map_err(|err| FetchError::new(FailureKind::Storage, err.error.to_string()))?;

        Ok(DownloadedArtifact {
            path: target,
            size_bytes,
            sha256: to_hex(&hasher.finalize()),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
