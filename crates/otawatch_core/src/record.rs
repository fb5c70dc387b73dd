use crate::filename::{canonical_file_name, raw_file_name};

/// The parsed text of a row's version cell, before it is joined with the
/// row's download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCell {
    pub android_version: String,
    pub build_version: String,
    pub sub_version: Option<String>,
    pub release_date: String,
    pub region_tag: Option<String>,
}

/// One update row extracted from the vendor page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    pub android_version: String,
    pub build_version: String,
    pub sub_version: Option<String>,
    pub release_date: String,
    pub region_tag: Option<String>,
    pub download_url: String,
}

impl UpdateRecord {
    pub fn from_parts(cell: VersionCell, download_url: impl Into<String>) -> Self {
        Self {
            android_version: cell.android_version,
            build_version: cell.build_version,
            sub_version: cell.sub_version,
            release_date: cell.release_date,
            region_tag: cell.region_tag,
            download_url: download_url.into(),
        }
    }

    /// The manifest `build` key: the full version token as printed on the
    /// page, sub-version included.
    pub fn build_id(&self) -> String {
        match &self.sub_version {
            Some(sub) => format!("{}.{}", self.build_version, sub),
            None => self.build_version.clone(),
        }
    }

    /// Last path segment of the download URL, hash suffix and all.
    pub fn raw_file_name(&self) -> String {
        raw_file_name(&self.download_url)
    }

    /// Stable artifact name with any trailing CDN hash token stripped.
    pub fn canonical_file_name(&self) -> String {
        canonical_file_name(&self.download_url)
    }
}
