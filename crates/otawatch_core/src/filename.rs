use url::Url;

/// Last non-empty path segment of a download URL, query and fragment
/// excluded. Falls back to plain string splitting when the URL is relative.
pub fn raw_file_name(download_url: &str) -> String {
    let path = match Url::parse(download_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => download_url
            .split(['?', '#'])
            .next()
            .unwrap_or(download_url)
            .to_string(),
    };
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Stable artifact name for a download URL.
///
/// The vendor's CDN appends a content hash to re-uploads
/// (`device-ota-2107-3f9ac2d41b.zip`); the logical build identity is the name
/// with that token removed. Pure and deterministic so it can be tested
/// against literal URLs.
pub fn canonical_file_name(download_url: &str) -> String {
    strip_hash_suffix(&raw_file_name(download_url))
}

/// Drops a trailing `-<hex>` segment from the file stem when it looks like a
/// content hash: at least 8 characters, all ASCII hex digits.
fn strip_hash_suffix(name: &str) -> String {
    let (stem, extension) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    };

    let mut segments: Vec<&str> = stem.split('-').collect();
    if segments.len() >= 2 {
        let last = segments[segments.len() - 1];
        if last.len() >= 8 && last.chars().all(|c| c.is_ascii_hexdigit()) {
            segments.pop();
        }
    }

    let stem = segments.join("-");
    match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}
