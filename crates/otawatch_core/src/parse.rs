use crate::record::VersionCell;

/// Parses the first cell of an update row.
///
/// The expected shape is `{android} ({version}, {date})` with an optional
/// trailing region tag: `{android} ({version}, {date}, {region})`. The
/// version token splits into build and sub-version at its first `.`.
///
/// Returns `None` on any structural mismatch; callers skip the row and keep
/// going.
pub fn parse_version_cell(text: &str) -> Option<VersionCell> {
    let text = text.trim();
    let open = text.find('(')?;
    let close = text.rfind(')')?;
    if close <= open {
        return None;
    }

    let android_version = text[..open].trim();
    if android_version.is_empty() {
        return None;
    }

    let parts: Vec<&str> = text[open + 1..close].split(',').map(str::trim).collect();
    if parts.len() < 2 || parts.len() > 3 || parts.iter().any(|part| part.is_empty()) {
        return None;
    }

    let (build_version, sub_version) = match parts[0].split_once('.') {
        Some((build, sub)) => (build, Some(sub.to_string())),
        None => (parts[0], None),
    };
    if build_version.is_empty() || sub_version.as_deref() == Some("") {
        return None;
    }

    Some(VersionCell {
        android_version: android_version.to_string(),
        build_version: build_version.to_string(),
        sub_version,
        release_date: parts[1].to_string(),
        region_tag: parts.get(2).map(|tag| tag.to_string()),
    })
}
