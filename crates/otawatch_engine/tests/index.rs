use otawatch_core::{Manifest, ManifestEntry};
use otawatch_engine::render_index;
use pretty_assertions::assert_eq;

fn entry(build: &str) -> ManifestEntry {
    ManifestEntry {
        build: build.to_string(),
        timestamp: "2021-07-15T08:00:00Z".to_string(),
        filename: format!("{build}.zip"),
        relative_url: format!("ota/{build}.zip"),
        size_bytes: 42,
        sha256: "ab".repeat(32),
        source_url: "https://vendor.example/updates".to_string(),
        source_sha256: "cd".repeat(32),
        changes: vec!["Security patch".to_string()],
    }
}

#[test]
fn empty_manifest_renders_placeholder() {
    let html = render_index(&Manifest::empty());
    assert!(html.contains("No releases processed yet."));
    assert!(!html.contains("<table>"));
}

#[test]
fn lists_entries_newest_first() {
    let mut manifest = Manifest::empty();
    manifest.record(entry("OTA-2107"));
    manifest.record(entry("OTA-2203"));

    let html = render_index(&manifest);
    assert!(html.contains("Current build: <strong>OTA-2203</strong>"));

    let newest = html.find("OTA-2203.zip").unwrap();
    let oldest = html.find("OTA-2107.zip").unwrap();
    assert!(newest < oldest);
    assert!(html.contains("href=\"ota/OTA-2203.zip\""));
    assert!(html.contains("Security patch"));
}

#[test]
fn escapes_interpolated_values() {
    let mut manifest = Manifest::empty();
    let mut hostile = entry("OTA-1");
    hostile.build = "<script>alert(1)</script>".to_string();
    manifest.record(hostile);

    let html = render_index(&manifest);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn rendering_is_a_pure_function_of_manifest_state() {
    let mut manifest = Manifest::empty();
    manifest.record(entry("OTA-2107"));
    assert_eq!(render_index(&manifest), render_index(&manifest.clone()));
}
