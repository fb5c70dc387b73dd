use otawatch_core::{canonical_file_name, raw_file_name};
use pretty_assertions::assert_eq;

#[test]
fn strips_trailing_hash_token() {
    assert_eq!(
        canonical_file_name("https://cdn.example/ota/foo-bar-1a2b3c4d5e.zip"),
        "foo-bar.zip"
    );
}

#[test]
fn keeps_short_or_non_hex_suffix() {
    assert_eq!(
        canonical_file_name("https://cdn.example/ota/foo-bar-short.zip"),
        "foo-bar-short.zip"
    );
    assert_eq!(
        canonical_file_name("https://cdn.example/ota/foo-bar-notahexx1.zip"),
        "foo-bar-notahexx1.zip"
    );
}

#[test]
fn keeps_single_segment_names() {
    assert_eq!(canonical_file_name("https://cdn.example/ota/foo.zip"), "foo.zip");
    // A lone all-hex stem is a name, not a suffix.
    assert_eq!(
        canonical_file_name("https://cdn.example/ota/deadbeef01.zip"),
        "deadbeef01.zip"
    );
}

#[test]
fn uppercase_hex_counts_as_hash() {
    assert_eq!(
        canonical_file_name("https://cdn.example/ota/foo-1A2B3C4D5E.zip"),
        "foo.zip"
    );
}

#[test]
fn handles_names_without_extension() {
    assert_eq!(
        canonical_file_name("https://cdn.example/ota/foo-bar-1a2b3c4d"),
        "foo-bar"
    );
}

#[test]
fn raw_name_ignores_query_and_fragment() {
    assert_eq!(
        raw_file_name("https://cdn.example/ota/foo-bar.zip?token=abc#frag"),
        "foo-bar.zip"
    );
}

#[test]
fn raw_name_works_for_relative_urls() {
    assert_eq!(raw_file_name("/ota/foo-bar.zip"), "foo-bar.zip");
    assert_eq!(raw_file_name("foo-bar.zip?x=1"), "foo-bar.zip");
}

#[test]
fn derivation_is_deterministic() {
    let url = "https://cdn.example/ota/device-ota-2107-3f9ac2d41b.zip";
    assert_eq!(canonical_file_name(url), canonical_file_name(url));
    assert_eq!(canonical_file_name(url), "device-ota-2107.zip");
}
