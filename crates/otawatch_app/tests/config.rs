use std::collections::HashMap;
use std::path::PathBuf;

use otawatch_app::Config;
use watch_logging::LogDestination;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn build(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
    let map = vars(pairs);
    Config::from_vars(|name| map.get(name).cloned())
}

#[test]
fn minimal_configuration() {
    let config = build(&[
        ("OTAWATCH_PAGE_URL", "https://vendor.example/updates"),
        ("OTAWATCH_DEVICE", "gemini"),
        ("OTAWATCH_OUTPUT_DIR", "/var/otawatch"),
    ])
    .unwrap();

    assert_eq!(config.page_url, "https://vendor.example/updates");
    assert_eq!(config.device, "gemini");
    assert_eq!(config.output_dir, PathBuf::from("/var/otawatch"));
    assert_eq!(config.region_marker, None);
    assert!(config.mirror_dirs.is_empty());
    assert_eq!(config.ack_cookie, None);
    assert_eq!(config.changes, vec!["Vendor OTA release".to_string()]);
    assert_eq!(config.log_destination, LogDestination::Terminal);
}

#[test]
fn full_configuration() {
    let config = build(&[
        ("OTAWATCH_PAGE_URL", "https://vendor.example/updates"),
        ("OTAWATCH_DEVICE", "gemini"),
        ("OTAWATCH_OUTPUT_DIR", "/var/otawatch"),
        ("OTAWATCH_REGION", "CN"),
        ("OTAWATCH_MIRROR_DIRS", "/srv/www:/mnt/backup"),
        ("OTAWATCH_ACK_COOKIE", "eula=accepted"),
        ("OTAWATCH_CHANGES", "Security patch|Bug fixes"),
        ("OTAWATCH_LOG", "both"),
    ])
    .unwrap();

    assert_eq!(config.region_marker.as_deref(), Some("CN"));
    assert_eq!(
        config.mirror_dirs,
        vec![PathBuf::from("/srv/www"), PathBuf::from("/mnt/backup")]
    );
    assert_eq!(config.ack_cookie.as_deref(), Some("eula=accepted"));
    assert_eq!(
        config.changes,
        vec!["Security patch".to_string(), "Bug fixes".to_string()]
    );
    assert_eq!(config.log_destination, LogDestination::Both);
}

#[test]
fn missing_required_variable_is_an_error() {
    let err = build(&[
        ("OTAWATCH_PAGE_URL", "https://vendor.example/updates"),
        ("OTAWATCH_OUTPUT_DIR", "/var/otawatch"),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("OTAWATCH_DEVICE"));
}

#[test]
fn blank_required_variable_is_an_error() {
    let result = build(&[
        ("OTAWATCH_PAGE_URL", " "),
        ("OTAWATCH_DEVICE", "gemini"),
        ("OTAWATCH_OUTPUT_DIR", "/var/otawatch"),
    ]);
    assert!(result.is_err());
}

#[test]
fn unknown_log_destination_is_an_error() {
    let result = build(&[
        ("OTAWATCH_PAGE_URL", "https://vendor.example/updates"),
        ("OTAWATCH_DEVICE", "gemini"),
        ("OTAWATCH_OUTPUT_DIR", "/var/otawatch"),
        ("OTAWATCH_LOG", "syslog"),
    ]);
    assert!(result.is_err());
}
