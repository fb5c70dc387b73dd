use otawatch_core::{select_release, SelectionCriterion, UpdateRecord};
use pretty_assertions::assert_eq;

fn record(build: &str, region: Option<&str>) -> UpdateRecord {
    UpdateRecord {
        android_version: "11.0".to_string(),
        build_version: build.to_string(),
        sub_version: None,
        release_date: "2021-07-15".to_string(),
        region_tag: region.map(ToOwned::to_owned),
        download_url: format!("https://vendor.example/ota/{build}.zip"),
    }
}

#[test]
fn picks_last_qualifying_row_in_page_order() {
    // No marker configured: only untagged rows qualify.
    let records = vec![
        record("OTA-1", None),
        record("OTA-2", Some("CN")),
        record("OTA-3", None),
    ];
    let criterion = SelectionCriterion::new(None);

    let selected = select_release(&records, &criterion).unwrap();
    assert_eq!(selected.build_version, "OTA-3");
}

#[test]
fn marker_accepts_matching_tag_and_untagged_rows() {
    let criterion = SelectionCriterion::new(Some("CN".to_string()));
    assert!(criterion.accepts(&record("OTA-1", None)));
    assert!(criterion.accepts(&record("OTA-2", Some("CN"))));
    assert!(!criterion.accepts(&record("OTA-3", Some("EU"))));
}

#[test]
fn marker_changes_which_row_wins() {
    let records = vec![
        record("OTA-1", None),
        record("OTA-2", Some("CN")),
        record("OTA-3", Some("EU")),
    ];
    let criterion = SelectionCriterion::new(Some("EU".to_string()));

    let selected = select_release(&records, &criterion).unwrap();
    assert_eq!(selected.build_version, "OTA-3");
}

#[test]
fn same_build_different_regions_bottommost_wins() {
    // Tie-break: the reverse scan accepts the first row it meets, so of two
    // qualifying rows with the same build id the one lower on the page wins.
    let records = vec![
        record("OTA-5", Some("CN")),
        record("OTA-5", None),
        record("OTA-5", Some("EU")),
    ];
    let criterion = SelectionCriterion::new(Some("CN".to_string()));

    let selected = select_release(&records, &criterion).unwrap();
    assert_eq!(selected.region_tag, None);
}

#[test]
fn no_qualifying_rows_yields_none() {
    let records = vec![record("OTA-1", Some("CN")), record("OTA-2", Some("EU"))];
    assert_eq!(select_release(&records, &SelectionCriterion::new(None)), None);
}

#[test]
fn empty_input_yields_none() {
    assert_eq!(select_release(&[], &SelectionCriterion::new(None)), None);
}
