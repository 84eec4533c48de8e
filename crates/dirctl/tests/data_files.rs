// path: crates/dirctl/tests/data_files.rs
use std::fs;

use directory_core::{normalize_with_report, LatLng};
use dirctl::clean::clean;
use dirctl::duplicates::find_duplicates;
use dirctl::legacy::migrate_str;
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn legacy_file_migrates_cleans_and_has_no_duplicates() {
    let tmp = TempDir::new().expect("tmpdir");
    let legacy = tmp.path().join("companies-legacy.json");
    fs::write(
        &legacy,
        r#"{"companies": [
            {"name": "Ada <Labs>", "location": "Toronto", "coordinates": [43.65, -79.38],
             "website": "https://ada.example", "linkedIn": "", "workField": ["AI", "R&D"]},
            {"name": "Shorty", "location": "Nowhere", "coordinates": [1.0],
             "website": "https://short.example", "linkedIn": "", "workField": []}
        ]}"#,
    )
    .unwrap();

    let migrated = migrate_str(&fs::read_to_string(&legacy).unwrap()).unwrap();
    let out = tmp.path().join("companies.json");
    fs::write(&out, serde_json::to_string_pretty(&migrated).unwrap()).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(find_duplicates(&text).unwrap().is_empty());

    let raw: Value = serde_json::from_str(&text).unwrap();
    let report = normalize_with_report(&raw).unwrap();
    assert_eq!(report.companies.len(), 1);
    assert_eq!(report.dropped.len(), 1);
    assert_eq!(report.dropped[0].0, "Shorty");

    let ada = &report.companies[0];
    assert_eq!(ada.name, "Ada Labs");
    assert_eq!(ada.work_field, vec!["AI", "RD"]);
    assert_eq!(ada.coordinates, LatLng::new(43.65, -79.38));

    // clean → повторная нормализация ничего не меняет
    let (cleaned, _) = clean(&raw).unwrap();
    let again = normalize_with_report(&cleaned).unwrap();
    assert_eq!(again.companies, report.companies);
    assert!(again.dropped.is_empty());
}

#[test]
fn clean_fails_when_sanitized_names_collide() {
    let raw: Value = serde_json::from_str(
        r#"{"companies": {
            "R&D Co": {"locations": [{"Oslo": [59.9, 10.7]}],
                       "links": {"website": "", "linkedin": ""}, "workFields": []},
            "RD Co": {"locations": [{"Bergen": [60.39, 5.32]}],
                      "links": {"website": "", "linkedin": ""}, "workFields": []}
        }}"#,
    )
    .unwrap();

    let err = clean(&raw).unwrap_err();
    assert!(format!("{err:#}").contains("RD Co"), "{err:#}");
}
