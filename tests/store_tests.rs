mod common;
use common::{sample_records, setup_data_file};
use prodtracker::models::ProductionRecord;
use prodtracker::store::{RecordStore, read_records};
use std::fs;

#[test]
fn test_save_then_load_round_trip() {
    let path = setup_data_file("store_round_trip");
    let store = RecordStore::new(&path);

    let records = sample_records();
    store.save(&records).expect("save");

    let loaded = store.load().expect("load");
    assert_eq!(loaded, records);
}

#[test]
fn test_save_writes_plain_lines_in_field_order() {
    let path = setup_data_file("store_plain_lines");
    let store = RecordStore::new(&path);

    store
        .save(&[
            ProductionRecord::new("2024-01-01", "Morning", 100, 90),
            ProductionRecord::new("2024-01-01", "Night Crew \"B\"", -3, 0),
        ])
        .expect("save");

    let content = fs::read_to_string(&path).expect("read");
    assert_eq!(
        content,
        "2024-01-01,Morning,100,90\n2024-01-01,Night Crew \"B\",-3,0\n"
    );
}

#[test]
fn test_save_replaces_previous_content() {
    let path = setup_data_file("store_replace");
    let store = RecordStore::new(&path);

    store.save(&sample_records()).expect("first save");
    store
        .save(&[ProductionRecord::new("2025-10-01", "Morning", 1, 1)])
        .expect("second save");

    let content = fs::read_to_string(&path).expect("read");
    assert_eq!(content, "2025-10-01,Morning,1,1\n");
}

#[test]
fn test_load_missing_file_is_empty() {
    let path = setup_data_file("store_missing");
    let store = RecordStore::new(&path);

    let loaded = store.load().expect("missing file is not an error");
    assert!(loaded.is_empty());
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_load_skips_malformed_lines() {
    let data = "2024-01-01,Morning,100,90\nBADLINE\n2024-01-02,Night,abc,50\n";
    let loaded = read_records(data.as_bytes()).expect("read");

    assert_eq!(
        loaded,
        vec![ProductionRecord::new("2024-01-01", "Morning", 100, 90)]
    );
}

#[test]
fn test_load_skips_wrong_field_counts_and_blank_lines() {
    let data = "\n2024-01-01,Morning,100\n\n2024-01-01,Morning,100,90,extra\n2024-01-03,Evening,5,7\n   \n";
    let loaded = read_records(data.as_bytes()).expect("read");

    assert_eq!(loaded, vec![ProductionRecord::new("2024-01-03", "Evening", 5, 7)]);
}

#[test]
fn test_load_skips_bad_target() {
    let data = "2024-01-01,Morning,100,ninety\n2024-01-02,Morning,1.5,2\n";
    let loaded = read_records(data.as_bytes()).expect("read");
    assert!(loaded.is_empty());
}

#[test]
fn test_load_tolerates_padding_and_crlf() {
    let data = "  2024-01-01,Morning, 100 , 90  \r\n2024-01-02,Night,-5,+7\r\n";
    let loaded = read_records(data.as_bytes()).expect("read");

    assert_eq!(
        loaded,
        vec![
            ProductionRecord::new("2024-01-01", "Morning", 100, 90),
            ProductionRecord::new("2024-01-02", "Night", -5, 7),
        ]
    );
}

#[test]
fn test_load_keeps_duplicates_in_file_order() {
    let data = "2024-01-01,Morning,1,2\n2024-01-01,Morning,3,4\n2023-12-31,Morning,5,6\n";
    let loaded = read_records(data.as_bytes()).expect("read");

    let units: Vec<i64> = loaded.iter().map(|r| r.units_produced).collect();
    assert_eq!(units, vec![1, 3, 5]);
}

#[test]
fn test_load_drops_numbers_outside_i64() {
    let data = "2024-01-01,Morning,100000000000000000000,5\n2024-01-02,Night,7,5\n";
    let loaded = read_records(data.as_bytes()).expect("read");

    assert_eq!(loaded, vec![ProductionRecord::new("2024-01-02", "Night", 7, 5)]);
}
