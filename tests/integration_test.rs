use chrono::NaiveDate;
use play_counter::error::PlayLogError;
use play_counter::models::ReportOptions;
use play_counter::{load_plays, load_plays_from_str, report_file};
use std::io::Write;
use tempfile::NamedTempFile;

const PLAY_LOG: &str = "PLAY_ID\tSONG_ID\tCLIENT_ID\tPLAY_TS
44BB190BC2493964E053CF0A000AB546\tS1\tU1\t01/01/2020 10:00:00
44BB190BC24A3964E053CF0A000AB546\tS1\tU1\t01/01/2020 11:00:00
44BB190BC24B3964E053CF0A000AB546\tS2\tU1\t01/01/2020 12:00:00
44BB190BC24C3964E053CF0A000AB546\tS3\tU1\t01/01/2020
44BB190BC24D3964E053CF0A000AB546\tS1\tU2\t02/01/2020 09:30:00
44BB190BC24E3964E053CF0A000AB546\tS2\tU2\t02/01/2020 09:34:00
44BB190BC24F3964E053CF0A000AB546\tS4\tU2\tsometime
";

fn write_log(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_plays_from_str_dates() {
    let plays = load_plays_from_str(PLAY_LOG).unwrap();
    let jan_1 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

    assert_eq!(plays.len(), 7);
    assert_eq!(plays[0].timestamp.date(), Some(jan_1));
    assert_eq!(plays[3].timestamp.datetime(), None);
    assert_eq!(plays[3].timestamp.date(), Some(jan_1));
    assert_eq!(plays[6].timestamp.date(), None);
}

#[test]
fn test_report_file() {
    let file = write_log(PLAY_LOG);
    let options = ReportOptions {
        target_distinct_songs: 2,
    };
    let report = report_file(file.path(), &options).unwrap();

    assert_eq!(report.users_at_target, 1);
    assert_eq!(report.max_distinct_songs, 3);
    assert_eq!(report.groups, 2);
    assert_eq!(report.unparseable, 1);
    assert_eq!(
        report.to_string(),
        "Number of users who played 2 distinct songs: 1\n\
         Maximum number of distinct songs played by a user: 3"
    );
}

#[test]
fn test_report_file_default_target() {
    let file = write_log(PLAY_LOG);
    let report = report_file(file.path(), &ReportOptions::default()).unwrap();

    assert_eq!(report.target_distinct_songs, 346);
    assert_eq!(report.users_at_target, 0);
}

#[test]
fn test_report_file_header_only() {
    let file = write_log("PLAY_ID\tSONG_ID\tCLIENT_ID\tPLAY_TS\n");
    let result = report_file(file.path(), &ReportOptions::default());

    assert!(matches!(result, Err(PlayLogError::NoAggregates)));
}

#[test]
fn test_report_file_all_unparseable() {
    let file = write_log("SONG_ID\tCLIENT_ID\tPLAY_TS\nS1\tU1\t2020-01-01\n");
    let result = report_file(file.path(), &ReportOptions::default());

    assert!(matches!(result, Err(PlayLogError::NoAggregates)));
}

#[test]
fn test_load_plays_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_plays(dir.path().join("exhibitA-input.csv"));

    match result {
        Err(PlayLogError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected a NotFound error, got {:?}", other),
    }
}

#[test]
fn test_load_plays_empty_file() {
    let file = write_log("");

    assert!(matches!(
        load_plays(file.path()),
        Err(PlayLogError::MissingColumn("CLIENT_ID"))
    ));
}

#[test]
fn test_load_plays_ragged_rows() {
    let file = write_log("SONG_ID\tCLIENT_ID\tPLAY_TS\nS1\tU1\n");

    assert!(matches!(load_plays(file.path()), Err(PlayLogError::Csv(_))));
}

#[test]
fn test_load_plays_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"SONG_ID\tCLIENT_ID\tPLAY_TS\n\xff\tU1\t01/01/2020\n").unwrap();
    file.flush().unwrap();

    assert!(matches!(
        load_plays(file.path()),
        Err(PlayLogError::InvalidUtf8(_))
    ));
}

#[test]
fn test_report_file_empty_ids() {
    let file = write_log("SONG_ID\tCLIENT_ID\tPLAY_TS\nS1\tU1\t01/01/2020\n\tU1\t01/01/2020\nS1\t\t01/01/2020\n");
    let report = report_file(file.path(), &ReportOptions { target_distinct_songs: 1 }).unwrap();

    assert_eq!(report.groups, 1);
    assert_eq!(report.users_at_target, 1);
    assert_eq!(report.max_distinct_songs, 1);
}
