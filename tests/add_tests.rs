mod common;
use chrono::Local;
use common::{HEADER, add_entry, rbs, read_lines, rbs_with_files, setup};
use predicates::str::contains;
use std::path::Path;

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[test]
fn test_add_writes_row_with_today() {
    let files = setup("add_today");

    rbs_with_files(&files)
        .args([
            "add",
            "--name",
            "Alice",
            "--lunch-start",
            "12:00",
            "--lunch-end",
            "12:30",
            "--tea-start",
            "15:00",
            "--tea-end",
            "15:15",
        ])
        .assert()
        .success()
        .stdout(contains("Break data saved"));

    let lines = read_lines(&files.schedule);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], format!("Alice,12:00,12:30,15:00,15:15,{}", today()));
}

#[test]
fn test_header_written_once_across_runs() {
    let files = setup("add_header_once");

    for name in ["Alice", "Bob", "Carol"] {
        add_entry(&files, name, "2024-01-01");
    }

    let lines = read_lines(&files.schedule);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines.iter().filter(|l| l.as_str() == HEADER).count(), 1);
    assert_eq!(lines[3], "Carol,12:00,12:30,15:00,15:15,2024-01-01");
}

#[test]
fn test_add_missing_field_writes_nothing() {
    let files = setup("add_missing");

    rbs_with_files(&files)
        .args([
            "add",
            "--name",
            "Alice",
            "--lunch-start",
            "12:00",
            "--lunch-end",
            "12:30",
            "--tea-start",
            "15:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Please fill in all fields"))
        .stderr(contains("tea end"));

    assert!(!Path::new(&files.schedule).exists());
    assert!(!Path::new(&files.notes).exists());
}

#[test]
fn test_add_blank_field_is_missing() {
    let files = setup("add_blank");
    add_entry(&files, "Alice", "2024-01-01");

    rbs_with_files(&files)
        .args([
            "add",
            "--name",
            "   ",
            "--lunch-start",
            "12:00",
            "--lunch-end",
            "12:30",
            "--tea-start",
            "15:00",
            "--tea-end",
            "15:15",
        ])
        .assert()
        .failure()
        .stderr(contains("name"));

    // only the first entry is there
    assert_eq!(read_lines(&files.schedule).len(), 2);
}

#[test]
fn test_add_logs_note() {
    let files = setup("add_note");
    add_entry(&files, "Alice", "2024-01-01");

    let notes = read_lines(&files.notes);
    assert_eq!(notes.len(), 1);

    let (stamp, note) = notes[0].split_once(',').expect("timestamp,note");
    assert!(
        chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M").is_ok(),
        "bad timestamp: {stamp}"
    );
    assert_eq!(note, "✔ Manual entry saved");
}

#[test]
fn test_add_unwritable_schedule_is_reported() {
    let files = setup("add_unwritable");
    let bad = std::env::temp_dir()
        .join("rbreakscheduler_no_such_dir")
        .join("break_schedule.csv");

    rbs(&files)
        .args([
            "--file",
            bad.to_str().unwrap(),
            "--notes",
            &files.notes,
            "add",
            "--name",
            "Alice",
            "--lunch-start",
            "12:00",
            "--lunch-end",
            "12:30",
            "--tea-start",
            "15:00",
            "--tea-end",
            "15:15",
        ])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}
