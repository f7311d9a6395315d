mod common;
use common::{HEADER, add_entry, rbs, rbs_with_files, read_lines, setup};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rbreakscheduler::config::Config;
use std::fs;
use std::path::Path;

#[test]
fn test_init_test_mode_creates_schedule_only() {
    let files = setup("cli_init_test");

    rbs_with_files(&files)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(read_lines(&files.schedule), vec![HEADER]);
    assert!(!Path::new(&files.config_dir).exists());

    // a second init keeps the existing file as is
    add_entry(&files, "Alice", "2024-01-01");
    rbs_with_files(&files)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
    assert_eq!(read_lines(&files.schedule).len(), 2);
}

#[test]
fn test_init_writes_config_used_later() {
    let files = setup("cli_init_config");

    rbs_with_files(&files).arg("init").assert().success();

    let conf = Path::new(&files.config_dir).join("rbreakscheduler.conf");
    let content = fs::read_to_string(&conf).expect("config written");
    let cfg: Config = serde_yaml::from_str(&content).expect("valid yaml");
    assert_eq!(cfg.schedule_file, files.schedule);
    assert_eq!(cfg.notes_file, files.notes);
    assert!(!cfg.strict_import);

    // without --file/--notes the configured paths are used
    rbs(&files)
        .args([
            "add",
            "--name",
            "Zoe",
            "--lunch-start",
            "12:00",
            "--lunch-end",
            "12:30",
            "--tea-start",
            "15:00",
            "--tea-end",
            "15:15",
            "--date",
            "2024-03-01",
        ])
        .assert()
        .success();

    assert_eq!(
        read_lines(&files.schedule).last().map(String::as_str),
        Some("Zoe,12:00,12:30,15:00,15:15,2024-03-01")
    );

    rbs(&files)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("schedule_file"))
        .stdout(contains("strict_import: false"));
}

#[test]
fn test_broken_config_is_reported() {
    let files = setup("cli_broken_config");
    fs::create_dir_all(&files.config_dir).expect("config dir");
    fs::write(
        Path::new(&files.config_dir).join("rbreakscheduler.conf"),
        "schedule_file: [unterminated",
    )
    .expect("write config");

    rbs(&files)
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}

#[test]
fn test_list_filters_by_range_and_name() {
    let files = setup("cli_list");
    add_entry(&files, "Alice", "2024-01-01");
    add_entry(&files, "Bob", "2024-02-01");
    add_entry(&files, "alice", "2024-02-10");

    rbs_with_files(&files)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Lunch Start"))
        .stdout(contains("Alice"))
        .stdout(contains("Bob"))
        .stdout(contains("3 row(s)"));

    rbs_with_files(&files)
        .args(["list", "--range", "2024-02"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("2024-01-01").not())
        .stdout(contains("2 row(s)"));

    rbs_with_files(&files)
        .args(["list", "--name", "ALICE"])
        .assert()
        .success()
        .stdout(contains("Bob").not())
        .stdout(contains("2 row(s)"));
}

#[test]
fn test_list_empty_schedule() {
    let files = setup("cli_list_empty");

    rbs_with_files(&files)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("No breaks recorded"));
}

#[test]
fn test_list_headerless_schedule_keeps_first_row() {
    let files = setup("cli_list_headerless");
    fs::write(
        &files.schedule,
        "Alice,12:00,12:30,15:00,15:15,2024-01-01\nBob,12:00,12:30,15:00,15:15,2024-01-02\n",
    )
    .expect("write schedule");

    rbs_with_files(&files)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("2 row(s)"));
}

#[test]
fn test_notes_print() {
    let files = setup("cli_notes");
    add_entry(&files, "Alice", "2024-01-01");

    rbs_with_files(&files)
        .args(["notes", "--print"])
        .assert()
        .success()
        .stdout(contains("Manual entry saved"));
}

#[test]
fn test_notes_without_flag_prints() {
    let files = setup("cli_notes_default");
    add_entry(&files, "Alice", "2024-01-01");

    rbs_with_files(&files)
        .args(["notes"])
        .assert()
        .success()
        .stdout(contains("Manual entry saved"));
}

#[test]
fn test_config_without_flag_prints() {
    let files = setup("cli_config_default");

    rbs(&files)
        .args(["config"])
        .assert()
        .success()
        .stdout(contains("schedule_file"))
        .stdout(contains("strict_import"));
}
