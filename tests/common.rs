#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "Name,Lunch Start,Lunch End,Tea Start,Tea End,Date";

/// Paths used by one test: schedule, notes and an isolated config dir.
pub struct TestFiles {
    pub schedule: String,
    pub notes: String,
    pub config_dir: String,
}

/// Binary under test, with the config directory pointed at `config_dir`
/// so the user's real configuration is never read or written.
pub fn rbs(files: &TestFiles) -> Command {
    let mut cmd = cargo_bin_cmd!("rbreakscheduler");
    cmd.env(rbreakscheduler::config::CONFIG_DIR_ENV, &files.config_dir);
    cmd
}

/// Same as `rbs`, with `--file` and `--notes` already set.
pub fn rbs_with_files(files: &TestFiles) -> Command {
    let mut cmd = rbs(files);
    cmd.args(["--file", &files.schedule, "--notes", &files.notes]);
    cmd
}

fn temp_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(name);
    path.to_string_lossy().to_string()
}

/// Unique paths inside the system temp dir, with any leftovers removed.
pub fn setup(name: &str) -> TestFiles {
    let files = TestFiles {
        schedule: temp_path(&format!("{name}_break_schedule.csv")),
        notes: temp_path(&format!("{name}_notes.csv")),
        config_dir: temp_path(&format!("{name}_rbreakscheduler_cfg")),
    };

    fs::remove_file(&files.schedule).ok();
    fs::remove_file(&files.notes).ok();
    fs::remove_dir_all(&files.config_dir).ok();

    files
}

/// Temporary output file path, removed if it exists.
pub fn temp_out(name: &str, ext: &str) -> String {
    let p = temp_path(&format!("{name}_out.{ext}"));
    fs::remove_file(&p).ok();
    p
}

/// Lines of a text file, or an empty list when it does not exist.
pub fn read_lines(path: &str) -> Vec<String> {
    fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Add a full manual entry through the CLI.
pub fn add_entry(files: &TestFiles, name: &str, date: &str) {
    rbs_with_files(files)
        .args([
            "add",
            "--name",
            name,
            "--lunch-start",
            "12:00",
            "--lunch-end",
            "12:30",
            "--tea-start",
            "15:00",
            "--tea-end",
            "15:15",
            "--date",
            date,
        ])
        .assert()
        .success();
}
