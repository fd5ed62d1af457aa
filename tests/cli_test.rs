//! Integration tests for the framecheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn folder_with(names: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in names {
        fs::write(temp.path().join(name), b"").unwrap();
    }
    temp
}

/// A command isolated from the user's own settings.
fn framecheck(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("framecheck"));
    cmd.env("HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    framecheck(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find missing frames"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("watch"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    framecheck(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn single_gap_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["shot_001.png", "shot_002.png", "shot_004.png"]);
    framecheck(temp.path())
        .arg("check")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence:      shot_###.png"))
        .stdout(predicate::str::contains("Frame range:   001 - 004"))
        .stdout(predicate::str::contains("Frames found:  3 / 4 (75.00%)"))
        .stdout(predicate::str::contains("Missing list:  003"))
        .stderr(predicate::str::contains("1 frames missing in 1 block(s)"));
    Ok(())
}

#[test]
fn complete_sequence_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["a_01.jpg", "a_02.jpg", "a_03.jpg"]);
    framecheck(temp.path())
        .args(["check", "--fail-on-missing"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ All frames complete (3 frames)"));
    Ok(())
}

#[test]
fn no_subcommand_checks_current_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["a_01.jpg", "a_02.jpg", "a_04.jpg"]);
    framecheck(temp.path())
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing blocks: 03"));
    Ok(())
}

#[test]
fn empty_folder_warns_but_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    framecheck(temp.path())
        .arg("check")
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No frame sequence found"));
    Ok(())
}

#[test]
fn smaller_group_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["x_1.tga", "x_2.tga", "y_1.tga"]);
    framecheck(temp.path())
        .args(["-v", "check", "--ext", "tga"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence:      x_#.tga"))
        .stdout(predicate::str::contains("Ignored files: 1"))
        .stdout(predicate::str::contains("  y_1.tga"))
        .stdout(predicate::str::contains("All frames complete"));
    Ok(())
}

#[test]
fn fail_on_missing_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["r_1.exr", "r_3.exr"]);
    framecheck(temp.path())
        .args(["check", "--fail-on-missing"])
        .arg(temp.path())
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn missing_folder_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    framecheck(temp.path())
        .arg("check")
        .arg(temp.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no such directory"));
    Ok(())
}

#[test]
fn json_output_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["shot_001.png", "shot_002.png", "shot_004.png"]);
    let output = framecheck(temp.path())
        .args(["check", "--json"])
        .arg(temp.path())
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["prefix"], "shot_");
    assert_eq!(value["extension"], ".png");
    assert_eq!(value["missing"], serde_json::json!([3]));
    Ok(())
}

#[test]
fn quiet_mode_prints_only_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["a_1.png", "a_2.png"]);
    framecheck(temp.path())
        .args(["-q", "check"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Render Check Summary").not())
        .stdout(predicate::str::contains("All frames complete"));
    Ok(())
}

#[test]
fn exports_csv_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["shot_001.png", "shot_004.png"]);
    let out = TempDir::new()?;
    let path = out.path().join("report.csv");
    framecheck(temp.path())
        .args(["check", "-o"])
        .arg(&path)
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let csv = fs::read_to_string(&path)?;
    assert!(csv.starts_with("key,value"));
    assert!(csv.contains("missing_block,002-003"));
    Ok(())
}

#[test]
fn prints_text_format_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["shot_001.png", "shot_004.png"]);
    framecheck(temp.path())
        .args(["check", "--format", "text"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Render Check Summary"))
        .stdout(predicate::str::contains("  002-003"));
    Ok(())
}

#[test]
fn map_shows_coverage() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["m_1.png", "m_2.png", "m_4.png"]);
    framecheck(temp.path())
        .args(["check", "--map"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("██░█"))
        .stdout(predicate::str::contains("1 cell = 1 frame"));
    Ok(())
}

#[test]
fn compare_lists_differences() -> Result<(), Box<dyn std::error::Error>> {
    let a = folder_with(&["beauty_1.exr", "beauty_2.exr", "beauty_3.exr"]);
    let b = folder_with(&["depth_2.exr", "depth_3.exr", "depth_4.exr"]);
    framecheck(a.path())
        .arg("compare")
        .arg(a.path())
        .arg(b.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Only in A:     1"))
        .stdout(predicate::str::contains("Only in B:     4"));
    Ok(())
}

#[test]
fn watch_with_count_exits() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["w_1.png", "w_3.png"]);
    framecheck(temp.path())
        .args(["watch", "--count", "1"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing blocks: 2"))
        .stdout(predicate::str::contains("Stopped watching after 1 scan(s)"));
    Ok(())
}

#[test]
fn folder_settings_are_used() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["p_1.tga", "q_3.tga"]);
    fs::write(
        temp.path().join(".framecheck.yml"),
        "formats: [tga]\nauto_detect: false\n",
    )?;
    framecheck(temp.path())
        .arg("check")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence:      *.tga"))
        .stdout(predicate::str::contains("Missing list:  2"));
    Ok(())
}

#[test]
fn missing_config_file_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["a_1.png"]);
    framecheck(temp.path())
        .args(["--config", "does-not-exist.yml", "check"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn oversized_map_columns_exit_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["a_1.png", "a_3.png"]);
    fs::write(
        temp.path().join(".framecheck.yml"),
        "map_columns: 18446744073709551615\n",
    )?;
    framecheck(temp.path())
        .args(["check", "--map"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("map_columns must be at most 1000"));
    Ok(())
}

#[test]
fn stray_timestamp_frame_is_summarized() -> Result<(), Box<dyn std::error::Error>> {
    let temp = folder_with(&["render_1.png", "render_2.png", "render_20261016123000.png"]);
    framecheck(temp.path())
        .args(["check", "--map"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing:       20261016122997"))
        .stderr(predicate::str::contains("too wide to list"));
    Ok(())
}

#[test]
fn config_shows_resolved_settings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".framecheck.yml"), "watch_interval: 9\n")?;
    framecheck(temp.path())
        .arg("config")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("watch_interval: 9"))
        .stdout(predicate::str::contains(".framecheck.yml"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    framecheck(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("framecheck"));
    Ok(())
}
