//! Integration tests for the segshuf CLI

use std::fs;

use predicates::prelude::*;

use crate::helpers::{fixture_path, TestEnv};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Segment Shuffler"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("override"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_shows_package_version() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("segshuf {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn play_without_video_is_usage_error() {
    let env = TestEnv::new();
    env.cmd()
        .arg("play")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<VIDEO>"));
}

// ============================================================================
// list
// ============================================================================

#[test]
fn list_prints_table() {
    let env = TestEnv::new();
    let output = env.cmd().args(["list", "dQw4w9WgXcQ"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout, @r"
dQw4w9WgXcQ (3 segments)
  1. 0:00 - 0:18  Intro
  2. 0:18 - 0:43  Verse
  3. 0:43 - 1:25  Chorus
");
}

#[test]
fn list_accepts_watch_url() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list", "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chorus"));
}

#[test]
fn list_skips_invalid_segments() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list", "live-set-2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 segments)"))
        .stdout(predicate::str::contains("60:00 - 62:05"))
        .stdout(predicate::str::contains("Broken entry").not());
}

#[test]
fn list_json_uses_dataset_keys() {
    let env = TestEnv::new();
    let output = env.cmd().args(["list", "dQw4w9WgXcQ", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1]["title"], "Verse");
    assert_eq!(items[1]["startTime"], 18.0);
    assert_eq!(items[1]["endTime"], 43.0);
}

#[test]
fn list_survives_malformed_entries() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list", "tour-2019", "--segments"])
        .arg(fixture_path("partly_malformed.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 segments)"))
        .stdout(predicate::str::contains("Overture"))
        .stdout(predicate::str::contains("Finale"))
        .stdout(predicate::str::contains("Typo").not());
}

#[test]
fn list_unknown_video_is_empty() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list", "unknown-video"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No segments for unknown-video"));
}

#[test]
fn list_missing_dataset_is_empty() {
    let env = TestEnv::new();
    let missing = env.dir.path().join("nope.json");
    env.cmd()
        .args(["list", "dQw4w9WgXcQ", "--segments"])
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("No segments"));
}

#[test]
fn list_malformed_dataset_fails() {
    let env = TestEnv::new();
    let broken = env.dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    env.cmd()
        .args(["list", "dQw4w9WgXcQ", "--segments"])
        .arg(&broken)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn list_empty_video_id_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list", "  "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No video id given"));
}

// ============================================================================
// videos
// ============================================================================

#[test]
fn videos_lists_dataset_ids_sorted() {
    let env = TestEnv::new();
    let output = env.cmd().arg("videos").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "dQw4w9WgXcQ\nlive-set-2023\nno-songs\n"
    );
}

#[test]
fn videos_empty_names_where_it_looked() {
    let env = TestEnv::new();
    let missing = env.dir.path().join("nope.json");
    env.cmd()
        .args(["videos", "--segments"])
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("No videos found"))
        .stdout(predicate::str::contains("nope.json"))
        .stdout(predicate::str::contains("overrides"));
}

// ============================================================================
// override
// ============================================================================

#[test]
fn override_shadows_dataset() {
    let env = TestEnv::new();
    env.cmd()
        .args(["override", "set", "dQw4w9WgXcQ"])
        .arg(fixture_path("override.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored 2 segment(s) for dQw4w9WgXcQ"));

    assert!(env.overrides_dir().join("dQw4w9WgXcQ.json").exists());

    env.cmd()
        .args(["list", "dQw4w9WgXcQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cold open"))
        .stdout(predicate::str::contains("Intro").not());

    env.cmd()
        .arg("videos")
        .assert()
        .success()
        .stdout(predicate::str::contains("dQw4w9WgXcQ (override)"));
}

#[test]
fn override_for_new_video_appears_in_videos() {
    let env = TestEnv::new();
    env.cmd()
        .args(["override", "set", "https://youtu.be/brandNew01"])
        .arg(fixture_path("override.json"))
        .assert()
        .success();

    env.cmd()
        .args(["override", "list"])
        .assert()
        .success()
        .stdout("brandNew01\n");
}

#[test]
fn override_remove() {
    let env = TestEnv::new();
    env.cmd()
        .args(["override", "set", "abc"])
        .arg(fixture_path("override.json"))
        .assert()
        .success();

    env.cmd()
        .args(["override", "remove", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed override for abc"));

    env.cmd()
        .args(["override", "remove", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No override for abc"));
}

#[test]
fn override_rejects_invalid_segments() {
    let env = TestEnv::new();
    env.cmd()
        .args(["override", "set", "abc"])
        .arg(fixture_path("invalid_override.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not after its start"));

    assert!(!env.overrides_dir().join("abc.json").exists());
}

#[test]
fn override_list_empty() {
    let env = TestEnv::new();
    env.cmd()
        .args(["override", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overrides"));
}

// ============================================================================
// config and completions
// ============================================================================

#[test]
fn config_path_uses_env_dir() {
    let env = TestEnv::new();
    let expected = env.dir.path().join("config.toml");
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn config_show_includes_defaults() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("poll_interval_ms = 1000"))
        .stdout(predicate::str::contains("theme = \"player\""));
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::new();
    fs::write(env.dir.path().join("config.toml"), "[player\n").unwrap();
    env.cmd()
        .args(["list", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn completions_for_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("segshuf"));
}
