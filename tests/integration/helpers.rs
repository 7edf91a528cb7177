//! Shared test helpers

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Isolated config + data directories for one CLI run.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Config pointing at the fixture dataset and an empty override directory.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = format!(
            "[data]\nsegments_file = {:?}\noverrides_dir = {:?}\n",
            fixture_path("segments.json").display().to_string(),
            dir.path().join("overrides").display().to_string(),
        );
        std::fs::write(dir.path().join("config.toml"), config).unwrap();
        Self { dir }
    }

    pub fn overrides_dir(&self) -> PathBuf {
        self.dir.path().join("overrides")
    }

    /// `segshuf` with this environment and colors off.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("segshuf").unwrap();
        cmd.env("SEGSHUF_CONFIG_DIR", self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("SEGSHUF_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}
