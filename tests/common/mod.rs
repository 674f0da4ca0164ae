// tests/common/mod.rs
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Binary wired to a throwaway preference file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("tempdir") }
    }

    pub fn prefs_path(&self) -> PathBuf {
        self.dir.path().join("preferences.json")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_word_counter"));
        cmd.env("WORD_COUNTER_PREFS", self.prefs_path()).env_remove("RUST_LOG");
        cmd
    }
}
