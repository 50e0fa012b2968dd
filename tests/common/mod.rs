//! Common test utilities for compliance-markup scenario tests.
//!
//! `Workspace` lays out a module tree, a compliance data directory and a
//! facts file inside one temp directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub mod fixtures;

pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// `modules/<dir>/metadata.json`
    pub fn module(&self, dir: &str, name: &str, version: &str) -> PathBuf {
        self.write(
            &format!("modules/{}/metadata.json", dir),
            &format!(r#"{{"name": "{}", "version": "{}"}}"#, name, version),
        )
    }

    pub fn modules_dir(&self) -> PathBuf {
        self.path("modules")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path("data")
    }

    /// Run the CLI inside the workspace with a clean environment
    pub fn run(&self, args: &[&str]) -> Output {
        cli(self.root.path()).args(args).output().unwrap()
    }
}

pub fn cli(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_compliance-markup"));
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("COMPLIANCE_MARKUP_COMPLIANCE_DATA_DIR")
        .env_remove("COMPLIANCE_MARKUP_ENFORCEMENT")
        .env_remove("COMPLIANCE_MARKUP_MODE")
        .env_remove("COMPLIANCE_MARKUP_VERBOSITY")
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("HOME", cwd);
    cmd
}
