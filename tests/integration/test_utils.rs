//! Shared helpers: isolated environments for running the cwmerge binary.

use serde_json::Value;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A temp directory that also serves as HOME and XDG_CONFIG_HOME, so no global
/// settings file from the host leaks into a test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        path
    }

    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, text).unwrap();
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("xdg-config")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cwmerge"));
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("CWMERGE_LOG")
            .env_remove("CWMERGE_LOG_FORMAT")
            .env_remove("CWMERGE_LOG_OUTPUT")
            .env_remove("CWMERGE_LOG_MODULES")
            .env_remove("CWMERGE_MERGE__SHAPE_CONFLICT");
        cmd
    }

    pub fn run<P: AsRef<OsStr>>(&self, args: &[P]) -> Output {
        self.command().args(args).output().unwrap()
    }
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
