//! Test environment for running the `dockerimages` binary in isolation.
//!
//! The container runtime is replaced by a shell script that records every
//! invocation in `runtime.log`, keeps the set of "local" images in
//! `present.txt`, and writes a small placeholder file for `save -o`.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const FAKE_RUNTIME: &str = r#"#!/bin/sh
state="$(dirname "$0")"
echo "$*" >> "$state/runtime.log"
case "$1" in
  --version)
    echo "fake-runtime 0.0.0"
    ;;
  image)
    grep -qxF "$3" "$state/present.txt" 2>/dev/null
    exit $?
    ;;
  pull)
    for image; do :; done
    if grep -qxF "$image" "$state/fail.txt" 2>/dev/null; then
      echo "Error response from daemon: manifest for $image not found" >&2
      exit 1
    fi
    echo "pulling $image"
    echo "$image" >> "$state/present.txt"
    ;;
  save)
    printf 'fake archive' > "$3"
    ;;
  images)
    cat "$state/present.txt" 2>/dev/null
    ;;
  *)
    exit 2
    ;;
esac
"#;

/// Result of running a dockerimages CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON: {l}: {e}\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated working directory, home directory and fake runtime
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    runtime_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            project_root: TempDir::new().expect("project dir"),
            home_dir: TempDir::new().expect("home dir"),
            runtime_dir: TempDir::new().expect("runtime dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_dockerimages")),
        };

        let script = env.runtime_path();
        std::fs::write(&script, FAKE_RUNTIME).expect("write fake runtime");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake runtime");
        env
    }

    /// Pretend these images are already local
    pub fn with_present(self, images: &[&str]) -> Self {
        self.append_lines("present.txt", images);
        self
    }

    /// Make `pull` fail for these images
    pub fn with_failing_pulls(self, images: &[&str]) -> Self {
        self.append_lines("fail.txt", images);
        self
    }

    fn append_lines(&self, file: &str, lines: &[&str]) {
        use std::io::Write;
        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.runtime_dir.path().join(file))
            .expect("open state file");
        for line in lines {
            writeln!(f, "{line}").expect("write state file");
        }
    }

    pub fn runtime_path(&self) -> PathBuf {
        self.runtime_dir.path().join("fake-docker")
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create dirs");
        }
        std::fs::write(path, content).expect("write file");
    }

    pub fn write_user_config(&self, content: &str) {
        let path = self
            .home_dir
            .path()
            .join(".config/dockerimages/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("create config dir");
        std::fs::write(path, content).expect("write user config");
    }

    /// Every runtime invocation so far, one argument string per line
    pub fn runtime_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.runtime_dir.path().join("runtime.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("DOCKERIMAGES_RUNTIME", self.runtime_path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("DOCKERIMAGES_PLATFORM")
            .env_remove("DOCKERIMAGES_OUTPUT")
            .env_remove("DOCKERIMAGES_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute dockerimages");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Files directly under `dir`, sorted
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
