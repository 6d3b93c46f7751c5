#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper struct to run ticketdesk commands in an isolated temp directory
pub struct TicketDeskTest {
    pub temp_dir: TempDir,
}

impl TicketDeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TicketDeskTest { temp_dir }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ticketdesk"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TICKETDESK_ROOT", self.temp_dir.path().join(".ticketdesk"))
            .env_remove("RUST_LOG")
            .env_remove("FORCE_COLOR")
            .env_remove("CLICOLOR_FORCE")
            .output()
            .expect("Failed to execute ticketdesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write a file relative to the temp directory
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    /// Point the demo source at zero latency so tests stay fast
    pub fn without_latency(self) -> Self {
        self.write_file(".ticketdesk/config.yaml", "source:\n  latency_ms: 0\n");
        self
    }
}
