//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment with its own storage directory
//! and helpers for the frequent record-creation steps.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated storage directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the lodge storage directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("lodge-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Use this when a test needs full control over --data-dir or the
    /// `LODGE_DATA_DIR` environment variable.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("lodge").expect("Failed to find lodge binary");
        // Keep the test isolated from the invoking shell.
        cmd.env_remove("LODGE_DATA_DIR");
        cmd.env_remove("LODGE_LOG_MODE");
        cmd
    }

    /// Get a command builder with the storage directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Register a hotel and return its assigned id.
    pub fn add_hotel(&self, rooms: u32) -> u64 {
        let output = self
            .command()
            .arg("hotel")
            .arg("add")
            .arg("Grand Palace")
            .arg("Veracruz")
            .arg("--rooms")
            .arg(rooms.to_string())
            .output()
            .expect("Failed to run hotel add");

        assert!(
            output.status.success(),
            "hotel add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        first_number(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Register a customer and return its assigned id.
    pub fn add_customer(&self) -> u64 {
        let output = self
            .command()
            .arg("customer")
            .arg("add")
            .arg("Anuar")
            .arg("--email")
            .arg("anuar@email.com")
            .arg("--phone")
            .arg("2227709000")
            .output()
            .expect("Failed to run customer add");

        assert!(
            output.status.success(),
            "customer add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        first_number(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Book a reservation and return its assigned id.
    pub fn book(&self, customer: u64, hotel: u64) -> u64 {
        let output = self
            .command()
            .arg("reservation")
            .arg("book")
            .arg("--customer")
            .arg(customer.to_string())
            .arg("--hotel")
            .arg(hotel.to_string())
            .output()
            .expect("Failed to run reservation book");

        assert!(
            output.status.success(),
            "reservation book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        first_number(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the first integer appearing in command output.
///
/// Status lines lead with the assigned record id ("Registered hotel 3 ...").
#[allow(dead_code)]
pub fn first_number(output: &str) -> u64 {
    output
        .split(|c: char| !c.is_ascii_digit())
        .find(|s| !s.is_empty())
        .expect("Output contains no number")
        .parse()
        .expect("Output number is not a valid id")
}
