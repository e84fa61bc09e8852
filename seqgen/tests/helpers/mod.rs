//! Helpers to run the seqgen binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

/// The captured result of a single run of the binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) success: bool,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Run {
    /// The lines on stdout which are not statistics.
    pub(crate) fn sequence_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| !line.starts_with("%%%"))
            .collect()
    }
}

pub(crate) fn run_seqgen<'a>(args: impl IntoIterator<Item = &'a str>) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let binary = PathBuf::from(env!("CARGO_BIN_EXE_seqgen"));

    let mut child = Command::new(binary)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run seqgen");

    let status = match child
        .wait_timeout(TEST_TIMEOUT)
        .expect("failed to wait for seqgen")
    {
        Some(status) => status,
        None => {
            child.kill().expect("failed to kill seqgen");
            panic!("seqgen did not finish within {TEST_TIMEOUT:?}");
        }
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("stdout is valid utf-8");

    let mut stderr = String::new();
    let _ = child
        .stderr
        .take()
        .expect("stderr is piped")
        .read_to_string(&mut stderr)
        .expect("stderr is valid utf-8");

    Run {
        success: status.success(),
        stdout,
        stderr,
    }
}
