use anyhow::{Context, Result};
use std::process::Command;

/// Runs an external program and reports its exit code.
///
/// The pipeline only ever needs "program + args -> exit code", so steps
/// take this trait instead of spawning directly and tests substitute a
/// fake runner.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<i32>;
}

/// Real runner backed by `std::process::Command`.
///
/// Blocks until the child exits. A program that cannot be spawned at all
/// is an error; a child killed by a signal reports a non-zero code.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<i32> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run '{}'", program))?;
        Ok(status.code().unwrap_or(-1))
    }
}
