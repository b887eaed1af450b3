//! External toolchain invocation.
//! Commands are run directly (no shell), block until exit and have their output captured.

use log::debug;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A single toolchain command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory the command runs in
    pub cwd: PathBuf,
}

impl ToolCommand {
    pub fn new<S: Into<String>, P: AsRef<Path>>(program: S, cwd: P) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: cwd.as_ref().to_path_buf() }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs toolchain commands.
pub trait CommandRunner {
    /// Runs `command` to completion.
    ///
    /// # Errors
    /// * `io::Error` if the program cannot be started
    fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput>;
}

/// Runner spawning real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        debug!("Running '{}' in {}", command, command.cwd.display());

        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::null())
            .output()?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let command = ToolCommand::new("go", "/tmp").arg("mod").arg("init").arg("example.com/demo");
        assert_eq!(command.to_string(), "go mod init example.com/demo");
    }

    #[test]
    fn test_missing_program_fails_to_start() {
        let command = ToolCommand::new("projgen-no-such-program", std::env::temp_dir());
        assert!(SystemRunner::new().run(&command).is_err());
    }

    #[test]
    fn test_success_requires_zero_exit() {
        assert!(ToolOutput { code: Some(0), ..Default::default() }.success());
        assert!(!ToolOutput { code: Some(1), ..Default::default() }.success());
        assert!(!ToolOutput { code: None, ..Default::default() }.success());
    }
}
