//! External command execution
//!
//! Every package-manager, git and toolchain invocation goes through a
//! [`CommandRunner`], so flows can be driven without spawning processes.

use std::fmt;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::error::MkError;

/// A program invocation with a human description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
    pub description: String,
}

impl ShellCommand {
    pub fn new<I, S>(program: &str, args: I, description: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            description: description.to_string(),
        }
    }

    /// Build from a full argv, first element being the program
    pub fn from_argv(argv: &[String], description: &str) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program, args.iter().cloned(), description))
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands to completion, one at a time
pub trait CommandRunner {
    /// Run `command` in `cwd`. A non-zero exit is an error.
    fn run(&mut self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutput, MkError>;
}

/// Runner that spawns real processes
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn spinner(command: &ShellCommand) -> Option<ProgressBar> {
        if !console::Term::stderr().is_term() {
            return None;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(command.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutput, MkError> {
        if !command.description.is_empty() {
            eprintln!("{}", command.description.blue());
        }
        eprintln!("{} {}", "Running:".cyan(), command.to_string().green());
        debug!("Spawning {} in {}", command, cwd.display());

        let spinner = Self::spinner(command);
        let result = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .output();
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let output = result.map_err(|e| MkError::Command {
            command: command.to_string(),
            status: "not started".to_string(),
            stderr: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(MkError::Command {
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        eprintln!("{} {}\n", "✓".green(), stdout.trim());
        Ok(CommandOutput { stdout, stderr })
    }
}
