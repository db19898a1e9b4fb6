//! Test doubles for external collaborators
//!
//! Drives the compiler and the initializer without spawning processes or
//! reading from a terminal.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::MkError;
use crate::process::{CommandOutput, CommandRunner, ShellCommand};
use crate::prompt::Prompt;

/// Runner that records commands instead of spawning them
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: Vec<(ShellCommand, PathBuf)>,
    fail_patterns: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command whose rendered form contains `pattern`
    pub fn fail_when(&mut self, pattern: &str) {
        self.fail_patterns.push(pattern.to_string());
    }

    /// Commands run so far, rendered as command lines
    pub fn commands(&self) -> Vec<String> {
        self.commands.iter().map(|(cmd, _)| cmd.to_string()).collect()
    }

    /// Working directories the commands ran in
    pub fn directories(&self) -> Vec<PathBuf> {
        self.commands.iter().map(|(_, cwd)| cwd.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutput, MkError> {
        self.commands.push((command.clone(), cwd.to_path_buf()));

        let rendered = command.to_string();
        if self.fail_patterns.iter().any(|p| rendered.contains(p.as_str())) {
            return Err(MkError::Command {
                command: rendered,
                status: "exit status: 1".to_string(),
                stderr: "simulated failure".to_string(),
            });
        }

        Ok(CommandOutput::default())
    }
}

/// Prompt that replays canned answers in order
#[derive(Debug, Default)]
pub struct CannedPrompt {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl CannedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Questions asked so far
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Prompt for CannedPrompt {
    fn input(&mut self, question: &str, default: &str) -> Result<String> {
        self.questions.push(question.to_string());
        let answer = self.answers.pop_front().unwrap_or_default();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}
