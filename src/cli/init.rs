//! Project initialization command

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::help::print_help;
use crate::config::Config;
use crate::error::MkError;
use crate::init::{Flow, Initializer};
use crate::process::SystemRunner;
use crate::prompt::TerminalPrompt;

/// Initialize or rename the project
#[derive(Args, Debug)]
pub struct InitCommand {
    /// `fork` to keep the template history as upstream
    pub mode: Option<String>,
}

impl InitCommand {
    /// Flow selected by the argument, or a usage error
    pub fn flow(&self) -> Result<Flow, MkError> {
        match self.mode.as_deref() {
            None => Ok(Flow::NewProject),
            Some("fork") => Ok(Flow::Fork),
            Some(other) => Err(MkError::usage(format!("init has a syntax error near '{}'", other))),
        }
    }

    pub fn execute(&self, config: &Config) -> Result<()> {
        let flow = match self.flow() {
            Ok(flow) => flow,
            Err(e) => {
                print_help();
                println!("{}", "init has a syntax error".red());
                println!("maybe you meant");
                println!("{}", "mk init".green());
                println!("{}", "mk init fork".green());
                return Err(e.into());
            }
        };

        let mut initializer = Initializer::new(
            Arc::new(config.clone()),
            TerminalPrompt,
            SystemRunner::new(),
        )
        .change_working_directory(true);

        initializer.run(flow)?;
        Ok(())
    }
}
