//! Development build command

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::compiler::{Compiler, Mode};
use crate::config::Config;
use crate::process::SystemRunner;

/// Compile assets for development
#[derive(Args, Debug)]
pub struct DevCommand {
    /// Keep running and recompile on changes
    #[arg(short, long)]
    pub watch: bool,
}

impl DevCommand {
    pub fn execute(&self, config: Config) -> Result<()> {
        eprintln!("{} Compiling assets for {}...\n", "→".blue(), "development".cyan());

        let mut compiler = Compiler::new(Arc::new(config), SystemRunner::new());
        compiler.compile(Mode::Development)?;

        if self.watch {
            compiler.watch()?;
        }

        Ok(())
    }
}
