//! Production build command

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::compiler::{Compiler, Mode};
use crate::config::Config;
use crate::process::SystemRunner;

/// Compile assets for production
#[derive(Args, Debug)]
pub struct BuildCommand {}

impl BuildCommand {
    pub fn execute(&self, config: Config) -> Result<()> {
        eprintln!("{} Compiling assets for {}...\n", "→".blue(), "production".cyan());

        let mut compiler = Compiler::new(Arc::new(config), SystemRunner::new());
        compiler.compile(Mode::Production)?;

        Ok(())
    }
}
