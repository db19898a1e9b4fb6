//! Upstream merge command

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::config::Config;
use crate::error::MkError;
use crate::git;
use crate::process::SystemRunner;

/// Merge the template repository into a fork
#[derive(Args, Debug)]
pub struct MergeCommand {
    /// Remote to merge from; only `upstream` is supported
    pub source: Option<String>,
}

impl MergeCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        if self.source.as_deref() != Some("upstream") {
            println!("{}", "maybe you meant".dimmed());
            println!("{}", "mk merge upstream".green());
            return Err(MkError::usage("merge expects 'upstream'").into());
        }

        git::sync_upstream(&mut SystemRunner::new(), &config.root, &config.init.upstream_branch)?;
        eprintln!("{}", "✓ Upstream merged".green().bold());
        Ok(())
    }
}
