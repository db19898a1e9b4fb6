//! Command-line interface for mk
//!
//! Single-level dispatch on the first argument:
//! - `help` / `version`: informational
//! - `init [fork]`: project initialization
//! - `dev` / `build`: asset compilation
//! - `merge upstream`: sync a fork with the template

mod build;
mod dev;
mod help;
mod init;
mod merge;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

pub use build::BuildCommand;
pub use dev::DevCommand;
pub use help::{help_text, print_help, print_version, version_text};
pub use init::InitCommand;
pub use merge::MergeCommand;

/// mk - project assistant for the template
#[derive(Parser, Debug)]
#[command(name = "mk")]
#[command(disable_help_flag = true, disable_version_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print help
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Print version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Path to mk.toml config file
    #[arg(long, global = true, default_value = "mk.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print help
    #[command(alias = "h")]
    Help,

    /// Print version
    #[command(alias = "v")]
    Version,

    /// Initialize or rename the project
    Init(InitCommand),

    /// Compile assets for development
    Dev(DevCommand),

    /// Compile assets for production
    Build(BuildCommand),

    /// Merge the template repository into a fork
    Merge(MergeCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        if self.help {
            print_help();
            return Ok(());
        }
        if self.version {
            print_version();
            return Ok(());
        }

        match &self.command {
            None | Some(Commands::Help) => {
                print_help();
                Ok(())
            }
            Some(Commands::Version) => {
                print_version();
                Ok(())
            }
            Some(Commands::Init(cmd)) => cmd.execute(&self.load_config()?),
            Some(Commands::Dev(cmd)) => cmd.execute(self.load_config()?),
            Some(Commands::Build(cmd)) => cmd.execute(self.load_config()?),
            Some(Commands::Merge(cmd)) => cmd.execute(&self.load_config()?),
        }
    }

    fn load_config(&self) -> Result<Config> {
        tracing::debug!("Loading configuration from {}", self.config);
        Config::load(&self.config)
    }
}
