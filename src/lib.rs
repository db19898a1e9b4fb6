//! mk library
//!
//! Asset compilation and project initialization for the template.

pub mod bundler;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod git;
pub mod init;
pub mod process;
pub mod prompt;
pub mod testing;
pub mod transform;
pub mod utils;

pub use cli::Cli;
pub use compiler::{Compiler, Mode};
pub use config::Config;
pub use error::MkError;
