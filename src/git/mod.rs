//! Git invocations used by the initializer and the upstream merge

use std::path::Path;

use anyhow::Result;

use crate::process::{CommandRunner, ShellCommand};

pub fn init() -> ShellCommand {
    ShellCommand::new("git", ["init"], "Initializing a new Git repository")
}

pub fn add_all() -> ShellCommand {
    ShellCommand::new("git", ["add", "."], "Staging files")
}

pub fn commit(message: &str) -> ShellCommand {
    ShellCommand::new("git", ["commit", "-m", message], "Creating the initial commit")
}

/// Keep the template's history reachable under `upstream`
pub fn rename_origin_to_upstream() -> ShellCommand {
    ShellCommand::new(
        "git",
        ["remote", "rename", "origin", "upstream"],
        "Renaming origin to upstream",
    )
}

pub fn fetch_upstream() -> ShellCommand {
    ShellCommand::new("git", ["fetch", "upstream"], "Fetching upstream changes")
}

pub fn merge_upstream(branch: &str) -> ShellCommand {
    ShellCommand::new(
        "git",
        ["merge".to_string(), format!("upstream/{}", branch)],
        "Merging upstream into the current branch",
    )
}

/// Fetch the template repository and merge `branch` into the current one
pub fn sync_upstream<R: CommandRunner>(runner: &mut R, root: &Path, branch: &str) -> Result<()> {
    runner.run(&fetch_upstream(), root)?;
    runner.run(&merge_upstream(branch), root)?;
    Ok(())
}
