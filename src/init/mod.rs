//! Project initialization
//!
//! Turns a fresh copy of the template into a project of its own: new name in
//! the manifest, new module path, rewritten imports, renamed directory and
//! a new (or forked) Git history.

mod project_id;
mod rename;
mod rewrite;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::MkError;
use crate::git;
use crate::process::{CommandRunner, ShellCommand};
use crate::prompt::Prompt;

pub use project_id::ProjectId;
pub use rename::{rename_project_dir, rename_target};
pub use rewrite::{import_candidates, replace_in_files, rewrite_module_file, update_manifest};

/// Which initialization flow to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Drop the template history and start a new repository
    NewProject,
    /// Keep the history and track the template as `upstream`
    Fork,
}

/// Drives the initialization flows for the project at `root`
pub struct Initializer<P: Prompt, R: CommandRunner> {
    config: Arc<Config>,
    prompt: P,
    runner: R,
    root: PathBuf,
    change_working_directory: bool,
}

impl<P: Prompt, R: CommandRunner> Initializer<P, R> {
    pub fn new(config: Arc<Config>, prompt: P, runner: R) -> Self {
        Self {
            root: config.root.clone(),
            config,
            prompt,
            runner,
            change_working_directory: false,
        }
    }

    /// Also move the process into the renamed directory
    pub fn change_working_directory(mut self, enabled: bool) -> Self {
        self.change_working_directory = enabled;
        self
    }

    /// Current project root; changes after the directory rename
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn run(&mut self, flow: Flow) -> Result<ProjectId> {
        match flow {
            Flow::NewProject => self.new_project(),
            Flow::Fork => self.fork(),
        }
    }

    /// Set up the project and start a fresh Git history
    pub fn new_project(&mut self) -> Result<ProjectId> {
        let id = self.setup()?;
        eprintln!("\n{}", "Starting new project...".magenta());

        self.remove_git_history()?;
        self.exec(self.install())?;
        self.exec(git::init())?;
        self.exec(git::add_all())?;
        self.exec(git::commit(&self.config.init.commit_message))?;

        eprintln!("{}", "🎉 Project initialized!".green().bold());
        Ok(id)
    }

    /// Set up the project keeping the template history as `upstream`
    pub fn fork(&mut self) -> Result<ProjectId> {
        let id = self.setup()?;
        eprintln!("\n{}\n", "Setting up fork".bold());

        self.exec(self.install())?;
        self.exec(git::rename_origin_to_upstream())?;
        self.exec(git::add_all())?;
        self.exec(git::commit(&self.config.init.commit_message))?;

        eprintln!("{}", "🎉 Fork configured!".green().bold());
        Ok(id)
    }

    /// Shared setup: identifier, manifest, module path, imports, directory
    pub fn setup(&mut self) -> Result<ProjectId> {
        let init = &self.config.init;

        eprintln!("Format: gitUser/projectName");
        let answer = self.prompt.input("Project name", &init.default_identifier)?;
        let id = ProjectId::parse(answer.trim())?;

        let manifest = self.root.join(&init.manifest);
        if !manifest.is_file() {
            return Err(MkError::precondition(format!(
                "{} not found in {}",
                init.manifest,
                self.root.display()
            ))
            .into());
        }
        rename_target(&self.root, id.name())?;

        eprintln!("\n{} {}\n", "Setting up project:".bold(), id.to_string().cyan());

        update_manifest(&manifest, id.name())?;
        eprintln!("{} {} updated - name: {}", "✓".green(), init.manifest, id.name());

        self.rewrite_module_path(&id)?;

        let target = rename_project_dir(&self.root, id.name())?;
        if self.change_working_directory {
            std::env::set_current_dir(&target)
                .with_context(|| format!("Failed to enter {}", target.display()))?;
        }
        self.root = target;

        Ok(id)
    }

    /// Rewrite the module file and the internal imports, then tidy
    fn rewrite_module_path(&mut self, id: &ProjectId) -> Result<()> {
        let init = &self.config.init;

        let module_file = self.root.join(&init.module_file);
        if rewrite_module_file(&module_file, &init.placeholder, id)? {
            eprintln!("{} {} updated - module: {}", "✓".green(), init.module_file, id);
        }

        let from = init.placeholder_prefix();
        let to = format!("{}/{}/", id, init.internal_dir);
        let files = import_candidates(&self.root, &init.internal_dir, &init.source_extensions)?;
        debug!("Checking {} source file(s) for {}", files.len(), from);

        let modified = replace_in_files(&files, &from, &to)?;
        info!("Rewrote imports in {} file(s)", modified);
        eprintln!("{} Imports updated in {} file(s): {} → {}", "✓".green(), modified, from, to);

        if let Some(tidy) = ShellCommand::from_argv(&init.tidy, "Tidying dependencies") {
            self.exec(tidy)?;
        }

        Ok(())
    }

    fn remove_git_history(&self) -> Result<()> {
        let git_dir = self.root.join(".git");
        eprintln!("{}", "Removing existing Git history".blue());
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir)
                .with_context(|| format!("Failed to remove {}", git_dir.display()))?;
        }
        Ok(())
    }

    fn install(&self) -> ShellCommand {
        ShellCommand::new(
            &self.config.init.package_manager,
            ["install"],
            "Installing dependencies",
        )
    }

    fn exec(&mut self, command: ShellCommand) -> Result<()> {
        self.runner.run(&command, &self.root)?;
        Ok(())
    }
}
