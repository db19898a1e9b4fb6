//! Script bundling
//!
//! Each TypeScript/JavaScript source is handed to the external bundler on its
//! own: browser target, inline sourcemaps in development, minified without
//! sourcemaps in production.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{error, warn};

use crate::compiler::{Mode, StageReport};
use crate::config::Config;
use crate::process::{CommandRunner, ShellCommand};
use crate::utils::{list_files, mirror_path};

/// Extensions picked up by the script stage
pub const SCRIPT_EXTENSIONS: &[&str] = &[".js", ".ts"];

/// Script stage driving the external bundler
pub struct Bundler<R: CommandRunner> {
    /// Project configuration
    config: Arc<Config>,

    /// Runs the bundler process
    runner: R,
}

impl<R: CommandRunner> Bundler<R> {
    /// Create a new bundler stage
    pub fn new(config: Arc<Config>, runner: R) -> Self {
        Self { config, runner }
    }

    /// Bundler invocation for one entry point
    pub fn command(&self, entry: &Path, outfile: &Path, mode: Mode) -> ShellCommand {
        let mut args = vec![
            "build".to_string(),
            entry.display().to_string(),
            "--target".to_string(),
            "browser".to_string(),
            "--outfile".to_string(),
            outfile.display().to_string(),
        ];

        match mode {
            Mode::Development => {
                args.push("--sourcemap=inline".to_string());
            }
            Mode::Production => {
                args.push("--minify".to_string());
                args.push("--sourcemap=none".to_string());
            }
        }

        ShellCommand::new(&self.config.bundler.program, args, "")
    }

    /// Compile every script under the script source root
    pub fn compile_scripts(&mut self, mode: Mode) -> StageReport {
        let mapping = &self.config.dirs.script;
        let source_root = self.config.resolve(&mapping.source);
        let output_root = self.config.resolve(mode.output_root(mapping));
        let mut report = StageReport::default();

        if !source_root.is_dir() {
            warn!("Directory {} does not exist, skipping scripts", source_root.display());
            return report;
        }

        for file in list_files(&source_root, SCRIPT_EXTENSIONS) {
            match self.compile_file(&file, &source_root, &output_root, mode) {
                Ok(output) => {
                    eprintln!(
                        "  {} Compiled {} {} {}",
                        "✓".green(),
                        file.display(),
                        "→".dimmed(),
                        output.display().to_string().cyan()
                    );
                    report.written.push(output);
                }
                Err(e) => {
                    error!("Failed to compile {}: {:#}", file.display(), e);
                    report.failed.push((file, format!("{:#}", e)));
                }
            }
        }

        report
    }

    fn compile_file(
        &mut self,
        file: &Path,
        source_root: &Path,
        output_root: &Path,
        mode: Mode,
    ) -> Result<PathBuf> {
        let output = script_output_path(file, source_root, output_root)
            .with_context(|| format!("{} is outside {}", file.display(), source_root.display()))?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let command = self.command(file, &output, mode);
        self.runner.run(&command, &self.config.root)?;

        Ok(output)
    }
}

/// Output path of a script: mirrored into `output_root` with a `.js` extension
pub fn script_output_path(file: &Path, source_root: &Path, output_root: &Path) -> Option<PathBuf> {
    let mut output = mirror_path(file, source_root, output_root)?;
    if matches!(output.extension().and_then(|e| e.to_str()), Some("ts" | "js")) {
        output.set_extension("js");
    }
    Some(output)
}
