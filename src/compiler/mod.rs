//! Asset compiler
//!
//! Prepares the output roots of the active mode and runs the style stage and
//! then the script stage. Per-file failures end up in the report, never in
//! the returned error.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use colored::Colorize;
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use tracing::{debug, error, info};

use crate::bundler::{Bundler, SCRIPT_EXTENSIONS};
use crate::config::{Config, DirMapping};
use crate::process::CommandRunner;
use crate::transform::{Transformer, STYLE_EXTENSIONS};
use crate::utils::format_duration;

/// Which output root and which transforms to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Unminified output with inline sourcemaps
    Development,
    /// Minified output for distribution
    Production,
}

impl Mode {
    /// Output root of `mapping` for this mode
    pub fn output_root<'a>(&self, mapping: &'a DirMapping) -> &'a str {
        match self {
            Mode::Development => &mapping.dev,
            Mode::Production => &mapping.build,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

/// Outcome of one transform stage
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// Output files written
    pub written: Vec<PathBuf>,

    /// Source files that failed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

/// Outcome of a full compile
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub styles: StageReport,
    pub scripts: StageReport,
}

impl CompileReport {
    pub fn written(&self) -> usize {
        self.styles.written.len() + self.scripts.written.len()
    }

    pub fn failed(&self) -> usize {
        self.styles.failed.len() + self.scripts.failed.len()
    }
}

/// Runs the asset pipeline for one project
pub struct Compiler<R: CommandRunner> {
    config: Arc<Config>,
    transformer: Transformer,
    bundler: Bundler<R>,
}

impl<R: CommandRunner> Compiler<R> {
    /// Create a compiler; `runner` spawns the script bundler
    pub fn new(config: Arc<Config>, runner: R) -> Self {
        Self {
            transformer: Transformer::new(config.clone()),
            bundler: Bundler::new(config.clone(), runner),
            config,
        }
    }

    /// Compile all assets for `mode`
    pub fn compile(&mut self, mode: Mode) -> Result<CompileReport> {
        let start = Instant::now();
        info!("Compiling assets for {}", mode.label());

        self.setup_directories(mode)?;

        let report = CompileReport {
            styles: self.transformer.compile_styles(mode),
            scripts: self.bundler.compile_scripts(mode),
        };

        let summary = format!(
            "{} file(s) written in {}",
            report.written(),
            format_duration(start.elapsed())
        );
        if report.failed() == 0 {
            eprintln!("\n{} {}\n", "✓".green().bold(), summary);
        } else {
            eprintln!(
                "\n{} {}, {} failed\n",
                "✗".red().bold(),
                summary,
                report.failed().to_string().red()
            );
        }

        Ok(report)
    }

    /// Create the output root of every category for `mode`
    fn setup_directories(&self, mode: Mode) -> Result<()> {
        for (name, mapping) in self.config.dirs.categories() {
            let dir = self.config.resolve(mode.output_root(mapping));
            debug!("Ensuring {} output directory {}", name, dir.display());
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(())
    }

    /// Recompile in development mode whenever a source root changes.
    ///
    /// Blocks until the watcher shuts down.
    pub fn watch(&mut self) -> Result<()> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(Duration::from_millis(100), tx)?;

        let mut watched = 0;
        for mapping in [&self.config.dirs.style, &self.config.dirs.script] {
            let root = self.config.resolve(&mapping.source);
            if root.is_dir() {
                debouncer.watcher().watch(&root, RecursiveMode::Recursive)?;
                watched += 1;
            }
        }

        if watched == 0 {
            anyhow::bail!("No asset source directory exists to watch");
        }

        eprintln!("  {} Watching for changes, press {} to stop\n", "•".dimmed(), "Ctrl+C".yellow());

        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    let relevant = events.iter().any(|event| is_asset(&event.path));
                    if relevant {
                        eprintln!("  {} Change detected, recompiling", "↻".yellow());
                        self.compile(Mode::Development)?;
                    }
                }
                Ok(Err(e)) => {
                    error!("Watch error: {:?}", e);
                }
                Err(_) => break,
            }
        }

        Ok(())
    }
}

fn is_asset(path: &std::path::Path) -> bool {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    STYLE_EXTENSIONS
        .iter()
        .chain(SCRIPT_EXTENSIONS)
        .any(|ext| name.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;
    use std::path::Path;

    #[test]
    fn test_output_root_per_mode() {
        let config = Config::default_config(".");
        assert_eq!(Mode::Development.output_root(&config.dirs.script), "public/js");
        assert_eq!(Mode::Production.output_root(&config.dirs.script), "dist/public/js");
    }

    #[test]
    fn test_compile_creates_output_roots() {
        let dir = tempfile::tempdir().unwrap();
        let config = Arc::new(Config::default_config(dir.path()));
        let mut compiler = Compiler::new(config, RecordingRunner::new());

        let report = compiler.compile(Mode::Development).unwrap();

        assert_eq!(report, CompileReport::default());
        for sub in ["public/js", "public/css", "public/wasm", "internal/ui/view"] {
            assert!(dir.path().join(sub).is_dir(), "{} missing", sub);
        }
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_compile_runs_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("internal/ui/css")).unwrap();
        fs::create_dir_all(dir.path().join("internal/ui/ts")).unwrap();
        fs::write(dir.path().join("internal/ui/css/app.css"), "a { b: c; }").unwrap();
        fs::write(dir.path().join("internal/ui/ts/app.ts"), "let a = 1;").unwrap();

        let config = Arc::new(Config::default_config(dir.path()));
        let mut compiler = Compiler::new(config, RecordingRunner::new());
        let report = compiler.compile(Mode::Production).unwrap();

        assert_eq!(report.written(), 2);
        assert_eq!(report.failed(), 0);
        assert_eq!(
            fs::read_to_string(dir.path().join("dist/public/css/app.css")).unwrap(),
            "a{b: c}"
        );
        assert_eq!(report.scripts.written, vec![dir.path().join("dist/public/js/app.js")]);
    }

    #[test]
    fn test_is_asset() {
        assert!(is_asset(Path::new("/x/internal/ui/css/a.css")));
        assert!(is_asset(Path::new("main.ts")));
        assert!(!is_asset(Path::new("notes.md")));
    }
}
