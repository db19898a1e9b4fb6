//! Style sheet transformation
//!
//! Copies CSS sources into the development root, or minifies them into the
//! production root.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, error, warn};

use crate::compiler::{Mode, StageReport};
use crate::config::Config;
use crate::utils::{list_files, mirror_path};

/// Extensions picked up by the style stage
pub const STYLE_EXTENSIONS: &[&str] = &[".css"];

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static AFTER_SEMICOLON: Lazy<Regex> = Lazy::new(|| Regex::new(r";\s*").unwrap());

static TRAILING_SEMICOLON: Lazy<Regex> = Lazy::new(|| Regex::new(r";+\s*\}").unwrap());

static AROUND_BRACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*([{}])\s*").unwrap());

/// Minify a style sheet.
///
/// Strips block comments and collapses whitespace. Whitespace after a
/// semicolon goes, then the semicolon before a closing brace, then whitespace
/// around braces. Whitespace before a semicolon is kept.
/// `minify(minify(x)) == minify(x)` for every input.
pub fn minify(source: &str) -> String {
    // Removing one comment can splice a new one together
    let mut content = source.to_string();
    while BLOCK_COMMENT.is_match(&content) {
        content = BLOCK_COMMENT.replace_all(&content, "").into_owned();
    }

    let content = WHITESPACE.replace_all(&content, " ");
    let content = AFTER_SEMICOLON.replace_all(&content, ";");
    let content = TRAILING_SEMICOLON.replace_all(&content, "}");
    let content = AROUND_BRACE.replace_all(&content, "$1");

    content.trim().to_string()
}

/// CSS transform stage
pub struct Transformer {
    /// Project configuration
    config: Arc<Config>,
}

impl Transformer {
    /// Create a new transformer
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Compile every style sheet under the style source root
    pub fn compile_styles(&self, mode: Mode) -> StageReport {
        let mapping = &self.config.dirs.style;
        let source_root = self.config.resolve(&mapping.source);
        let output_root = self.config.resolve(mode.output_root(mapping));
        let mut report = StageReport::default();

        if !source_root.is_dir() {
            warn!("Directory {} does not exist, skipping styles", source_root.display());
            return report;
        }

        for file in list_files(&source_root, STYLE_EXTENSIONS) {
            match self.compile_file(&file, &source_root, &output_root, mode) {
                Ok(output) => {
                    eprintln!(
                        "  {} Copied {} {} {}",
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
        &self,
        file: &Path,
        source_root: &Path,
        output_root: &Path,
        mode: Mode,
    ) -> Result<std::path::PathBuf> {
        let output = mirror_path(file, source_root, output_root)
            .with_context(|| format!("{} is outside {}", file.display(), source_root.display()))?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        let content = match mode {
            Mode::Development => content,
            Mode::Production => minify(&content),
        };

        debug!("Writing {} bytes to {}", content.len(), output.display());
        fs::write(&output, content)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minify_basic() {
        let css = "/* header */\nbody {\n  color: red;\n  margin: 0;\n}\n\na:hover { color: blue; }\n";
        assert_eq!(minify(css), "body{color: red;margin: 0}a:hover{color: blue}");
    }

    #[test]
    fn test_minify_multiline_comment() {
        let css = "/*\n * multi\n * line\n */\n.a { top: 0 }";
        assert_eq!(minify(css), ".a{top: 0}");
    }

    #[test]
    fn test_minify_nested_media() {
        let css = "@media (max-width: 600px) {\n  .a { display: none; }\n}\n";
        assert_eq!(minify(css), "@media (max-width: 600px){.a{display: none}}");
    }

    #[test]
    fn test_minify_keeps_space_before_semicolon() {
        assert_eq!(minify("a { margin: 0 ;padding: 0 }"), "a{margin: 0 ;padding: 0}");
        assert_eq!(
            minify("a { content: \"x ;\" ; margin: 0 ; }"),
            "a{content: \"x ;\" ;margin: 0}"
        );
    }

    #[test]
    fn test_minify_spliced_comment() {
        assert_eq!(minify("//**/*x*/a{}"), "a{}");
    }

    #[test]
    fn test_minify_idempotent() {
        let samples = [
            "",
            "   ",
            "a ; ; }",
            "x ;}",
            "body {\n color : red ;\n}\n",
            "/* a */ /* b */ .c{}",
            "/**/*x*/ .y { a: b; ; }",
            ".a{b:c;;}\t\n.d  {  }",
            "@import url(foo.css);\n:root { --x: 1px; }",
            "a{}b{}/* trailing",
            "{ ;}",
            "a ;{ b ; ; }",
        ];

        for sample in samples {
            let once = minify(sample);
            assert_eq!(minify(&once), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_compile_styles_modes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Arc::new(Config::default_config(dir.path()));
        let source = dir.path().join("internal/ui/css/pages/home.css");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, "body {\n  color: red;\n}\n").unwrap();

        let transformer = Transformer::new(config);

        let dev = transformer.compile_styles(Mode::Development);
        let dev_out = dir.path().join("public/css/pages/home.css");
        assert_eq!(dev.written, vec![dev_out.clone()]);
        assert_eq!(fs::read_to_string(dev_out).unwrap(), "body {\n  color: red;\n}\n");

        let prod = transformer.compile_styles(Mode::Production);
        let prod_out = dir.path().join("dist/public/css/pages/home.css");
        assert_eq!(prod.written, vec![prod_out.clone()]);
        assert_eq!(fs::read_to_string(prod_out).unwrap(), "body{color: red}");
    }

    #[test]
    fn test_compile_styles_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let transformer = Transformer::new(Arc::new(Config::default_config(dir.path())));

        let report = transformer.compile_styles(Mode::Development);
        assert!(report.written.is_empty());
        assert!(report.failed.is_empty());
        assert!(!dir.path().join("public/css").exists());
    }

    #[test]
    fn test_compile_styles_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let css_root = dir.path().join("internal/ui/css");
        fs::create_dir_all(&css_root).unwrap();
        fs::write(css_root.join("bad.css"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(css_root.join("good.css"), "a { b: c; }").unwrap();

        let transformer = Transformer::new(Arc::new(Config::default_config(dir.path())));
        let report = transformer.compile_styles(Mode::Production);

        assert_eq!(report.written, vec![dir.path().join("dist/public/css/good.css")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, css_root.join("bad.css"));
    }
}
