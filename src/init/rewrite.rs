//! Text rewrites applied when a project takes over the template

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::ProjectId;
use crate::error::MkError;
use crate::utils::list_files;

/// Set the manifest's `name` field, keeping the other keys in place
pub fn update_manifest(path: &Path, name: &str) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut manifest: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let object = manifest.as_object_mut().ok_or_else(|| {
        MkError::precondition(format!("{} is not a JSON object", path.display()))
    })?;
    object.insert("name".to_string(), Value::String(name.to_string()));

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Point the module declaration at `id`.
///
/// Replaces the `module <placeholder>` line and every `<placeholder>/`
/// prefix. Returns false when the file does not exist or already matches.
pub fn rewrite_module_file(path: &Path, placeholder: &str, id: &ProjectId) -> Result<bool> {
    if !path.is_file() {
        warn!("Module file {} not found, skipping module rewrite", path.display());
        return Ok(false);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let declaration = Regex::new(&format!(r"(?m)^module[ \t]+{}([ \t\r]*)$", regex::escape(placeholder)))?;
    let rewritten = declaration.replace_all(&content, format!("module {}${{1}}", id).as_str());
    let rewritten = rewritten.replace(&format!("{}/", placeholder), &format!("{}/", id));

    if rewritten == content {
        return Ok(false);
    }

    fs::write(path, rewritten).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Replace every literal `from` with `to` in `files`.
///
/// Files without `from` are neither written nor counted. Returns the number
/// of files modified.
pub fn replace_in_files(files: &[PathBuf], from: &str, to: &str) -> Result<usize> {
    let mut modified = 0;

    for file in files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        if !content.contains(from) {
            continue;
        }

        fs::write(file, content.replace(from, to))
            .with_context(|| format!("Failed to write {}", file.display()))?;
        debug!("Rewrote imports in {}", file.display());
        modified += 1;
    }

    Ok(modified)
}

/// Source files whose imports are rewritten: everything under the internal
/// directory plus the source files directly in the project root
pub fn import_candidates(root: &Path, internal_dir: &str, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let extensions: Vec<&str> = extensions.iter().map(String::as_str).collect();
    let mut files = list_files(&root.join(internal_dir), &extensions);

    for entry in fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_file() && extensions.iter().any(|ext| name.ends_with(ext)) {
            files.push(entry.path());
        }
    }

    Ok(files)
}
