//! Moving the project directory to its new name

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::error::MkError;

/// Sibling of `current` called `name`, failing if it already exists
pub fn rename_target(current: &Path, name: &str) -> Result<PathBuf> {
    let parent = current.parent().ok_or_else(|| {
        MkError::precondition(format!("{} has no parent directory", current.display()))
    })?;
    let target = parent.join(name);

    if target.exists() {
        return Err(MkError::precondition(format!(
            "A directory named '{}' already exists in {}",
            name,
            parent.display()
        ))
        .into());
    }

    Ok(target)
}

/// Rename `current` to a sibling called `name` and return the new path.
///
/// An existing sibling is never merged or overwritten.
pub fn rename_project_dir(current: &Path, name: &str) -> Result<PathBuf> {
    let target = rename_target(current, name)?;

    let current_name = current
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    eprintln!("{} Renaming project: '{}' → '{}'", "↻".blue(), current_name, name);

    fs::rename(current, &target).with_context(|| {
        format!("Failed to rename {} to {}", current.display(), target.display())
    })?;

    eprintln!("{} Project moved to '{}'", "✓".green(), target.display());
    Ok(target)
}
