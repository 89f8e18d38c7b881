//! Validation rules for crate names and manifest paths.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{RenameError, Result};
use std::path::{Component, Path};

const MAX_PACKAGE_NAME_LENGTH: usize = 64;
const RESERVED_PACKAGE_NAMES: &[&str] = &["test", "doc", "build", "bench"];

/// Validates package name against Cargo rules.
///
/// ## Rules
/// - 1-64 ASCII characters
/// - Starts with letter or `_`
/// - Contains only `[a-zA-Z0-9_-]`
/// - Cannot start/end with `-`
/// - Not reserved (`test`, `doc`, `build`, `bench`)
///
/// ## Warnings (non-fatal)
/// - Consecutive `--`
/// - Uppercase letters
pub fn validate_package_name(name: &str) -> Result<()> {
    let invalid = |reason: String| Err(RenameError::InvalidName(name.to_string(), reason));

    let Some(first) = name.chars().next() else {
        return invalid("cannot be empty".to_string());
    };

    if name.len() > MAX_PACKAGE_NAME_LENGTH {
        return invalid(format!(
            "exceeds {} chars (has {})",
            MAX_PACKAGE_NAME_LENGTH,
            name.len()
        ));
    }

    if first == '-' {
        return invalid("cannot start with hyphen".to_string());
    }

    if !first.is_ascii_alphabetic() && first != '_' {
        return invalid("must start with letter or underscore".to_string());
    }

    for (idx, ch) in name.chars().enumerate() {
        if !ch.is_ascii() {
            return invalid(format!("non-ASCII character '{}' at position {}", ch, idx));
        }

        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '-' {
            return invalid(format!("invalid character '{}' at position {}", ch, idx));
        }
    }

    if RESERVED_PACKAGE_NAMES.contains(&name) {
        return invalid(format!(
            "'{}' is reserved. Reserved: {}",
            name,
            RESERVED_PACKAGE_NAMES.join(", ")
        ));
    }

    if name.ends_with('-') {
        return invalid("cannot end with hyphen".to_string());
    }

    if name.contains("--") {
        log::warn!("'{}' has consecutive hyphens", name);
    }

    if name.chars().any(|c| c.is_ascii_uppercase()) {
        log::warn!(
            "'{}' has uppercase (convention: lowercase-with-hyphens)",
            name
        );
    }

    Ok(())
}

/// Validates a manifest path taken from configuration.
///
/// Manifest paths are resolved against the workspace root, so they must be
/// relative, must not climb out of the root and must name a `Cargo.toml`.
pub fn validate_manifest_path(path_str: &str) -> Result<()> {
    let path = Path::new(path_str);

    if path.is_absolute() || path_str.starts_with('/') || path_str.starts_with('\\') {
        return Err(RenameError::InvalidConfig(format!(
            "manifest path must be relative to the workspace root: {}",
            path_str
        )));
    }

    if path.components().any(|c| c == Component::ParentDir) {
        return Err(RenameError::InvalidConfig(format!(
            "manifest path contains '..': {}",
            path_str
        )));
    }

    if path.file_name().and_then(|n| n.to_str()) != Some("Cargo.toml") {
        return Err(RenameError::InvalidConfig(format!(
            "not a Cargo.toml manifest: {}",
            path_str
        )));
    }

    Ok(())
}
