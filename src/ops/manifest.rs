//! Leaf manifest rewrite.
//!
//! Manifests are treated as text. Every pass is anchored by a regex on a
//! single `key = value` line, so formatting and comments survive untouched
//! and a missing anchor simply skips the pass.

use crate::config::{RenameConfig, lib_name};
use crate::error::Result;
use crate::ops::writer::{ManifestWriter, Outcome, read_manifest};
use regex::{Captures, Regex};
use std::path::Path;

/// Rewrites one crate manifest in place and prints its progress line.
pub fn update_leaf_manifest(
    manifest_path: &Path,
    config: &RenameConfig,
    add_lib: bool,
    writer: &mut ManifestWriter,
) -> Result<Outcome> {
    log::debug!("Updating leaf manifest: {}", manifest_path.display());

    let content = read_manifest(manifest_path)?;
    let new_content = transform_leaf_manifest(&content, config, add_lib)?;
    let outcome = writer.update_file(manifest_path, &content, &new_content)?;

    println!("  {}", manifest_path.display());
    Ok(outcome)
}

/// Applies the leaf passes, in order, to the full manifest text.
///
/// 1. `[package]` name prefix swap
/// 2. `[lib]` name override keeping the old import name (when `add_lib`)
/// 3. Repository URL fragment swap
/// 4. `package`/`version` fields on internal path dependencies
/// 5. Pre-release version literal fix
pub fn transform_leaf_manifest(
    content: &str,
    config: &RenameConfig,
    add_lib: bool,
) -> Result<String> {
    let mut content = content.to_string();

    match rename_package(&mut content, config)? {
        Some(old_pkg) if add_lib => inject_lib_name(&mut content, &old_pkg)?,
        Some(_) => {}
        None => log::debug!("No '{}' package name line, skipping rename", config.old_prefix),
    }

    let repository = &config.repository;
    if content.contains(&repository.old) {
        content = content.replace(&repository.old, &repository.new);
        log::debug!("Repository URL: {} → {}", repository.old, repository.new);
    }

    content = rewrite_path_dependencies(&content, config)?;

    let old_version = format!(r#"version = "{}""#, config.version.old);
    let new_version = format!(r#"version = "{}""#, config.version.new);
    Ok(content.replace(&old_version, &new_version))
}

/// Swaps the prefix of the first `name = "<old-prefix>..."` line.
///
/// Returns the old package name, or `None` when no such line exists.
fn rename_package(content: &mut String, config: &RenameConfig) -> Result<Option<String>> {
    let pattern = format!(r#"(?m)^name = "({}[^"]+)""#, regex::escape(&config.old_prefix));
    let re = Regex::new(&pattern)?;

    let (range, old_pkg) = {
        let Some(caps) = re.captures(content.as_str()) else {
            return Ok(None);
        };
        let (Some(line), Some(name)) = (caps.get(0), caps.get(1)) else {
            return Ok(None);
        };
        (line.range(), name.as_str().to_string())
    };

    let new_pkg = config.rename_crate(&old_pkg);
    content.replace_range(range, &format!(r#"name = "{}""#, new_pkg));
    log::info!("Renamed package: {} → {}", old_pkg, new_pkg);

    Ok(Some(old_pkg))
}

/// Inserts `[lib] name = "<old_pkg as snake_case>"` after the `rust-version`
/// line, or after the `edition` line when there is no `rust-version`.
fn inject_lib_name(content: &mut String, old_pkg: &str) -> Result<()> {
    for key in ["rust-version", "edition"] {
        let re = Regex::new(&format!(r#"(?m)^{} = "[^"]+"\n"#, regex::escape(key)))?;
        if let Some(pos) = re.find(content.as_str()).map(|m| m.end()) {
            let lib = lib_name(old_pkg);
            content.insert_str(pos, &format!("\n[lib]\nname = \"{}\"\n", lib));
            log::debug!("Added [lib] name = \"{}\" after {}", lib, key);
            return Ok(());
        }
    }

    log::debug!("No rust-version or edition line, [lib] not added for {}", old_pkg);
    Ok(())
}

/// Adds `version` (if missing) and `package` to every single-line inline
/// path dependency on an internal crate.
///
/// Declarations that already carry a `package` field are left alone, which
/// makes the pass safe to run twice.
fn rewrite_path_dependencies(content: &str, config: &RenameConfig) -> Result<String> {
    // Keys only: the brace body starts right after `{` or follows a comma.
    let package_field = Regex::new(r"(?:^|,)\s*package\s*=")?;
    let version_field = Regex::new(r"(?:^|,)\s*version\s*[=.]")?;
    let mut content = content.to_string();

    for name in config.registry.names() {
        let Some(version) = config.registry.version_of(name) else {
            continue;
        };
        let pattern = format!(
            r#"(?m)^({}\s*=\s*\{{)([^}}\n]*path\s*=\s*"[^"\n]*"[^}}\n]*)(\}})"#,
            regex::escape(name)
        );
        let re = Regex::new(&pattern)?;
        let new_name = config.rename_crate(name);
        let mut rewritten = 0usize;

        let replaced = re.replace_all(&content, |caps: &Captures| {
            let middle = &caps[2];
            if package_field.is_match(middle) {
                return caps[0].to_string();
            }

            // Keep the spacing before the closing brace after the new fields.
            let body = middle.trim_end();
            let trailing = &middle[body.len()..];

            let mut additions = String::new();
            if !version_field.is_match(middle) {
                additions.push_str(&format!(r#", version = "{}""#, version));
            }
            additions.push_str(&format!(r#", package = "{}""#, new_name));

            rewritten += 1;
            format!("{}{}{}{}{}", &caps[1], body, additions, trailing, &caps[3])
        });
        let replaced = replaced.into_owned();

        if rewritten > 0 {
            log::debug!(
                "Aliased {} path dependenc{} on {} → {}",
                rewritten,
                if rewritten == 1 { "y" } else { "ies" },
                name,
                new_name
            );
        }
        content = replaced;
    }

    Ok(content)
}
