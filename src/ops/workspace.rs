use crate::config::RenameConfig;
use crate::error::Result;
use crate::ops::writer::{ManifestWriter, Outcome, read_manifest};
use std::path::Path;

/// Spacing variants of a `[profile.*.package]` override recognized in the
/// workspace manifest. Anything formatted differently is left as is.
const OPT_LEVEL_OVERRIDES: &[&str] = &["{ opt-level = 3 }", "{opt-level = 3 }"];

/// Renames the per-package profile override keys in the workspace manifest
/// and prints its progress line.
pub fn update_workspace_manifest(
    root_manifest: &Path,
    config: &RenameConfig,
    writer: &mut ManifestWriter,
) -> Result<Outcome> {
    log::debug!("Updating workspace manifest: {}", root_manifest.display());

    let content = read_manifest(root_manifest)?;
    let new_content = transform_workspace_manifest(&content, config);
    let outcome = writer.update_file(root_manifest, &content, &new_content)?;

    println!("  {}", root_manifest.display());
    Ok(outcome)
}

/// `monero-oxide = { opt-level = 3 }` → `wownero-oxide = { opt-level = 3 }`
/// for every registry crate.
pub fn transform_workspace_manifest(content: &str, config: &RenameConfig) -> String {
    let mut content = content.to_string();

    for entry in config.registry.iter() {
        let new_name = config.rename_crate(&entry.name);

        for table in OPT_LEVEL_OVERRIDES {
            let old = format!("{} = {}", entry.name, table);
            if content.contains(&old) {
                content = content.replace(&old, &format!("{} = {}", new_name, table));
                log::debug!("Renamed profile override: {} → {}", entry.name, new_name);
            }
        }
    }

    content
}
