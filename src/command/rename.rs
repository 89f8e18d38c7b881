use crate::cli::RenameCli;
use crate::config::RenameConfig;
use crate::error::Result;
use crate::ops::{ManifestWriter, update_leaf_manifest, update_workspace_manifest};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RenameRun {
    pub root: PathBuf,
    pub config: RenameConfig,
    pub dry_run: bool,
    pub quiet: bool,
}

impl RenameRun {
    pub fn from_cli(cli: RenameCli) -> Result<Self> {
        let root = match cli.root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        if !root.is_dir() {
            return Err(anyhow::anyhow!(
                "Workspace root is not a directory: {}",
                root.display()
            )
            .into());
        }

        let config = match &cli.config {
            Some(path) => RenameConfig::load(path)?,
            None => RenameConfig::default(),
        };

        Ok(Self {
            root,
            config,
            dry_run: cli.dry_run,
            quiet: cli.quiet,
        })
    }
}

pub fn execute(cli: RenameCli) -> Result<()> {
    let run = RenameRun::from_cli(cli)?;
    let writer = rename_workspace(&run.root, &run.config, run.dry_run)?;

    if !run.quiet {
        writer.print_summary(&run.root);
    }

    Ok(())
}

/// Rewrites the published crates, then the test crates, then the workspace
/// root, in list order.
///
/// The first I/O error aborts the run. Manifests already written stay
/// written.
pub fn rename_workspace(
    root: &Path,
    config: &RenameConfig,
    dry_run: bool,
) -> Result<ManifestWriter> {
    config.validate()?;

    log::debug!("Workspace root: {}", root.display());
    log::debug!(
        "Renaming {} crates: {}* → {}*",
        config.registry.len(),
        config.old_prefix,
        config.new_prefix
    );

    if config.registry.is_empty() {
        log::warn!("No internal crates configured, path dependencies will not be aliased");
    }

    let mut writer = ManifestWriter::new(dry_run);
    let manifests = &config.manifests;

    if dry_run {
        println!("{}", "DRY RUN - No manifests will be written".yellow().bold());
    }

    println!("{}", "Renaming sub-crate Cargo.toml files:".bold());
    for path in &manifests.published {
        update_leaf_manifest(&root.join(path), config, true, &mut writer)?;
    }

    println!("\n{}", "Renaming test crate Cargo.toml files:".bold());
    for path in &manifests.tests {
        update_leaf_manifest(&root.join(path), config, false, &mut writer)?;
    }

    println!("\n{}", "Updating workspace root:".bold());
    update_workspace_manifest(&root.join(&manifests.workspace), config, &mut writer)?;

    println!("\n{}", "Done!".green().bold());
    Ok(writer)
}
