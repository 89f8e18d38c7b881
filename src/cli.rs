use clap::Parser;
use std::path::PathBuf;

/// Rename the monero-* crates of a monero-oxide checkout to wownero-*.
///
/// Rewrites every published and test crate manifest, then the workspace
/// root manifest. Run it once from the workspace root.
#[derive(Parser, Debug, Clone)]
#[command(name = "wownero-rename", version, verbatim_doc_comment)]
pub struct RenameCli {
    /// Workspace root the manifest paths are resolved against (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// TOML file overriding the built-in prefixes, crates and manifest lists
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show what would change without writing any manifest
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Skip the closing summary of changed manifests
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
