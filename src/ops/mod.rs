mod manifest;
mod workspace;
mod writer;

pub use manifest::{transform_leaf_manifest, update_leaf_manifest};
pub use workspace::{transform_workspace_manifest, update_workspace_manifest};
pub use writer::{ManifestWriter, Outcome, Record, read_manifest};
