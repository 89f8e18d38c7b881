//! Immutable description of one rename run.
//!
//! [`RenameConfig::default`] carries the built-in monero → wownero plan. A
//! TOML file can override any of its tables:
//!
//! ```toml
//! [prefix]
//! old = "monero-"
//! new = "wownero-"
//!
//! [crates]
//! monero-io = "0.1"
//! monero-epee = "0.2"
//!
//! [repository]
//! old = "github.com/monero-oxide/monero-oxide"
//! new = "github.com/Such-Software/monero-oxide"
//!
//! [version]
//! old = "0.1.4-alpha"
//! new = "0.1.0"
//!
//! [manifests]
//! published = ["monero-oxide/io/Cargo.toml"]
//! tests = ["tests/no-std/Cargo.toml"]
//! workspace = "Cargo.toml"
//! ```

use crate::error::{RenameError, Result};
use crate::registry::CrateRegistry;
use crate::validation::{validate_manifest_path, validate_package_name};
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, Item, TableLike};

const DEFAULT_CRATES: &[(&str, &str)] = &[
    ("monero-io", "0.1"),
    ("monero-primitives", "0.1"),
    ("monero-ed25519", "0.1"),
    ("monero-mlsag", "0.1"),
    ("monero-clsag", "0.1"),
    ("monero-borromean", "0.1"),
    ("monero-bulletproofs-generators", "0.1"),
    ("monero-bulletproofs", "0.1"),
    ("monero-oxide", "0.1"),
    ("monero-base58", "0.1"),
    ("monero-address", "0.1"),
    ("monero-wallet", "0.1"),
    ("monero-epee", "0.2"),
    ("monero-interface", "0.1"),
    ("monero-daemon-rpc", "0.1"),
    ("monero-simple-request-rpc", "0.1"),
];

const DEFAULT_PUBLISHED: &[&str] = &[
    "monero-oxide/io/Cargo.toml",
    "monero-oxide/primitives/Cargo.toml",
    "monero-oxide/ed25519/Cargo.toml",
    "monero-oxide/ringct/mlsag/Cargo.toml",
    "monero-oxide/ringct/clsag/Cargo.toml",
    "monero-oxide/ringct/borromean/Cargo.toml",
    "monero-oxide/ringct/bulletproofs/generators/Cargo.toml",
    "monero-oxide/ringct/bulletproofs/Cargo.toml",
    "monero-oxide/Cargo.toml",
    "monero-oxide/wallet/base58/Cargo.toml",
    "monero-oxide/wallet/address/Cargo.toml",
    "monero-oxide/wallet/Cargo.toml",
    "monero-oxide/epee/Cargo.toml",
    "monero-oxide/interface/Cargo.toml",
    "monero-oxide/interface/daemon/Cargo.toml",
    "monero-oxide/interface/daemon/simple-request/Cargo.toml",
];

const DEFAULT_TESTS: &[&str] = &["tests/no-std/Cargo.toml", "tests/verify-chain/Cargo.toml"];

/// An exact `old` → `new` text substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub old: String,
    pub new: String,
}

impl Substitution {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Manifests touched by a run, relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSet {
    /// Published crates; these get a `[lib]` name override.
    pub published: Vec<String>,
    /// Test crates; renamed without a `[lib]` override.
    pub tests: Vec<String>,
    /// Workspace root manifest holding the profile overrides.
    pub workspace: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    pub old_prefix: String,
    pub new_prefix: String,
    pub registry: CrateRegistry,
    /// Repository URL fragment rewritten in every leaf manifest.
    pub repository: Substitution,
    /// Pre-release version literal of the main crate and its release version.
    pub version: Substitution,
    pub manifests: ManifestSet,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            old_prefix: "monero-".to_string(),
            new_prefix: "wownero-".to_string(),
            registry: DEFAULT_CRATES.iter().copied().collect(),
            repository: Substitution::new(
                "github.com/monero-oxide/monero-oxide",
                "github.com/Such-Software/monero-oxide",
            ),
            version: Substitution::new("0.1.4-alpha", "0.1.0"),
            manifests: ManifestSet {
                published: to_strings(DEFAULT_PUBLISHED),
                tests: to_strings(DEFAULT_TESTS),
                workspace: "Cargo.toml".to_string(),
            },
        }
    }
}

impl RenameConfig {
    /// Reads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RenameError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config {}: {}", path.display(), e),
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Builds a configuration from TOML text, starting from the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let doc: DocumentMut = content.parse()?;
        let mut config = Self::default();

        if let Some(prefix) = section(&doc, "prefix")? {
            if let Some(old) = string_field(prefix, "prefix", "old")? {
                config.old_prefix = old;
            }
            if let Some(new) = string_field(prefix, "prefix", "new")? {
                config.new_prefix = new;
            }
        }

        if let Some(crates) = section(&doc, "crates")? {
            let mut registry = CrateRegistry::new();
            for (name, item) in crates.iter() {
                let version = item.as_str().ok_or_else(|| {
                    RenameError::InvalidConfig(format!(
                        "crates.{} must be a version string",
                        name
                    ))
                })?;
                registry.insert(name, version);
            }
            config.registry = registry;
        }

        if let Some(repository) = section(&doc, "repository")? {
            apply_substitution(&mut config.repository, repository, "repository")?;
        }

        if let Some(version) = section(&doc, "version")? {
            apply_substitution(&mut config.version, version, "version")?;
        }

        if let Some(manifests) = section(&doc, "manifests")? {
            if let Some(published) = string_array(manifests, "manifests", "published")? {
                config.manifests.published = published;
            }
            if let Some(tests) = string_array(manifests, "manifests", "tests")? {
                config.manifests.tests = tests;
            }
            if let Some(workspace) = string_field(manifests, "manifests", "workspace")? {
                config.manifests.workspace = workspace;
            }
        }

        Ok(config)
    }

    /// Checks the configuration before any manifest is touched.
    pub fn validate(&self) -> Result<()> {
        if self.old_prefix.is_empty() || self.new_prefix.is_empty() {
            return Err(RenameError::InvalidConfig(
                "prefixes cannot be empty".to_string(),
            ));
        }

        for entry in self.registry.iter() {
            if !entry.name.starts_with(&self.old_prefix) {
                return Err(RenameError::InvalidConfig(format!(
                    "crate '{}' does not start with prefix '{}'",
                    entry.name, self.old_prefix
                )));
            }
            if entry.version.trim().is_empty() {
                return Err(RenameError::InvalidConfig(format!(
                    "crate '{}' has an empty version",
                    entry.name
                )));
            }
            validate_package_name(&self.rename_crate(&entry.name))?;
        }

        let manifests = &self.manifests;
        for path in manifests
            .published
            .iter()
            .chain(&manifests.tests)
            .chain(std::iter::once(&manifests.workspace))
        {
            validate_manifest_path(path)?;
        }

        Ok(())
    }

    /// `monero-wallet` → `wownero-wallet`. Only the first occurrence of the
    /// old prefix is replaced.
    pub fn rename_crate(&self, name: &str) -> String {
        name.replacen(&self.old_prefix, &self.new_prefix, 1)
    }
}

/// Import-compatible form of a package name: `monero-oxide` → `monero_oxide`.
pub fn lib_name(package_name: &str) -> String {
    package_name.replace('-', "_")
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn section<'a>(doc: &'a DocumentMut, key: &str) -> Result<Option<&'a dyn TableLike>> {
    match doc.get(key) {
        None => Ok(None),
        Some(item) => item
            .as_table_like()
            .map(Some)
            .ok_or_else(|| RenameError::InvalidConfig(format!("[{}] must be a table", key))),
    }
}

fn string_field(table: &dyn TableLike, section: &str, key: &str) -> Result<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(item) => item.as_str().map(|s| Some(s.to_string())).ok_or_else(|| {
            RenameError::InvalidConfig(format!("{}.{} must be a string", section, key))
        }),
    }
}

fn string_array(table: &dyn TableLike, section: &str, key: &str) -> Result<Option<Vec<String>>> {
    let Some(item) = table.get(key) else {
        return Ok(None);
    };

    let not_strings =
        || RenameError::InvalidConfig(format!("{}.{} must be an array of strings", section, key));

    let array = match item {
        Item::Value(value) => value.as_array().ok_or_else(not_strings)?,
        _ => return Err(not_strings()),
    };

    array
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(not_strings))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn apply_substitution(
    target: &mut Substitution,
    table: &dyn TableLike,
    section: &str,
) -> Result<()> {
    if let Some(old) = string_field(table, section, "old")? {
        target.old = old;
    }
    if let Some(new) = string_field(table, section, "new")? {
        target.new = new;
    }
    Ok(())
}
