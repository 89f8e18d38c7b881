//! Known internal crates and the versions they are published under.
//!
//! The registry is read-only once built: the rewrite passes only ever look
//! names up and iterate in declaration order.

/// One internal crate participating in path dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateEntry {
    pub name: String,
    pub version: String,
}

/// Ordered table of internal crate names and versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateRegistry {
    entries: Vec<CrateEntry>,
}

impl CrateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a crate, replacing the version if the name is already known.
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        let name = name.into();
        let version = version.into();

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.version = version,
            None => self.entries.push(CrateEntry { name, version }),
        }
    }

    /// Returns the declared version of `name`, if it is an internal crate.
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.version.as_str())
    }

    /// Crate names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CrateEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for CrateRegistry
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut registry = CrateRegistry::new();
        for (name, version) in iter {
            registry.insert(name, version);
        }
        registry
    }
}
