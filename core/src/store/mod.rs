//! The path-addressable property store.

use crate::error::StoreError;
use crate::types::{Node, Path, StoreConfig, Tree};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use traverse::{Branch, Leaf, Missing};

pub(crate) mod traverse;

/// A nested key/value tree addressed by separator-delimited paths such as `address.street`.
///
/// The store exclusively owns its root tree. Values handed in are moved in,
/// values handed out are owned copies, so nothing outside the store can alias
/// its internal nodes. `Clone` produces a fully independent store.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    root: Tree,
    config: StoreConfig,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_parts(Tree::new(), config)
    }

    pub fn from_parts(root: Tree, config: StoreConfig) -> Self {
        Self { root, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn parse(&self, path: &str) -> Path {
        Path::parse_with(path, &self.config.separator)
    }

    fn not_found(parsed: &Path, missing: Missing) -> StoreError {
        let error = StoreError::PathNotFound {
            path: parsed.to_string(),
            segment: parsed
                .segments()
                .get(missing.depth)
                .cloned()
                .unwrap_or_default(),
        };
        log::debug!("{error}");
        error
    }
}

/// Read operations.
impl PropertyStore {
    /// Returns a copy of the node at `path`.
    ///
    /// Fails with [`StoreError::PathNotFound`] if any segment is absent, or if an
    /// intermediate segment holds something other than a branch.
    pub fn get(&self, path: &str) -> Result<Node, StoreError> {
        let parsed = self.parse(path);
        traverse::lookup(&self.root, parsed.segments())
            .cloned()
            .map_err(|missing| Self::not_found(&parsed, missing))
    }

    pub fn contains(&self, path: &str) -> bool {
        traverse::lookup(&self.root, self.parse(path).segments()).is_ok()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns a deep copy of the whole tree.
    pub fn to_map(&self) -> Tree {
        self.root.clone()
    }

    pub fn into_map(self) -> Tree {
        self.root
    }
}

/// Write operations.
impl PropertyStore {
    /// Stores `value` at `path`, creating intermediate branches as needed.
    ///
    /// Anything other than a branch found on the way is replaced by an empty
    /// branch, so this never fails.
    pub fn set(&mut self, path: &str, value: impl Into<Node>) {
        log::trace!("set `{path}`");
        let parsed = self.parse(path);
        let result = traverse::apply(
            &mut self.root,
            parsed.segments(),
            Leaf::Set(value.into()),
            Branch::Create,
        );
        debug_assert!(result.is_ok(), "set left `{path}` unresolved: {result:?}");
    }

    /// Removes and returns the node at `path`.
    ///
    /// Fails under the same conditions as [`PropertyStore::get`], leaving the store unchanged.
    pub fn remove(&mut self, path: &str) -> Result<Node, StoreError> {
        log::trace!("remove `{path}`");
        let parsed = self.parse(path);
        match traverse::apply(&mut self.root, parsed.segments(), Leaf::Remove, Branch::Check) {
            Ok(removed) => Ok(removed.unwrap_or_default()),
            Err(missing) => Err(Self::not_found(&parsed, missing)),
        }
    }

    pub fn clear(&mut self) {
        log::trace!("clear");
        self.root.clear();
    }
}

impl From<Tree> for PropertyStore {
    fn from(root: Tree) -> Self {
        Self::from_parts(root, StoreConfig::default())
    }
}

impl From<&Tree> for PropertyStore {
    fn from(root: &Tree) -> Self {
        Self::from(root.clone())
    }
}

impl From<PropertyStore> for Tree {
    fn from(store: PropertyStore) -> Self {
        store.into_map()
    }
}

/// Stores are equal when their trees are; the configuration is not compared.
impl PartialEq for PropertyStore {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for PropertyStore {}

impl Hash for PropertyStore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
    }
}

/// Renders the tree as compact JSON.
impl fmt::Display for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.root).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Serialize for PropertyStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropertyStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Tree::deserialize(deserializer).map(Self::from)
    }
}
