//! Building request fixtures field by field, as scenario steps do.
//!
//! A [`Fixture`] is an owned context: each scenario creates its own and
//! passes it to the steps that need it.

use crate::error::{Result, StoreError};
use crate::store::PropertyStore;
use crate::types::{Node, StoreConfig, Tree};
use serde_json::Value;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("invalid integer {literal:?} for `{path}`: {source}")]
    InvalidInteger {
        path: String,
        literal: String,
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    store: PropertyStore,
}

fn is_null_literal(literal: &str) -> bool {
    literal == "null" || literal == "NULL"
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            store: PropertyStore::with_config(config),
        }
    }

    /// Starts over with an empty fixture.
    pub fn reset(&mut self) {
        self.store.clear();
    }

    /// Sets `path` to the string `literal`, or to null for `null`/`NULL`.
    ///
    /// An empty path is ignored so that tabular scenarios can leave a column blank.
    pub fn assign(&mut self, path: &str, literal: &str) {
        if path.is_empty() {
            return;
        }
        if is_null_literal(literal) {
            self.store.set(path, Node::Null);
        } else {
            self.store.set(path, literal);
        }
    }

    /// Sets `path` to `literal` parsed as an integer. A blank literal means null.
    pub fn assign_integer(&mut self, path: &str, literal: &str) -> Result<()> {
        if path.is_empty() {
            return Ok(());
        }
        if literal.is_empty() || is_null_literal(literal) {
            self.store.set(path, Node::Null);
            return Ok(());
        }
        let value: i64 = literal
            .parse()
            .map_err(|source| FixtureError::InvalidInteger {
                path: path.to_owned(),
                literal: literal.to_owned(),
                source,
            })?;
        self.store.set(path, value);
        Ok(())
    }

    /// Drops a field from the fixture.
    ///
    /// Fails with [`StoreError::PathNotFound`] if the field is absent; steps that
    /// treat a missing field as already dropped should ignore that error.
    pub fn unset(&mut self, path: &str) -> std::result::Result<Node, StoreError> {
        self.store.remove(path)
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// The fixture as a JSON request body.
    pub fn payload(&self) -> Value {
        self.store.to_json()
    }

    /// Whether a JSON response body holds this fixture.
    ///
    /// Each of `ignored` (e.g. a server-assigned `id`) is removed from the
    /// response first when present.
    pub fn matches(&self, body: Value, ignored: &[&str]) -> Result<bool> {
        let config = self.store.config().clone();
        let mut actual = PropertyStore::from_parts(Tree::try_from(body)?, config);
        for path in ignored {
            if actual.contains(path) {
                actual.remove(path)?;
            }
        }
        log::debug!("expected {}, actual {actual}", self.store);
        Ok(actual == self.store)
    }
}
