//! Nested, path-addressable property trees.
//!
//! A [`PropertyStore`] holds a tree of [`Node`]s addressed by dot-separated
//! paths such as `address.street`. Writes create missing branches on the way
//! down; reads and removals fail with [`StoreError::PathNotFound`] instead.
//!
//! ```
//! use proptree_core::{Node, PropertyStore, Tree};
//!
//! let mut store = PropertyStore::new();
//! store.set("address.street", "Main");
//! store.set("address.number", 12);
//!
//! assert_eq!(store.get("address.street").unwrap().as_str(), Some("Main"));
//! assert_eq!(
//!     store.get("address").unwrap(),
//!     Node::from(Tree::from([("street", Node::from("Main")), ("number", Node::from(12))]))
//! );
//! assert!(store.get("address.city").is_err());
//! ```

pub mod error;
pub mod fixture;
pub(crate) mod json;
pub mod store;
pub mod types;

pub use error::{Error, Result, StoreError};
pub use fixture::{Fixture, FixtureError};
pub use store::PropertyStore;
pub use types::{
    ConfigError, DEFAULT_SEPARATOR, Node, Path, Scalar, Segment, Separator, StoreConfig, Tree,
};
