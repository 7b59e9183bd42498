//! Bridge between property trees and `serde_json` values.
//!
//! JSON objects become branches, arrays become opaque [`Scalar::List`]s and
//! everything else maps onto the matching scalar or [`Node::Null`].

use crate::error::{Result, StoreError};
use crate::store::PropertyStore;
use crate::types::{Node, Scalar, Tree};
use serde_json::{Map, Value};

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
            Value::Array(items) => {
                Node::Scalar(Scalar::List(items.into_iter().map(Node::from).collect()))
            }
            Value::Object(map) => Node::Branch(Tree::from(map)),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Node::Scalar(Scalar::Number(n)) => Value::Number(n),
            Node::Scalar(Scalar::String(s)) => Value::String(s),
            Node::Scalar(Scalar::List(items)) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            Node::Branch(tree) => Value::Object(Map::from(tree)),
        }
    }
}

impl From<Map<String, Value>> for Tree {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Tree> for Map<String, Value> {
    fn from(tree: Tree) -> Self {
        tree.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
    }
}

impl TryFrom<Value> for Tree {
    type Error = StoreError;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Tree::from(map)),
            other => Err(StoreError::NotAnObject {
                found: kind(&other),
            }),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl PropertyStore {
    /// Builds a store from a JSON document whose top level is an object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from(Tree::try_from(value)?))
    }

    pub fn from_json(value: Value) -> std::result::Result<Self, StoreError> {
        Tree::try_from(value).map(Self::from)
    }

    /// Returns a JSON copy of the whole tree.
    pub fn to_json(&self) -> Value {
        Value::Object(Map::from(self.to_map()))
    }
}
