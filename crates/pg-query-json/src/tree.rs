//! Whole parse trees: the JSON array of statements emitted by the parser.

use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::codec::{Codec, Expect};
use crate::error::CodecError;
use crate::node::Node;

/// Top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseTree {
    pub statements: Vec<Node>,
}

impl ParseTree {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }

    /// Decodes with the builtin catalog.
    pub fn from_json(value: &Value) -> Result<Self, CodecError> {
        Codec::builtin().decode_tree(value)
    }

    /// Encodes with the builtin catalog.
    pub fn to_json(&self) -> Result<Value, CodecError> {
        Codec::builtin().encode_tree(self)
    }

    pub fn to_json_string(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl FromStr for ParseTree {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        ParseTree::from_json(&value)
    }
}

impl From<Vec<Node>> for ParseTree {
    fn from(statements: Vec<Node>) -> Self {
        Self { statements }
    }
}

impl Codec<'_> {
    /// Decodes a JSON array of wrapped statements. Unlike a node sequence
    /// field, the document itself must be an array; `null` is rejected.
    pub fn decode_tree(&self, value: &Value) -> Result<ParseTree, CodecError> {
        let items = value.as_array().ok_or_else(|| {
            debug!("parse tree is not an array");
            CodecError::mismatch("array of statements", value)
        })?;
        let statements = items
            .iter()
            .enumerate()
            .map(|(i, item)| self.decode(item, Expect::Any).map_err(|e| e.at_index(i)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ParseTree { statements })
    }

    pub fn encode_tree(&self, tree: &ParseTree) -> Result<Value, CodecError> {
        self.encode_list(&tree.statements)
    }
}
