//! JSON codec for PostgreSQL parse tree nodes.
//!
//! Every node travels as a single-key object naming its kind, wrapping an
//! object of the kind's fields:
//!
//! ```text
//! {"QUERY": {"commandType": "CMD_SELECT", "rtable": [], "jointree": {"FROMEXPR": {...}}, ...}}
//! ```
//!
//! Decoding dispatches on that tag through a [`Catalog`]; encoding walks the
//! typed [`Node`] tree and emits every declared field in declared order.
//!
//! ```
//! use pg_query_json::{from_json, to_json, Node};
//! use serde_json::json;
//!
//! let node = from_json(&json!({"STRING": {"str": "relname"}})).unwrap();
//! assert_eq!(node, Node::string("relname"));
//! assert_eq!(to_json(&node).unwrap(), json!({"STRING": {"str": "relname"}}));
//! ```

pub mod catalog;
pub mod codec;
pub mod error;
pub mod node;
pub mod nodes;
pub mod scalar;
pub mod tree;

mod pointer;

pub use catalog::{
    wire_field_name, Catalog, CatalogError, FieldShape, FieldSpec, KindSpec, ScalarType,
};
pub use codec::{Codec, DecodeOptions, EncodeOptions, Expect, FieldReader, FieldWriter, NodeCodec};
pub use error::CodecError;
pub use node::{Node, NodeKind};
pub use nodes::*;
pub use scalar::{PgEnum, Scalar};
pub use tree::ParseTree;

use serde_json::Value;

/// Decodes one wrapped node with the builtin catalog.
pub fn from_json(value: &Value) -> Result<Node, CodecError> {
    Codec::builtin().decode(value, Expect::Any)
}

/// Encodes one node with the builtin catalog.
pub fn to_json(node: &Node) -> Result<Value, CodecError> {
    Codec::builtin().encode(node)
}

/// Parses JSON text holding one wrapped node.
pub fn from_str(s: &str) -> Result<Node, CodecError> {
    let value: Value = serde_json::from_str(s)?;
    from_json(&value)
}

/// Encodes one node as compact JSON text.
pub fn to_string(node: &Node) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&to_json(node)?)?)
}

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
