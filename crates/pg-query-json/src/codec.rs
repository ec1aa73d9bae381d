//! Node encoder and decoder.
//!
//! A node is encoded as a single-key wrapper object whose key is the kind's
//! tag from the catalog and whose value holds the kind's fields:
//!
//! ```text
//! { "QUERY": { "commandType": "CMD_SELECT", "rtable": [ ... ], ... } }
//! ```
//!
//! Decoding reads the tag, looks it up in the injected [`Catalog`] and hands
//! the body to that kind's [`NodeCodec`], which recurses into child nodes
//! through [`FieldReader`].

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::catalog::{Catalog, FieldShape, FieldSpec, KindSpec};
use crate::error::CodecError;
use crate::node::{Node, NodeKind};
use crate::nodes::{
    Alias, BoolExpr, CommonTableExpr, Const, FromExpr, IntegerValue, JoinExpr, OpExpr, Query,
    RangeTblEntry, RangeTblRef, RowMarkClause, SortGroupClause, StringValue, TargetEntry, Var,
};
use crate::scalar::Scalar;

// ── Options ───────────────────────────────────────────────────────────────

/// Options for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// If true, encode enum fields as ordinals (e.g. `1`) instead of token
    /// names (e.g. `"CMD_SELECT"`).
    pub numeric_enums: bool,
}

/// Options for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// If true, a body key that the catalog does not declare for the kind is
    /// rejected with [`CodecError::UnknownField`]. Otherwise it is ignored.
    pub deny_unknown_fields: bool,
}

/// What kind a decode call site accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Any,
    Kind(NodeKind),
}

// ── Composite codec ───────────────────────────────────────────────────────

/// Field-by-field codec for one node kind.
pub trait NodeCodec: Default + Sized {
    const KIND: NodeKind;
    /// Declared fields, in declared order. Encoding emits exactly these keys
    /// in this order.
    const FIELDS: &'static [FieldSpec];

    /// Overwrites the fields present in `fields` on a default-initialised node.
    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError>;

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError>;
}

/// Read access to one wrapper body. Missing keys and `null` values are both
/// treated as absent and leave the target at its zero value.
pub struct FieldReader<'a> {
    codec: &'a Codec<'a>,
    tag: &'static str,
    fields: &'static [FieldSpec],
    body: &'a Map<String, Value>,
}

/// Whether `name` is declared with `shape`. Accessors debug-assert this so a
/// codec impl cannot drift from its `FIELDS`.
fn declares(fields: &[FieldSpec], name: &str, shape: FieldShape) -> bool {
    fields.iter().any(|f| f.wire == name && f.shape == shape)
}

impl<'a> FieldReader<'a> {
    fn present(&self, name: &str, shape: FieldShape) -> Option<&'a Value> {
        debug_assert!(
            declares(self.fields, name, shape),
            "{}.{name} is not declared as {shape:?}",
            self.tag
        );
        self.body.get(name).filter(|v| !v.is_null())
    }

    pub fn scalar<T: Scalar>(&self, name: &'static str, slot: &mut T) -> Result<(), CodecError> {
        if let Some(value) = self.present(name, FieldShape::Scalar(T::TYPE)) {
            *slot = T::decode(value).map_err(|e| e.in_field(self.tag, name))?;
        }
        Ok(())
    }

    pub fn node(
        &self,
        name: &'static str,
        slot: &mut Option<Box<Node>>,
    ) -> Result<(), CodecError> {
        if let Some(value) = self.present(name, FieldShape::Node) {
            let node = self
                .codec
                .decode(value, Expect::Any)
                .map_err(|e| e.in_field(self.tag, name))?;
            *slot = Some(Box::new(node));
        }
        Ok(())
    }

    pub fn list(&self, name: &'static str, slot: &mut Vec<Node>) -> Result<(), CodecError> {
        if let Some(value) = self.present(name, FieldShape::NodeList) {
            *slot = self
                .codec
                .decode_list(value)
                .map_err(|e| e.in_field(self.tag, name))?;
        }
        Ok(())
    }

    pub fn exact<T: NodeCodec>(
        &self,
        name: &'static str,
        slot: &mut Option<Box<T>>,
    ) -> Result<(), CodecError> {
        if let Some(value) = self.present(name, FieldShape::Exact(T::KIND)) {
            let node = self
                .codec
                .decode_exact::<T>(value)
                .map_err(|e| e.in_field(self.tag, name))?;
            *slot = node.map(Box::new);
        }
        Ok(())
    }
}

/// Builds one wrapper body. Every declared field is written, absent children
/// as `null` and empty sequences as `[]`.
pub struct FieldWriter<'a> {
    codec: &'a Codec<'a>,
    tag: &'static str,
    fields: &'static [FieldSpec],
    out: Map<String, Value>,
}

impl<'a> FieldWriter<'a> {
    fn check(&self, name: &str, shape: FieldShape) {
        debug_assert!(
            declares(self.fields, name, shape),
            "{}.{name} is not declared as {shape:?}",
            self.tag
        );
    }

    pub fn scalar<T: Scalar>(&mut self, name: &'static str, value: &T) {
        self.check(name, FieldShape::Scalar(T::TYPE));
        let value = value.encode(&self.codec.encode_options);
        self.out.insert(name.to_string(), value);
    }

    pub fn node(&mut self, name: &'static str, value: &Option<Box<Node>>) -> Result<(), CodecError> {
        self.check(name, FieldShape::Node);
        let value = match value {
            Some(node) => self
                .codec
                .encode(node)
                .map_err(|e| e.in_field(self.tag, name))?,
            None => Value::Null,
        };
        self.out.insert(name.to_string(), value);
        Ok(())
    }

    pub fn list(&mut self, name: &'static str, nodes: &[Node]) -> Result<(), CodecError> {
        self.check(name, FieldShape::NodeList);
        let value = self
            .codec
            .encode_list(nodes)
            .map_err(|e| e.in_field(self.tag, name))?;
        self.out.insert(name.to_string(), value);
        Ok(())
    }

    pub fn exact<T: NodeCodec>(
        &mut self,
        name: &'static str,
        value: &Option<Box<T>>,
    ) -> Result<(), CodecError> {
        self.check(name, FieldShape::Exact(T::KIND));
        let value = match value {
            Some(node) => self
                .codec
                .encode_exact(node.as_ref())
                .map_err(|e| e.in_field(self.tag, name))?,
            None => Value::Null,
        };
        self.out.insert(name.to_string(), value);
        Ok(())
    }
}

// ── Codec ─────────────────────────────────────────────────────────────────

/// Encoder/decoder bound to a catalog. Holds no mutable state; one codec can
/// serve any number of threads.
#[derive(Debug, Clone)]
pub struct Codec<'c> {
    catalog: &'c Catalog,
    encode_options: EncodeOptions,
    decode_options: DecodeOptions,
}

impl Codec<'static> {
    /// Codec over [`Catalog::builtin`] with default options.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'c> Codec<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            encode_options: EncodeOptions::default(),
            decode_options: DecodeOptions::default(),
        }
    }

    pub fn with_encode_options(mut self, options: EncodeOptions) -> Self {
        self.encode_options = options;
        self
    }

    pub fn with_decode_options(mut self, options: DecodeOptions) -> Self {
        self.decode_options = options;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    // ── Decode ────────────────────────────────────────────────────────────

    /// Decodes a wrapped node. `null` is not a node here; use
    /// [`Codec::decode_optional`] where absence is allowed.
    pub fn decode(&self, value: &Value, expect: Expect) -> Result<Node, CodecError> {
        let (spec, body) = self.open(value, expect)?;
        trace!(tag = spec.tag, "decoding node");
        let node = match spec.kind {
            NodeKind::Query => Node::from(self.read_body::<Query>(spec, body)?),
            NodeKind::FromExpr => Node::from(self.read_body::<FromExpr>(spec, body)?),
            NodeKind::JoinExpr => Node::from(self.read_body::<JoinExpr>(spec, body)?),
            NodeKind::RangeTblRef => Node::from(self.read_body::<RangeTblRef>(spec, body)?),
            NodeKind::RangeTblEntry => Node::from(self.read_body::<RangeTblEntry>(spec, body)?),
            NodeKind::TargetEntry => Node::from(self.read_body::<TargetEntry>(spec, body)?),
            NodeKind::SortGroupClause => Node::from(self.read_body::<SortGroupClause>(spec, body)?),
            NodeKind::RowMarkClause => Node::from(self.read_body::<RowMarkClause>(spec, body)?),
            NodeKind::CommonTableExpr => Node::from(self.read_body::<CommonTableExpr>(spec, body)?),
            NodeKind::Alias => Node::from(self.read_body::<Alias>(spec, body)?),
            NodeKind::Var => Node::from(self.read_body::<Var>(spec, body)?),
            NodeKind::Const => Node::from(self.read_body::<Const>(spec, body)?),
            NodeKind::OpExpr => Node::from(self.read_body::<OpExpr>(spec, body)?),
            NodeKind::BoolExpr => Node::from(self.read_body::<BoolExpr>(spec, body)?),
            NodeKind::String => Node::from(self.read_body::<StringValue>(spec, body)?),
            NodeKind::Integer => Node::from(self.read_body::<IntegerValue>(spec, body)?),
        };
        Ok(node)
    }

    /// Decodes a node where absence is allowed: `null` yields `None`.
    pub fn decode_optional(&self, value: &Value) -> Result<Option<Node>, CodecError> {
        if value.is_null() {
            return Ok(None);
        }
        self.decode(value, Expect::Any).map(Some)
    }

    /// Decodes a node that must be of kind `T`, straight into `T`. `null`
    /// yields `None`; any other kind is a [`CodecError::KindMismatch`].
    pub fn decode_exact<T: NodeCodec>(&self, value: &Value) -> Result<Option<T>, CodecError> {
        if value.is_null() {
            return Ok(None);
        }
        let (spec, body) = self.open(value, Expect::Kind(T::KIND))?;
        trace!(tag = spec.tag, "decoding exact node");
        self.read_body::<T>(spec, body).map(Some)
    }

    fn read_body<T: NodeCodec>(
        &self,
        spec: &KindSpec,
        body: &Map<String, Value>,
    ) -> Result<T, CodecError> {
        let fields = FieldReader {
            codec: self,
            tag: spec.tag,
            fields: T::FIELDS,
            body,
        };
        T::decode_fields(&fields)
    }

    /// Decodes a sequence of wrapped nodes, preserving order. `null` yields an
    /// empty sequence.
    pub fn decode_list(&self, value: &Value) -> Result<Vec<Node>, CodecError> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.decode(item, Expect::Any).map_err(|e| e.at_index(i)))
                .collect(),
            other => Err(CodecError::mismatch("array of nodes", other)),
        }
    }

    /// Validates the wrapper and resolves its tag.
    fn open<'v>(
        &self,
        value: &'v Value,
        expect: Expect,
    ) -> Result<(&'c KindSpec, &'v Map<String, Value>), CodecError> {
        let wrapper = value
            .as_object()
            .ok_or_else(|| CodecError::mismatch("node wrapper object", value))?;
        let mut entries = wrapper.iter();
        let (tag, body) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                debug!(keys = wrapper.len(), "rejecting malformed node wrapper");
                return Err(CodecError::MalformedWrapper {
                    keys: wrapper.len(),
                });
            }
        };
        let spec = self.catalog.lookup(tag).ok_or_else(|| {
            debug!(tag = tag.as_str(), "rejecting unknown node tag");
            CodecError::UnknownNodeKind(tag.clone())
        })?;
        if let Expect::Kind(expected) = expect {
            if spec.kind != expected {
                debug!(%expected, actual = %spec.kind, "rejecting node of wrong kind");
                return Err(CodecError::KindMismatch {
                    expected,
                    actual: spec.kind,
                });
            }
        }
        let body = body
            .as_object()
            .ok_or_else(|| CodecError::mismatch("node body object", body))?;
        if self.decode_options.deny_unknown_fields {
            if let Some(field) = body.keys().find(|k| spec.field(k).is_none()) {
                debug!(tag = spec.tag, field = field.as_str(), "rejecting unknown field");
                return Err(CodecError::UnknownField {
                    kind: spec.kind,
                    field: field.clone(),
                });
            }
        }
        Ok((spec, body))
    }

    // ── Encode ────────────────────────────────────────────────────────────

    /// Encodes a node as its single-key wrapper object.
    pub fn encode(&self, node: &Node) -> Result<Value, CodecError> {
        match node {
            Node::Query(n) => self.encode_exact(n.as_ref()),
            Node::FromExpr(n) => self.encode_exact(n),
            Node::JoinExpr(n) => self.encode_exact(n.as_ref()),
            Node::RangeTblRef(n) => self.encode_exact(n),
            Node::RangeTblEntry(n) => self.encode_exact(n.as_ref()),
            Node::TargetEntry(n) => self.encode_exact(n),
            Node::SortGroupClause(n) => self.encode_exact(n),
            Node::RowMarkClause(n) => self.encode_exact(n),
            Node::CommonTableExpr(n) => self.encode_exact(n.as_ref()),
            Node::Alias(n) => self.encode_exact(n),
            Node::Var(n) => self.encode_exact(n),
            Node::Const(n) => self.encode_exact(n),
            Node::OpExpr(n) => self.encode_exact(n),
            Node::BoolExpr(n) => self.encode_exact(n),
            Node::String(n) => self.encode_exact(n),
            Node::Integer(n) => self.encode_exact(n),
        }
    }

    /// Encodes a concrete node of kind `T`. A kind missing from the catalog is
    /// reported as [`CodecError::UnknownNodeKind`].
    pub fn encode_exact<T: NodeCodec>(&self, node: &T) -> Result<Value, CodecError> {
        let tag = self.catalog.tag(T::KIND).ok_or_else(|| {
            debug!(kind = T::KIND.name(), "kind missing from catalog");
            CodecError::UnknownNodeKind(T::KIND.name().to_string())
        })?;
        let mut fields = FieldWriter {
            codec: self,
            tag,
            fields: T::FIELDS,
            out: Map::with_capacity(T::FIELDS.len()),
        };
        node.encode_fields(&mut fields)?;
        let mut wrapper = Map::with_capacity(1);
        wrapper.insert(tag.to_string(), Value::Object(fields.out));
        Ok(Value::Object(wrapper))
    }

    /// Encodes a sequence as a JSON array, `[]` when empty.
    pub fn encode_list(&self, nodes: &[Node]) -> Result<Value, CodecError> {
        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| self.encode(node).map_err(|e| e.at_index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}
