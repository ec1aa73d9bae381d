//! Errors raised while encoding or decoding parse tree nodes.

use serde_json::Value;
use thiserror::Error;

use crate::node::NodeKind;
use crate::pointer::format_pointer;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("unknown {ty} value: {token}")]
    UnknownEnumValue { ty: &'static str, token: String },
    #[error("unknown node kind: {0}")]
    UnknownNodeKind(String),
    #[error("malformed node wrapper: expected exactly one key, found {keys}")]
    MalformedWrapper { keys: usize },
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: NodeKind, actual: NodeKind },
    #[error("unknown field {field:?} for {kind}")]
    UnknownField { kind: NodeKind, field: String },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{tag}.{field}: {source}")]
    Field {
        tag: &'static str,
        field: &'static str,
        #[source]
        source: Box<CodecError>,
    },
    #[error("[{index}]: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    pub(crate) fn mismatch(expected: &'static str, found: &Value) -> Self {
        CodecError::TypeMismatch {
            expected,
            found: json_type_name(found),
        }
    }

    pub(crate) fn in_field(self, tag: &'static str, field: &'static str) -> Self {
        CodecError::Field {
            tag,
            field,
            source: Box::new(self),
        }
    }

    pub(crate) fn at_index(self, index: usize) -> Self {
        CodecError::Element {
            index,
            source: Box::new(self),
        }
    }

    /// The innermost error, with all location frames stripped.
    pub fn root(&self) -> &CodecError {
        let mut err = self;
        while let CodecError::Field { source, .. } | CodecError::Element { source, .. } = err {
            err = source.as_ref();
        }
        err
    }

    /// Location of the offending value as a JSON Pointer into the decoded
    /// document, e.g. `/QUERY/rtable/0/RANGETBLENTRY/subquery`.
    pub fn pointer(&self) -> String {
        let mut steps = Vec::new();
        let mut err = self;
        loop {
            match err {
                CodecError::Field { tag, field, source } => {
                    steps.push((*tag).to_string());
                    steps.push((*field).to_string());
                    err = source.as_ref();
                }
                CodecError::Element { index, source } => {
                    steps.push(index.to_string());
                    err = source.as_ref();
                }
                _ => break,
            }
        }
        format_pointer(&steps)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
