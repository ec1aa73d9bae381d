//! Value nodes used for names and literals inside lists.

use crate::catalog::{FieldSpec, ScalarType};
use crate::codec::{FieldReader, FieldWriter, NodeCodec};
use crate::error::CodecError;
use crate::node::NodeKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringValue {
    pub str: String,
}

impl NodeCodec for StringValue {
    const KIND: NodeKind = NodeKind::String;
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::scalar("Str", "str", ScalarType::String)];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = StringValue::default();
        fields.scalar("str", &mut node.str)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("str", &self.str);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerValue {
    pub ival: i64,
}

impl NodeCodec for IntegerValue {
    const KIND: NodeKind = NodeKind::Integer;
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::scalar("Ival", "ival", ScalarType::Int64)];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = IntegerValue::default();
        fields.scalar("ival", &mut node.ival)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("ival", &self.ival);
        Ok(())
    }
}
