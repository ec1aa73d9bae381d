//! Expression nodes.

use crate::catalog::{FieldSpec, ScalarType};
use crate::codec::{FieldReader, FieldWriter, NodeCodec};
use crate::error::CodecError;
use crate::node::{Node, NodeKind};
use crate::nodes::BoolExprType;

/// A column reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Var {
    /// Range table index of the relation.
    pub varno: u32,
    /// Attribute number, or 0 for a whole-row reference.
    pub varattno: i16,
    pub vartype: u32,
    pub vartypmod: i32,
    pub varcollid: u32,
    /// Nonzero for references to outer query levels.
    pub varlevelsup: u32,
    pub varnoold: u32,
    pub varoattno: i16,
    pub location: i32,
}

impl NodeCodec for Var {
    const KIND: NodeKind = NodeKind::Var;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Varno", "varno", ScalarType::UInt32),
        FieldSpec::scalar("Varattno", "varattno", ScalarType::Int16),
        FieldSpec::scalar("Vartype", "vartype", ScalarType::UInt32),
        FieldSpec::scalar("Vartypmod", "vartypmod", ScalarType::Int32),
        FieldSpec::scalar("Varcollid", "varcollid", ScalarType::UInt32),
        FieldSpec::scalar("Varlevelsup", "varlevelsup", ScalarType::UInt32),
        FieldSpec::scalar("Varnoold", "varnoold", ScalarType::UInt32),
        FieldSpec::scalar("Varoattno", "varoattno", ScalarType::Int16),
        FieldSpec::scalar("Location", "location", ScalarType::Int32),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = Var::default();
        fields.scalar("varno", &mut node.varno)?;
        fields.scalar("varattno", &mut node.varattno)?;
        fields.scalar("vartype", &mut node.vartype)?;
        fields.scalar("vartypmod", &mut node.vartypmod)?;
        fields.scalar("varcollid", &mut node.varcollid)?;
        fields.scalar("varlevelsup", &mut node.varlevelsup)?;
        fields.scalar("varnoold", &mut node.varnoold)?;
        fields.scalar("varoattno", &mut node.varoattno)?;
        fields.scalar("location", &mut node.location)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("varno", &self.varno);
        fields.scalar("varattno", &self.varattno);
        fields.scalar("vartype", &self.vartype);
        fields.scalar("vartypmod", &self.vartypmod);
        fields.scalar("varcollid", &self.varcollid);
        fields.scalar("varlevelsup", &self.varlevelsup);
        fields.scalar("varnoold", &self.varnoold);
        fields.scalar("varoattno", &self.varoattno);
        fields.scalar("location", &self.location);
        Ok(())
    }
}

/// A constant value. `constvalue` is the raw datum word; it is meaningless
/// when `constisnull` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Const {
    pub consttype: u32,
    pub consttypmod: i32,
    pub constcollid: u32,
    /// Type length; -1 for varlena, -2 for cstring.
    pub constlen: i32,
    pub constvalue: u64,
    pub constisnull: bool,
    pub constbyval: bool,
    pub location: i32,
}

impl NodeCodec for Const {
    const KIND: NodeKind = NodeKind::Const;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Consttype", "consttype", ScalarType::UInt32),
        FieldSpec::scalar("Consttypmod", "consttypmod", ScalarType::Int32),
        FieldSpec::scalar("Constcollid", "constcollid", ScalarType::UInt32),
        FieldSpec::scalar("Constlen", "constlen", ScalarType::Int32),
        FieldSpec::scalar("Constvalue", "constvalue", ScalarType::UInt64),
        FieldSpec::scalar("Constisnull", "constisnull", ScalarType::Bool),
        FieldSpec::scalar("Constbyval", "constbyval", ScalarType::Bool),
        FieldSpec::scalar("Location", "location", ScalarType::Int32),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = Const::default();
        fields.scalar("consttype", &mut node.consttype)?;
        fields.scalar("consttypmod", &mut node.consttypmod)?;
        fields.scalar("constcollid", &mut node.constcollid)?;
        fields.scalar("constlen", &mut node.constlen)?;
        fields.scalar("constvalue", &mut node.constvalue)?;
        fields.scalar("constisnull", &mut node.constisnull)?;
        fields.scalar("constbyval", &mut node.constbyval)?;
        fields.scalar("location", &mut node.location)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("consttype", &self.consttype);
        fields.scalar("consttypmod", &self.consttypmod);
        fields.scalar("constcollid", &self.constcollid);
        fields.scalar("constlen", &self.constlen);
        fields.scalar("constvalue", &self.constvalue);
        fields.scalar("constisnull", &self.constisnull);
        fields.scalar("constbyval", &self.constbyval);
        fields.scalar("location", &self.location);
        Ok(())
    }
}

/// An operator invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpExpr {
    /// pg_operator OID.
    pub opno: u32,
    /// Underlying function OID.
    pub opfuncid: u32,
    pub opresulttype: u32,
    pub opretset: bool,
    pub opcollid: u32,
    pub inputcollid: u32,
    /// One or two operands.
    pub args: Vec<Node>,
    pub location: i32,
}

impl NodeCodec for OpExpr {
    const KIND: NodeKind = NodeKind::OpExpr;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Opno", "opno", ScalarType::UInt32),
        FieldSpec::scalar("Opfuncid", "opfuncid", ScalarType::UInt32),
        FieldSpec::scalar("Opresulttype", "opresulttype", ScalarType::UInt32),
        FieldSpec::scalar("Opretset", "opretset", ScalarType::Bool),
        FieldSpec::scalar("Opcollid", "opcollid", ScalarType::UInt32),
        FieldSpec::scalar("Inputcollid", "inputcollid", ScalarType::UInt32),
        FieldSpec::list("Args", "args"),
        FieldSpec::scalar("Location", "location", ScalarType::Int32),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = OpExpr::default();
        fields.scalar("opno", &mut node.opno)?;
        fields.scalar("opfuncid", &mut node.opfuncid)?;
        fields.scalar("opresulttype", &mut node.opresulttype)?;
        fields.scalar("opretset", &mut node.opretset)?;
        fields.scalar("opcollid", &mut node.opcollid)?;
        fields.scalar("inputcollid", &mut node.inputcollid)?;
        fields.list("args", &mut node.args)?;
        fields.scalar("location", &mut node.location)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("opno", &self.opno);
        fields.scalar("opfuncid", &self.opfuncid);
        fields.scalar("opresulttype", &self.opresulttype);
        fields.scalar("opretset", &self.opretset);
        fields.scalar("opcollid", &self.opcollid);
        fields.scalar("inputcollid", &self.inputcollid);
        fields.list("args", &self.args)?;
        fields.scalar("location", &self.location);
        Ok(())
    }
}

/// AND / OR / NOT over `args`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolExpr {
    pub boolop: BoolExprType,
    pub args: Vec<Node>,
    pub location: i32,
}

impl NodeCodec for BoolExpr {
    const KIND: NodeKind = NodeKind::BoolExpr;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Boolop", "boolop", ScalarType::Enum("BoolExprType")),
        FieldSpec::list("Args", "args"),
        FieldSpec::scalar("Location", "location", ScalarType::Int32),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = BoolExpr::default();
        fields.scalar("boolop", &mut node.boolop)?;
        fields.list("args", &mut node.args)?;
        fields.scalar("location", &mut node.location)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("boolop", &self.boolop);
        fields.list("args", &self.args)?;
        fields.scalar("location", &self.location);
        Ok(())
    }
}
