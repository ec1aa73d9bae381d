//! Query clause nodes: target list entries, sort/group items, row marks and
//! WITH-list entries.

use crate::catalog::{FieldSpec, ScalarType};
use crate::codec::{FieldReader, FieldWriter, NodeCodec};
use crate::error::CodecError;
use crate::node::{Node, NodeKind};
use crate::nodes::{LockClauseStrength, LockWaitPolicy};

/// One output column of a target list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetEntry {
    /// Expression to evaluate.
    pub expr: Option<Box<Node>>,
    /// Attribute number, starting at 1.
    pub resno: i16,
    pub resname: String,
    /// Nonzero if referenced by a sort/group clause.
    pub ressortgroupref: u32,
    /// OID of the column's source table.
    pub resorigtbl: u32,
    pub resorigcol: i16,
    /// Set for columns that are not part of the final result.
    pub resjunk: bool,
}

impl NodeCodec for TargetEntry {
    const KIND: NodeKind = NodeKind::TargetEntry;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::node("Expr", "expr"),
        FieldSpec::scalar("Resno", "resno", ScalarType::Int16),
        FieldSpec::scalar("Resname", "resname", ScalarType::String),
        FieldSpec::scalar("Ressortgroupref", "ressortgroupref", ScalarType::UInt32),
        FieldSpec::scalar("Resorigtbl", "resorigtbl", ScalarType::UInt32),
        FieldSpec::scalar("Resorigcol", "resorigcol", ScalarType::Int16),
        FieldSpec::scalar("Resjunk", "resjunk", ScalarType::Bool),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = TargetEntry::default();
        fields.node("expr", &mut node.expr)?;
        fields.scalar("resno", &mut node.resno)?;
        fields.scalar("resname", &mut node.resname)?;
        fields.scalar("ressortgroupref", &mut node.ressortgroupref)?;
        fields.scalar("resorigtbl", &mut node.resorigtbl)?;
        fields.scalar("resorigcol", &mut node.resorigcol)?;
        fields.scalar("resjunk", &mut node.resjunk)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.node("expr", &self.expr)?;
        fields.scalar("resno", &self.resno);
        fields.scalar("resname", &self.resname);
        fields.scalar("ressortgroupref", &self.ressortgroupref);
        fields.scalar("resorigtbl", &self.resorigtbl);
        fields.scalar("resorigcol", &self.resorigcol);
        fields.scalar("resjunk", &self.resjunk);
        Ok(())
    }
}

/// An ORDER BY, GROUP BY or DISTINCT item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortGroupClause {
    /// Matches `TargetEntry::ressortgroupref`.
    pub tle_sort_group_ref: u32,
    pub eqop: u32,
    pub sortop: u32,
    pub nulls_first: bool,
    pub hashable: bool,
}

impl NodeCodec for SortGroupClause {
    const KIND: NodeKind = NodeKind::SortGroupClause;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("TleSortGroupRef", "tleSortGroupRef", ScalarType::UInt32),
        FieldSpec::scalar("Eqop", "eqop", ScalarType::UInt32),
        FieldSpec::scalar("Sortop", "sortop", ScalarType::UInt32),
        FieldSpec::scalar("NullsFirst", "nullsFirst", ScalarType::Bool),
        FieldSpec::scalar("Hashable", "hashable", ScalarType::Bool),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = SortGroupClause::default();
        fields.scalar("tleSortGroupRef", &mut node.tle_sort_group_ref)?;
        fields.scalar("eqop", &mut node.eqop)?;
        fields.scalar("sortop", &mut node.sortop)?;
        fields.scalar("nullsFirst", &mut node.nulls_first)?;
        fields.scalar("hashable", &mut node.hashable)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("tleSortGroupRef", &self.tle_sort_group_ref);
        fields.scalar("eqop", &self.eqop);
        fields.scalar("sortop", &self.sortop);
        fields.scalar("nullsFirst", &self.nulls_first);
        fields.scalar("hashable", &self.hashable);
        Ok(())
    }
}

/// A FOR [KEY] UPDATE/SHARE target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMarkClause {
    /// Range table index of the locked relation.
    pub rti: u32,
    pub strength: LockClauseStrength,
    pub wait_policy: LockWaitPolicy,
    /// Pushed down from a higher query level.
    pub pushed_down: bool,
}

impl NodeCodec for RowMarkClause {
    const KIND: NodeKind = NodeKind::RowMarkClause;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Rti", "rti", ScalarType::UInt32),
        FieldSpec::scalar("Strength", "strength", ScalarType::Enum("LockClauseStrength")),
        FieldSpec::scalar("WaitPolicy", "waitPolicy", ScalarType::Enum("LockWaitPolicy")),
        FieldSpec::scalar("PushedDown", "pushedDown", ScalarType::Bool),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = RowMarkClause::default();
        fields.scalar("rti", &mut node.rti)?;
        fields.scalar("strength", &mut node.strength)?;
        fields.scalar("waitPolicy", &mut node.wait_policy)?;
        fields.scalar("pushedDown", &mut node.pushed_down)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("rti", &self.rti);
        fields.scalar("strength", &self.strength);
        fields.scalar("waitPolicy", &self.wait_policy);
        fields.scalar("pushedDown", &self.pushed_down);
        Ok(())
    }
}

/// One WITH-list element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonTableExpr {
    pub ctename: String,
    /// Optional column names, as `String` nodes.
    pub aliascolnames: Vec<Node>,
    /// The CTE's query; a `Query` once analyzed.
    pub ctequery: Option<Box<Node>>,
    /// Token location, or -1 if unknown.
    pub location: i32,
    pub cterecursive: bool,
    /// Number of range table entries referencing this CTE.
    pub cterefcount: i32,
    pub ctecolnames: Vec<Node>,
    pub ctecoltypes: Vec<Node>,
    pub ctecoltypmods: Vec<Node>,
    pub ctecolcollations: Vec<Node>,
}

impl NodeCodec for CommonTableExpr {
    const KIND: NodeKind = NodeKind::CommonTableExpr;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Ctename", "ctename", ScalarType::String),
        FieldSpec::list("Aliascolnames", "aliascolnames"),
        FieldSpec::node("Ctequery", "ctequery"),
        FieldSpec::scalar("Location", "location", ScalarType::Int32),
        FieldSpec::scalar("Cterecursive", "cterecursive", ScalarType::Bool),
        FieldSpec::scalar("Cterefcount", "cterefcount", ScalarType::Int32),
        FieldSpec::list("Ctecolnames", "ctecolnames"),
        FieldSpec::list("Ctecoltypes", "ctecoltypes"),
        FieldSpec::list("Ctecoltypmods", "ctecoltypmods"),
        FieldSpec::list("Ctecolcollations", "ctecolcollations"),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = CommonTableExpr::default();
        fields.scalar("ctename", &mut node.ctename)?;
        fields.list("aliascolnames", &mut node.aliascolnames)?;
        fields.node("ctequery", &mut node.ctequery)?;
        fields.scalar("location", &mut node.location)?;
        fields.scalar("cterecursive", &mut node.cterecursive)?;
        fields.scalar("cterefcount", &mut node.cterefcount)?;
        fields.list("ctecolnames", &mut node.ctecolnames)?;
        fields.list("ctecoltypes", &mut node.ctecoltypes)?;
        fields.list("ctecoltypmods", &mut node.ctecoltypmods)?;
        fields.list("ctecolcollations", &mut node.ctecolcollations)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("ctename", &self.ctename);
        fields.list("aliascolnames", &self.aliascolnames)?;
        fields.node("ctequery", &self.ctequery)?;
        fields.scalar("location", &self.location);
        fields.scalar("cterecursive", &self.cterecursive);
        fields.scalar("cterefcount", &self.cterefcount);
        fields.list("ctecolnames", &self.ctecolnames)?;
        fields.list("ctecoltypes", &self.ctecoltypes)?;
        fields.list("ctecoltypmods", &self.ctecoltypmods)?;
        fields.list("ctecolcollations", &self.ctecolcollations)?;
        Ok(())
    }
}
