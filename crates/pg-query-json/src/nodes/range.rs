//! Range table and join tree nodes.

use crate::catalog::{FieldSpec, ScalarType};
use crate::codec::{FieldReader, FieldWriter, NodeCodec};
use crate::error::CodecError;
use crate::node::{Node, NodeKind};
use crate::nodes::{JoinType, Query, RteKind};

/// Top of a join tree: the FROM list plus the WHERE qualification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FromExpr {
    /// `RangeTblRef`s and `JoinExpr`s, in FROM order.
    pub fromlist: Vec<Node>,
    pub quals: Option<Box<Node>>,
}

impl NodeCodec for FromExpr {
    const KIND: NodeKind = NodeKind::FromExpr;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::list("Fromlist", "fromlist"),
        FieldSpec::node("Quals", "quals"),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = FromExpr::default();
        fields.list("fromlist", &mut node.fromlist)?;
        fields.node("quals", &mut node.quals)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.list("fromlist", &self.fromlist)?;
        fields.node("quals", &self.quals)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinExpr {
    pub jointype: JoinType,
    pub is_natural: bool,
    pub larg: Option<Box<Node>>,
    pub rarg: Option<Box<Node>>,
    pub using_clause: Vec<Node>,
    pub quals: Option<Box<Node>>,
    pub alias: Option<Box<Alias>>,
    /// Range table index assigned to the join; 0 if none.
    pub rtindex: i32,
}

impl NodeCodec for JoinExpr {
    const KIND: NodeKind = NodeKind::JoinExpr;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Jointype", "jointype", ScalarType::Enum("JoinType")),
        FieldSpec::scalar("IsNatural", "isNatural", ScalarType::Bool),
        FieldSpec::node("Larg", "larg"),
        FieldSpec::node("Rarg", "rarg"),
        FieldSpec::list("UsingClause", "usingClause"),
        FieldSpec::node("Quals", "quals"),
        FieldSpec::exact("Alias", "alias", NodeKind::Alias),
        FieldSpec::scalar("Rtindex", "rtindex", ScalarType::Int32),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = JoinExpr::default();
        fields.scalar("jointype", &mut node.jointype)?;
        fields.scalar("isNatural", &mut node.is_natural)?;
        fields.node("larg", &mut node.larg)?;
        fields.node("rarg", &mut node.rarg)?;
        fields.list("usingClause", &mut node.using_clause)?;
        fields.node("quals", &mut node.quals)?;
        fields.exact("alias", &mut node.alias)?;
        fields.scalar("rtindex", &mut node.rtindex)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("jointype", &self.jointype);
        fields.scalar("isNatural", &self.is_natural);
        fields.node("larg", &self.larg)?;
        fields.node("rarg", &self.rarg)?;
        fields.list("usingClause", &self.using_clause)?;
        fields.node("quals", &self.quals)?;
        fields.exact("alias", &self.alias)?;
        fields.scalar("rtindex", &self.rtindex);
        Ok(())
    }
}

/// Reference to a range table entry by index, used in join trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeTblRef {
    pub rtindex: i32,
}

impl NodeCodec for RangeTblRef {
    const KIND: NodeKind = NodeKind::RangeTblRef;
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::scalar("Rtindex", "rtindex", ScalarType::Int32)];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = RangeTblRef::default();
        fields.scalar("rtindex", &mut node.rtindex)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("rtindex", &self.rtindex);
        Ok(())
    }
}

/// One entry of a query's range table. Which fields are meaningful depends
/// on `rtekind`; the rest stay at their zero values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeTblEntry {
    pub rtekind: RteKind,
    /// OID of the relation, for `RTE_RELATION`.
    pub relid: u32,
    /// The sub-query, for `RTE_SUBQUERY`.
    pub subquery: Option<Box<Query>>,
    pub security_barrier: bool,
    /// For `RTE_JOIN`.
    pub jointype: JoinType,
    pub joinaliasvars: Vec<Node>,
    /// For `RTE_FUNCTION`.
    pub functions: Vec<Node>,
    pub funcordinality: bool,
    /// For `RTE_VALUES`.
    pub values_lists: Vec<Node>,
    /// For `RTE_CTE`.
    pub ctename: String,
    pub ctelevelsup: u32,
    pub self_reference: bool,
    /// User-written alias clause, if any.
    pub alias: Option<Box<Alias>>,
    /// Expanded reference names.
    pub eref: Option<Box<Alias>>,
    pub lateral: bool,
    pub inh: bool,
    pub in_from_cl: bool,
    pub required_perms: u32,
    pub check_as_user: u32,
    pub security_quals: Vec<Node>,
}

impl NodeCodec for RangeTblEntry {
    const KIND: NodeKind = NodeKind::RangeTblEntry;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Rtekind", "rtekind", ScalarType::Enum("RTEKind")),
        FieldSpec::scalar("Relid", "relid", ScalarType::UInt32),
        FieldSpec::exact("Subquery", "subquery", NodeKind::Query),
        FieldSpec::scalar("SecurityBarrier", "securityBarrier", ScalarType::Bool),
        FieldSpec::scalar("Jointype", "jointype", ScalarType::Enum("JoinType")),
        FieldSpec::list("Joinaliasvars", "joinaliasvars"),
        FieldSpec::list("Functions", "functions"),
        FieldSpec::scalar("Funcordinality", "funcordinality", ScalarType::Bool),
        FieldSpec::list("ValuesLists", "valuesLists"),
        FieldSpec::scalar("Ctename", "ctename", ScalarType::String),
        FieldSpec::scalar("Ctelevelsup", "ctelevelsup", ScalarType::UInt32),
        FieldSpec::scalar("SelfReference", "selfReference", ScalarType::Bool),
        FieldSpec::exact("Alias", "alias", NodeKind::Alias),
        FieldSpec::exact("Eref", "eref", NodeKind::Alias),
        FieldSpec::scalar("Lateral", "lateral", ScalarType::Bool),
        FieldSpec::scalar("Inh", "inh", ScalarType::Bool),
        FieldSpec::scalar("InFromCl", "inFromCl", ScalarType::Bool),
        FieldSpec::scalar("RequiredPerms", "requiredPerms", ScalarType::UInt32),
        FieldSpec::scalar("CheckAsUser", "checkAsUser", ScalarType::UInt32),
        FieldSpec::list("SecurityQuals", "securityQuals"),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = RangeTblEntry::default();
        fields.scalar("rtekind", &mut node.rtekind)?;
        fields.scalar("relid", &mut node.relid)?;
        fields.exact("subquery", &mut node.subquery)?;
        fields.scalar("securityBarrier", &mut node.security_barrier)?;
        fields.scalar("jointype", &mut node.jointype)?;
        fields.list("joinaliasvars", &mut node.joinaliasvars)?;
        fields.list("functions", &mut node.functions)?;
        fields.scalar("funcordinality", &mut node.funcordinality)?;
        fields.list("valuesLists", &mut node.values_lists)?;
        fields.scalar("ctename", &mut node.ctename)?;
        fields.scalar("ctelevelsup", &mut node.ctelevelsup)?;
        fields.scalar("selfReference", &mut node.self_reference)?;
        fields.exact("alias", &mut node.alias)?;
        fields.exact("eref", &mut node.eref)?;
        fields.scalar("lateral", &mut node.lateral)?;
        fields.scalar("inh", &mut node.inh)?;
        fields.scalar("inFromCl", &mut node.in_from_cl)?;
        fields.scalar("requiredPerms", &mut node.required_perms)?;
        fields.scalar("checkAsUser", &mut node.check_as_user)?;
        fields.list("securityQuals", &mut node.security_quals)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("rtekind", &self.rtekind);
        fields.scalar("relid", &self.relid);
        fields.exact("subquery", &self.subquery)?;
        fields.scalar("securityBarrier", &self.security_barrier);
        fields.scalar("jointype", &self.jointype);
        fields.list("joinaliasvars", &self.joinaliasvars)?;
        fields.list("functions", &self.functions)?;
        fields.scalar("funcordinality", &self.funcordinality);
        fields.list("valuesLists", &self.values_lists)?;
        fields.scalar("ctename", &self.ctename);
        fields.scalar("ctelevelsup", &self.ctelevelsup);
        fields.scalar("selfReference", &self.self_reference);
        fields.exact("alias", &self.alias)?;
        fields.exact("eref", &self.eref)?;
        fields.scalar("lateral", &self.lateral);
        fields.scalar("inh", &self.inh);
        fields.scalar("inFromCl", &self.in_from_cl);
        fields.scalar("requiredPerms", &self.required_perms);
        fields.scalar("checkAsUser", &self.check_as_user);
        fields.list("securityQuals", &self.security_quals)?;
        Ok(())
    }
}

/// Alias name plus optional column aliases (as `String` nodes).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alias {
    pub aliasname: String,
    pub colnames: Vec<Node>,
}

impl NodeCodec for Alias {
    const KIND: NodeKind = NodeKind::Alias;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("Aliasname", "aliasname", ScalarType::String),
        FieldSpec::list("Colnames", "colnames"),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = Alias::default();
        fields.scalar("aliasname", &mut node.aliasname)?;
        fields.list("colnames", &mut node.colnames)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("aliasname", &self.aliasname);
        fields.list("colnames", &self.colnames)?;
        Ok(())
    }
}
