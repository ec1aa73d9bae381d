//! The `Query` node: the analyzed form of one statement.

use crate::catalog::{FieldSpec, ScalarType};
use crate::codec::{FieldReader, FieldWriter, NodeCodec};
use crate::error::CodecError;
use crate::node::{Node, NodeKind};
use crate::nodes::{CmdType, FromExpr, QuerySource};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// select|insert|update|delete|utility
    pub command_type: CmdType,
    pub query_source: QuerySource,
    /// Query identifier, settable by plugins.
    pub query_id: u32,
    pub can_set_tag: bool,
    /// Set for DECLARE CURSOR and non-optimizable statements.
    pub utility_stmt: Option<Box<Node>>,
    /// Range table index of the INSERT/UPDATE/DELETE target; 0 for SELECT.
    pub result_relation: i32,
    pub has_aggs: bool,
    pub has_window_funcs: bool,
    pub has_sub_links: bool,
    pub has_distinct_on: bool,
    pub has_recursive: bool,
    pub has_modifying_cte: bool,
    pub has_for_update: bool,
    pub cte_list: Vec<Node>,
    /// Range table entries; several entry kinds may be mixed.
    pub rtable: Vec<Node>,
    /// FROM and WHERE clauses.
    pub jointree: Option<Box<FromExpr>>,
    pub target_list: Vec<Node>,
    pub with_check_options: Vec<Node>,
    pub returning_list: Vec<Node>,
    pub group_clause: Vec<Node>,
    /// Qualifications applied to groups; absent without HAVING.
    pub having_qual: Option<Box<Node>>,
    pub window_clause: Vec<Node>,
    pub distinct_clause: Vec<Node>,
    pub sort_clause: Vec<Node>,
    pub limit_offset: Option<Box<Node>>,
    pub limit_count: Option<Box<Node>>,
    pub row_marks: Vec<Node>,
    /// Set-operation tree for the top level of a UNION/INTERSECT/EXCEPT.
    pub set_operations: Option<Box<Node>>,
    pub constraint_deps: Vec<Node>,
}

impl NodeCodec for Query {
    const KIND: NodeKind = NodeKind::Query;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("CommandType", "commandType", ScalarType::Enum("CmdType")),
        FieldSpec::scalar("QuerySource", "querySource", ScalarType::Enum("QuerySource")),
        FieldSpec::scalar("QueryId", "queryId", ScalarType::UInt32),
        FieldSpec::scalar("CanSetTag", "canSetTag", ScalarType::Bool),
        FieldSpec::node("UtilityStmt", "utilityStmt"),
        FieldSpec::scalar("ResultRelation", "resultRelation", ScalarType::Int32),
        FieldSpec::scalar("HasAggs", "hasAggs", ScalarType::Bool),
        FieldSpec::scalar("HasWindowFuncs", "hasWindowFuncs", ScalarType::Bool),
        FieldSpec::scalar("HasSubLinks", "hasSubLinks", ScalarType::Bool),
        FieldSpec::scalar("HasDistinctOn", "hasDistinctOn", ScalarType::Bool),
        FieldSpec::scalar("HasRecursive", "hasRecursive", ScalarType::Bool),
        FieldSpec::scalar("HasModifyingCTE", "hasModifyingCTE", ScalarType::Bool),
        FieldSpec::scalar("HasForUpdate", "hasForUpdate", ScalarType::Bool),
        FieldSpec::list("CteList", "cteList"),
        FieldSpec::list("Rtable", "rtable"),
        FieldSpec::exact("Jointree", "jointree", NodeKind::FromExpr),
        FieldSpec::list("TargetList", "targetList"),
        FieldSpec::list("WithCheckOptions", "withCheckOptions"),
        FieldSpec::list("ReturningList", "returningList"),
        FieldSpec::list("GroupClause", "groupClause"),
        FieldSpec::node("HavingQual", "havingQual"),
        FieldSpec::list("WindowClause", "windowClause"),
        FieldSpec::list("DistinctClause", "distinctClause"),
        FieldSpec::list("SortClause", "sortClause"),
        FieldSpec::node("LimitOffset", "limitOffset"),
        FieldSpec::node("LimitCount", "limitCount"),
        FieldSpec::list("RowMarks", "rowMarks"),
        FieldSpec::node("SetOperations", "setOperations"),
        FieldSpec::list("ConstraintDeps", "constraintDeps"),
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, CodecError> {
        let mut node = Query::default();
        fields.scalar("commandType", &mut node.command_type)?;
        fields.scalar("querySource", &mut node.query_source)?;
        fields.scalar("queryId", &mut node.query_id)?;
        fields.scalar("canSetTag", &mut node.can_set_tag)?;
        fields.node("utilityStmt", &mut node.utility_stmt)?;
        fields.scalar("resultRelation", &mut node.result_relation)?;
        fields.scalar("hasAggs", &mut node.has_aggs)?;
        fields.scalar("hasWindowFuncs", &mut node.has_window_funcs)?;
        fields.scalar("hasSubLinks", &mut node.has_sub_links)?;
        fields.scalar("hasDistinctOn", &mut node.has_distinct_on)?;
        fields.scalar("hasRecursive", &mut node.has_recursive)?;
        fields.scalar("hasModifyingCTE", &mut node.has_modifying_cte)?;
        fields.scalar("hasForUpdate", &mut node.has_for_update)?;
        fields.list("cteList", &mut node.cte_list)?;
        fields.list("rtable", &mut node.rtable)?;
        fields.exact("jointree", &mut node.jointree)?;
        fields.list("targetList", &mut node.target_list)?;
        fields.list("withCheckOptions", &mut node.with_check_options)?;
        fields.list("returningList", &mut node.returning_list)?;
        fields.list("groupClause", &mut node.group_clause)?;
        fields.node("havingQual", &mut node.having_qual)?;
        fields.list("windowClause", &mut node.window_clause)?;
        fields.list("distinctClause", &mut node.distinct_clause)?;
        fields.list("sortClause", &mut node.sort_clause)?;
        fields.node("limitOffset", &mut node.limit_offset)?;
        fields.node("limitCount", &mut node.limit_count)?;
        fields.list("rowMarks", &mut node.row_marks)?;
        fields.node("setOperations", &mut node.set_operations)?;
        fields.list("constraintDeps", &mut node.constraint_deps)?;
        Ok(node)
    }

    fn encode_fields(&self, fields: &mut FieldWriter<'_>) -> Result<(), CodecError> {
        fields.scalar("commandType", &self.command_type);
        fields.scalar("querySource", &self.query_source);
        fields.scalar("queryId", &self.query_id);
        fields.scalar("canSetTag", &self.can_set_tag);
        fields.node("utilityStmt", &self.utility_stmt)?;
        fields.scalar("resultRelation", &self.result_relation);
        fields.scalar("hasAggs", &self.has_aggs);
        fields.scalar("hasWindowFuncs", &self.has_window_funcs);
        fields.scalar("hasSubLinks", &self.has_sub_links);
        fields.scalar("hasDistinctOn", &self.has_distinct_on);
        fields.scalar("hasRecursive", &self.has_recursive);
        fields.scalar("hasModifyingCTE", &self.has_modifying_cte);
        fields.scalar("hasForUpdate", &self.has_for_update);
        fields.list("cteList", &self.cte_list)?;
        fields.list("rtable", &self.rtable)?;
        fields.exact("jointree", &self.jointree)?;
        fields.list("targetList", &self.target_list)?;
        fields.list("withCheckOptions", &self.with_check_options)?;
        fields.list("returningList", &self.returning_list)?;
        fields.list("groupClause", &self.group_clause)?;
        fields.node("havingQual", &self.having_qual)?;
        fields.list("windowClause", &self.window_clause)?;
        fields.list("distinctClause", &self.distinct_clause)?;
        fields.list("sortClause", &self.sort_clause)?;
        fields.node("limitOffset", &self.limit_offset)?;
        fields.node("limitCount", &self.limit_count)?;
        fields.list("rowMarks", &self.row_marks)?;
        fields.node("setOperations", &self.set_operations)?;
        fields.list("constraintDeps", &self.constraint_deps)?;
        Ok(())
    }
}
