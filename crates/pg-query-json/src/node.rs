//! The polymorphic parse tree node.

use std::fmt;

use crate::nodes::{
    Alias, BoolExpr, CommonTableExpr, Const, FromExpr, IntegerValue, JoinExpr, OpExpr, Query,
    RangeTblEntry, RangeTblRef, RowMarkClause, SortGroupClause, StringValue, TargetEntry, Var,
};

/// Identifies one member of the closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Query,
    FromExpr,
    JoinExpr,
    RangeTblRef,
    RangeTblEntry,
    TargetEntry,
    SortGroupClause,
    RowMarkClause,
    CommonTableExpr,
    Alias,
    Var,
    Const,
    OpExpr,
    BoolExpr,
    String,
    Integer,
}

impl NodeKind {
    pub const ALL: [NodeKind; 16] = [
        NodeKind::Query,
        NodeKind::FromExpr,
        NodeKind::JoinExpr,
        NodeKind::RangeTblRef,
        NodeKind::RangeTblEntry,
        NodeKind::TargetEntry,
        NodeKind::SortGroupClause,
        NodeKind::RowMarkClause,
        NodeKind::CommonTableExpr,
        NodeKind::Alias,
        NodeKind::Var,
        NodeKind::Const,
        NodeKind::OpExpr,
        NodeKind::BoolExpr,
        NodeKind::String,
        NodeKind::Integer,
    ];

    /// The kind identifier as declared in the PostgreSQL node headers.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Query => "Query",
            NodeKind::FromExpr => "FromExpr",
            NodeKind::JoinExpr => "JoinExpr",
            NodeKind::RangeTblRef => "RangeTblRef",
            NodeKind::RangeTblEntry => "RangeTblEntry",
            NodeKind::TargetEntry => "TargetEntry",
            NodeKind::SortGroupClause => "SortGroupClause",
            NodeKind::RowMarkClause => "RowMarkClause",
            NodeKind::CommonTableExpr => "CommonTableExpr",
            NodeKind::Alias => "Alias",
            NodeKind::Var => "Var",
            NodeKind::Const => "Const",
            NodeKind::OpExpr => "OpExpr",
            NodeKind::BoolExpr => "BoolExpr",
            NodeKind::String => "String",
            NodeKind::Integer => "Integer",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parse tree node: always exactly one concrete kind.
///
/// Each node owns its children outright; the tree has no sharing and no
/// cycles. The larger kinds are boxed to keep sequences of small expression
/// nodes compact.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Query(Box<Query>),
    FromExpr(FromExpr),
    JoinExpr(Box<JoinExpr>),
    RangeTblRef(RangeTblRef),
    RangeTblEntry(Box<RangeTblEntry>),
    TargetEntry(TargetEntry),
    SortGroupClause(SortGroupClause),
    RowMarkClause(RowMarkClause),
    CommonTableExpr(Box<CommonTableExpr>),
    Alias(Alias),
    Var(Var),
    Const(Const),
    OpExpr(OpExpr),
    BoolExpr(BoolExpr),
    String(StringValue),
    Integer(IntegerValue),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Query(_) => NodeKind::Query,
            Node::FromExpr(_) => NodeKind::FromExpr,
            Node::JoinExpr(_) => NodeKind::JoinExpr,
            Node::RangeTblRef(_) => NodeKind::RangeTblRef,
            Node::RangeTblEntry(_) => NodeKind::RangeTblEntry,
            Node::TargetEntry(_) => NodeKind::TargetEntry,
            Node::SortGroupClause(_) => NodeKind::SortGroupClause,
            Node::RowMarkClause(_) => NodeKind::RowMarkClause,
            Node::CommonTableExpr(_) => NodeKind::CommonTableExpr,
            Node::Alias(_) => NodeKind::Alias,
            Node::Var(_) => NodeKind::Var,
            Node::Const(_) => NodeKind::Const,
            Node::OpExpr(_) => NodeKind::OpExpr,
            Node::BoolExpr(_) => NodeKind::BoolExpr,
            Node::String(_) => NodeKind::String,
            Node::Integer(_) => NodeKind::Integer,
        }
    }

    /// Shorthand for a `String` value node.
    pub fn string(s: impl Into<String>) -> Node {
        Node::String(StringValue { str: s.into() })
    }

    /// Shorthand for an `Integer` value node.
    pub fn integer(ival: i64) -> Node {
        Node::Integer(IntegerValue { ival })
    }
}

impl From<Query> for Node {
    fn from(node: Query) -> Self {
        Node::Query(Box::new(node))
    }
}

impl From<FromExpr> for Node {
    fn from(node: FromExpr) -> Self {
        Node::FromExpr(node)
    }
}

impl From<JoinExpr> for Node {
    fn from(node: JoinExpr) -> Self {
        Node::JoinExpr(Box::new(node))
    }
}

impl From<RangeTblRef> for Node {
    fn from(node: RangeTblRef) -> Self {
        Node::RangeTblRef(node)
    }
}

impl From<RangeTblEntry> for Node {
    fn from(node: RangeTblEntry) -> Self {
        Node::RangeTblEntry(Box::new(node))
    }
}

impl From<TargetEntry> for Node {
    fn from(node: TargetEntry) -> Self {
        Node::TargetEntry(node)
    }
}

impl From<SortGroupClause> for Node {
    fn from(node: SortGroupClause) -> Self {
        Node::SortGroupClause(node)
    }
}

impl From<RowMarkClause> for Node {
    fn from(node: RowMarkClause) -> Self {
        Node::RowMarkClause(node)
    }
}

impl From<CommonTableExpr> for Node {
    fn from(node: CommonTableExpr) -> Self {
        Node::CommonTableExpr(Box::new(node))
    }
}

impl From<Alias> for Node {
    fn from(node: Alias) -> Self {
        Node::Alias(node)
    }
}

impl From<Var> for Node {
    fn from(node: Var) -> Self {
        Node::Var(node)
    }
}

impl From<Const> for Node {
    fn from(node: Const) -> Self {
        Node::Const(node)
    }
}

impl From<OpExpr> for Node {
    fn from(node: OpExpr) -> Self {
        Node::OpExpr(node)
    }
}

impl From<BoolExpr> for Node {
    fn from(node: BoolExpr) -> Self {
        Node::BoolExpr(node)
    }
}

impl From<StringValue> for Node {
    fn from(node: StringValue) -> Self {
        Node::String(node)
    }
}

impl From<IntegerValue> for Node {
    fn from(node: IntegerValue) -> Self {
        Node::Integer(node)
    }
}
