//! Field structs for every builtin node kind, with their [`NodeCodec`]
//! impls.
//!
//! [`NodeCodec`]: crate::codec::NodeCodec

mod clauses;
mod enums;
mod expr;
mod query;
mod range;
mod value;

pub use clauses::{CommonTableExpr, RowMarkClause, SortGroupClause, TargetEntry};
pub use enums::{
    BoolExprType, CmdType, JoinType, LockClauseStrength, LockWaitPolicy, QuerySource, RteKind,
};
pub use expr::{BoolExpr, Const, OpExpr, Var};
pub use query::Query;
pub use range::{Alias, FromExpr, JoinExpr, RangeTblEntry, RangeTblRef};
pub use value::{IntegerValue, StringValue};
