//! Closed PostgreSQL enums carried by scalar fields.

use serde_json::Value;

use crate::catalog::ScalarType;
use crate::codec::EncodeOptions;
use crate::error::CodecError;
use crate::scalar::{decode_enum, encode_enum, PgEnum, Scalar};

/// Kind of statement a `Query` represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CmdType {
    #[default]
    Unknown,
    Select,
    Update,
    Insert,
    Delete,
    Utility,
    Nothing,
}

impl PgEnum for CmdType {
    const NAME: &'static str = "CmdType";
    const VARIANTS: &'static [Self] = &[
        CmdType::Unknown,
        CmdType::Select,
        CmdType::Update,
        CmdType::Insert,
        CmdType::Delete,
        CmdType::Utility,
        CmdType::Nothing,
    ];

    fn token(self) -> &'static str {
        match self {
            CmdType::Unknown => "CMD_UNKNOWN",
            CmdType::Select => "CMD_SELECT",
            CmdType::Update => "CMD_UPDATE",
            CmdType::Insert => "CMD_INSERT",
            CmdType::Delete => "CMD_DELETE",
            CmdType::Utility => "CMD_UTILITY",
            CmdType::Nothing => "CMD_NOTHING",
        }
    }
}

/// Where a `Query` came from: the parser or a rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuerySource {
    #[default]
    Original,
    Parser,
    InsteadRule,
    QualInsteadRule,
    NonInsteadRule,
}

impl PgEnum for QuerySource {
    const NAME: &'static str = "QuerySource";
    const VARIANTS: &'static [Self] = &[
        QuerySource::Original,
        QuerySource::Parser,
        QuerySource::InsteadRule,
        QuerySource::QualInsteadRule,
        QuerySource::NonInsteadRule,
    ];

    fn token(self) -> &'static str {
        match self {
            QuerySource::Original => "QSRC_ORIGINAL",
            QuerySource::Parser => "QSRC_PARSER",
            QuerySource::InsteadRule => "QSRC_INSTEAD_RULE",
            QuerySource::QualInsteadRule => "QSRC_QUAL_INSTEAD_RULE",
            QuerySource::NonInsteadRule => "QSRC_NON_INSTEAD_RULE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Full,
    Right,
    Semi,
    Anti,
    UniqueOuter,
    UniqueInner,
}

impl PgEnum for JoinType {
    const NAME: &'static str = "JoinType";
    const VARIANTS: &'static [Self] = &[
        JoinType::Inner,
        JoinType::Left,
        JoinType::Full,
        JoinType::Right,
        JoinType::Semi,
        JoinType::Anti,
        JoinType::UniqueOuter,
        JoinType::UniqueInner,
    ];

    fn token(self) -> &'static str {
        match self {
            JoinType::Inner => "JOIN_INNER",
            JoinType::Left => "JOIN_LEFT",
            JoinType::Full => "JOIN_FULL",
            JoinType::Right => "JOIN_RIGHT",
            JoinType::Semi => "JOIN_SEMI",
            JoinType::Anti => "JOIN_ANTI",
            JoinType::UniqueOuter => "JOIN_UNIQUE_OUTER",
            JoinType::UniqueInner => "JOIN_UNIQUE_INNER",
        }
    }
}

/// Kind of range table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RteKind {
    #[default]
    Relation,
    Subquery,
    Join,
    Function,
    TableFunc,
    Values,
    Cte,
    NamedTuplestore,
}

impl PgEnum for RteKind {
    const NAME: &'static str = "RTEKind";
    const VARIANTS: &'static [Self] = &[
        RteKind::Relation,
        RteKind::Subquery,
        RteKind::Join,
        RteKind::Function,
        RteKind::TableFunc,
        RteKind::Values,
        RteKind::Cte,
        RteKind::NamedTuplestore,
    ];

    fn token(self) -> &'static str {
        match self {
            RteKind::Relation => "RTE_RELATION",
            RteKind::Subquery => "RTE_SUBQUERY",
            RteKind::Join => "RTE_JOIN",
            RteKind::Function => "RTE_FUNCTION",
            RteKind::TableFunc => "RTE_TABLEFUNC",
            RteKind::Values => "RTE_VALUES",
            RteKind::Cte => "RTE_CTE",
            RteKind::NamedTuplestore => "RTE_NAMEDTUPLESTORE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolExprType {
    #[default]
    And,
    Or,
    Not,
}

impl PgEnum for BoolExprType {
    const NAME: &'static str = "BoolExprType";
    const VARIANTS: &'static [Self] = &[BoolExprType::And, BoolExprType::Or, BoolExprType::Not];

    fn token(self) -> &'static str {
        match self {
            BoolExprType::And => "AND_EXPR",
            BoolExprType::Or => "OR_EXPR",
            BoolExprType::Not => "NOT_EXPR",
        }
    }
}

/// Row lock strength of a `FOR ... ` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockClauseStrength {
    #[default]
    None,
    ForKeyShare,
    ForShare,
    ForNoKeyUpdate,
    ForUpdate,
}

impl PgEnum for LockClauseStrength {
    const NAME: &'static str = "LockClauseStrength";
    const VARIANTS: &'static [Self] = &[
        LockClauseStrength::None,
        LockClauseStrength::ForKeyShare,
        LockClauseStrength::ForShare,
        LockClauseStrength::ForNoKeyUpdate,
        LockClauseStrength::ForUpdate,
    ];

    fn token(self) -> &'static str {
        match self {
            LockClauseStrength::None => "LCS_NONE",
            LockClauseStrength::ForKeyShare => "LCS_FORKEYSHARE",
            LockClauseStrength::ForShare => "LCS_FORSHARE",
            LockClauseStrength::ForNoKeyUpdate => "LCS_FORNOKEYUPDATE",
            LockClauseStrength::ForUpdate => "LCS_FORUPDATE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockWaitPolicy {
    #[default]
    Block,
    Skip,
    Error,
}

impl PgEnum for LockWaitPolicy {
    const NAME: &'static str = "LockWaitPolicy";
    const VARIANTS: &'static [Self] = &[
        LockWaitPolicy::Block,
        LockWaitPolicy::Skip,
        LockWaitPolicy::Error,
    ];

    fn token(self) -> &'static str {
        match self {
            LockWaitPolicy::Block => "LockWaitBlock",
            LockWaitPolicy::Skip => "LockWaitSkip",
            LockWaitPolicy::Error => "LockWaitError",
        }
    }
}

macro_rules! enum_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const TYPE: ScalarType = ScalarType::Enum(<$ty as PgEnum>::NAME);

                fn encode(&self, options: &EncodeOptions) -> Value {
                    encode_enum(*self, options)
                }

                fn decode(value: &Value) -> Result<Self, CodecError> {
                    decode_enum(value)
                }
            }
        )*
    };
}

enum_scalar!(
    CmdType,
    QuerySource,
    JoinType,
    RteKind,
    BoolExprType,
    LockClauseStrength,
    LockWaitPolicy,
);
