//! Node catalog: the static table of node kinds, their wire tags and field
//! schemas.
//!
//! A [`Catalog`] is read-only once built and is handed to the codec
//! explicitly, so tests can run the codec against a synthetic catalog.

use std::collections::HashMap;
use std::sync::OnceLock;

use indexmap::IndexMap;
use thiserror::Error;

use crate::codec::NodeCodec;
use crate::node::NodeKind;
use crate::nodes::{
    Alias, BoolExpr, CommonTableExpr, Const, FromExpr, IntegerValue, JoinExpr, OpExpr, Query,
    RangeTblEntry, RangeTblRef, RowMarkClause, SortGroupClause, StringValue, TargetEntry, Var,
};

// ── Field schema ──────────────────────────────────────────────────────────

/// Primitive and enum leaf types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Bool,
    Int16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    String,
    /// A closed enum, named by its PostgreSQL type name.
    Enum(&'static str),
}

/// The four field shapes a node kind can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Scalar(ScalarType),
    /// Zero or one child of any kind.
    Node,
    /// Ordered children, each of any kind.
    NodeList,
    /// Zero or one child that must be exactly this kind.
    Exact(NodeKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Identifier as declared in the node headers, e.g. `HasModifyingCTE`.
    pub name: &'static str,
    /// Key used on the wire, e.g. `hasModifyingCTE`.
    pub wire: &'static str,
    pub shape: FieldShape,
}

impl FieldSpec {
    pub const fn new(name: &'static str, wire: &'static str, shape: FieldShape) -> Self {
        Self { name, wire, shape }
    }

    pub const fn scalar(name: &'static str, wire: &'static str, ty: ScalarType) -> Self {
        Self::new(name, wire, FieldShape::Scalar(ty))
    }

    pub const fn node(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, FieldShape::Node)
    }

    pub const fn list(name: &'static str, wire: &'static str) -> Self {
        Self::new(name, wire, FieldShape::NodeList)
    }

    pub const fn exact(name: &'static str, wire: &'static str, kind: NodeKind) -> Self {
        Self::new(name, wire, FieldShape::Exact(kind))
    }
}

/// Wire name for a declared field identifier: first letter lower-cased, the
/// rest kept as declared.
pub fn wire_field_name(declared: &str) -> String {
    let mut chars = declared.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Kind descriptors ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    pub kind: NodeKind,
    /// Sole key of the wrapper object.
    pub tag: &'static str,
    /// Declared fields, in declared order.
    pub fields: &'static [FieldSpec],
}

impl KindSpec {
    /// Descriptor for a kind with a composite codec, using its declared fields.
    pub const fn of<T: NodeCodec>(tag: &'static str) -> Self {
        Self {
            kind: T::KIND,
            tag,
            fields: T::FIELDS,
        }
    }

    pub fn field(&self, wire: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.wire == wire)
    }
}

const BUILTIN_KINDS: &[KindSpec] = &[
    KindSpec::of::<Query>("QUERY"),
    KindSpec::of::<FromExpr>("FROMEXPR"),
    KindSpec::of::<JoinExpr>("JOINEXPR"),
    KindSpec::of::<RangeTblRef>("RANGETBLREF"),
    KindSpec::of::<RangeTblEntry>("RANGETBLENTRY"),
    KindSpec::of::<TargetEntry>("TARGETENTRY"),
    KindSpec::of::<SortGroupClause>("SORTGROUPCLAUSE"),
    KindSpec::of::<RowMarkClause>("ROWMARKCLAUSE"),
    KindSpec::of::<CommonTableExpr>("COMMONTABLEEXPR"),
    KindSpec::of::<Alias>("ALIAS"),
    KindSpec::of::<Var>("VAR"),
    KindSpec::of::<Const>("CONST"),
    KindSpec::of::<OpExpr>("OPEXPR"),
    KindSpec::of::<BoolExpr>("BOOLEXPR"),
    KindSpec::of::<StringValue>("STRING"),
    KindSpec::of::<IntegerValue>("INTEGER"),
];

// ── Catalog ───────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate tag: {0}")]
    DuplicateTag(&'static str),
    #[error("duplicate kind: {0}")]
    DuplicateKind(NodeKind),
    #[error("tag {tag} of {kind} is not the upper-cased kind name")]
    TagConvention { kind: NodeKind, tag: &'static str },
    #[error("{kind}.{name} has wire name {wire}, expected {expected}")]
    FieldConvention {
        kind: NodeKind,
        name: &'static str,
        wire: &'static str,
        expected: String,
    },
    #[error("{kind} declares field {wire} twice")]
    DuplicateField { kind: NodeKind, wire: &'static str },
}

/// Lookup table from wire tag to kind descriptor and back.
#[derive(Debug, Clone)]
pub struct Catalog {
    by_tag: IndexMap<&'static str, KindSpec>,
    by_kind: HashMap<NodeKind, usize>,
    duplicates: Vec<CatalogError>,
}

impl Catalog {
    /// Builds a catalog from kind descriptors. Later descriptors replace earlier
    /// ones with the same tag or kind; [`Catalog::validate`] reports this.
    pub fn new(kinds: impl IntoIterator<Item = KindSpec>) -> Self {
        let mut by_tag: IndexMap<&'static str, KindSpec> = IndexMap::new();
        let mut duplicates = Vec::new();
        for spec in kinds {
            if let Some(prev) = by_tag.values().position(|s| s.kind == spec.kind) {
                duplicates.push(CatalogError::DuplicateKind(spec.kind));
                by_tag.shift_remove_index(prev);
            }
            if by_tag.insert(spec.tag, spec).is_some() {
                duplicates.push(CatalogError::DuplicateTag(spec.tag));
            }
        }
        let by_kind = by_tag
            .values()
            .enumerate()
            .map(|(i, spec)| (spec.kind, i))
            .collect();
        Self {
            by_tag,
            by_kind,
            duplicates,
        }
    }

    /// The catalog of every kind this crate implements.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog::new(BUILTIN_KINDS.iter().copied()))
    }

    pub fn lookup(&self, tag: &str) -> Option<&KindSpec> {
        self.by_tag.get(tag)
    }

    pub fn spec(&self, kind: NodeKind) -> Option<&KindSpec> {
        let index = *self.by_kind.get(&kind)?;
        self.by_tag.get_index(index).map(|(_, spec)| spec)
    }

    pub fn tag(&self, kind: NodeKind) -> Option<&'static str> {
        self.spec(kind).map(|spec| spec.tag)
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    /// Descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &KindSpec> {
        self.by_tag.values()
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    /// Checks that tags and kinds were unique and that every descriptor follows
    /// the naming conventions: tag = upper-cased kind name, wire field name =
    /// [`wire_field_name`] of the declared name.
    pub fn validate(&self) -> Result<(), Vec<CatalogError>> {
        let mut errors = self.duplicates.clone();
        for spec in self.iter() {
            if spec.tag != spec.kind.name().to_uppercase() {
                errors.push(CatalogError::TagConvention {
                    kind: spec.kind,
                    tag: spec.tag,
                });
            }
            for (i, field) in spec.fields.iter().enumerate() {
                let expected = wire_field_name(field.name);
                if field.wire != expected {
                    errors.push(CatalogError::FieldConvention {
                        kind: spec.kind,
                        name: field.name,
                        wire: field.wire,
                        expected,
                    });
                }
                if spec.fields[..i].iter().any(|f| f.wire == field.wire) {
                    errors.push(CatalogError::DuplicateField {
                        kind: spec.kind,
                        wire: field.wire,
                    });
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_lower_the_first_letter_only() {
        assert_eq!(wire_field_name("CommandType"), "commandType");
        assert_eq!(wire_field_name("HasModifyingCTE"), "hasModifyingCTE");
        assert_eq!(wire_field_name("Rtable"), "rtable");
        assert_eq!(wire_field_name(""), "");
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.len(), NodeKind::ALL.len());
        for kind in NodeKind::ALL {
            let spec = catalog.spec(kind).expect("every kind is cataloged");
            assert_eq!(spec.kind, kind);
            assert_eq!(catalog.lookup(spec.tag).map(|s| s.kind), Some(kind));
        }
    }

    #[test]
    fn query_jointree_is_exact_from_expr() {
        let spec = Catalog::builtin().spec(NodeKind::Query).unwrap();
        let jointree = spec.field("jointree").unwrap();
        assert_eq!(jointree.shape, FieldShape::Exact(NodeKind::FromExpr));
        assert_eq!(spec.field("havingQual").unwrap().shape, FieldShape::Node);
        assert_eq!(spec.field("rtable").unwrap().shape, FieldShape::NodeList);
    }

    #[test]
    fn duplicates_and_conventions_are_reported() {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::scalar("Ival", "Ival", ScalarType::Int64),
            FieldSpec::scalar("Other", "ival", ScalarType::Int64),
        ];
        let catalog = Catalog::new([
            KindSpec::of::<Var>("VAR"),
            KindSpec {
                kind: NodeKind::Integer,
                tag: "INT",
                fields: FIELDS,
            },
            KindSpec::of::<Const>("VAR"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("VAR").map(|s| s.kind), Some(NodeKind::Const));
        assert!(!catalog.contains(NodeKind::Var));

        let errors = catalog.validate().unwrap_err();
        assert!(errors.contains(&CatalogError::DuplicateTag("VAR")));
        assert!(errors.contains(&CatalogError::TagConvention {
            kind: NodeKind::Integer,
            tag: "INT"
        }));
        assert!(errors.iter().any(|e| matches!(
            e,
            CatalogError::FieldConvention { name: "Ival", .. }
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            CatalogError::FieldConvention { name: "Other", .. }
        )));
    }
}
