use pg_query_json::{
    from_json, BoolExpr, Catalog, Codec, CodecError, DecodeOptions, Expect, KindSpec, Node,
    NodeKind, Query, RangeTblRef, StringValue,
};
use serde_json::{json, Value};

fn decode_err(input: Value) -> CodecError {
    match from_json(&input) {
        Ok(node) => panic!("expected decode error for {input}, got {:?}", node.kind()),
        Err(e) => e,
    }
}

#[test]
fn malformed_wrappers_are_rejected() {
    assert!(matches!(
        decode_err(json!({})),
        CodecError::MalformedWrapper { keys: 0 }
    ));
    assert!(matches!(
        decode_err(json!({"VAR": {}, "CONST": {}})),
        CodecError::MalformedWrapper { keys: 2 }
    ));
    assert!(matches!(
        decode_err(json!([{"VAR": {}}])),
        CodecError::TypeMismatch {
            expected: "node wrapper object",
            found: "array"
        }
    ));
    assert!(matches!(
        decode_err(json!({"VAR": 3})),
        CodecError::TypeMismatch {
            expected: "node body object",
            found: "number"
        }
    ));
}

#[test]
fn empty_wrappers_are_rejected_at_child_positions() {
    let cases = [
        (json!({"QUERY": {"havingQual": {}}}), "/QUERY/havingQual"),
        (json!({"QUERY": {"jointree": {}}}), "/QUERY/jointree"),
        (json!({"QUERY": {"rtable": [{}]}}), "/QUERY/rtable/0"),
    ];
    for (input, pointer) in cases {
        let err = decode_err(input);
        assert!(
            matches!(err.root(), CodecError::MalformedWrapper { keys: 0 }),
            "{pointer}: {err}"
        );
        assert_eq!(err.pointer(), pointer);
    }
}

#[test]
fn unknown_tags_are_rejected_not_skipped() {
    let err = decode_err(json!({"SELECTSTMT": {}}));
    assert!(matches!(&err, CodecError::UnknownNodeKind(tag) if tag == "SELECTSTMT"));
    assert_eq!(err.to_string(), "unknown node kind: SELECTSTMT");

    let err = decode_err(json!({"QUERY": {"targetList": [{"VAR": {}}, {"Var": {}}]}}));
    assert!(matches!(err.root(), CodecError::UnknownNodeKind(tag) if tag == "Var"));
    assert_eq!(err.pointer(), "/QUERY/targetList/1");
}

#[test]
fn exact_kind_fields_reject_other_kinds() {
    let err = decode_err(json!({"QUERY": {"jointree": {"RANGETBLREF": {"rtindex": 1}}}}));
    assert!(matches!(
        err.root(),
        CodecError::KindMismatch {
            expected: NodeKind::FromExpr,
            actual: NodeKind::RangeTblRef
        }
    ));
    assert_eq!(err.pointer(), "/QUERY/jointree");

    let err = decode_err(json!({
        "QUERY": {
            "rtable": [
                {"RANGETBLREF": {"rtindex": 1}},
                {"RANGETBLENTRY": {"rtekind": "RTE_SUBQUERY", "subquery": {"VAR": {}}}}
            ]
        }
    }));
    assert!(matches!(
        err.root(),
        CodecError::KindMismatch {
            expected: NodeKind::Query,
            actual: NodeKind::Var
        }
    ));
    assert_eq!(err.pointer(), "/QUERY/rtable/1/RANGETBLENTRY/subquery");
}

#[test]
fn exact_kind_fields_accept_their_kind_and_null() {
    let node = from_json(&json!({
        "RANGETBLENTRY": {
            "rtekind": "RTE_SUBQUERY",
            "subquery": {"QUERY": {"commandType": "CMD_SELECT"}},
            "alias": null,
            "eref": {"ALIAS": {"aliasname": "s", "colnames": [{"STRING": {"str": "a"}}]}}
        }
    }))
    .expect("decode must succeed");
    let Node::RangeTblEntry(rte) = node else {
        panic!("expected RangeTblEntry");
    };
    assert!(rte.subquery.is_some());
    assert!(rte.alias.is_none());
    assert_eq!(rte.eref.map(|a| a.aliasname), Some("s".to_string()));
}

#[test]
fn expectation_is_checked_before_the_body() {
    let codec = Codec::builtin();
    // The body is invalid for VAR, but the kind check fails first.
    let err = codec
        .decode(&json!({"VAR": {"varno": "bad"}}), Expect::Kind(NodeKind::Query))
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::KindMismatch {
            expected: NodeKind::Query,
            actual: NodeKind::Var
        }
    ));

    let node = codec
        .decode(&json!({"RANGETBLREF": {"rtindex": 4}}), Expect::Kind(NodeKind::RangeTblRef))
        .expect("decode must succeed");
    assert_eq!(node, Node::from(RangeTblRef { rtindex: 4 }));
}

#[test]
fn scalar_shape_errors_carry_field_location() {
    let err = decode_err(json!({"VAR": {"varno": "1"}}));
    assert!(matches!(
        err.root(),
        CodecError::TypeMismatch {
            expected: "u32",
            found: "string"
        }
    ));
    assert_eq!(err.pointer(), "/VAR/varno");

    let err = decode_err(json!({"TARGETENTRY": {"resno": 70000}}));
    assert!(matches!(err.root(), CodecError::TypeMismatch { expected: "i16", .. }));

    let err = decode_err(json!({"BOOLEXPR": {"boolop": "XOR_EXPR"}}));
    assert!(matches!(
        err.root(),
        CodecError::UnknownEnumValue { ty: "BoolExprType", token } if token == "XOR_EXPR"
    ));
    assert_eq!(err.pointer(), "/BOOLEXPR/boolop");
}

#[test]
fn sequence_errors() {
    let err = decode_err(json!({"BOOLEXPR": {"args": {"VAR": {}}}}));
    assert!(matches!(
        err.root(),
        CodecError::TypeMismatch {
            expected: "array of nodes",
            found: "object"
        }
    ));

    let err = decode_err(json!({"BOOLEXPR": {"args": [{"VAR": {}}, null]}}));
    assert!(matches!(
        err.root(),
        CodecError::TypeMismatch {
            expected: "node wrapper object",
            found: "null"
        }
    ));
    assert_eq!(err.pointer(), "/BOOLEXPR/args/1");
}

#[test]
fn unknown_fields_are_ignored_unless_denied() {
    let input = json!({"QUERY": {"rtable": [{"RANGETBLREF": {"rtindex": 1, "location": 9}}]}});
    assert!(from_json(&input).is_ok());

    let strict = Codec::builtin().with_decode_options(DecodeOptions {
        deny_unknown_fields: true,
    });
    let err = strict.decode(&input, Expect::Any).unwrap_err();
    assert!(matches!(
        err.root(),
        CodecError::UnknownField { kind: NodeKind::RangeTblRef, field } if field == "location"
    ));
    assert_eq!(err.pointer(), "/QUERY/rtable/0");

    let ok = json!({"QUERY": {"commandType": "CMD_SELECT", "havingQual": null}});
    assert!(strict.decode(&ok, Expect::Any).is_ok());
}

#[test]
fn synthetic_catalog_restricts_both_directions() {
    let catalog = Catalog::new([
        KindSpec::of::<BoolExpr>("BOOLEXPR"),
        KindSpec::of::<StringValue>("STR"),
    ]);
    let codec = Codec::new(&catalog);

    let node = codec
        .decode(
            &json!({"BOOLEXPR": {"args": [{"STR": {"str": "a"}}]}}),
            Expect::Any,
        )
        .expect("decode must succeed");
    assert_eq!(
        codec.encode(&node).expect("encode must succeed"),
        json!({"BOOLEXPR": {"boolop": "AND_EXPR", "args": [{"STR": {"str": "a"}}], "location": 0}})
    );

    let err = codec
        .decode(&json!({"STRING": {"str": "a"}}), Expect::Any)
        .unwrap_err();
    assert!(matches!(err, CodecError::UnknownNodeKind(tag) if tag == "STRING"));

    let err = codec
        .encode(&Node::from(BoolExpr {
            args: vec![Node::integer(1)],
            ..BoolExpr::default()
        }))
        .unwrap_err();
    assert!(matches!(err.root(), CodecError::UnknownNodeKind(kind) if kind == "Integer"));
    assert_eq!(err.pointer(), "/BOOLEXPR/args/0");

    assert!(codec.encode(&Node::from(Query::default())).is_err());
}
