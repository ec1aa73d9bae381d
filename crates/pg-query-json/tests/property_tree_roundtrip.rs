use pg_query_json::{
    from_json, to_json, Alias, BoolExpr, BoolExprType, CmdType, Codec, Const, EncodeOptions,
    Expect, FromExpr, JoinExpr, JoinType, Node, OpExpr, PgEnum, Query, RangeTblRef, TargetEntry,
    Var,
};
use proptest::prelude::*;

fn arb_enum<E: PgEnum>() -> impl Strategy<Value = E> {
    prop::sample::select(E::VARIANTS.to_vec())
}

fn arb_leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        any::<i64>().prop_map(Node::integer),
        ".{0,12}".prop_map(Node::string),
        any::<i32>().prop_map(|rtindex| Node::from(RangeTblRef { rtindex })),
        (any::<u32>(), any::<i16>(), any::<i32>()).prop_map(|(varno, varattno, location)| {
            Node::from(Var {
                varno,
                varattno,
                location,
                ..Var::default()
            })
        }),
        (any::<u32>(), any::<u64>(), any::<bool>()).prop_map(
            |(consttype, constvalue, constisnull)| {
                Node::from(Const {
                    consttype,
                    constvalue,
                    constisnull,
                    ..Const::default()
                })
            }
        ),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(4, 64, 4, |inner| {
        let list = prop::collection::vec(inner.clone(), 0..4);
        let child = prop::option::of(inner.clone().prop_map(Box::new));
        prop_oneof![
            (arb_enum::<BoolExprType>(), list.clone(), any::<i32>()).prop_map(
                |(boolop, args, location)| Node::from(BoolExpr {
                    boolop,
                    args,
                    location
                })
            ),
            (any::<u32>(), any::<bool>(), list.clone()).prop_map(|(opno, opretset, args)| {
                Node::from(OpExpr {
                    opno,
                    opretset,
                    args,
                    ..OpExpr::default()
                })
            }),
            (list.clone(), child.clone()).prop_map(|(fromlist, quals)| {
                Node::from(FromExpr { fromlist, quals })
            }),
            (arb_enum::<JoinType>(), child.clone(), child.clone(), ".{0,6}").prop_map(
                |(jointype, larg, rarg, aliasname)| Node::from(JoinExpr {
                    jointype,
                    larg,
                    rarg,
                    alias: Some(Box::new(Alias {
                        aliasname,
                        colnames: Vec::new(),
                    })),
                    ..JoinExpr::default()
                })
            ),
            (child.clone(), "[a-z?]{0,8}", any::<bool>()).prop_map(|(expr, resname, resjunk)| {
                Node::from(TargetEntry {
                    expr,
                    resname,
                    resjunk,
                    ..TargetEntry::default()
                })
            }),
            (arb_enum::<CmdType>(), list.clone(), list, child).prop_map(
                |(command_type, rtable, target_list, having_qual)| Node::from(Query {
                    command_type,
                    rtable,
                    target_list,
                    having_qual,
                    jointree: Some(Box::new(FromExpr::default())),
                    ..Query::default()
                })
            ),
        ]
    })
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(node in arb_node()) {
        let encoded = to_json(&node).unwrap();
        let decoded = from_json(&encoded).unwrap();
        prop_assert_eq!(&decoded, &node);
        prop_assert_eq!(to_json(&decoded).unwrap(), encoded);
    }

    #[test]
    fn prop_numeric_enums_decode_to_the_same_tree(node in arb_node()) {
        let codec = Codec::builtin().with_encode_options(EncodeOptions { numeric_enums: true });
        let encoded = codec.encode(&node).unwrap();
        prop_assert_eq!(codec.decode(&encoded, Expect::Any).unwrap(), node);
    }

    #[test]
    fn prop_text_round_trip(node in arb_node()) {
        let text = pg_query_json::to_string(&node).unwrap();
        prop_assert_eq!(pg_query_json::from_str(&text).unwrap(), node);
    }
}
