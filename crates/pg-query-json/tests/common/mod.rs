#![allow(dead_code)]

use pg_query_json::{
    Alias, BoolExpr, BoolExprType, CmdType, CommonTableExpr, Const, FromExpr, JoinExpr, JoinType,
    LockClauseStrength, LockWaitPolicy, Node, NodeKind, OpExpr, Query, QuerySource,
    RangeTblEntry, RangeTblRef, RowMarkClause, RteKind, SortGroupClause, TargetEntry, Var,
};

pub fn int4_const(value: u64, location: i32) -> Const {
    Const {
        consttype: 23,
        consttypmod: -1,
        constcollid: 0,
        constlen: 4,
        constvalue: value,
        constisnull: false,
        constbyval: true,
        location,
    }
}

pub fn column(varno: u32, varattno: i16) -> Var {
    Var {
        varno,
        varattno,
        vartype: 23,
        vartypmod: -1,
        varnoold: varno,
        varoattno: varattno,
        location: 7,
        ..Var::default()
    }
}

pub fn eref(name: &str, cols: &[&str]) -> Alias {
    Alias {
        aliasname: name.to_string(),
        colnames: cols.iter().map(|c| Node::string(*c)).collect(),
    }
}

pub fn relation(relid: u32, name: &str) -> RangeTblEntry {
    RangeTblEntry {
        rtekind: RteKind::Relation,
        relid,
        eref: Some(Box::new(eref(name, &["id", "name"]))),
        inh: true,
        in_from_cl: true,
        required_perms: 2,
        ..RangeTblEntry::default()
    }
}

/// `SELECT t.id FROM t JOIN u ON t.id = u.id WHERE t.id > 1 OR NOT u.id = 2 ORDER BY 1 FOR UPDATE`
/// shaped tree touching every builtin kind.
pub fn select_with_join() -> Query {
    let eq = OpExpr {
        opno: 96,
        opfuncid: 65,
        opresulttype: 16,
        inputcollid: 0,
        args: vec![Node::from(column(1, 1)), Node::from(column(2, 1))],
        location: 30,
        ..OpExpr::default()
    };
    let join = JoinExpr {
        jointype: JoinType::Inner,
        larg: Some(Box::new(Node::from(RangeTblRef { rtindex: 1 }))),
        rarg: Some(Box::new(Node::from(RangeTblRef { rtindex: 2 }))),
        quals: Some(Box::new(Node::from(eq))),
        alias: Some(Box::new(eref("j", &[]))),
        rtindex: 3,
        ..JoinExpr::default()
    };
    let filter = BoolExpr {
        boolop: BoolExprType::Or,
        args: vec![
            Node::from(OpExpr {
                opno: 521,
                args: vec![Node::from(column(1, 1)), Node::from(int4_const(1, 44))],
                ..OpExpr::default()
            }),
            Node::from(BoolExpr {
                boolop: BoolExprType::Not,
                args: vec![Node::from(OpExpr {
                    opno: 96,
                    args: vec![Node::from(column(2, 1)), Node::from(int4_const(2, 60))],
                    ..OpExpr::default()
                })],
                location: 52,
            }),
        ],
        location: 49,
    };
    let join_rte = RangeTblEntry {
        rtekind: RteKind::Join,
        jointype: JoinType::Inner,
        joinaliasvars: vec![Node::from(column(1, 1)), Node::from(column(2, 1))],
        eref: Some(Box::new(eref("unnamed_join", &["id", "id"]))),
        in_from_cl: true,
        ..RangeTblEntry::default()
    };
    let cte = CommonTableExpr {
        ctename: "w".to_string(),
        aliascolnames: vec![Node::string("n")],
        ctequery: Some(Box::new(Node::from(Query {
            command_type: CmdType::Select,
            can_set_tag: true,
            target_list: vec![Node::from(TargetEntry {
                expr: Some(Box::new(Node::integer(1))),
                resno: 1,
                resname: "n".to_string(),
                ..TargetEntry::default()
            })],
            jointree: Some(Box::new(FromExpr::default())),
            ..Query::default()
        }))),
        location: 5,
        cterefcount: 0,
        ctecolnames: vec![Node::string("n")],
        ctecoltypes: vec![Node::integer(23)],
        ctecoltypmods: vec![Node::integer(-1)],
        ..CommonTableExpr::default()
    };
    Query {
        command_type: CmdType::Select,
        query_source: QuerySource::Original,
        can_set_tag: true,
        has_for_update: true,
        cte_list: vec![Node::from(cte)],
        rtable: vec![
            Node::from(relation(16384, "t")),
            Node::from(relation(16390, "u")),
            Node::from(join_rte),
        ],
        jointree: Some(Box::new(FromExpr {
            fromlist: vec![Node::from(join)],
            quals: Some(Box::new(Node::from(filter))),
        })),
        target_list: vec![Node::from(TargetEntry {
            expr: Some(Box::new(Node::from(column(1, 1)))),
            resno: 1,
            resname: "id".to_string(),
            ressortgroupref: 1,
            resorigtbl: 16384,
            resorigcol: 1,
            resjunk: false,
        })],
        sort_clause: vec![Node::from(SortGroupClause {
            tle_sort_group_ref: 1,
            eqop: 96,
            sortop: 97,
            nulls_first: false,
            hashable: true,
        })],
        row_marks: vec![Node::from(RowMarkClause {
            rti: 1,
            strength: LockClauseStrength::ForUpdate,
            wait_policy: LockWaitPolicy::Skip,
            pushed_down: false,
        })],
        ..Query::default()
    }
}

/// Collects the kinds of `node` and the descendants reached through the
/// fields [`select_with_join`] populates.
pub fn kinds_in(node: &Node, out: &mut Vec<NodeKind>) {
    out.push(node.kind());
    match node {
        Node::Query(q) => {
            kinds_in_all(&q.cte_list, out);
            kinds_in_all(&q.rtable, out);
            if let Some(j) = &q.jointree {
                kinds_in(&Node::from(j.as_ref().clone()), out);
            }
            kinds_in_all(&q.target_list, out);
            kinds_in_all(&q.sort_clause, out);
            kinds_in_all(&q.row_marks, out);
        }
        Node::FromExpr(f) => {
            kinds_in_all(&f.fromlist, out);
            kinds_in_opt(&f.quals, out);
        }
        Node::JoinExpr(j) => {
            kinds_in_opt(&j.larg, out);
            kinds_in_opt(&j.rarg, out);
            kinds_in_opt(&j.quals, out);
            if let Some(a) = &j.alias {
                kinds_in(&Node::from(a.as_ref().clone()), out);
            }
        }
        Node::RangeTblEntry(r) => {
            kinds_in_all(&r.joinaliasvars, out);
            if let Some(a) = &r.eref {
                kinds_in(&Node::from(a.as_ref().clone()), out);
            }
        }
        Node::TargetEntry(t) => kinds_in_opt(&t.expr, out),
        Node::CommonTableExpr(c) => {
            kinds_in_all(&c.aliascolnames, out);
            kinds_in_opt(&c.ctequery, out);
            kinds_in_all(&c.ctecoltypes, out);
        }
        Node::Alias(a) => kinds_in_all(&a.colnames, out),
        Node::OpExpr(o) => kinds_in_all(&o.args, out),
        Node::BoolExpr(b) => kinds_in_all(&b.args, out),
        _ => {}
    }
}

fn kinds_in_all(nodes: &[Node], out: &mut Vec<NodeKind>) {
    for node in nodes {
        kinds_in(node, out);
    }
}

fn kinds_in_opt(node: &Option<Box<Node>>, out: &mut Vec<NodeKind>) {
    if let Some(node) = node {
        kinds_in(node, out);
    }
}
