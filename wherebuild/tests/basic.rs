use std::collections::HashMap;

use wherebuild::prelude::*;

#[test]
fn eq() {
    let (query, args) = Expr::eq([("cate", "123")]).to_where().into_parts();
    assert_eq!(query, "cate = ?");
    assert_eq!(args, vec![Arg::from("123")]);

    let (query, args) = Expr::eq([("cate", "123"), ("id", "456")])
        .to_where()
        .into_parts();
    assert_eq!(query, "cate = ? AND id = ?");
    assert_eq!(args, vec![Arg::from("123"), Arg::from("456")]);
}

#[test]
fn gte() {
    let (query, args) = Expr::gte([("cate", "123")]).to_where().into_parts();
    assert_eq!(query, "cate >= ?");
    assert_eq!(args, vec![Arg::from("123")]);

    let (query, args) = Expr::gte([("id", "456"), ("cate", "123")])
        .to_where()
        .into_parts();
    assert_eq!(query, "cate >= ? AND id >= ?");
    assert_eq!(args, vec![Arg::from("123"), Arg::from("456")]);
}

#[test]
fn lte() {
    let (query, args) = Expr::lte([("cate", "123"), ("id", "456")])
        .to_where()
        .into_parts();
    assert_eq!(query, "cate <= ? AND id <= ?");
    assert_eq!(args, vec![Arg::from("123"), Arg::from("456")]);
}

#[test]
fn is_in() {
    let (query, args) = Expr::is_in([("cate", vec!["123", "456"])])
        .to_where()
        .into_parts();
    assert_eq!(query, "cate IN (?)");
    assert_eq!(args, vec![Arg::from(vec!["123", "456"])]);
}

#[test]
fn or() {
    let (query, args) = Expr::or([Expr::eq([("name", "1")]), Expr::eq([("name", "2")])])
        .to_where()
        .into_parts();
    assert_eq!(query, "(name = ? OR name = ?)");
    assert_eq!(args, vec![Arg::from("1"), Arg::from("2")]);
}

#[test]
fn and() {
    let (query, args) = Expr::and([Expr::eq([("name", "1")]), Expr::eq([("name", "2")])])
        .to_where()
        .into_parts();
    assert_eq!(query, "(name = ? AND name = ?)");
    assert_eq!(args, vec![Arg::from("1"), Arg::from("2")]);
}

#[test]
fn top_level() {
    let exprs = [
        Expr::is_in([("cate", vec!["123", "456"])]),
        Expr::or([Expr::eq([("name", "1")]), Expr::eq([("name", "2")])]),
        Expr::gte([("cate", "123")]),
    ];
    let (query, args) = to_where(&exprs).into_parts();
    assert_eq!(
        query,
        "cate IN (?) AND (name = ? OR name = ?) AND cate >= ?"
    );
    assert_eq!(
        args,
        vec![
            Arg::from(vec!["123", "456"]),
            Arg::from("1"),
            Arg::from("2"),
            Arg::from("123"),
        ]
    );

    assert_eq!(to_where(&[]).into_parts(), (String::new(), vec![]));
}

#[test]
fn hash_map_insertion_order_is_irrelevant() {
    let mut forward = HashMap::new();
    let mut backward = HashMap::new();
    for (index, name) in ["d", "a", "c", "b"].iter().enumerate() {
        forward.insert(name.to_string(), index as i64);
    }
    for (index, name) in ["d", "a", "c", "b"].iter().enumerate().rev() {
        backward.insert(name.to_string(), index as i64);
    }

    let forward = Expr::ne(forward).to_where();
    let backward = Expr::ne(backward).to_where();

    assert_eq!(forward, backward);
    assert_eq!(forward.sql(), "a != ? AND b != ? AND c != ? AND d != ?");
}

#[test]
fn every_operator_explained() {
    let mut conditions = Where::new();
    conditions.push(Expr::eq([("Eq", 0)]));
    conditions.push(Expr::ne([("Neq", 0)]));
    conditions.push(Expr::gte([("GtOrEq", 0)]));
    conditions.push(Expr::gt([("Gt", 0)]));
    conditions.push(Expr::lt([("Lt", 0)]));
    conditions.push(Expr::lte([("LtOrEq", 0)]));
    conditions.push(Expr::is_in([("In", vec!["1", "2", "3"])]));
    conditions.push(Expr::like([("Like", "test")]));
    conditions.push(Expr::or([Expr::eq([("Or", 1)]), Expr::eq([("Or", 2)])]));
    conditions.push(Expr::and([Expr::eq([("And1", 1)]), Expr::eq([("And2", 2)])]));

    let fragment = conditions.try_to_where().unwrap();

    assert_eq!(
        format!("SELECT * FROM `test` WHERE {}", fragment.explain()),
        "SELECT * FROM `test` WHERE Eq = 0 AND Neq != 0 AND GtOrEq >= 0 AND Gt > 0 \
         AND Lt < 0 AND LtOrEq <= 0 AND In IN ('1','2','3') AND Like LIKE 'test' \
         AND (Or = 1 OR Or = 2) AND (And1 = 1 AND And2 = 2)"
    );
}

#[test]
fn degenerate_composition_is_caller_responsibility() {
    let exprs = [Expr::or(vec![]), Expr::eq(Columns::new()), Expr::eq([("a", 1)])];

    assert_eq!(to_where(&exprs).sql(), "() AND  AND a = ?");
    assert_eq!(
        try_to_where(&exprs),
        Err(wherebuild::WhereError::EmptyGroup {
            logic: wherebuild::Logic::Or
        })
    );
}
