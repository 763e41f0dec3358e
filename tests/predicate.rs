use sqlforge::prelude::*;

fn render(predicate: &Predicate<'_>) -> String {
    predicate.to_sql().unwrap()
}

#[test]
fn test_groups_and_comparisons() {
    let predicate = Predicate::new()
        .group(
            ClauseGroup::new(Comparison::eq("status", "active"))
                .or(Comparison::eq("status", "pending")),
        )
        .group(Comparison::gte("created", 1_700_000_000_i64))
        .group(Comparison::is_not_null("owner"));

    assert_eq!(
        render(&predicate),
        "(status = 'active' OR status = 'pending') AND created >= 1700000000 AND NOT owner IS NULL"
    );
}

#[test]
fn test_comparison_logic_accumulates_left_to_right() {
    let group = ClauseGroup::new(Comparison::eq("a", 1))
        .or(Comparison::eq("b", 2))
        .and(Comparison::eq("c", 3));

    assert_eq!(render(&Predicate::from(group)), "(a = 1 OR b = 2 AND c = 3)");
}

#[test]
fn test_parameters_follow_compilation_order() {
    let mut params = ParamList::new();
    let predicate = Predicate::new()
        .group(Comparison::between("age", 18, 30))
        .group(ClauseGroup::new(Comparison::like("name", "J%")).or(Comparison::eq("vip", true)))
        .group_logic(Logic::Or);

    let sql = predicate.compile(Some(&mut params)).unwrap();
    assert_eq!(
        sql,
        "age BETWEEN @P0 AND @P1 OR (name LIKE @P2 OR vip = @P3)"
    );

    let names: Vec<String> = params.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["@P0", "@P1", "@P2", "@P3"]);
    assert_eq!(params.get("@P3"), Some(&Value::Bool(true)));
}

#[test]
fn test_literals_are_escaped_inline() {
    let predicate = Predicate::from(Comparison::eq("name", "O'Brien"));
    assert_eq!(render(&predicate), "name = 'O''Brien'");
}

#[test]
fn test_malformed_between_fails_whole_compile() {
    let predicate = Predicate::new()
        .group(Comparison::eq("ok", 1))
        .group(Comparison::new("bad", Operator::NotBetween, vec![Value::from(1)]));

    let mut params = ParamList::new();
    let err = predicate.compile(Some(&mut params)).unwrap_err();
    assert!(matches!(
        err,
        SqlForgeError::MalformedPredicateValue { ref field, operator: "NotBetween", .. } if field == "bad"
    ));
    // Earlier comparisons stay bound.
    assert_eq!(params.len(), 1);
}
