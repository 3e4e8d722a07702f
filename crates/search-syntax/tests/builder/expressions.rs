//! Tests for comparison parsing and AST building

use search_syntax::{Node, OperatorKind, builder::parse};

#[test]
fn test_parse_field_comparison() {
    let result = parse("name = alice");
    assert!(result.is_ok(), "Failed to parse: {:?}", result.err());

    assert_eq!(
        result.unwrap(),
        Node::comparison("name", OperatorKind::Eq, "alice")
    );
}

#[test]
fn test_parse_every_comparator() {
    let cases = vec![
        ("a = 1", OperatorKind::Eq),
        ("a == 1", OperatorKind::Eq),
        ("a != 1", OperatorKind::Ne),
        ("a <> 1", OperatorKind::Ne),
        ("a ~ 1", OperatorKind::Like),
        ("a !~ 1", OperatorKind::Unlike),
        ("a > 1", OperatorKind::Gt),
        ("a < 1", OperatorKind::Lt),
        ("a >= 1", OperatorKind::Gte),
        ("a <= 1", OperatorKind::Lte),
    ];

    for (input, operator) in cases {
        let node = parse(input).unwrap();
        assert_eq!(node, Node::comparison("a", operator, "1"), "input: {input}");
    }
}

#[test]
fn test_parse_prefix_comparison() {
    let node = parse("> 18").unwrap();
    assert_eq!(
        node,
        Node::operator(OperatorKind::Gt, vec![Node::leaf("18")])
    );
}

#[test]
fn test_parse_quoted_values() {
    let node = parse(r#"name = "alice smith""#).unwrap();
    assert_eq!(
        node,
        Node::comparison("name", OperatorKind::Eq, "alice smith")
    );

    let node = parse(r#"title ~ 'it\'s "quoted"'"#).unwrap();
    assert_eq!(
        node,
        Node::comparison("title", OperatorKind::Like, r#"it's "quoted""#)
    );
}

#[test]
fn test_parse_keyword_inside_quotes() {
    let node = parse(r#""and""#).unwrap();
    assert_eq!(node, Node::leaf("and"));
}

#[test]
fn test_parse_dates_and_wildcards() {
    let node = parse("created_at >= 2024-01-01").unwrap();
    assert_eq!(
        node,
        Node::comparison("created_at", OperatorKind::Gte, "2024-01-01")
    );

    let node = parse("name ~ %son").unwrap();
    assert_eq!(node, Node::comparison("name", OperatorKind::Like, "%son"));
}

#[test]
fn test_parse_error_reports_position() {
    let err = parse("name = ").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 1"), "unexpected message: {message}");
}
