//! Tests for logical operators, negation and grouping

use search_syntax::{LogicalOperator, Node, OperatorKind, builder::parse};

#[test]
fn test_juxtaposition_is_and() {
    let node = parse("alice bob").unwrap();
    assert_eq!(
        node,
        Node::logical(
            LogicalOperator::And,
            vec![Node::leaf("alice"), Node::leaf("bob")]
        )
    );
}

#[test]
fn test_symbolic_and_keyword_forms_agree() {
    let expected = parse("a and b or c").unwrap();
    assert_eq!(parse("a & b | c").unwrap(), expected);
    assert_eq!(parse("a && b || c").unwrap(), expected);
    assert_eq!(parse("a b, c").unwrap(), expected);
}

#[test]
fn test_or_binds_looser_than_and() {
    let node = parse("a b | c").unwrap();
    assert_eq!(
        node,
        Node::logical(
            LogicalOperator::Or,
            vec![
                Node::logical(
                    LogicalOperator::And,
                    vec![Node::leaf("a"), Node::leaf("b")]
                ),
                Node::leaf("c"),
            ]
        )
    );
}

#[test]
fn test_same_operator_chains_are_flattened() {
    let node = parse("a | (b | c) | d").unwrap();
    assert_eq!(
        node,
        Node::logical(
            LogicalOperator::Or,
            vec![
                Node::leaf("a"),
                Node::leaf("b"),
                Node::leaf("c"),
                Node::leaf("d"),
            ]
        )
    );
}

#[test]
fn test_group_changes_precedence() {
    let node = parse("a (b | c)").unwrap();
    assert_eq!(
        node,
        Node::logical(
            LogicalOperator::And,
            vec![
                Node::leaf("a"),
                Node::logical(
                    LogicalOperator::Or,
                    vec![Node::leaf("b"), Node::leaf("c")]
                ),
            ]
        )
    );
}

#[test]
fn test_negation_forms() {
    let expected = Node::not(Node::comparison("status", OperatorKind::Eq, "closed"));

    assert_eq!(parse("not status = closed").unwrap(), expected);
    assert_eq!(parse("!status = closed").unwrap(), expected);
    assert_eq!(parse(r#"not(status = "closed")"#).unwrap(), expected);
}

#[test]
fn test_double_negation_is_kept() {
    let node = parse("not not a").unwrap();
    assert_eq!(node, Node::not(Node::not(Node::leaf("a"))));
}

#[test]
fn test_negated_keyword_inside_conjunction() {
    let node = parse("bug !closed").unwrap();
    assert_eq!(
        node,
        Node::logical(
            LogicalOperator::And,
            vec![Node::leaf("bug"), Node::not(Node::leaf("closed"))]
        )
    );
}
