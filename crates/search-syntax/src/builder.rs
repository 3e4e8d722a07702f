use crate::{
    ast::{
        node::Node,
        operator::{LogicalOperator, OperatorKind},
    },
    error::SyntaxError,
    parser::{Rule, SearchParser},
};
use pest::{
    Parser,
    iterators::{Pair, Pairs},
};
use tracing::trace;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Parse a search query into a typed AST
pub fn parse(input: &str) -> SyntaxResult<Node> {
    let pairs = SearchParser::parse(Rule::query, input).map_err(SyntaxError::from_pest_error)?;
    let node = build_query(pairs)?;
    trace!(?node, "parsed search query");
    Ok(node)
}

fn build_query(mut pairs: Pairs<Rule>) -> SyntaxResult<Node> {
    let query = pairs.next().ok_or(SyntaxError::Empty)?;

    for pair in query.into_inner() {
        if pair.as_rule() == Rule::disjunction {
            return build_logical(pair, LogicalOperator::Or);
        }
    }

    Err(SyntaxError::Empty)
}

/// Builds a `disjunction` or `conjunction`. A single operand collapses into the
/// operand itself, nested operands using the same connective are flattened.
fn build_logical(pair: Pair<Rule>, operator: LogicalOperator) -> SyntaxResult<Node> {
    let mut children = Vec::new();

    for inner in pair.into_inner() {
        let child = match inner.as_rule() {
            Rule::conjunction => build_logical(inner, LogicalOperator::And)?,
            Rule::negation => build_negation(inner)?,
            Rule::op_and | Rule::op_or => continue,
            rule => return Err(SyntaxError::UnexpectedRule(format!("{rule:?}"))),
        };

        match child {
            Node::LogicalOperator(nested) if nested.operator == operator => {
                children.extend(nested.children);
            }
            other => children.push(other),
        }
    }

    match children.len() {
        0 => Err(SyntaxError::Empty),
        1 => Ok(children.remove(0)),
        _ => Ok(Node::logical(operator, children)),
    }
}

fn build_negation(pair: Pair<Rule>) -> SyntaxResult<Node> {
    let mut inner = pair.into_inner();
    let first = inner.next().ok_or(SyntaxError::Empty)?;

    match first.as_rule() {
        Rule::op_not => {
            let operand = inner.next().ok_or(SyntaxError::Empty)?;
            Ok(Node::not(build_negation(operand)?))
        }
        _ => build_term(first),
    }
}

fn build_term(pair: Pair<Rule>) -> SyntaxResult<Node> {
    match pair.as_rule() {
        Rule::group => {
            let inner = pair.into_inner().next().ok_or(SyntaxError::Empty)?;
            build_logical(inner, LogicalOperator::Or)
        }
        Rule::comparison => {
            let mut inner = pair.into_inner();
            let (field, comparator, value) = match (inner.next(), inner.next(), inner.next()) {
                (Some(field), Some(comparator), Some(value)) => (field, comparator, value),
                _ => return Err(SyntaxError::Empty),
            };
            let operator = build_comparator(&comparator)?;
            Ok(Node::operator(
                operator,
                vec![build_value(field)?, build_value(value)?],
            ))
        }
        Rule::prefix_comparison => {
            let mut inner = pair.into_inner();
            let (comparator, value) = match (inner.next(), inner.next()) {
                (Some(comparator), Some(value)) => (comparator, value),
                _ => return Err(SyntaxError::Empty),
            };
            let operator = build_comparator(&comparator)?;
            Ok(Node::operator(operator, vec![build_value(value)?]))
        }
        Rule::quoted | Rule::word => build_value(pair),
        rule => Err(SyntaxError::UnexpectedRule(format!("{rule:?}"))),
    }
}

fn build_comparator(pair: &Pair<Rule>) -> SyntaxResult<OperatorKind> {
    OperatorKind::from_symbol(pair.as_str())
        .ok_or_else(|| SyntaxError::UnknownComparator(pair.as_str().to_string()))
}

fn build_value(pair: Pair<Rule>) -> SyntaxResult<Node> {
    match pair.as_rule() {
        Rule::word => Ok(Node::leaf(pair.as_str())),
        Rule::quoted => {
            // `quoted` always wraps exactly one dq_inner / sq_inner pair
            let content = pair
                .into_inner()
                .next()
                .map(|inner| unescape(inner.as_str()))
                .unwrap_or_default();
            Ok(Node::leaf(content))
        }
        rule => Err(SyntaxError::UnexpectedRule(format!("{rule:?}"))),
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
