//! Grammar tests for comparisons, groups and literals

use pest::Parser;
use search_syntax::parser::{Rule, SearchParser};

#[test]
fn test_parse_comparisons() {
    let inputs = vec![
        "name = alice",
        "name == alice",
        "name != alice",
        "name <> alice",
        "name ~ ali",
        "name !~ ali",
        "age > 18",
        "age < 18",
        "age >= 18",
        "age <= 18",
        "age>=18",
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_prefix_comparisons() {
    let inputs = vec!["> 18", "~ ali", "!~ spam", "= 2024-01-01"];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_quoted_literals() {
    let inputs = vec![
        r#"name = "alice smith""#,
        r#"name = 'alice smith'"#,
        r#"title ~ "say \"hi\"""#,
        r#"name = """#,
        r#""just a phrase""#,
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_groups() {
    let inputs = vec![
        "(a)",
        "(a b) | c",
        "((a | b) & (c | d))",
        "!(status = closed)",
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_reject_malformed_input() {
    let inputs = vec![
        "name =",
        "(a",
        "a)",
        "()",
        "a &",
        r#"name = "unterminated"#,
        "= ",
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_err(), "Should have failed: {}", input);
    }
}

#[test]
fn test_blank_input_matches_empty_query() {
    let mut pairs = SearchParser::parse(Rule::query, "  ").unwrap();
    let query = pairs.next().unwrap();

    let rules: Vec<Rule> = query.into_inner().map(|p| p.as_rule()).collect();
    assert_eq!(rules, vec![Rule::EOI]);
}
