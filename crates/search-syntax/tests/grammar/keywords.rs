//! Grammar tests for the logical keywords and their symbolic forms

use pest::Parser;
use search_syntax::parser::{Rule, SearchParser};

#[test]
fn test_parse_logical_keywords() {
    let inputs = vec![
        "a and b",
        "a AND b",
        "a or b",
        "a Or b",
        "not a",
        "NOT a",
        "a && b",
        "a & b",
        "a || b",
        "a | b",
        "a, b",
        "!a",
        "not(a)",
    ];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_keyword_prefixes_are_words() {
    let inputs = vec!["android", "oregon", "nothing", "orange and notable"];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_keywords_are_not_values() {
    let inputs = vec!["and", "a or", "not"];

    for input in inputs {
        let result = SearchParser::parse(Rule::query, input);
        assert!(result.is_err(), "Should have failed: {}", input);
    }
}

#[test]
fn test_word_rule_stops_at_operators() {
    let word = SearchParser::parse(Rule::word, "name=alice")
        .unwrap()
        .next()
        .unwrap();
    assert_eq!(word.as_str(), "name");
}
