//! Integration tests for the full tokenize-and-report pipeline.
//!
//! These tests exercise the public crate surface the way the CLI does:
//! label stripping, comma segmentation, scanning in both modes, table
//! rendering, and batch count accumulation.

use lexline::report::report::{payload, render_table, TokenCounts};
use lexline::{scan, segment, ScanMode, TokenKind};

#[test]
fn test_pipeline_labeled_line_streaming() {
    let line = "linea1; a=b+1, c=2";
    let tokens = segment(payload(line), ScanMode::Streaming);

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
        ]
    );
}

#[test]
fn test_pipeline_mode_divergence() {
    let streaming = segment("a+b", ScanMode::Streaming);
    let whole = segment("a+b", ScanMode::WholeFragment);

    assert_eq!(streaming.len(), 3);
    assert_eq!(whole.len(), 1);
    assert_eq!(whole[0].kind, TokenKind::Unknown);
    assert_eq!(whole[0].value, "a+b");
}

#[test]
fn test_pipeline_delimiter_tolerance() {
    assert_eq!(
        segment("a,,b", ScanMode::Streaming),
        segment("a,b", ScanMode::Streaming)
    );
}

#[test]
fn test_pipeline_keyword_classification() {
    let tokens = scan("if", ScanMode::Streaming);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);

    let tokens = scan("iff", ScanMode::Streaming);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
}

#[test]
fn test_pipeline_compound_operator_priority() {
    let tokens = scan("==", ScanMode::Streaming);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Equals);
}

#[test]
fn test_pipeline_garbage_does_not_abort() {
    let tokens = segment("x = $ 3, # y", ScanMode::Streaming);

    let unknowns = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Unknown)
        .count();
    assert_eq!(unknowns, 2);
    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_pipeline_batch_report() {
    let batch = ["linea1; x=1", "linea2; while (x<10), x++"];
    let mut counts = TokenCounts::new();

    for line in batch {
        let tokens = segment(payload(line), ScanMode::Streaming);
        let table = render_table(&tokens);

        assert!(table.lines().count() >= 2);
        counts.observe_all(&tokens);
    }

    // x=1 -> 3 tokens; while (x<10) -> 6 tokens; x++ -> 2 tokens.
    assert_eq!(counts.total(), 11);

    let summary = counts.summary();
    let names: Vec<&str> = summary
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();

    let mut sorted = names[..names.len() - 1].to_vec();
    sorted.sort_unstable();
    assert_eq!(&names[..names.len() - 1], &sorted[..]);
    assert_eq!(names.last(), Some(&"TOTAL"));
}
