use std::collections::BTreeMap;

use crate::lexer::tokens::Token;

const KIND_WIDTH: usize = 15;

/// Strips an optional `name; payload` label, returning the payload. Lines
/// without a `;` are returned whole.
pub fn payload(line: &str) -> &str {
    match line.split_once(';') {
        Some((_, rest)) => rest,
        None => line,
    }
}

/// Renders a token list as a fixed-width `N | KIND | LEXEME` table with a
/// 1-based index column.
pub fn render_table(tokens: &[Token]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<4} {:<KIND_WIDTH$} LEXEME\n", "N", "KIND"));
    out.push_str(&format!("{:-<4} {:-<KIND_WIDTH$} {:-<6}\n", "", "", ""));

    for (index, token) in tokens.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<KIND_WIDTH$} {}\n",
            index + 1,
            token.kind.to_string(),
            token.value
        ));
    }

    out
}

/// Running per-kind token counts for one batch of lines. Keyed by kind
/// name so the summary comes out sorted by name.
#[derive(Debug, Default, Clone)]
pub struct TokenCounts {
    counts: BTreeMap<String, usize>,
}

impl TokenCounts {
    pub fn new() -> TokenCounts {
        TokenCounts::default()
    }

    pub fn observe(&mut self, token: &Token) {
        *self.counts.entry(token.kind.to_string()).or_insert(0) += 1;
    }

    pub fn observe_all(&mut self, tokens: &[Token]) {
        for token in tokens.iter() {
            self.observe(token);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();

        for (kind, count) in self.counts.iter() {
            out.push_str(&format!("{:<KIND_WIDTH$} {}\n", kind, count));
        }

        out.push_str(&format!("{:<KIND_WIDTH$} {}\n", "TOTAL", self.total()));
        out
    }
}
