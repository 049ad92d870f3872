use crate::lexer::lexer::{default_table, PatternTable, ScanMode};
use crate::lexer::tokens::Token;

/// Splits `line` on commas and scans each fragment in the given mode.
///
/// Fragments are trimmed before scanning and empty fragments are skipped,
/// so doubled delimiters (`"a,,b"`) and stray spaces around the commas do
/// not affect the output. Fragments are processed strictly left to right
/// and the result is the concatenation of the per-fragment token lists.
pub fn segment(line: &str, mode: ScanMode) -> Vec<Token> {
    segment_with(default_table(), line, mode)
}

pub fn segment_with(table: &PatternTable, line: &str, mode: ScanMode) -> Vec<Token> {
    let mut tokens = vec![];

    for piece in line.split(',') {
        let fragment = piece.trim();

        if fragment.is_empty() {
            continue;
        }

        tokens.extend(table.scan(fragment, mode));
    }

    tokens
}
