use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::Error, MK_TOKEN};

use super::tokens::{reclassify, Token, TokenKind};

/// How the scanner consumes its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Walk the input left to right, emitting a token for the first rule
    /// that matches at the current offset, until the input is exhausted.
    Streaming,
    /// Require a single rule to match the entire input. Anything a single
    /// rule cannot span becomes one `Unknown` token, verbatim.
    WholeFragment,
}

#[derive(Debug, Clone)]
pub struct Rule {
    kind: TokenKind,
    regex: Regex,
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str) -> Result<Rule, Error> {
        // Anchored so every rule is only ever consulted about the text
        // starting at the current offset.
        let regex =
            Regex::new(&format!("\\A(?:{})", pattern)).map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Rule { kind, regex })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// Sample of single characters the last rule must match for the table to
/// count as total over arbitrary input.
const CATCH_ALL_PROBES: [&str; 5] = ["a", "0", "@", "\n", "é"];

/// An ordered list of scanning rules. Order encodes priority: the first
/// rule to match at an offset wins, so compound operators must be declared
/// before their single-character prefixes.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<Rule>,
}

impl PatternTable {
    pub fn new(specs: &[(TokenKind, &str)]) -> Result<PatternTable, Error> {
        let mut rules = Vec::with_capacity(specs.len());

        for (kind, pattern) in specs {
            let rule = Rule::new(*kind, pattern)?;

            // A zero-length match would stall the streaming scanner.
            if rule.regex.find("").is_some() {
                return Err(Error::EmptyMatchRule { kind: *kind });
            }

            rules.push(rule);
        }

        let has_catch_all = rules.last().is_some_and(|rule| {
            CATCH_ALL_PROBES
                .iter()
                .all(|probe| matches!(rule.regex.find(probe), Some(m) if m.end() == probe.len()))
        });

        if !has_catch_all {
            return Err(Error::MissingCatchAll);
        }

        Ok(PatternTable { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The priority-match primitive: the first rule in declared order whose
    /// pattern matches a non-empty prefix of `input`. Returns the winning
    /// kind and the byte length of the consumed prefix.
    pub fn first_match(&self, input: &str) -> Option<(TokenKind, usize)> {
        for rule in self.rules.iter() {
            if let Some(found) = rule.regex.find(input) {
                return Some((rule.kind, found.end()));
            }
        }

        None
    }

    pub fn scan(&self, text: &str, mode: ScanMode) -> Vec<Token> {
        match mode {
            ScanMode::Streaming => self.scan_streaming(text),
            ScanMode::WholeFragment => self.scan_whole_fragment(text),
        }
    }

    fn scan_streaming(&self, text: &str) -> Vec<Token> {
        let mut tokens = vec![];
        let mut pos = 0;

        while pos < text.len() {
            // The trailing catch-all matches any character, so a table
            // built through `new` always finds a match here.
            let Some((kind, len)) = self.first_match(&text[pos..]) else {
                break;
            };

            if kind != TokenKind::Whitespace {
                let lexeme = &text[pos..pos + len];
                let kind = reclassify(kind, lexeme);
                tokens.push(MK_TOKEN!(kind, lexeme.to_string()));
            }

            pos += len;
        }

        tokens
    }

    fn scan_whole_fragment(&self, fragment: &str) -> Vec<Token> {
        if fragment.is_empty() {
            return vec![];
        }

        for rule in self.rules.iter() {
            let spans_fragment =
                matches!(rule.regex.find(fragment), Some(m) if m.end() == fragment.len());

            if spans_fragment {
                if rule.kind == TokenKind::Whitespace {
                    return vec![];
                }

                let kind = reclassify(rule.kind, fragment);
                return vec![MK_TOKEN!(kind, fragment.to_string())];
            }
        }

        vec![MK_TOKEN!(TokenKind::Unknown, fragment.to_string())]
    }
}

/// Rule table shared by the whole process. Doubles before singles, so the
/// scanner never splits `==` into two `=`.
const DEFAULT_RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Identifier, "[a-zA-Z_][a-zA-Z0-9_]*"),
    (TokenKind::Number, "[0-9]+(\\.[0-9]+)?"),
    (TokenKind::PlusPlus, "\\+\\+"),
    (TokenKind::MinusMinus, "--"),
    (TokenKind::PlusEquals, "\\+="),
    (TokenKind::MinusEquals, "-="),
    (TokenKind::StarEquals, "\\*="),
    (TokenKind::SlashEquals, "/="),
    (TokenKind::PercentEquals, "%="),
    (TokenKind::LessEquals, "<="),
    (TokenKind::GreaterEquals, ">="),
    (TokenKind::Equals, "=="),
    (TokenKind::NotEquals, "!="),
    (TokenKind::Less, "<"),
    (TokenKind::Greater, ">"),
    (TokenKind::Assignment, "="),
    (TokenKind::Plus, "\\+"),
    (TokenKind::Dash, "-"),
    (TokenKind::Star, "\\*"),
    (TokenKind::Slash, "/"),
    (TokenKind::Percent, "%"),
    (TokenKind::Not, "!"),
    (TokenKind::OpenParen, "\\("),
    (TokenKind::CloseParen, "\\)"),
    (TokenKind::OpenCurly, "\\{"),
    (TokenKind::CloseCurly, "\\}"),
    (TokenKind::OpenBracket, "\\["),
    (TokenKind::CloseBracket, "\\]"),
    (TokenKind::Semicolon, ";"),
    (TokenKind::Comma, ","),
    (TokenKind::Whitespace, "\\s+"),
    (TokenKind::Unknown, "(?s)."),
];

lazy_static! {
    static ref DEFAULT_TABLE: PatternTable = PatternTable::new(DEFAULT_RULES).unwrap();
}

/// The process-wide rule table, compiled once and never mutated.
pub fn default_table() -> &'static PatternTable {
    &DEFAULT_TABLE
}

pub fn scan(text: &str, mode: ScanMode) -> Vec<Token> {
    default_table().scan(text, mode)
}
