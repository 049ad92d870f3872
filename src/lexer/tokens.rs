use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("return");
        set.insert("int");
        set.insert("float");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,

    LessEquals,
    GreaterEquals,
    Equals,     // ==
    NotEquals,  // !=
    Less,
    Greater,

    Assignment, // =

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Not, // !

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,

    // Consumed by the scanner, never emitted
    Whitespace,

    // Catch-all for anything no other rule claims
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}

/// Promotes a generic `Identifier` to `Keyword` when its lexeme is a
/// reserved word (case-sensitive). Every other kind passes through
/// untouched, so applying this twice is the same as applying it once.
pub fn reclassify(kind: TokenKind, lexeme: &str) -> TokenKind {
    if kind == TokenKind::Identifier && RESERVED_WORDS.contains(lexeme) {
        TokenKind::Keyword
    } else {
        kind
    }
}
