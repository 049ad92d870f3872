use thiserror::Error;

use crate::lexer::tokens::TokenKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("rule {kind} can match the empty string")]
    EmptyMatchRule { kind: TokenKind },
    #[error("pattern table must end with a catch-all rule")]
    MissingCatchAll,
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::InvalidPattern { .. } => "InvalidPattern",
            Error::EmptyMatchRule { .. } => "EmptyMatchRule",
            Error::MissingCatchAll => "MissingCatchAll",
        }
    }
}
