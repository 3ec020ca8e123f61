use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use mibc_lang_miette_util::codespan::Location;

/// The first syntax error of a source text. Parsing does not recover.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{location}: invalid token")]
    #[diagnostic(code("P-001"))]
    InvalidToken {
        location: Location,
        #[label]
        span: SourceSpan,
    },
    #[error("{location}: {message}")]
    #[diagnostic(code("P-002"))]
    Syntax {
        location: Location,
        message: String,
        #[label]
        span: SourceSpan,
    },
    #[error("{location}: unexpected end of input, {message}")]
    #[diagnostic(code("P-003"))]
    UnexpectedEof {
        location: Location,
        message: String,
        #[label]
        span: SourceSpan,
    },
    #[error("{location}: {message}")]
    #[diagnostic(code("P-004"), help("select a more tolerant dialect"))]
    Dialect {
        location: Location,
        message: String,
        #[label]
        span: SourceSpan,
    },
}

impl ParseError {
    fn location(&self) -> Location {
        match self {
            ParseError::InvalidToken { location, .. }
            | ParseError::Syntax { location, .. }
            | ParseError::UnexpectedEof { location, .. }
            | ParseError::Dialect { location, .. } => *location,
        }
    }

    /// 1-based line of the offending token.
    pub fn line(&self) -> usize {
        self.location().line
    }

    /// 1-based column of the offending token.
    pub fn column(&self) -> usize {
        self.location().column
    }

    pub fn message(&self) -> String {
        match self {
            ParseError::InvalidToken { .. } => "invalid token".to_owned(),
            ParseError::Syntax { message, .. } | ParseError::Dialect { message, .. } => {
                message.clone()
            }
            ParseError::UnexpectedEof { message, .. } => {
                format!("unexpected end of input, {message}")
            }
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            ParseError::InvalidToken { span, .. }
            | ParseError::Syntax { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::Dialect { span, .. } => *span,
        }
    }
}
