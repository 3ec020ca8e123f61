use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum DriverError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] mibc_lang_parser::ParseError),
    #[error("IO error: {0}")]
    #[diagnostic(code("D-001"))]
    Io(#[from] Arc<std::io::Error>),
    #[error("Could not read {module}: {message}")]
    #[diagnostic(code("D-002"))]
    Reader { module: String, message: String },
    #[error("Could not look up {module}: {message}")]
    #[diagnostic(code("D-003"))]
    Searcher { module: String, message: String },
    #[error("Could not write {module}: {message}")]
    #[diagnostic(code("D-004"))]
    Writer { module: String, message: String },
    #[error("Could not serialize {module}: {message}")]
    #[diagnostic(code("D-005"))]
    Serialize { module: String, message: String },
    #[error("The source of {module} does not contain any module")]
    #[diagnostic(code("D-006"))]
    NoModule { module: String },
}

impl From<std::io::Error> for DriverError {
    fn from(err: std::io::Error) -> Self {
        DriverError::Io(Arc::new(err))
    }
}
