use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// User facing errors of the command line front end.
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error("Could not read {}", path.display())]
    #[diagnostic(code("A-001"))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    #[diagnostic(code("A-002"), help("run with MIBC_LOG_LEVEL=debug for details"))]
    NotCompiled(String),
    #[error("Invalid token at byte {start}")]
    #[diagnostic(code("A-003"))]
    Lexical { start: usize },
}
