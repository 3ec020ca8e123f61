use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Problems found while building a symbol table.
///
/// None of these stop the build: the affected symbol degrades to an `Unknown`
/// symbol or an unresolved OID and the rest of the module is processed as usual.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SymbolWarning {
    #[error("Unknown symbol {name} in {module}")]
    #[diagnostic(code("S-001"), severity(Warning))]
    UnknownSymbol {
        name: String,
        module: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("{name} is imported from {from}, which does not declare it")]
    #[diagnostic(code("S-002"), severity(Warning))]
    UndeclaredImport {
        name: String,
        from: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("Module {module} is not available, its symbols are treated as unknown")]
    #[diagnostic(code("S-003"), severity(Warning))]
    UnavailableModule {
        module: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("Duplicate definition of {name}, the later one is used")]
    #[diagnostic(code("S-004"), severity(Warning))]
    DuplicateDefinition {
        name: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("Type {name} is defined in terms of itself")]
    #[diagnostic(code("S-005"), severity(Warning))]
    TypeAliasCycle {
        name: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("The OID of {name} is defined in terms of itself")]
    #[diagnostic(code("S-006"), severity(Warning))]
    OidCycle {
        name: String,
        #[label]
        span: Option<SourceSpan>,
    },
}
