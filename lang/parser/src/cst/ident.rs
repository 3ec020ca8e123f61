use std::fmt;

use derivative::Derivative;
use mibc_lang_miette_util::codespan::Span;

/// A name as written in the source. Equality and hashing ignore the span.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Ident {
    #[derivative(PartialEq = "ignore", Hash = "ignore", PartialOrd = "ignore", Ord = "ignore")]
    pub span: Span,
    pub id: String,
}

impl Ident {
    pub fn new(id: impl Into<String>, span: Span) -> Self {
        Ident { span, id: id.into() }
    }

    /// An identifier that does not originate from source text.
    pub fn synthetic(id: impl Into<String>) -> Self {
        Ident { span: Span::default(), id: id.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
