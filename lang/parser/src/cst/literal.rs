use num_bigint::BigInt;

use super::Ident;

/// A `DEFVAL` value exactly as written.
///
/// Hex and binary strings keep their digits, quoted text keeps its raw
/// content including line breaks and backslashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Integer(BigInt),
    HexString(String),
    BinaryString(String),
    QuotedText(String),
    SymbolRef(Ident),
    BracketedSet(Vec<Literal>),
}

impl Literal {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Integer(_) => "integer",
            Literal::HexString(_) => "hex string",
            Literal::BinaryString(_) => "binary string",
            Literal::QuotedText(_) => "quoted text",
            Literal::SymbolRef(_) => "symbol reference",
            Literal::BracketedSet(_) => "bracketed set",
        }
    }
}
