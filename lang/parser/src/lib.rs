pub mod cst;
mod dialect;
mod grammar;
pub mod lexer;
mod result;

pub use dialect::*;
pub use result::*;

/// Parse every module in `source` under the given dialect.
///
/// A source may contain zero or more modules. Parsing stops at the first error.
pub fn parse(source: &str, dialect: DialectConfig) -> Result<Vec<cst::Module>, ParseError> {
    grammar::Parser::new(source, dialect)?.parse_modules()
}
