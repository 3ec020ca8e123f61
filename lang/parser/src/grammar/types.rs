use num_bigint::BigInt;

use crate::cst::*;
use crate::lexer::Token;

use super::{ParseResult, Parser, is_ident};

impl Parser<'_> {
    /// A type, followed by any label refinement and constraint.
    pub(super) fn parse_syntax(&mut self) -> ParseResult<Syntax> {
        let base = match self.peek() {
            Some(Token::LBracket) => return self.parse_tagged(),
            Some(Token::Integer) => {
                self.advance();
                Syntax::Integer
            }
            Some(Token::Octet) => {
                self.advance();
                self.expect(Token::String)?;
                Syntax::OctetString
            }
            Some(Token::Object) => {
                self.advance();
                self.expect(Token::Identifier)?;
                Syntax::ObjectIdentifier
            }
            Some(Token::Bits) => {
                self.advance();
                let labels = if self.check(&Token::LBrace) {
                    self.parse_named_numbers()?
                } else {
                    Vec::new()
                };
                Syntax::Bits(labels)
            }
            Some(Token::Sequence) => {
                self.advance();
                if self.eat(&Token::Of) {
                    return Ok(Syntax::SequenceOf(self.expect_type_name()?));
                }
                return Ok(Syntax::Sequence(self.parse_fields(true)?));
            }
            Some(Token::Choice) => {
                self.advance();
                return Ok(Syntax::Choice(self.parse_fields(false)?));
            }
            Some(Token::UpperIdent(_) | Token::LowerIdent(_)) => {
                Syntax::Reference(self.expect_type_name()?)
            }
            _ => return Err(self.error("expected a type")),
        };

        let syntax = match base {
            Syntax::Integer | Syntax::Reference(_) if self.check(&Token::LBrace) => {
                let labels = self.parse_named_numbers()?;
                Syntax::Labelled { base: Box::new(base), labels }
            }
            base => base,
        };

        if self.check(&Token::LParen) {
            let constraint = self.parse_constraint()?;
            return Ok(Syntax::Constrained { base: Box::new(syntax), constraint });
        }
        Ok(syntax)
    }

    /// `[APPLICATION 2] IMPLICIT INTEGER (...)`
    fn parse_tagged(&mut self) -> ParseResult<Syntax> {
        self.expect(Token::LBracket)?;
        let application = self.eat(&Token::Application);
        let tag = self.expect_u32()?;
        self.expect(Token::RBracket)?;
        let implicit = self.eat(&Token::Implicit);
        let base = self.parse_syntax()?;
        Ok(Syntax::Tagged { application, tag, implicit, base: Box::new(base) })
    }

    /// `{ up(1), down(2) }`
    pub(super) fn parse_named_numbers(&mut self) -> ParseResult<Vec<NamedNumber>> {
        self.expect(Token::LBrace)?;
        let labels = self.separated(&Token::RBrace, false, is_ident, |p| {
            let name = p.expect_value_name()?;
            p.expect(Token::LParen)?;
            let value = p.expect_i64()?;
            p.expect(Token::RParen)?;
            Ok(NamedNumber { name, value })
        })?;
        self.expect(Token::RBrace)?;
        Ok(labels)
    }

    /// Fields of a `SEQUENCE` or `CHOICE`.
    fn parse_fields(&mut self, sequence: bool) -> ParseResult<Vec<Field>> {
        let open = self.expect(Token::LBrace)?;
        let trailing = sequence && self.dialect.trailing_sequence_comma;
        let fields = self.separated(&Token::RBrace, trailing, is_ident, |p| {
            let name = p.expect_value_name()?;
            let syntax = p.parse_syntax()?;
            Ok(Field { span: p.span_from(name.span), name, syntax })
        })?;
        self.expect(Token::RBrace)?;
        if sequence && fields.is_empty() && !self.dialect.no_cells {
            return Err(self.dialect_error(self.span_from(open), "SEQUENCE without fields"));
        }
        Ok(fields)
    }

    /// `(SIZE (0..255))` or `(0..2 | 4)`
    fn parse_constraint(&mut self) -> ParseResult<Constraint> {
        self.expect(Token::LParen)?;
        let constraint = if self.eat(&Token::Size) {
            self.expect(Token::LParen)?;
            let ranges = self.parse_ranges()?;
            self.expect(Token::RParen)?;
            Constraint::Size(ranges)
        } else {
            Constraint::Value(self.parse_ranges()?)
        };
        self.expect(Token::RParen)?;
        Ok(constraint)
    }

    fn parse_ranges(&mut self) -> ParseResult<Vec<Range>> {
        let mut ranges = vec![self.parse_range()?];
        while self.eat(&Token::Pipe) {
            ranges.push(self.parse_range()?);
        }
        Ok(ranges)
    }

    fn parse_range(&mut self) -> ParseResult<Range> {
        let lower = self.parse_bound()?;
        let upper = if self.eat(&Token::DotDot) { Some(self.parse_bound()?) } else { None };
        Ok(Range { lower, upper })
    }

    fn parse_bound(&mut self) -> ParseResult<Bound> {
        let bound = match self.peek() {
            Some(Token::Min) => Bound::Min,
            Some(Token::Max) => Bound::Max,
            Some(Token::Number(n)) => Bound::Value(n.clone()),
            Some(Token::HexString(digits)) => Bound::Value(radix_value(digits, 16)),
            Some(Token::BinaryString(digits)) => Bound::Value(radix_value(digits, 2)),
            _ => return Err(self.error("expected a range bound")),
        };
        self.advance();
        Ok(bound)
    }
}

fn radix_value(digits: &str, radix: u32) -> BigInt {
    if digits.is_empty() {
        return BigInt::from(0);
    }
    BigInt::parse_bytes(digits.as_bytes(), radix).unwrap_or_default()
}
