use crate::cst::*;
use crate::lexer::Token;

use super::{ParseResult, Parser};

impl Parser<'_> {
    /// `{ iso org(3) dod(6) 1 }` or `{ SNMPv2-SMI.enterprises 9 }`
    pub(super) fn parse_oid(&mut self) -> ParseResult<Oid> {
        let start = self.expect(Token::LBrace)?;
        let mut components = Vec::new();
        while !self.check(&Token::RBrace) {
            match self.peek() {
                Some(Token::Number(_)) => {
                    components.push(OidComponent::Number(self.expect_u32()?));
                }
                Some(Token::UpperIdent(_) | Token::LowerIdent(_)) => {
                    let name = self.take_ident()?;
                    if self.eat(&Token::Dot) {
                        let member = self.expect_ident()?;
                        components.push(OidComponent::Qualified { module: name, name: member });
                    } else if self.eat(&Token::LParen) {
                        let number = self.expect_u32()?;
                        self.expect(Token::RParen)?;
                        components.push(OidComponent::NamedNumber(name, number));
                    } else {
                        components.push(OidComponent::Name(name));
                    }
                }
                _ => return Err(self.error("expected an OID component")),
            }
        }
        self.expect(Token::RBrace)?;
        Ok(Oid { span: self.span_from(start), components })
    }

    /// The content of a `DEFVAL { ... }` clause.
    ///
    /// Brace sets nest and their items may be separated by commas or whitespace,
    /// so bit sets `{ a, b }` and OID-like tuples `{ 0 0 }` both parse.
    pub(super) fn parse_literal(&mut self) -> ParseResult<Literal> {
        match self.peek() {
            Some(Token::LBrace) => {
                self.advance();
                let mut items = Vec::new();
                while !self.check(&Token::RBrace) {
                    items.push(self.parse_literal()?);
                    self.eat(&Token::Comma);
                }
                self.expect(Token::RBrace)?;
                Ok(Literal::BracketedSet(items))
            }
            Some(Token::UpperIdent(_) | Token::LowerIdent(_)) => {
                let name = self.take_ident()?;
                if self.eat(&Token::LParen) {
                    // `iso(1)` inside an OID-like set: the name is what matters
                    self.expect_number()?;
                    self.expect(Token::RParen)?;
                }
                Ok(Literal::SymbolRef(name))
            }
            Some(
                Token::Number(_)
                | Token::QuotedText(_)
                | Token::HexString(_)
                | Token::BinaryString(_),
            ) => {
                match self.advance() {
                    Some((Token::Number(n), _)) => Ok(Literal::Integer(n)),
                    Some((Token::QuotedText(text), _)) => Ok(Literal::QuotedText(text)),
                    Some((Token::HexString(digits), _)) => Ok(Literal::HexString(digits)),
                    Some((Token::BinaryString(digits), _)) => Ok(Literal::BinaryString(digits)),
                    _ => Err(self.error("expected a default value")),
                }
            }
            _ => Err(self.error("expected a default value")),
        }
    }
}
