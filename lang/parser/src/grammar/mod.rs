//! Recursive-descent parser over the token stream.
//!
//! The grammar is split by concern: module structure and imports live in
//! `module`, the macro invocations (`OBJECT-TYPE` and friends) in `macros`,
//! type syntax in `types` and OID / `DEFVAL` values in `values`.

mod macros;
mod module;
mod types;
mod values;

use std::ops::Range;

use num_bigint::BigInt;

use mibc_lang_miette_util::ToMiette;
use mibc_lang_miette_util::codespan::{LineStarts, Span};

use crate::cst::{Ident, Module};
use crate::dialect::DialectConfig;
use crate::lexer::{Lexer, Token};
use crate::result::ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

pub(crate) struct Parser<'a> {
    source: &'a str,
    lines: LineStarts,
    tokens: Vec<(Token, Span)>,
    pos: usize,
    /// End of the most recently consumed token.
    last_end: usize,
    dialect: DialectConfig,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, dialect: DialectConfig) -> ParseResult<Self> {
        let lines = LineStarts::new(source);
        let mut tokens = Vec::new();
        for item in Lexer::new(source) {
            match item {
                Ok((l, token, r)) => tokens.push((token, Span::new(l, r))),
                Err((l, _, r)) => {
                    let span = Span::new(l, r);
                    return Err(ParseError::InvalidToken {
                        location: lines.location(span.start()),
                        span: span.to_miette(),
                    });
                }
            }
        }
        log::trace!("Lexed {} tokens", tokens.len());
        Ok(Parser { source, lines, tokens, pos: 0, last_end: 0, dialect })
    }

    pub fn parse_modules(mut self) -> ParseResult<Vec<Module>> {
        let mut modules = Vec::new();
        while !self.is_eof() {
            let module = self.parse_module()?;
            log::debug!("Parsed module {} with {} declarations", module.name, module.decls.len());
            modules.push(module);
        }
        Ok(modules)
    }

    // Token access
    //
    //

    fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n).map(|(token, _)| token)
    }

    fn check(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    fn advance(&mut self) -> Option<(Token, Span)> {
        let next = self.tokens.get(self.pos).cloned();
        if let Some((_, span)) = &next {
            self.pos += 1;
            self.last_end = span.end().to_usize();
        }
        next
    }

    /// Consume `token` if it is next.
    fn eat(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token) -> ParseResult<Span> {
        if self.check(&token) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(self.error(format!("expected {token}")))
        }
    }

    /// Span of the next token, or an empty span at the end of input.
    fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some((_, span)) => *span,
            None => Span::new(self.source.len(), self.source.len()),
        }
    }

    fn span_from(&self, start: Span) -> Span {
        Span::new(start.start(), self.last_end)
    }

    fn text(&self, span: Span) -> &'a str {
        &self.source[Range::<usize>::from(span)]
    }

    // Errors
    //
    //

    fn error(&self, message: impl Into<String>) -> ParseError {
        let message = message.into();
        let span = self.current_span();
        let location = self.lines.location(span.start());
        match self.peek() {
            Some(found) => ParseError::Syntax {
                location,
                message: format!("{message}, found {found}"),
                span: span.to_miette(),
            },
            None => ParseError::UnexpectedEof { location, message, span: span.to_miette() },
        }
    }

    fn dialect_error(&self, span: Span, message: impl Into<String>) -> ParseError {
        ParseError::Dialect {
            location: self.lines.location(span.start()),
            message: message.into(),
            span: span.to_miette(),
        }
    }

    // Terminals
    //
    //

    /// Any identifier, regardless of case.
    fn expect_ident(&mut self) -> ParseResult<Ident> {
        match self.peek() {
            Some(Token::UpperIdent(_) | Token::LowerIdent(_)) => self.take_ident(),
            _ => Err(self.error("expected an identifier")),
        }
    }

    /// A value reference, which starts with a lowercase letter.
    fn expect_value_name(&mut self) -> ParseResult<Ident> {
        match self.peek() {
            Some(Token::LowerIdent(_)) => self.take_ident(),
            Some(Token::UpperIdent(id)) if self.dialect.fold_identifier_case => {
                log::trace!("Accepting uppercase value name {id}");
                self.take_ident()
            }
            Some(Token::UpperIdent(id)) => Err(self.dialect_error(
                self.current_span(),
                format!("value name `{id}` must start with a lowercase letter"),
            )),
            _ => Err(self.error("expected a value name")),
        }
    }

    /// A type reference or module name, which starts with an uppercase letter.
    fn expect_type_name(&mut self) -> ParseResult<Ident> {
        match self.peek() {
            Some(Token::UpperIdent(_)) => self.take_ident(),
            Some(Token::LowerIdent(id)) if self.dialect.fold_identifier_case => {
                log::trace!("Accepting lowercase type name {id}");
                self.take_ident()
            }
            Some(Token::LowerIdent(id)) => Err(self.dialect_error(
                self.current_span(),
                format!("type name `{id}` must start with an uppercase letter"),
            )),
            _ => Err(self.error("expected a type name")),
        }
    }

    fn take_ident(&mut self) -> ParseResult<Ident> {
        match self.advance() {
            Some((Token::UpperIdent(id) | Token::LowerIdent(id), span)) => Ok(Ident::new(id, span)),
            _ => Err(self.error("expected an identifier")),
        }
    }

    fn expect_text(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(Token::QuotedText(_)) => match self.advance() {
                Some((Token::QuotedText(text), _)) => Ok(text),
                _ => Err(self.error("expected quoted text")),
            },
            _ => Err(self.error("expected quoted text")),
        }
    }

    /// `KEYWORD "text"` if the keyword is next.
    fn opt_text(&mut self, keyword: &Token) -> ParseResult<Option<String>> {
        if self.eat(keyword) { self.expect_text().map(Some) } else { Ok(None) }
    }

    fn expect_number(&mut self) -> ParseResult<BigInt> {
        match self.peek() {
            Some(Token::Number(_)) => match self.advance() {
                Some((Token::Number(n), _)) => Ok(n),
                _ => Err(self.error("expected a number")),
            },
            _ => Err(self.error("expected a number")),
        }
    }

    fn expect_u32(&mut self) -> ParseResult<u32> {
        let span = self.current_span();
        let n = self.expect_number()?;
        u32::try_from(&n).map_err(|_| ParseError::Syntax {
            location: self.lines.location(span.start()),
            message: format!("{n} is not a valid sub-identifier"),
            span: span.to_miette(),
        })
    }

    fn expect_i64(&mut self) -> ParseResult<i64> {
        let span = self.current_span();
        let n = self.expect_number()?;
        i64::try_from(&n).map_err(|_| ParseError::Syntax {
            location: self.lines.location(span.start()),
            message: format!("{n} does not fit a 64-bit label value"),
            span: span.to_miette(),
        })
    }

    // Lists
    //
    //

    /// Items separated by commas up to (not including) `close`.
    ///
    /// `trailing` permits a comma right before `close`. The dialect decides whether
    /// whitespace alone may separate items, in which case `starts_item` tells whether
    /// another item follows.
    fn separated<T>(
        &mut self,
        close: &Token,
        trailing: bool,
        starts_item: fn(&Token) -> bool,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(close) {
            return Ok(items);
        }
        loop {
            items.push(item(self)?);
            if self.check(&Token::Comma) {
                let comma = self.current_span();
                self.advance();
                if self.check(close) {
                    if trailing {
                        break;
                    }
                    return Err(self.dialect_error(comma, "trailing comma in list"));
                }
            } else if self.check(close) {
                break;
            } else if self.peek().is_some_and(starts_item) {
                if !self.dialect.mixed_separators {
                    return Err(self.dialect_error(self.current_span(), "missing comma in list"));
                }
            } else {
                return Err(self.error(format!("expected `,` or {close}")));
            }
        }
        Ok(items)
    }

    /// `{ a, b, c }`
    fn braced_idents(&mut self) -> ParseResult<Vec<Ident>> {
        self.expect(Token::LBrace)?;
        let items = self.separated(&Token::RBrace, false, is_ident, Self::expect_ident)?;
        self.expect(Token::RBrace)?;
        Ok(items)
    }
}

fn is_ident(token: &Token) -> bool {
    matches!(token, Token::UpperIdent(_) | Token::LowerIdent(_))
}
