use crate::cst::*;
use crate::lexer::Token;

use super::{ParseResult, Parser};

/// Symbols in an `IMPORTS` list: names and the macro keywords of the base modules.
fn is_import_symbol(token: &Token) -> bool {
    matches!(
        token,
        Token::UpperIdent(_)
            | Token::LowerIdent(_)
            | Token::ObjectType
            | Token::ObjectIdentity
            | Token::ModuleIdentity
            | Token::NotificationType
            | Token::TrapType
            | Token::TextualConvention
            | Token::ObjectGroup
            | Token::NotificationGroup
            | Token::ModuleCompliance
            | Token::AgentCapabilities
            | Token::Bits
    )
}

fn is_decl_name(token: &Token) -> bool {
    matches!(token, Token::UpperIdent(_) | Token::LowerIdent(_))
}

impl Parser<'_> {
    /// `NAME [oid] DEFINITIONS ::= BEGIN [IMPORTS ...] decls END`
    pub(super) fn parse_module(&mut self) -> ParseResult<Module> {
        let start = self.current_span();
        let name = self.expect_type_name()?;
        if self.check(&Token::LBrace) {
            // ASN.1 module OIDs carry no meaning for SMI.
            self.parse_oid()?;
        }
        self.expect(Token::Definitions)?;
        self.expect(Token::Assign)?;
        self.expect(Token::Begin)?;

        let imports = if self.check(&Token::Imports) { self.parse_imports()? } else { Vec::new() };

        let mut decls = Vec::new();
        while !self.check(&Token::End) {
            if self.is_eof() {
                return Err(self.error(format!("expected END of module {name}")));
            }
            let decl = self.parse_decl()?;
            log::trace!("Parsed declaration {}", decl.name());
            decls.push(decl);
        }
        self.expect(Token::End)?;

        Ok(Module { span: self.span_from(start), name, imports, decls })
    }

    /// `IMPORTS a, b FROM M1 c FROM M2 ;`
    fn parse_imports(&mut self) -> ParseResult<Vec<Import>> {
        self.expect(Token::Imports)?;
        let mut imports = Vec::new();
        while !self.check(&Token::Semicolon) {
            let start = self.current_span();
            let mut symbols = Vec::new();
            loop {
                symbols.push(self.expect_import_symbol()?);
                if self.check(&Token::Comma) {
                    let comma = self.current_span();
                    self.advance();
                    if self.check(&Token::From) {
                        if !self.dialect.trailing_import_comma {
                            return Err(self.dialect_error(comma, "trailing comma before FROM"));
                        }
                        break;
                    }
                } else if self.check(&Token::From) {
                    break;
                } else if self.peek().is_some_and(is_import_symbol) {
                    if !self.dialect.mixed_separators {
                        return Err(
                            self.dialect_error(self.current_span(), "missing comma in IMPORTS")
                        );
                    }
                } else {
                    return Err(self.error("expected `,` or FROM"));
                }
            }
            self.expect(Token::From)?;
            let module = self.expect_type_name()?;
            if self.check(&Token::LBrace) {
                self.parse_oid()?;
            }
            imports.push(Import { span: self.span_from(start), module, symbols });
        }
        self.expect(Token::Semicolon)?;
        Ok(imports)
    }

    fn expect_import_symbol(&mut self) -> ParseResult<Ident> {
        match self.peek() {
            Some(Token::UpperIdent(_) | Token::LowerIdent(_)) => self.take_ident(),
            Some(token) if is_import_symbol(token) => {
                let span = self.current_span();
                self.advance();
                Ok(Ident::new(self.text(span), span))
            }
            _ => Err(self.error("expected an imported symbol")),
        }
    }

    /// Dispatch on the first two tokens of a declaration.
    fn parse_decl(&mut self) -> ParseResult<Decl> {
        let first = self.peek().cloned();
        let second = self.peek_nth(1).cloned();
        match (first, second) {
            (Some(first), Some(Token::Macro)) if is_import_symbol(&first) => self.parse_macro_def(),
            (Some(first), Some(Token::Object))
                if is_decl_name(&first) && self.peek_nth(2) == Some(&Token::Identifier) =>
            {
                self.parse_value_assignment()
            }
            (Some(first), Some(second)) if is_decl_name(&first) => match second {
                Token::ObjectType => self.parse_object_type().map(Decl::ObjectType),
                Token::ObjectIdentity => self.parse_object_identity().map(Decl::ObjectIdentity),
                Token::ModuleIdentity => self.parse_module_identity().map(Decl::ModuleIdentity),
                Token::NotificationType => self.parse_notification_type().map(Decl::Notification),
                Token::TrapType => self.parse_trap_type().map(Decl::Trap),
                Token::ObjectGroup => self.parse_object_group().map(Decl::ObjectGroup),
                Token::NotificationGroup => {
                    self.parse_notification_group().map(Decl::NotificationGroup)
                }
                Token::ModuleCompliance => {
                    self.parse_module_compliance().map(Decl::ModuleCompliance)
                }
                Token::AgentCapabilities => {
                    self.parse_agent_capabilities().map(Decl::AgentCapabilities)
                }
                Token::TextualConvention => {
                    self.parse_textual_convention().map(Decl::TextualConvention)
                }
                Token::Assign if self.peek_nth(2) == Some(&Token::TextualConvention) => {
                    self.parse_textual_convention().map(Decl::TextualConvention)
                }
                Token::Assign => self.parse_type_assignment().map(Decl::Type),
                _ => Err(self.error("expected a declaration")),
            },
            _ => Err(self.error("expected a declaration")),
        }
    }

    fn parse_macro_def(&mut self) -> ParseResult<Decl> {
        let name = self.expect_import_symbol()?;
        self.expect(Token::Macro)?;
        Ok(Decl::Macro(MacroDef { span: self.span_from(name.span), name }))
    }

    /// `name OBJECT IDENTIFIER ::= { ... }`
    fn parse_value_assignment(&mut self) -> ParseResult<Decl> {
        let name = self.expect_value_name()?;
        self.expect(Token::Object)?;
        self.expect(Token::Identifier)?;
        self.expect(Token::Assign)?;
        let oid = self.parse_oid()?;
        Ok(Decl::Value(ValueAssignment { span: self.span_from(name.span), name, oid }))
    }

    /// `Name ::= Type`
    fn parse_type_assignment(&mut self) -> ParseResult<TypeAssignment> {
        let name = self.expect_type_name()?;
        self.expect(Token::Assign)?;
        let syntax = self.parse_syntax()?;
        Ok(TypeAssignment { span: self.span_from(name.span), name, syntax })
    }
}
