//! Macro invocations: `OBJECT-TYPE`, `MODULE-IDENTITY`, `TEXTUAL-CONVENTION`, ...
//!
//! Clauses are accepted in any order; required clauses are checked once the
//! invocation is complete.

use crate::cst::*;
use crate::lexer::Token;
use crate::result::ParseError;

use super::{ParseResult, Parser};

impl Parser<'_> {
    fn missing_clause(&self, decl: &Ident, clause: &str) -> ParseError {
        self.error(format!("{decl} is missing its {clause} clause"))
    }

    fn duplicate_clause(&self, clause: &str) -> ParseError {
        self.error(format!("duplicate {clause} clause"))
    }

    /// `STATUS current`
    fn parse_status(&mut self) -> ParseResult<Status> {
        self.expect(Token::Status)?;
        let span = self.current_span();
        let word = self.expect_value_name()?;
        let status = Status::from_keyword(word.as_str())
            .ok_or_else(|| self.dialect_error(span, format!("unknown status `{word}`")))?;
        if status.is_smi_v1() && !self.dialect.smi_v1_keywords {
            return Err(self.dialect_error(span, format!("status `{word}` is SMIv1 only")));
        }
        Ok(status)
    }

    /// `MAX-ACCESS read-only`, or SMIv1 `ACCESS read-only`.
    fn parse_access_clause(&mut self) -> ParseResult<Access> {
        let span = self.current_span();
        if self.eat(&Token::Access) {
            if !self.dialect.smi_v1_keywords {
                return Err(self.dialect_error(span, "ACCESS is SMIv1 only, use MAX-ACCESS"));
            }
        } else {
            self.expect(Token::MaxAccess)?;
        }
        self.parse_access_value()
    }

    fn parse_access_value(&mut self) -> ParseResult<Access> {
        let span = self.current_span();
        let word = self.expect_value_name()?;
        Access::from_keyword(word.as_str())
            .ok_or_else(|| self.dialect_error(span, format!("unknown access `{word}`")))
    }

    fn set_once<T>(&self, slot: &mut Option<T>, value: T, clause: &str) -> ParseResult<()> {
        if slot.is_some() {
            return Err(self.duplicate_clause(clause));
        }
        *slot = Some(value);
        Ok(())
    }

    fn parse_assign_oid(&mut self) -> ParseResult<Oid> {
        self.expect(Token::Assign)?;
        self.parse_oid()
    }

    // OBJECT-TYPE
    //
    //

    pub(super) fn parse_object_type(&mut self) -> ParseResult<ObjectType> {
        let name = self.expect_value_name()?;
        self.expect(Token::ObjectType)?;

        let mut syntax = None;
        let mut units = None;
        let mut access = None;
        let mut status = None;
        let mut description = None;
        let mut reference = None;
        let mut index = None;
        let mut defval = None;

        while !self.check(&Token::Assign) {
            match self.peek() {
                Some(Token::Syntax) => {
                    self.advance();
                    let s = self.parse_syntax()?;
                    self.set_once(&mut syntax, s, "SYNTAX")?;
                }
                Some(Token::Units) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut units, text, "UNITS")?;
                }
                Some(Token::MaxAccess | Token::Access) => {
                    let a = self.parse_access_clause()?;
                    self.set_once(&mut access, a, "MAX-ACCESS")?;
                }
                Some(Token::Status) => {
                    let s = self.parse_status()?;
                    self.set_once(&mut status, s, "STATUS")?;
                }
                Some(Token::Description) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut description, text, "DESCRIPTION")?;
                }
                Some(Token::Reference) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut reference, text, "REFERENCE")?;
                }
                Some(Token::Index) => {
                    let clause = self.parse_index()?;
                    self.set_once(&mut index, clause, "INDEX")?;
                }
                Some(Token::Augments) => {
                    self.advance();
                    self.expect(Token::LBrace)?;
                    let target = self.expect_ident()?;
                    self.expect(Token::RBrace)?;
                    self.set_once(&mut index, IndexClause::Augments(target), "AUGMENTS")?;
                }
                Some(Token::Defval) => {
                    let value = self.parse_defval()?;
                    self.set_once(&mut defval, value, "DEFVAL")?;
                }
                _ => return Err(self.error(format!("unexpected clause in OBJECT-TYPE {name}"))),
            }
        }

        let syntax = syntax.ok_or_else(|| self.missing_clause(&name, "SYNTAX"))?;
        let status = status.ok_or_else(|| self.missing_clause(&name, "STATUS"))?;
        let oid = self.parse_assign_oid()?;
        Ok(ObjectType {
            span: self.span_from(name.span),
            name,
            syntax,
            units,
            access,
            status,
            description,
            reference,
            index,
            defval,
            oid,
        })
    }

    /// `INDEX { [IMPLIED] name, ... }`
    fn parse_index(&mut self) -> ParseResult<IndexClause> {
        self.expect(Token::Index)?;
        self.expect(Token::LBrace)?;
        let items =
            self.separated(&Token::RBrace, false, starts_index_item, Self::parse_index_item)?;
        self.expect(Token::RBrace)?;
        Ok(IndexClause::Index(items))
    }

    fn parse_index_item(&mut self) -> ParseResult<IndexItem> {
        match self.peek() {
            Some(Token::Integer | Token::Octet | Token::Object | Token::Bits) => {
                let span = self.current_span();
                if !self.dialect.index_types {
                    return Err(self.dialect_error(span, "types in INDEX are SMIv1 only"));
                }
                self.parse_syntax().map(IndexItem::Type)
            }
            _ => {
                let implied = self.eat(&Token::Implied);
                let name = self.expect_ident()?;
                Ok(IndexItem::Object { implied, name })
            }
        }
    }

    /// `DEFVAL { value }`
    pub(super) fn parse_defval(&mut self) -> ParseResult<DefVal> {
        let start = self.expect(Token::Defval)?;
        self.expect(Token::LBrace)?;
        let value = self.parse_literal()?;
        self.expect(Token::RBrace)?;
        Ok(DefVal { span: self.span_from(start), value })
    }

    // Module metadata
    //
    //

    pub(super) fn parse_module_identity(&mut self) -> ParseResult<ModuleIdentity> {
        let name = self.expect_value_name()?;
        self.expect(Token::ModuleIdentity)?;

        let mut last_updated = None;
        let mut organization = None;
        let mut contact_info = None;
        let mut description = None;
        let mut revisions = Vec::new();

        while !self.check(&Token::Assign) {
            match self.peek() {
                Some(Token::LastUpdated) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut last_updated, text, "LAST-UPDATED")?;
                }
                Some(Token::Organization) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut organization, text, "ORGANIZATION")?;
                }
                Some(Token::ContactInfo) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut contact_info, text, "CONTACT-INFO")?;
                }
                Some(Token::Description) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut description, text, "DESCRIPTION")?;
                }
                Some(Token::Revision) => {
                    self.advance();
                    let date = self.expect_text()?;
                    self.expect(Token::Description)?;
                    let description = self.expect_text()?;
                    revisions.push(Revision { date, description });
                }
                _ => {
                    return Err(self.error(format!("unexpected clause in MODULE-IDENTITY {name}")));
                }
            }
        }

        let last_updated = last_updated.ok_or_else(|| self.missing_clause(&name, "LAST-UPDATED"))?;
        let oid = self.parse_assign_oid()?;
        Ok(ModuleIdentity {
            span: self.span_from(name.span),
            name,
            last_updated,
            organization: organization.unwrap_or_default(),
            contact_info: contact_info.unwrap_or_default(),
            description: description.unwrap_or_default(),
            revisions,
            oid,
        })
    }

    /// `STATUS`, `DESCRIPTION` and `REFERENCE` shared by most macros, plus one extra
    /// clause handled by `extra`, which returns `false` for tokens it does not know.
    fn parse_common_clauses(
        &mut self,
        name: &Ident,
        macro_name: &str,
        mut extra: impl FnMut(&mut Self) -> ParseResult<bool>,
    ) -> ParseResult<CommonClauses> {
        let mut status = None;
        let mut description = None;
        let mut reference = None;
        while !self.check(&Token::Assign) {
            match self.peek() {
                Some(Token::Status) => {
                    let s = self.parse_status()?;
                    self.set_once(&mut status, s, "STATUS")?;
                }
                Some(Token::Description) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut description, text, "DESCRIPTION")?;
                }
                Some(Token::Reference) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut reference, text, "REFERENCE")?;
                }
                _ => {
                    if !extra(self)? {
                        return Err(self.error(format!("unexpected clause in {macro_name} {name}")));
                    }
                }
            }
        }
        Ok(CommonClauses { status, description, reference })
    }

    pub(super) fn parse_object_identity(&mut self) -> ParseResult<ObjectIdentity> {
        let name = self.expect_value_name()?;
        self.expect(Token::ObjectIdentity)?;
        let common = self.parse_common_clauses(&name, "OBJECT-IDENTITY", |_| Ok(false))?;
        let status = common.status.ok_or_else(|| self.missing_clause(&name, "STATUS"))?;
        let oid = self.parse_assign_oid()?;
        Ok(ObjectIdentity {
            span: self.span_from(name.span),
            name,
            status,
            description: common.description,
            reference: common.reference,
            oid,
        })
    }

    pub(super) fn parse_textual_convention(&mut self) -> ParseResult<TextualConvention> {
        let name = self.expect_type_name()?;
        self.eat(&Token::Assign);
        self.expect(Token::TextualConvention)?;

        let mut display_hint = None;
        let mut status = None;
        let mut description = None;
        let mut reference = None;
        loop {
            match self.peek() {
                Some(Token::DisplayHint) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut display_hint, text, "DISPLAY-HINT")?;
                }
                Some(Token::Status) => {
                    let s = self.parse_status()?;
                    self.set_once(&mut status, s, "STATUS")?;
                }
                Some(Token::Description) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut description, text, "DESCRIPTION")?;
                }
                Some(Token::Reference) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut reference, text, "REFERENCE")?;
                }
                Some(Token::Syntax) => break,
                _ => {
                    return Err(
                        self.error(format!("unexpected clause in TEXTUAL-CONVENTION {name}"))
                    );
                }
            }
        }
        self.expect(Token::Syntax)?;
        let syntax = self.parse_syntax()?;
        let status = status.ok_or_else(|| self.missing_clause(&name, "STATUS"))?;
        Ok(TextualConvention {
            span: self.span_from(name.span),
            name,
            display_hint,
            status,
            description,
            reference,
            syntax,
        })
    }

    // Notifications
    //
    //

    pub(super) fn parse_notification_type(&mut self) -> ParseResult<NotificationType> {
        let name = self.expect_value_name()?;
        self.expect(Token::NotificationType)?;
        let mut objects = Vec::new();
        let common = self.parse_common_clauses(&name, "NOTIFICATION-TYPE", |p| {
            if p.eat(&Token::Objects) {
                objects = p.braced_idents()?;
                Ok(true)
            } else {
                Ok(false)
            }
        })?;
        let status = common.status.ok_or_else(|| self.missing_clause(&name, "STATUS"))?;
        let oid = self.parse_assign_oid()?;
        Ok(NotificationType {
            span: self.span_from(name.span),
            name,
            objects,
            status,
            description: common.description,
            reference: common.reference,
            oid,
        })
    }

    /// SMIv1 `TRAP-TYPE ENTERPRISE e VARIABLES { ... } ::= n`
    pub(super) fn parse_trap_type(&mut self) -> ParseResult<TrapType> {
        let name = self.expect_value_name()?;
        let keyword = self.expect(Token::TrapType)?;
        if !self.dialect.smi_v1_keywords {
            return Err(self.dialect_error(keyword, "TRAP-TYPE is SMIv1 only"));
        }

        let mut enterprise = None;
        let mut variables = Vec::new();
        let mut description = None;
        let mut reference = None;
        while !self.check(&Token::Assign) {
            match self.peek() {
                Some(Token::Enterprise) => {
                    self.advance();
                    let e = self.parse_enterprise()?;
                    self.set_once(&mut enterprise, e, "ENTERPRISE")?;
                }
                Some(Token::Variables) => {
                    self.advance();
                    variables = self.braced_idents()?;
                }
                Some(Token::Description) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut description, text, "DESCRIPTION")?;
                }
                Some(Token::Reference) => {
                    self.advance();
                    let text = self.expect_text()?;
                    self.set_once(&mut reference, text, "REFERENCE")?;
                }
                _ => return Err(self.error(format!("unexpected clause in TRAP-TYPE {name}"))),
            }
        }
        let enterprise = enterprise.ok_or_else(|| self.missing_clause(&name, "ENTERPRISE"))?;
        self.expect(Token::Assign)?;
        let number = self.expect_u32()?;
        Ok(TrapType {
            span: self.span_from(name.span),
            name,
            enterprise,
            variables,
            description,
            reference,
            number,
        })
    }

    fn parse_enterprise(&mut self) -> ParseResult<Ident> {
        let span = self.current_span();
        if self.eat(&Token::LBrace) {
            if !self.dialect.enterprise_braces_in_trap {
                return Err(self.dialect_error(span, "braces around ENTERPRISE are not allowed"));
            }
            let name = self.expect_ident()?;
            self.expect(Token::RBrace)?;
            Ok(name)
        } else {
            self.expect_ident()
        }
    }

    // Conformance
    //
    //

    pub(super) fn parse_object_group(&mut self) -> ParseResult<ObjectGroup> {
        let name = self.expect_value_name()?;
        self.expect(Token::ObjectGroup)?;
        let mut objects = None;
        let common = self.parse_common_clauses(&name, "OBJECT-GROUP", |p| {
            if p.eat(&Token::Objects) {
                objects = Some(p.braced_idents()?);
                Ok(true)
            } else {
                Ok(false)
            }
        })?;
        let objects = objects.ok_or_else(|| self.missing_clause(&name, "OBJECTS"))?;
        let status = common.status.ok_or_else(|| self.missing_clause(&name, "STATUS"))?;
        let oid = self.parse_assign_oid()?;
        Ok(ObjectGroup {
            span: self.span_from(name.span),
            name,
            objects,
            status,
            description: common.description,
            reference: common.reference,
            oid,
        })
    }

    pub(super) fn parse_notification_group(&mut self) -> ParseResult<NotificationGroup> {
        let name = self.expect_value_name()?;
        self.expect(Token::NotificationGroup)?;
        let mut notifications = None;
        let common = self.parse_common_clauses(&name, "NOTIFICATION-GROUP", |p| {
            if p.eat(&Token::Notifications) {
                notifications = Some(p.braced_idents()?);
                Ok(true)
            } else {
                Ok(false)
            }
        })?;
        let notifications =
            notifications.ok_or_else(|| self.missing_clause(&name, "NOTIFICATIONS"))?;
        let status = common.status.ok_or_else(|| self.missing_clause(&name, "STATUS"))?;
        let oid = self.parse_assign_oid()?;
        Ok(NotificationGroup {
            span: self.span_from(name.span),
            name,
            notifications,
            status,
            description: common.description,
            reference: common.reference,
            oid,
        })
    }

    pub(super) fn parse_module_compliance(&mut self) -> ParseResult<ModuleCompliance> {
        let name = self.expect_value_name()?;
        self.expect(Token::ModuleCompliance)?;
        let mut modules = Vec::new();
        let common = self.parse_common_clauses(&name, "MODULE-COMPLIANCE", |p| {
            if p.check(&Token::Module) {
                modules.push(p.parse_compliance_module()?);
                Ok(true)
            } else {
                Ok(false)
            }
        })?;
        let status = common.status.ok_or_else(|| self.missing_clause(&name, "STATUS"))?;
        let oid = self.parse_assign_oid()?;
        Ok(ModuleCompliance {
            span: self.span_from(name.span),
            name,
            status,
            description: common.description,
            reference: common.reference,
            modules,
            oid,
        })
    }

    fn parse_compliance_module(&mut self) -> ParseResult<ComplianceModule> {
        self.expect(Token::Module)?;
        let module = match self.peek() {
            Some(Token::UpperIdent(_)) => {
                let module = self.take_ident()?;
                if self.check(&Token::LBrace) {
                    self.parse_oid()?;
                }
                Some(module)
            }
            _ => None,
        };

        let mut mandatory_groups = Vec::new();
        let mut groups = Vec::new();
        let mut objects = Vec::new();
        loop {
            match self.peek() {
                Some(Token::MandatoryGroups) => {
                    self.advance();
                    mandatory_groups = self.braced_idents()?;
                }
                Some(Token::Group) => {
                    self.advance();
                    let name = self.expect_ident()?;
                    let description = self.opt_text(&Token::Description)?;
                    groups.push(ComplianceGroup { name, description });
                }
                Some(Token::Object) => {
                    self.advance();
                    objects.push(self.parse_compliance_object()?);
                }
                _ => break,
            }
        }
        Ok(ComplianceModule { module, mandatory_groups, groups, objects })
    }

    fn parse_compliance_object(&mut self) -> ParseResult<ComplianceObject> {
        let name = self.expect_ident()?;
        let mut object = ComplianceObject {
            name,
            syntax: None,
            write_syntax: None,
            min_access: None,
            description: None,
        };
        loop {
            match self.peek() {
                Some(Token::Syntax) => {
                    self.advance();
                    object.syntax = Some(self.parse_syntax()?);
                }
                Some(Token::WriteSyntax) => {
                    self.advance();
                    object.write_syntax = Some(self.parse_syntax()?);
                }
                Some(Token::MinAccess) => {
                    self.advance();
                    object.min_access = Some(self.parse_access_value()?);
                }
                Some(Token::Description) => {
                    self.advance();
                    object.description = Some(self.expect_text()?);
                }
                _ => break,
            }
        }
        Ok(object)
    }

    pub(super) fn parse_agent_capabilities(&mut self) -> ParseResult<AgentCapabilities> {
        let name = self.expect_value_name()?;
        self.expect(Token::AgentCapabilities)?;
        let mut product_release = None;
        let mut supports = Vec::new();
        let common = self.parse_common_clauses(&name, "AGENT-CAPABILITIES", |p| match p.peek() {
            Some(Token::ProductRelease) => {
                p.advance();
                product_release = Some(p.expect_text()?);
                Ok(true)
            }
            Some(Token::Supports) => {
                supports.push(p.parse_supports_module()?);
                Ok(true)
            }
            _ => Ok(false),
        })?;
        let product_release =
            product_release.ok_or_else(|| self.missing_clause(&name, "PRODUCT-RELEASE"))?;
        let status = common.status.ok_or_else(|| self.missing_clause(&name, "STATUS"))?;
        let oid = self.parse_assign_oid()?;
        Ok(AgentCapabilities {
            span: self.span_from(name.span),
            name,
            product_release,
            status,
            description: common.description,
            reference: common.reference,
            supports,
            oid,
        })
    }

    fn parse_supports_module(&mut self) -> ParseResult<SupportsModule> {
        self.expect(Token::Supports)?;
        let module = self.expect_type_name()?;
        if self.check(&Token::LBrace) {
            self.parse_oid()?;
        }
        self.expect(Token::Includes)?;
        let includes = self.braced_idents()?;
        let mut variations = Vec::new();
        while self.eat(&Token::Variation) {
            variations.push(self.parse_variation()?);
        }
        Ok(SupportsModule { module, includes, variations })
    }

    fn parse_variation(&mut self) -> ParseResult<Variation> {
        let name = self.expect_ident()?;
        let mut variation = Variation {
            name,
            syntax: None,
            write_syntax: None,
            access: None,
            creation_requires: Vec::new(),
            defval: None,
            description: None,
        };
        loop {
            match self.peek() {
                Some(Token::Syntax) => {
                    self.advance();
                    variation.syntax = Some(self.parse_syntax()?);
                }
                Some(Token::WriteSyntax) => {
                    self.advance();
                    variation.write_syntax = Some(self.parse_syntax()?);
                }
                Some(Token::Access) => {
                    self.advance();
                    variation.access = Some(self.parse_access_value()?);
                }
                Some(Token::CreationRequires) => {
                    self.advance();
                    variation.creation_requires = self.braced_idents()?;
                }
                Some(Token::Defval) => {
                    variation.defval = Some(self.parse_defval()?);
                }
                Some(Token::Description) => {
                    self.advance();
                    variation.description = Some(self.expect_text()?);
                }
                _ => break,
            }
        }
        Ok(variation)
    }
}

struct CommonClauses {
    status: Option<Status>,
    description: Option<String>,
    reference: Option<String>,
}

fn starts_index_item(token: &Token) -> bool {
    matches!(
        token,
        Token::UpperIdent(_)
            | Token::LowerIdent(_)
            | Token::Implied
            | Token::Integer
            | Token::Octet
            | Token::Object
            | Token::Bits
    )
}
