use std::fmt;

use mibc_lang_miette_util::codespan::Span;

use super::{Ident, Literal, Syntax};

/// One `NAME DEFINITIONS ::= BEGIN ... END` block.
#[derive(Debug, Clone)]
pub struct Module {
    pub span: Span,
    pub name: Ident,
    pub imports: Vec<Import>,
    pub decls: Vec<Decl>,
}

/// `sym, sym FROM Module`
#[derive(Debug, Clone)]
pub struct Import {
    pub span: Span,
    pub module: Ident,
    pub symbols: Vec<Ident>,
}

#[derive(Debug, Clone)]
pub enum Decl {
    Value(ValueAssignment),
    Type(TypeAssignment),
    TextualConvention(TextualConvention),
    ModuleIdentity(ModuleIdentity),
    ObjectIdentity(ObjectIdentity),
    ObjectType(ObjectType),
    Notification(NotificationType),
    Trap(TrapType),
    ObjectGroup(ObjectGroup),
    NotificationGroup(NotificationGroup),
    ModuleCompliance(ModuleCompliance),
    AgentCapabilities(AgentCapabilities),
    Macro(MacroDef),
}

impl Decl {
    pub fn name(&self) -> &Ident {
        match self {
            Decl::Value(d) => &d.name,
            Decl::Type(d) => &d.name,
            Decl::TextualConvention(d) => &d.name,
            Decl::ModuleIdentity(d) => &d.name,
            Decl::ObjectIdentity(d) => &d.name,
            Decl::ObjectType(d) => &d.name,
            Decl::Notification(d) => &d.name,
            Decl::Trap(d) => &d.name,
            Decl::ObjectGroup(d) => &d.name,
            Decl::NotificationGroup(d) => &d.name,
            Decl::ModuleCompliance(d) => &d.name,
            Decl::AgentCapabilities(d) => &d.name,
            Decl::Macro(d) => &d.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Decl::Value(d) => d.span,
            Decl::Type(d) => d.span,
            Decl::TextualConvention(d) => d.span,
            Decl::ModuleIdentity(d) => d.span,
            Decl::ObjectIdentity(d) => d.span,
            Decl::ObjectType(d) => d.span,
            Decl::Notification(d) => d.span,
            Decl::Trap(d) => d.span,
            Decl::ObjectGroup(d) => d.span,
            Decl::NotificationGroup(d) => d.span,
            Decl::ModuleCompliance(d) => d.span,
            Decl::AgentCapabilities(d) => d.span,
            Decl::Macro(d) => d.span,
        }
    }

    /// The `::= { ... }` value of declarations that register an OID.
    pub fn oid(&self) -> Option<&Oid> {
        match self {
            Decl::Value(d) => Some(&d.oid),
            Decl::ModuleIdentity(d) => Some(&d.oid),
            Decl::ObjectIdentity(d) => Some(&d.oid),
            Decl::ObjectType(d) => Some(&d.oid),
            Decl::Notification(d) => Some(&d.oid),
            Decl::ObjectGroup(d) => Some(&d.oid),
            Decl::NotificationGroup(d) => Some(&d.oid),
            Decl::ModuleCompliance(d) => Some(&d.oid),
            Decl::AgentCapabilities(d) => Some(&d.oid),
            Decl::Type(_) | Decl::TextualConvention(_) | Decl::Trap(_) | Decl::Macro(_) => None,
        }
    }
}

// Clause values
//
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Current,
    Deprecated,
    Obsolete,
    Mandatory,
    Optional,
}

impl Status {
    pub fn from_keyword(s: &str) -> Option<Status> {
        match s {
            "current" => Some(Status::Current),
            "deprecated" => Some(Status::Deprecated),
            "obsolete" => Some(Status::Obsolete),
            "mandatory" => Some(Status::Mandatory),
            "optional" => Some(Status::Optional),
            _ => None,
        }
    }

    pub fn is_smi_v1(self) -> bool {
        matches!(self, Status::Mandatory | Status::Optional)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Current => "current",
            Status::Deprecated => "deprecated",
            Status::Obsolete => "obsolete",
            Status::Mandatory => "mandatory",
            Status::Optional => "optional",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    NotAccessible,
    AccessibleForNotify,
    ReadOnly,
    ReadWrite,
    ReadCreate,
    WriteOnly,
    NotImplemented,
}

impl Access {
    pub fn from_keyword(s: &str) -> Option<Access> {
        match s {
            "not-accessible" => Some(Access::NotAccessible),
            "accessible-for-notify" => Some(Access::AccessibleForNotify),
            "read-only" => Some(Access::ReadOnly),
            "read-write" => Some(Access::ReadWrite),
            "read-create" => Some(Access::ReadCreate),
            "write-only" => Some(Access::WriteOnly),
            "not-implemented" => Some(Access::NotImplemented),
            _ => None,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Access::NotAccessible => "not-accessible",
            Access::AccessibleForNotify => "accessible-for-notify",
            Access::ReadOnly => "read-only",
            Access::ReadWrite => "read-write",
            Access::ReadCreate => "read-create",
            Access::WriteOnly => "write-only",
            Access::NotImplemented => "not-implemented",
        };
        f.write_str(s)
    }
}

/// `{ iso org(3) 6 }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oid {
    pub span: Span,
    pub components: Vec<OidComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OidComponent {
    Number(u32),
    Name(Ident),
    /// `org(3)`: the number wins, the name is documentation.
    NamedNumber(Ident, u32),
    /// `SNMPv2-SMI.enterprises`
    Qualified { module: Ident, name: Ident },
}

#[derive(Debug, Clone)]
pub struct DefVal {
    pub span: Span,
    pub value: Literal,
}

#[derive(Debug, Clone)]
pub enum IndexClause {
    Index(Vec<IndexItem>),
    Augments(Ident),
}

#[derive(Debug, Clone)]
pub enum IndexItem {
    Object { implied: bool, name: Ident },
    /// A bare built-in type, SMIv1 style.
    Type(Syntax),
}

// Declarations
//
//

/// `name OBJECT IDENTIFIER ::= { ... }`
#[derive(Debug, Clone)]
pub struct ValueAssignment {
    pub span: Span,
    pub name: Ident,
    pub oid: Oid,
}

/// `Name ::= Type`
#[derive(Debug, Clone)]
pub struct TypeAssignment {
    pub span: Span,
    pub name: Ident,
    pub syntax: Syntax,
}

#[derive(Debug, Clone)]
pub struct TextualConvention {
    pub span: Span,
    pub name: Ident,
    pub display_hint: Option<String>,
    pub status: Status,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub syntax: Syntax,
}

#[derive(Debug, Clone)]
pub struct Revision {
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ModuleIdentity {
    pub span: Span,
    pub name: Ident,
    pub last_updated: String,
    pub organization: String,
    pub contact_info: String,
    pub description: String,
    pub revisions: Vec<Revision>,
    pub oid: Oid,
}

#[derive(Debug, Clone)]
pub struct ObjectIdentity {
    pub span: Span,
    pub name: Ident,
    pub status: Status,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub oid: Oid,
}

#[derive(Debug, Clone)]
pub struct ObjectType {
    pub span: Span,
    pub name: Ident,
    pub syntax: Syntax,
    pub units: Option<String>,
    pub access: Option<Access>,
    pub status: Status,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub index: Option<IndexClause>,
    pub defval: Option<DefVal>,
    pub oid: Oid,
}

#[derive(Debug, Clone)]
pub struct NotificationType {
    pub span: Span,
    pub name: Ident,
    pub objects: Vec<Ident>,
    pub status: Status,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub oid: Oid,
}

/// SMIv1 `TRAP-TYPE`. Its OID is derived from the enterprise and the trap number.
#[derive(Debug, Clone)]
pub struct TrapType {
    pub span: Span,
    pub name: Ident,
    pub enterprise: Ident,
    pub variables: Vec<Ident>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub number: u32,
}

#[derive(Debug, Clone)]
pub struct ObjectGroup {
    pub span: Span,
    pub name: Ident,
    pub objects: Vec<Ident>,
    pub status: Status,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub oid: Oid,
}

#[derive(Debug, Clone)]
pub struct NotificationGroup {
    pub span: Span,
    pub name: Ident,
    pub notifications: Vec<Ident>,
    pub status: Status,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub oid: Oid,
}

#[derive(Debug, Clone)]
pub struct ModuleCompliance {
    pub span: Span,
    pub name: Ident,
    pub status: Status,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub modules: Vec<ComplianceModule>,
    pub oid: Oid,
}

/// `MODULE [name] MANDATORY-GROUPS { ... } GROUP ... OBJECT ...`
#[derive(Debug, Clone)]
pub struct ComplianceModule {
    /// `None` means the current module.
    pub module: Option<Ident>,
    pub mandatory_groups: Vec<Ident>,
    pub groups: Vec<ComplianceGroup>,
    pub objects: Vec<ComplianceObject>,
}

#[derive(Debug, Clone)]
pub struct ComplianceGroup {
    pub name: Ident,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ComplianceObject {
    pub name: Ident,
    pub syntax: Option<Syntax>,
    pub write_syntax: Option<Syntax>,
    pub min_access: Option<Access>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AgentCapabilities {
    pub span: Span,
    pub name: Ident,
    pub product_release: String,
    pub status: Status,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub supports: Vec<SupportsModule>,
    pub oid: Oid,
}

#[derive(Debug, Clone)]
pub struct SupportsModule {
    pub module: Ident,
    pub includes: Vec<Ident>,
    pub variations: Vec<Variation>,
}

#[derive(Debug, Clone)]
pub struct Variation {
    pub name: Ident,
    pub syntax: Option<Syntax>,
    pub write_syntax: Option<Syntax>,
    pub access: Option<Access>,
    pub creation_requires: Vec<Ident>,
    pub defval: Option<DefVal>,
    pub description: Option<String>,
}

/// `NAME MACRO ::= BEGIN ... END`; the body is not kept.
#[derive(Debug, Clone)]
pub struct MacroDef {
    pub span: Span,
    pub name: Ident,
}
