//! The intermediate form handed to code emitters.
//!
//! One [`Module`] per compiled MIB module, with every name, type and OID
//! resolved. Documentation texts are `None` when they were not kept.

use serde::{Deserialize, Serialize};

use crate::defval::ResolvedValue;
use crate::symbol_table::{ModuleInfo, SymbolKind};
use crate::types::ResolvedType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub info: ModuleInfo,
    pub imports: Vec<Import>,
    pub organization: Option<String>,
    pub contact_info: Option<String>,
    pub description: Option<String>,
    pub revisions: Vec<Revision>,
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn decl(&self, name: &str) -> Option<&Decl> {
        self.decls.iter().find(|decl| decl.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub module: String,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    pub date: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decl {
    pub name: String,
    pub kind: SymbolKind,
    pub oid: Option<Vec<u32>>,
    pub syntax: Option<ResolvedType>,
    pub access: Option<String>,
    pub status: Option<String>,
    pub units: Option<String>,
    pub display_hint: Option<String>,
    pub index: Vec<IndexPart>,
    pub augments: Option<String>,
    /// Members of groups, objects of notifications and traps, groups
    /// required by compliance statements, includes of capabilities.
    pub objects: Vec<String>,
    /// Present for objects that declare a `DEFVAL`.
    pub defval: Option<ResolvedValue>,
    pub description: Option<String>,
    pub reference: Option<String>,
}

impl Decl {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Decl {
            name: name.into(),
            kind,
            oid: None,
            syntax: None,
            access: None,
            status: None,
            units: None,
            display_hint: None,
            index: Vec::new(),
            augments: None,
            objects: Vec::new(),
            defval: None,
            description: None,
            reference: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexPart {
    Object { name: String, implied: bool },
    /// SMIv1 index given as a bare type.
    Type(ResolvedType),
}
