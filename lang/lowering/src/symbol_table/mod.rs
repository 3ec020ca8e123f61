use std::collections::{BTreeMap, HashMap as StdHashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use crate::types::ResolvedType;

pub mod build;
pub mod lookup;

pub type HashMap<K, V> = fxhash::FxHashMap<K, V>;
pub type HashSet<T> = fxhash::FxHashSet<T>;

/// Modules every module depends on, whether it imports from them or not.
pub const IMPLICIT_IMPORTS: [&str; 3] = ["SNMPv2-CONF", "SNMPv2-SMI", "SNMPv2-TC"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Type,
    TextualConvention,
    ObjectType,
    ObjectIdentity,
    ModuleIdentity,
    /// `name OBJECT IDENTIFIER ::= { ... }`
    Value,
    Notification,
    Trap,
    ObjectGroup,
    NotificationGroup,
    ModuleCompliance,
    AgentCapabilities,
    Macro,
    /// Stands in for a name that could not be resolved.
    Unknown,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SymbolKind::Type => "type",
            SymbolKind::TextualConvention => "textual convention",
            SymbolKind::ObjectType => "object type",
            SymbolKind::ObjectIdentity => "object identity",
            SymbolKind::ModuleIdentity => "module identity",
            SymbolKind::Value => "value",
            SymbolKind::Notification => "notification",
            SymbolKind::Trap => "trap",
            SymbolKind::ObjectGroup => "object group",
            SymbolKind::NotificationGroup => "notification group",
            SymbolKind::ModuleCompliance => "module compliance",
            SymbolKind::AgentCapabilities => "agent capabilities",
            SymbolKind::Macro => "macro",
            SymbolKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A resolved name. Identity is `(module, name)`; names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// The module that declares the symbol.
    pub module: String,
    /// Declared or referenced type, for typed symbols.
    pub syntax: Option<ResolvedType>,
    /// Numeric OID, for OID-bearing symbols whose parent chain resolved.
    pub oid: Option<Vec<u32>>,
    pub description: Option<String>,
}

impl Symbol {
    pub fn unknown(name: impl Into<String>, module: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Unknown,
            module: module.into(),
            syntax: None,
            oid: None,
            description: None,
        }
    }
}

/// All names visible inside one module, local and imported.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    module: String,
    symbols: HashMap<String, Symbol>,
    /// Imported names and the module named for them in `IMPORTS`.
    imports: HashMap<String, String>,
}

impl SymbolTable {
    pub fn new(module: impl Into<String>) -> Self {
        SymbolTable { module: module.into(), ..Default::default() }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Insert a symbol, returning the one it replaces.
    pub fn insert(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(symbol.name.clone(), symbol)
    }

    pub fn insert_import(&mut self, symbol: Symbol, from: &str) {
        self.imports.insert(symbol.name.clone(), from.to_owned());
        self.insert(symbol);
    }
}

/// Facts about a module needed by whoever compiles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    /// Name of the `MODULE-IDENTITY` declaration.
    pub identity: Option<String>,
    pub oid: Option<Vec<u32>>,
    pub last_updated: Option<String>,
    /// Modules this one requires: its `IMPORTS` and the implicit ones, sorted.
    pub imported: Vec<String>,
}

/// Already built symbol tables, by module name.
pub trait ModuleTables {
    fn table(&self, module: &str) -> Option<&SymbolTable>;
}

impl<S: BuildHasher> ModuleTables for StdHashMap<String, SymbolTable, S> {
    fn table(&self, module: &str) -> Option<&SymbolTable> {
        self.get(module)
    }
}

impl ModuleTables for BTreeMap<String, SymbolTable> {
    fn table(&self, module: &str) -> Option<&SymbolTable> {
        self.get(module)
    }
}

/// Lookups fall back to the built-in base modules.
pub(crate) struct WithBaseModules<'a, T: ?Sized>(pub &'a T);

impl<T: ModuleTables + ?Sized> ModuleTables for WithBaseModules<'_, T> {
    fn table(&self, module: &str) -> Option<&SymbolTable> {
        self.0.table(module).or_else(|| crate::base_modules::base_table(module))
    }
}
