use mibc_lang_parser::cst;

use crate::types::{ResolvedType, resolve_syntax};

use super::{Symbol, SymbolKind, SymbolTable};

impl SymbolTable {
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// The module an imported name was taken from, `None` for local names.
    pub fn imported_from(&self, name: &str) -> Option<&str> {
        self.imports.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols, ordered by name.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<_> = self.symbols.values().collect();
        symbols.sort_by(|a, b| a.name.cmp(&b.name));
        symbols
    }

    /// Symbols declared by the module itself, ordered by name.
    pub fn local_symbols(&self) -> Vec<&Symbol> {
        self.symbols().into_iter().filter(|s| !self.imports.contains_key(&s.name)).collect()
    }

    pub fn oid(&self, name: &str) -> Option<&[u32]> {
        self.get(name).and_then(|symbol| symbol.oid.as_deref())
    }

    /// Resolve a type written inline, such as an SMIv1 `INDEX` item, against this table.
    pub fn resolve_syntax(&self, syntax: &cst::Syntax) -> ResolvedType {
        resolve_syntax(syntax, &mut |name| match self.get(&name.id) {
            Some(symbol) if is_type(symbol) => {
                symbol.syntax.clone().unwrap_or_else(ResolvedType::unknown)
            }
            _ => ResolvedType::unknown(),
        })
    }
}

fn is_type(symbol: &Symbol) -> bool {
    matches!(symbol.kind, SymbolKind::Type | SymbolKind::TextualConvention)
}
