use mibc_lang_parser::cst;

use crate::symbol_table::{Symbol, SymbolTable};
use crate::types::ResolvedType;

/// State shared by the lowering of one module.
pub struct Ctx<'a> {
    /// The module's own symbol table, already built.
    pub table: &'a SymbolTable,
    keep_documentation: bool,
}

impl<'a> Ctx<'a> {
    pub fn new(table: &'a SymbolTable, keep_documentation: bool) -> Self {
        Ctx { table, keep_documentation }
    }

    pub fn lookup(&self, name: &cst::Ident) -> Option<&'a Symbol> {
        self.table.get(name.as_str())
    }

    pub fn oid(&self, name: &cst::Ident) -> Option<Vec<u32>> {
        self.table.oid(name.as_str()).map(<[u32]>::to_vec)
    }

    /// The resolved type of a typed declaration.
    pub fn syntax(&self, name: &cst::Ident) -> Option<ResolvedType> {
        self.lookup(name).and_then(|symbol| symbol.syntax.clone())
    }

    /// Documentation text, unless documentation is dropped.
    pub fn text(&self, text: Option<&str>) -> Option<String> {
        text.filter(|_| self.keep_documentation).map(str::to_owned)
    }
}
