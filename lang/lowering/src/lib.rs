//! From parsed MIB modules to their resolved intermediate form.
//!
//! A module is processed in two steps. [`build_symbol_table`] resolves every
//! name the module declares or imports, given the tables of the modules it
//! imports from. [`lower_module`] then produces the [`ir::Module`] with types,
//! OIDs and default values resolved.

pub mod base_modules;
mod ctx;
pub mod defval;
pub mod ir;
mod lower;
mod result;
pub mod symbol_table;
pub mod types;

pub use ctx::Ctx;
pub use defval::{ResolvedValue, Value, resolve};
pub use lower::{Lower, lower_module};
pub use result::*;
pub use symbol_table::build::{Build, build_symbol_table};
pub use symbol_table::{IMPLICIT_IMPORTS, ModuleInfo, ModuleTables, Symbol, SymbolKind, SymbolTable};
pub use types::{BaseType, ResolvedType, SyntaxKind};
