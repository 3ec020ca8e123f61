//! Concrete syntax of SMI modules, as written by the author.
//!
//! Nothing here is resolved: names are kept verbatim, types are kept as
//! written and imports are just module/symbol pairs.

pub mod decls;
pub mod ident;
pub mod literal;
pub mod types;

pub use decls::*;
pub use ident::*;
pub use literal::*;
pub use types::*;
