use mibc_lang_parser::cst;

use crate::ctx::Ctx;
use crate::ir;
use crate::symbol_table::{HashMap, ModuleInfo, SymbolTable};

mod decls;

pub trait Lower {
    type Target;

    fn lower(&self, ctx: &Ctx) -> Self::Target;
}

impl<T: Lower> Lower for Option<T> {
    type Target = Option<T::Target>;

    fn lower(&self, ctx: &Ctx) -> Self::Target {
        self.as_ref().map(|x| x.lower(ctx))
    }
}

impl<T: Lower> Lower for Vec<T> {
    type Target = Vec<T::Target>;

    fn lower(&self, ctx: &Ctx) -> Self::Target {
        self.iter().map(|x| x.lower(ctx)).collect()
    }
}

impl Lower for cst::Ident {
    type Target = String;

    fn lower(&self, _ctx: &Ctx) -> Self::Target {
        self.id.clone()
    }
}

/// Lower a module to its intermediate form.
///
/// `table` and `info` are the result of building the module's symbol table.
/// Of several declarations of one name only the last is kept, like in the table.
pub fn lower_module(
    module: &cst::Module,
    table: &SymbolTable,
    info: &ModuleInfo,
    keep_documentation: bool,
) -> ir::Module {
    let ctx = Ctx::new(table, keep_documentation);

    let last: HashMap<&str, usize> =
        module.decls.iter().enumerate().map(|(i, decl)| (decl.name().as_str(), i)).collect();
    let decls = module
        .decls
        .iter()
        .enumerate()
        .filter(|(i, decl)| last.get(decl.name().as_str()) == Some(i))
        .map(|(_, decl)| decl.lower(&ctx))
        .collect();

    let identity = module.decls.iter().find_map(|decl| match decl {
        cst::Decl::ModuleIdentity(identity) => Some(identity),
        _ => None,
    });

    log::debug!("Lowered {}", module.name);
    ir::Module {
        info: info.clone(),
        imports: module.imports.lower(&ctx),
        organization: identity.and_then(|i| ctx.text(Some(i.organization.as_str()))),
        contact_info: identity.and_then(|i| ctx.text(Some(i.contact_info.as_str()))),
        description: identity.and_then(|i| ctx.text(Some(i.description.as_str()))),
        revisions: identity.map(|i| i.revisions.lower(&ctx)).unwrap_or_default(),
        decls,
    }
}

#[cfg(test)]
mod lower_tests {
    use std::collections::BTreeMap;

    use mibc_lang_parser::{DialectConfig, parse};

    use super::*;
    use crate::{SymbolWarning, build_symbol_table};
    use crate::ir::IndexPart;
    use crate::symbol_table::SymbolKind;
    use crate::types::BaseType;

    const SOURCE: &str = r#"
TEST-MIB DEFINITIONS ::= BEGIN
IMPORTS
    MODULE-IDENTITY, OBJECT-TYPE, NOTIFICATION-TYPE, Integer32, enterprises
        FROM SNMPv2-SMI
    DisplayString FROM SNMPv2-TC
    OBJECT-GROUP FROM SNMPv2-CONF;

testMIB MODULE-IDENTITY
    LAST-UPDATED "202001010000Z"
    ORGANIZATION "Example"
    CONTACT-INFO "nobody"
    DESCRIPTION  "Test module"
    REVISION     "202001010000Z"
    DESCRIPTION  "Initial"
    ::= { enterprises 4242 }

testTable OBJECT-TYPE
    SYNTAX      SEQUENCE OF TestEntry
    MAX-ACCESS  not-accessible
    STATUS      current
    DESCRIPTION "Table"
    ::= { testMIB 1 }

testEntry OBJECT-TYPE
    SYNTAX      TestEntry
    MAX-ACCESS  not-accessible
    STATUS      current
    DESCRIPTION "Row"
    INDEX       { testIndex, IMPLIED testName }
    ::= { testTable 1 }

TestEntry ::= SEQUENCE { testIndex Integer32, testName DisplayString }

testIndex OBJECT-TYPE
    SYNTAX      Integer32 (1..10)
    UNITS       "rows"
    MAX-ACCESS  read-only
    STATUS      current
    DESCRIPTION "Index"
    DEFVAL      { 1 }
    ::= { testEntry 1 }

testName OBJECT-TYPE
    SYNTAX      DisplayString
    MAX-ACCESS  read-only
    STATUS      current
    DESCRIPTION "First name"
    ::= { testEntry 2 }

testName OBJECT-TYPE
    SYNTAX      DisplayString
    MAX-ACCESS  read-write
    STATUS      current
    DESCRIPTION "Second name"
    ::= { testEntry 3 }

testEvent NOTIFICATION-TYPE
    OBJECTS     { testIndex, testName }
    STATUS      current
    DESCRIPTION "Event"
    ::= { testMIB 2 }

testGroup OBJECT-GROUP
    OBJECTS     { testIndex, testName }
    STATUS      current
    DESCRIPTION "Group"
    ::= { testMIB 3 }
END
"#;

    fn lower(keep_documentation: bool) -> ir::Module {
        let module = parse(SOURCE, DialectConfig::default()).unwrap().remove(0);
        let imported = BTreeMap::<String, SymbolTable>::new();
        let build = build_symbol_table(&module, &imported, keep_documentation);
        let duplicate = |w: &SymbolWarning| matches!(w, SymbolWarning::DuplicateDefinition { .. });
        assert!(build.warnings.iter().all(duplicate));
        lower_module(&module, &build.table, &build.info, keep_documentation)
    }

    #[test]
    fn module_header() {
        let module = lower(true);
        assert_eq!(module.info.oid, Some(vec![1, 3, 6, 1, 4, 1, 4242]));
        assert_eq!(module.organization.as_deref(), Some("Example"));
        assert_eq!(module.revisions.len(), 1);
        assert_eq!(module.imports.len(), 3);
        assert_eq!(module.imports[1].symbols, vec!["DisplayString"]);
    }

    #[test]
    fn object_types() {
        let module = lower(true);
        let entry = module.decl("testEntry").unwrap();
        assert_eq!(entry.oid, Some(vec![1, 3, 6, 1, 4, 1, 4242, 1, 1]));
        assert_eq!(entry.index, vec![
            IndexPart::Object { name: "testIndex".to_owned(), implied: false },
            IndexPart::Object { name: "testName".to_owned(), implied: true },
        ]);

        let index = module.decl("testIndex").unwrap();
        assert_eq!(index.kind, SymbolKind::ObjectType);
        assert_eq!(index.units.as_deref(), Some("rows"));
        assert_eq!(index.access.as_deref(), Some("read-only"));
        assert_eq!(index.status.as_deref(), Some("current"));
        assert_eq!(index.syntax.as_ref().unwrap().base, BaseType::Integer32);
        assert!(index.defval.as_ref().unwrap().is_value());

        let table = module.decl("testTable").unwrap();
        assert_eq!(table.syntax.as_ref().unwrap().base, BaseType::SequenceOf);
        assert_eq!(table.defval, None);
    }

    #[test]
    fn later_duplicate_is_kept() {
        let module = lower(true);
        let names: Vec<_> = module.decls.iter().filter(|d| d.name == "testName").collect();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].description.as_deref(), Some("Second name"));
        assert_eq!(names[0].display_hint.as_deref(), Some("255a"));
        assert_eq!(names[0].oid, Some(vec![1, 3, 6, 1, 4, 1, 4242, 1, 1, 3]));
    }

    #[test]
    fn member_lists() {
        let module = lower(true);
        assert_eq!(module.decl("testEvent").unwrap().objects, vec!["testIndex", "testName"]);
        assert_eq!(module.decl("testGroup").unwrap().kind, SymbolKind::ObjectGroup);
    }

    #[test]
    fn documentation_is_dropped_on_request() {
        let module = lower(false);
        assert_eq!(module.organization, None);
        assert_eq!(module.revisions[0].description, None);
        assert_eq!(module.decl("testIndex").unwrap().description, None);
    }

    #[test]
    fn serializes_to_json() {
        let module = lower(true);
        let json = serde_json::to_string(&module).unwrap();
        let back: ir::Module = serde_json::from_str(&json).unwrap();
        assert_eq!(back, module);
    }
}
