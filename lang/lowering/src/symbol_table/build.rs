use std::collections::BTreeSet;

use mibc_lang_miette_util::ToMiette;
use mibc_lang_parser::cst::{self, Decl, Ident, OidComponent};

use crate::base_modules::is_base_module;
use crate::result::SymbolWarning;
use crate::types::{BaseType, ResolvedType, resolve_syntax};

use super::{
    HashMap, HashSet, IMPLICIT_IMPORTS, ModuleInfo, ModuleTables, Symbol, SymbolKind, SymbolTable,
    WithBaseModules,
};

/// The result of building one module's symbol table.
#[derive(Debug, Clone)]
pub struct Build {
    pub table: SymbolTable,
    pub info: ModuleInfo,
    pub warnings: Vec<SymbolWarning>,
}

/// Build the symbol table of `module`.
///
/// `imported` supplies the tables of the modules named in `IMPORTS`. The base
/// modules are built in and used whenever `imported` has no table for them.
///
/// The build is best effort: names that cannot be resolved become `Unknown`
/// symbols and are reported in [`Build::warnings`].
pub fn build_symbol_table<T: ModuleTables + ?Sized>(
    module: &cst::Module,
    imported: &T,
    keep_documentation: bool,
) -> Build {
    build_with_tables(module, &WithBaseModules(imported), keep_documentation)
}

/// Like [`build_symbol_table`], without the fallback to the base modules.
pub(crate) fn build_with_tables<T: ModuleTables + ?Sized>(
    module: &cst::Module,
    tables: &T,
    keep_documentation: bool,
) -> Build {
    log::debug!("Building symbol table of {}", module.name);
    let mut builder = Builder::new(module, tables, keep_documentation);
    builder.collect_decls();
    builder.import_symbols();
    builder.local_symbols();
    let info = builder.module_info();
    log::debug!(
        "Built symbol table of {} with {} symbols and {} warnings",
        module.name,
        builder.table.len(),
        builder.warnings.len()
    );
    Build { table: builder.table, info, warnings: builder.warnings }
}

/// Arcs of the OID roots that have no declaration anywhere.
fn root_arc(name: &str) -> Option<u32> {
    match name {
        "ccitt" => Some(0),
        "iso" => Some(1),
        "joint-iso-ccitt" => Some(2),
        _ => None,
    }
}

struct Builder<'a, T: ?Sized> {
    module: &'a cst::Module,
    tables: &'a T,
    keep_documentation: bool,
    /// Local declarations by name; a later declaration replaces an earlier one.
    decls: HashMap<&'a str, &'a Decl>,
    table: SymbolTable,
    types: HashMap<String, ResolvedType>,
    types_in_progress: HashSet<String>,
    oids: HashMap<String, Option<Vec<u32>>>,
    oids_in_progress: HashSet<String>,
    /// Names already reported as unknown.
    reported: HashSet<String>,
    warnings: Vec<SymbolWarning>,
}

impl<'a, T: ModuleTables + ?Sized> Builder<'a, T> {
    fn new(module: &'a cst::Module, tables: &'a T, keep_documentation: bool) -> Self {
        Builder {
            module,
            tables,
            keep_documentation,
            decls: HashMap::default(),
            table: SymbolTable::new(module.name.id.clone()),
            types: HashMap::default(),
            types_in_progress: HashSet::default(),
            oids: HashMap::default(),
            oids_in_progress: HashSet::default(),
            reported: HashSet::default(),
            warnings: Vec::new(),
        }
    }

    fn name(&self) -> &'a str {
        self.module.name.as_str()
    }

    fn warn(&mut self, warning: SymbolWarning) {
        log::trace!("{}: {warning}", self.name());
        self.warnings.push(warning);
    }

    fn unknown_symbol(&mut self, name: &Ident) {
        if self.reported.insert(name.id.clone()) {
            self.warn(SymbolWarning::UnknownSymbol {
                name: name.id.clone(),
                module: self.name().to_owned(),
                span: Some(name.span.to_miette()),
            });
        }
    }

    fn collect_decls(&mut self) {
        let module = self.module;
        for decl in &module.decls {
            let name = decl.name();
            if self.decls.insert(name.as_str(), decl).is_some() {
                self.warn(SymbolWarning::DuplicateDefinition {
                    name: name.id.clone(),
                    span: Some(decl.span().to_miette()),
                });
            }
        }
    }

    // Imports
    //
    //

    fn import_symbols(&mut self) {
        let (module, tables) = (self.module, self.tables);
        for import in &module.imports {
            if import.module.as_str() == self.name() {
                for symbol in &import.symbols {
                    if !self.decls.contains_key(symbol.as_str()) {
                        self.unknown_symbol(symbol);
                    }
                }
                continue;
            }

            let Some(provider) = tables.table(import.module.as_str()) else {
                self.warn(SymbolWarning::UnavailableModule {
                    module: import.module.id.clone(),
                    span: Some(import.span.to_miette()),
                });
                for name in &import.symbols {
                    let symbol = Symbol::unknown(name.id.clone(), import.module.id.clone());
                    self.table.insert_import(symbol, import.module.as_str());
                }
                continue;
            };

            for name in &import.symbols {
                // A keyword of the notation itself, listed by some authors anyway.
                if name.as_str() == "BITS" {
                    continue;
                }
                let symbol = match provider.get(name.as_str()) {
                    Some(symbol) => symbol.clone(),
                    None => {
                        self.warn(SymbolWarning::UndeclaredImport {
                            name: name.id.clone(),
                            from: import.module.id.clone(),
                            span: Some(name.span.to_miette()),
                        });
                        Symbol::unknown(name.id.clone(), import.module.id.clone())
                    }
                };
                log::trace!("{} imports {} from {}", self.name(), name, import.module);
                self.table.insert_import(symbol, import.module.as_str());
            }
        }
    }

    /// A symbol of an implicitly required module, used without importing it.
    fn implicit_symbol(&self, name: &str) -> Option<Symbol> {
        IMPLICIT_IMPORTS
            .iter()
            .filter(|module| **module != self.name())
            .filter_map(|module| self.tables.table(module))
            .find_map(|table| table.get(name))
            .cloned()
    }

    // Local declarations
    //
    //

    fn local_symbols(&mut self) {
        let module = self.module;
        for decl in &module.decls {
            let winner = self.decls.get(decl.name().as_str()).copied();
            if !winner.is_some_and(|winner| std::ptr::eq(winner, decl)) {
                continue;
            }
            let symbol = self.local_symbol(decl);
            log::trace!("{} declares {} {}", self.name(), symbol.kind, symbol.name);
            self.table.imports.remove(&symbol.name);
            self.table.insert(symbol);
        }
    }

    fn local_symbol(&mut self, decl: &'a Decl) -> Symbol {
        let (kind, syntax, description) = match decl {
            Decl::Value(_) => (SymbolKind::Value, None, None),
            Decl::Type(d) => (SymbolKind::Type, Some(self.named_type(&d.name)), None),
            Decl::TextualConvention(d) => (
                SymbolKind::TextualConvention,
                Some(self.named_type(&d.name)),
                d.description.as_deref(),
            ),
            Decl::ModuleIdentity(d) => {
                (SymbolKind::ModuleIdentity, None, Some(d.description.as_str()))
            }
            Decl::ObjectIdentity(d) => (SymbolKind::ObjectIdentity, None, d.description.as_deref()),
            Decl::ObjectType(d) => {
                (SymbolKind::ObjectType, Some(self.syntax(&d.syntax)), d.description.as_deref())
            }
            Decl::Notification(d) => (SymbolKind::Notification, None, d.description.as_deref()),
            Decl::Trap(d) => (SymbolKind::Trap, None, d.description.as_deref()),
            Decl::ObjectGroup(d) => (SymbolKind::ObjectGroup, None, d.description.as_deref()),
            Decl::NotificationGroup(d) => {
                (SymbolKind::NotificationGroup, None, d.description.as_deref())
            }
            Decl::ModuleCompliance(d) => {
                (SymbolKind::ModuleCompliance, None, d.description.as_deref())
            }
            Decl::AgentCapabilities(d) => {
                (SymbolKind::AgentCapabilities, None, d.description.as_deref())
            }
            Decl::Macro(_) => (SymbolKind::Macro, None, None),
        };

        let kind = match (&kind, &syntax) {
            (SymbolKind::Type | SymbolKind::TextualConvention, Some(ty)) if ty.is_unknown() => {
                SymbolKind::Unknown
            }
            _ => kind,
        };
        let oid = if has_oid(decl) { self.local_oid(decl) } else { None };

        Symbol {
            name: decl.name().id.clone(),
            kind,
            module: self.name().to_owned(),
            syntax,
            oid,
            description: description.filter(|_| self.keep_documentation).map(str::to_owned),
        }
    }

    // Types
    //
    //

    fn syntax(&mut self, syntax: &cst::Syntax) -> ResolvedType {
        resolve_syntax(syntax, &mut |name| self.named_type(name))
    }

    fn named_type(&mut self, name: &Ident) -> ResolvedType {
        if let Some(ty) = self.types.get(name.as_str()) {
            return ty.clone();
        }
        match self.decls.get(name.as_str()).copied() {
            Some(Decl::Type(d)) => self.local_type(name, &d.syntax, None),
            Some(Decl::TextualConvention(d)) => {
                self.local_type(name, &d.syntax, d.display_hint.as_deref())
            }
            Some(_) => {
                self.unknown_symbol(name);
                ResolvedType::unknown()
            }
            None => self.external_type(name),
        }
    }

    fn local_type(
        &mut self,
        name: &Ident,
        syntax: &'a cst::Syntax,
        display_hint: Option<&str>,
    ) -> ResolvedType {
        if !self.types_in_progress.insert(name.id.clone()) {
            self.warn(SymbolWarning::TypeAliasCycle {
                name: name.id.clone(),
                span: Some(name.span.to_miette()),
            });
            return ResolvedType::unknown();
        }

        let mut ty = self.syntax(syntax);
        if is_base_module(self.name()) {
            if let Some(base) = BaseType::from_application_name(name.as_str()) {
                ty.base = base;
                ty.via.clear();
            }
        }
        if let Some(hint) = display_hint {
            ty.display_hint = Some(hint.to_owned());
        }

        self.types_in_progress.remove(name.as_str());
        self.types.insert(name.id.clone(), ty.clone());
        ty
    }

    fn external_type(&mut self, name: &Ident) -> ResolvedType {
        let symbol = match self.table.get(name.as_str()) {
            Some(symbol) => Some(symbol.clone()),
            None => self.implicit_symbol(name.as_str()),
        };
        match symbol {
            Some(Symbol {
                kind: SymbolKind::Type | SymbolKind::TextualConvention,
                syntax: Some(ty),
                ..
            }) => ty,
            // Already reported when it was imported.
            Some(Symbol { kind: SymbolKind::Unknown, .. }) => ResolvedType::unknown(),
            _ => {
                self.unknown_symbol(name);
                ResolvedType::unknown()
            }
        }
    }

    // OIDs
    //
    //

    fn named_oid(&mut self, name: &Ident) -> Option<Vec<u32>> {
        if let Some(oid) = self.oids.get(name.as_str()) {
            return oid.clone();
        }
        if let Some(decl) = self.decls.get(name.as_str()).copied() {
            if has_oid(decl) {
                return self.local_oid(decl);
            }
        }
        let external = match self.table.get(name.as_str()) {
            Some(symbol) => Some(symbol.oid.clone()),
            None => self.implicit_symbol(name.as_str()).map(|symbol| symbol.oid),
        };
        match external {
            Some(oid) => oid,
            None => match root_arc(name.as_str()) {
                Some(arc) => Some(vec![arc]),
                None => {
                    self.unknown_symbol(name);
                    None
                }
            },
        }
    }

    fn local_oid(&mut self, decl: &'a Decl) -> Option<Vec<u32>> {
        let name = decl.name();
        if !self.oids_in_progress.insert(name.id.clone()) {
            self.warn(SymbolWarning::OidCycle {
                name: name.id.clone(),
                span: Some(decl.span().to_miette()),
            });
            return None;
        }

        let oid = match decl {
            // SMIv1 traps live below `enterprise.0`.
            Decl::Trap(trap) => self.named_oid(&trap.enterprise).map(|mut oid| {
                oid.extend([0, trap.number]);
                oid
            }),
            _ => decl.oid().and_then(|oid| self.oid_value(oid)),
        };

        self.oids_in_progress.remove(name.as_str());
        self.oids.insert(name.id.clone(), oid.clone());
        oid
    }

    fn oid_value(&mut self, oid: &cst::Oid) -> Option<Vec<u32>> {
        let mut arcs = Vec::with_capacity(oid.components.len());
        for (position, component) in oid.components.iter().enumerate() {
            match component {
                OidComponent::Number(arc) | OidComponent::NamedNumber(_, arc) => arcs.push(*arc),
                OidComponent::Name(name) if position == 0 => arcs.extend(self.named_oid(name)?),
                OidComponent::Qualified { module, name } if position == 0 => {
                    arcs.extend(self.qualified_oid(module, name)?)
                }
                OidComponent::Name(name) | OidComponent::Qualified { name, .. } => {
                    self.unknown_symbol(name);
                    return None;
                }
            }
        }
        Some(arcs)
    }

    fn qualified_oid(&mut self, module: &Ident, name: &Ident) -> Option<Vec<u32>> {
        if module.as_str() == self.name() {
            return self.named_oid(name);
        }
        let oid = self
            .tables
            .table(module.as_str())
            .and_then(|table| table.get(name.as_str()))
            .map(|symbol| symbol.oid.clone());
        match oid {
            Some(oid) => oid,
            None => {
                self.unknown_symbol(name);
                None
            }
        }
    }

    // Module info
    //
    //

    fn module_info(&self) -> ModuleInfo {
        let mut imported: BTreeSet<String> =
            self.module.imports.iter().map(|import| import.module.id.clone()).collect();
        imported.extend(
            IMPLICIT_IMPORTS.iter().filter(|m| **m != self.name()).map(|m| (*m).to_owned()),
        );

        let identity = self.module.decls.iter().find_map(|decl| match decl {
            Decl::ModuleIdentity(identity) => Some(identity),
            _ => None,
        });

        ModuleInfo {
            name: self.name().to_owned(),
            identity: identity.map(|identity| identity.name.id.clone()),
            oid: identity
                .and_then(|identity| self.table.oid(identity.name.as_str()))
                .map(<[u32]>::to_vec),
            last_updated: identity.map(|identity| identity.last_updated.clone()),
            imported: imported.into_iter().collect(),
        }
    }
}

fn has_oid(decl: &Decl) -> bool {
    decl.oid().is_some() || matches!(decl, Decl::Trap(_))
}

#[cfg(test)]
mod build_tests {
    use std::collections::BTreeMap;

    use mibc_lang_parser::{DialectConfig, parse};

    use super::*;
    use crate::types::{Label, SyntaxKind, TypeConstraint};

    fn build(src: &str) -> Build {
        build_against(src, &BTreeMap::new())
    }

    fn build_against(src: &str, imported: &BTreeMap<String, SymbolTable>) -> Build {
        let module = parse(src, DialectConfig::smi_v1_relaxed()).unwrap().remove(0);
        build_symbol_table(&module, imported, true)
    }

    #[test]
    fn imported_lists_implicit_modules() {
        let build = build(
            "TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS
               MODULE-IDENTITY, OBJECT-TYPE, Unsigned32, mib-2 FROM SNMPv2-SMI
               SnmpAdminString FROM SNMP-FRAMEWORK-MIB;
             END",
        );
        assert_eq!(
            build.info.imported,
            vec!["SNMP-FRAMEWORK-MIB", "SNMPv2-CONF", "SNMPv2-SMI", "SNMPv2-TC"]
        );
        let unknown = build.table.get("SnmpAdminString").unwrap();
        assert_eq!(unknown.kind, SymbolKind::Unknown);
        assert_eq!(build.table.imported_from("SnmpAdminString"), Some("SNMP-FRAMEWORK-MIB"));
        assert_eq!(build.table.get("Unsigned32").unwrap().module, "SNMPv2-SMI");
        assert_eq!(build.table.oid("mib-2"), Some(&[1, 3, 6, 1, 2, 1][..]));
        assert!(matches!(
            build.warnings.as_slice(),
            [SymbolWarning::UnavailableModule { module, .. }] if module == "SNMP-FRAMEWORK-MIB"
        ));
    }

    #[test]
    fn alias_chains_accumulate_constraints() {
        let build = build(
            "TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS Integer32 FROM SNMPv2-SMI;
             Small ::= Integer32 (0..100)
             Smaller ::= Small (0..10)
             END",
        );
        let ty = build.table.get("Smaller").unwrap().syntax.clone().unwrap();
        assert_eq!(ty.base, BaseType::Integer32);
        assert_eq!(ty.via, vec!["Small", "Integer32"]);
        // Integer32's own range, then one per alias.
        assert_eq!(ty.constraints.len(), 3);
        assert!(ty.constraints.iter().all(|c| matches!(c, TypeConstraint::Range(_))));
        assert!(build.warnings.is_empty());
    }

    #[test]
    fn textual_conventions_and_labels() {
        let build = build(
            r#"TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS TEXTUAL-CONVENTION, DisplayString FROM SNMPv2-TC;
             Status ::= TEXTUAL-CONVENTION
                 DISPLAY-HINT "d"
                 STATUS current
                 DESCRIPTION "Status"
                 SYNTAX INTEGER { up(1), down(2) }
             Name ::= DisplayString (SIZE (0..32))
             END"#,
        );
        let status = build.table.get("Status").unwrap();
        assert_eq!(status.kind, SymbolKind::TextualConvention);
        assert_eq!(status.description.as_deref(), Some("Status"));
        let ty = status.syntax.as_ref().unwrap();
        assert_eq!(ty.display_hint.as_deref(), Some("d"));
        assert_eq!(ty.labels, vec![
            Label { name: "up".to_owned(), value: 1 },
            Label { name: "down".to_owned(), value: 2 },
        ]);

        let name = build.table.get("Name").unwrap().syntax.clone().unwrap();
        assert_eq!(name.syntax_kind(), SyntaxKind::OctetString);
        assert_eq!(name.display_hint.as_deref(), Some("255a"));
        assert_eq!(name.via, vec!["DisplayString"]);
    }

    #[test]
    fn unresolvable_types_degrade() {
        let build = build(
            "TEST-MIB DEFINITIONS ::= BEGIN
             Broken ::= NoSuchType
             Fine ::= INTEGER
             END",
        );
        assert_eq!(build.table.get("Broken").unwrap().kind, SymbolKind::Unknown);
        assert_eq!(build.table.get("Fine").unwrap().kind, SymbolKind::Type);
        assert!(matches!(
            build.warnings.as_slice(),
            [SymbolWarning::UnknownSymbol { name, .. }] if name == "NoSuchType"
        ));
    }

    #[test]
    fn type_alias_cycle_terminates() {
        let build = build(
            "TEST-MIB DEFINITIONS ::= BEGIN
             A ::= B
             B ::= A
             END",
        );
        assert_eq!(build.table.get("A").unwrap().kind, SymbolKind::Unknown);
        assert_eq!(build.table.get("B").unwrap().kind, SymbolKind::Unknown);
        assert!(build.warnings.iter().any(|w| matches!(w, SymbolWarning::TypeAliasCycle { .. })));
    }

    #[test]
    fn oids_resolve_forward_references() {
        let build = build(
            "TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS enterprises FROM SNMPv2-SMI;
             testObjects OBJECT IDENTIFIER ::= { testRoot 1 }
             testRoot OBJECT IDENTIFIER ::= { enterprises 9999 }
             absolute OBJECT IDENTIFIER ::= { iso org(3) 6 }
             qualified OBJECT IDENTIFIER ::= { SNMPv2-SMI.mib-2 99 }
             END",
        );
        assert_eq!(build.table.oid("testObjects"), Some(&[1, 3, 6, 1, 4, 1, 9999, 1][..]));
        assert_eq!(build.table.oid("absolute"), Some(&[1, 3, 6][..]));
        assert_eq!(build.table.oid("qualified"), Some(&[1, 3, 6, 1, 2, 1, 99][..]));
        assert!(build.warnings.is_empty());
    }

    #[test]
    fn oid_cycle_terminates() {
        let build = build(
            "TEST-MIB DEFINITIONS ::= BEGIN
             a OBJECT IDENTIFIER ::= { b 1 }
             b OBJECT IDENTIFIER ::= { a 1 }
             END",
        );
        assert_eq!(build.table.oid("a"), None);
        assert_eq!(build.table.oid("b"), None);
        assert!(build.warnings.iter().any(|w| matches!(w, SymbolWarning::OidCycle { .. })));
    }

    #[test]
    fn duplicate_definition_later_wins() {
        let build = build(
            "TEST-MIB DEFINITIONS ::= BEGIN
             dup OBJECT IDENTIFIER ::= { 1 1 }
             dup OBJECT IDENTIFIER ::= { 1 2 }
             END",
        );
        assert_eq!(build.table.oid("dup"), Some(&[1, 2][..]));
        assert!(matches!(
            build.warnings.as_slice(),
            [SymbolWarning::DuplicateDefinition { name, .. }] if name == "dup"
        ));
    }

    #[test]
    fn symbols_from_supplied_tables() {
        let other = build(
            "OTHER-MIB DEFINITIONS ::= BEGIN
             IMPORTS enterprises FROM SNMPv2-SMI;
             Percent ::= INTEGER (0..100)
             otherRoot OBJECT IDENTIFIER ::= { enterprises 1 }
             END",
        );
        let mut tables = BTreeMap::new();
        tables.insert("OTHER-MIB".to_owned(), other.table);

        let build = build_against(
            "TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS Percent, otherRoot, missing FROM OTHER-MIB;
             Load ::= Percent
             node OBJECT IDENTIFIER ::= { otherRoot 7 }
             END",
            &tables,
        );
        let load = build.table.get("Load").unwrap().syntax.clone().unwrap();
        assert_eq!(load.base, BaseType::Integer);
        assert_eq!(build.table.get("Percent").unwrap().module, "OTHER-MIB");
        assert_eq!(build.table.oid("node"), Some(&[1, 3, 6, 1, 4, 1, 1, 7][..]));
        assert!(matches!(
            build.warnings.as_slice(),
            [SymbolWarning::UndeclaredImport { name, from, .. }]
                if name == "missing" && from == "OTHER-MIB"
        ));
    }

    #[test]
    fn self_import() {
        let build = build(
            "Test-MIB DEFINITIONS ::= BEGIN
             IMPORTS someObject FROM Test-MIB;
             END",
        );
        assert_eq!(build.info.imported, vec!["SNMPv2-CONF", "SNMPv2-SMI", "SNMPv2-TC", "Test-MIB"]);
        assert!(!build.table.contains("someObject"));
    }

    #[test]
    fn module_identity_info() {
        let build = build(
            r#"TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS MODULE-IDENTITY, enterprises FROM SNMPv2-SMI;
             testMIB MODULE-IDENTITY
                 LAST-UPDATED "202001010000Z"
                 ORGANIZATION "Org"
                 CONTACT-INFO "Contact"
                 DESCRIPTION  "Test"
                 ::= { enterprises 4242 }
             END"#,
        );
        assert_eq!(build.info.identity.as_deref(), Some("testMIB"));
        assert_eq!(build.info.oid, Some(vec![1, 3, 6, 1, 4, 1, 4242]));
        assert_eq!(build.info.last_updated.as_deref(), Some("202001010000Z"));
    }

    #[test]
    fn trap_oids_hang_below_enterprise_zero() {
        let build = build(
            "TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS enterprises FROM RFC1155-SMI
                     TRAP-TYPE FROM RFC-1215;
             acme OBJECT IDENTIFIER ::= { enterprises 42 }
             linkFlap TRAP-TYPE ENTERPRISE acme ::= 3
             END",
        );
        assert_eq!(build.table.oid("linkFlap"), Some(&[1, 3, 6, 1, 4, 1, 42, 0, 3][..]));
        assert_eq!(build.table.get("TRAP-TYPE").unwrap().kind, SymbolKind::Macro);
    }

    #[test]
    fn documentation_can_be_dropped() {
        let module = parse(
            r#"TEST-MIB DEFINITIONS ::= BEGIN
             testObject OBJECT-IDENTITY STATUS current DESCRIPTION "Text" ::= { 1 3 }
             END"#,
            DialectConfig::default(),
        )
        .unwrap()
        .remove(0);
        let build = build_symbol_table(&module, &BTreeMap::<String, SymbolTable>::new(), false);
        let symbol = build.table.get("testObject").unwrap();
        assert_eq!(symbol.kind, SymbolKind::ObjectIdentity);
        assert_eq!(symbol.oid, Some(vec![1, 3]));
        assert_eq!(symbol.description, None);
    }
}
