use num_bigint::BigInt;

use mibc_lang_parser::cst::*;
use mibc_lang_parser::{DialectConfig, ParseError, parse};

const ALL_DIALECTS: [DialectConfig; 3] =
    [DialectConfig::smi_v2(), DialectConfig::smi_v1(), DialectConfig::smi_v1_relaxed()];

fn parse_one(src: &str, dialect: DialectConfig) -> Module {
    let mut modules = parse(src, dialect).unwrap();
    assert_eq!(modules.len(), 1);
    modules.remove(0)
}

fn single_decl(src: &str, dialect: DialectConfig) -> Decl {
    let mut module = parse_one(src, dialect);
    assert_eq!(module.decls.len(), 1);
    module.decls.remove(0)
}

fn object_type_defval(defval: &str) -> Literal {
    let src = format!(
        "TEST-MIB DEFINITIONS ::= BEGIN
         testObject OBJECT-TYPE
             SYNTAX Integer32
             MAX-ACCESS read-only
             STATUS current
             DESCRIPTION \"Test object\"
             DEFVAL {defval}
             ::= {{ 1 3 }}
         END"
    );
    match single_decl(&src, DialectConfig::default()) {
        Decl::ObjectType(ot) => ot.defval.unwrap().value,
        other => panic!("expected an OBJECT-TYPE, got {other:?}"),
    }
}

#[test]
fn empty_module_parses_in_every_dialect() {
    for dialect in ALL_DIALECTS {
        let module = parse_one("NAME DEFINITIONS ::= BEGIN END", dialect);
        assert_eq!(module.name.as_str(), "NAME");
        assert!(module.imports.is_empty());
        assert!(module.decls.is_empty());
    }
}

#[test]
fn source_without_modules() {
    assert!(parse("-- nothing here\n", DialectConfig::default()).unwrap().is_empty());
}

#[test]
fn several_modules_in_one_source() {
    let src = "A-MIB DEFINITIONS ::= BEGIN END\nB-MIB DEFINITIONS ::= BEGIN END";
    let names: Vec<_> = parse(src, DialectConfig::default())
        .unwrap()
        .into_iter()
        .map(|m| m.name.id)
        .collect();
    assert_eq!(names, vec!["A-MIB", "B-MIB"]);
}

#[test]
fn imports_with_macro_names() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        IMPORTS
          MODULE-IDENTITY, OBJECT-TYPE, Integer32 FROM SNMPv2-SMI
          TEXTUAL-CONVENTION FROM SNMPv2-TC;
        END";
    let module = parse_one(src, DialectConfig::default());
    assert_eq!(module.imports.len(), 2);
    assert_eq!(module.imports[0].module.as_str(), "SNMPv2-SMI");
    let symbols: Vec<_> = module.imports[0].symbols.iter().map(Ident::as_str).collect();
    assert_eq!(symbols, vec!["MODULE-IDENTITY", "OBJECT-TYPE", "Integer32"]);
    assert_eq!(module.imports[1].symbols[0].as_str(), "TEXTUAL-CONVENTION");
}

#[test]
fn undefined_names_are_not_a_syntax_problem() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        IMPORTS nothing FROM NOWHERE-MIB;
        Foo ::= Bar
        baz OBJECT IDENTIFIER ::= { qux 1 }
        END";
    assert_eq!(parse_one(src, DialectConfig::default()).decls.len(), 2);
}

#[test]
fn type_declarations() {
    let src = r#"TEST-MIB DEFINITIONS ::= BEGIN
    IMPORTS
      IpAddress, Counter32, Gauge32, TimeTicks, Opaque, Integer32, Unsigned32, Counter64
        FROM SNMPv2-SMI
      TEXTUAL-CONVENTION
        FROM SNMPv2-TC;

    -- simple types
    TestTypeInteger ::= INTEGER
    TestTypeOctetString ::= OCTET STRING
    TestTypeObjectIdentifier ::= OBJECT IDENTIFIER

    -- application types
    TestTypeIpAddress ::= IpAddress
    TestTypeCounter64 ::= Counter64

    -- constrained subtypes
    TestTypeEnum ::= INTEGER {
                        noResponse(-1),
                        noError(0),
                        tooBig(1)
                    }
    TestTypeSizeRangeConstraint ::= OCTET STRING (SIZE (0..255))
    TestTypeSizeConstraint ::= OCTET STRING (SIZE (8 | 11))
    TestTypeRangeConstraint ::= INTEGER (0..2)
    TestTypeSingleValueConstraint ::= INTEGER (0|2|4)

    TestTypeBits ::= BITS { sunday(0), monday(1), tuesday(2) }

    Test-Textual-Convention ::= TEXTUAL-CONVENTION
        DISPLAY-HINT "1x:"
        STATUS       current
        DESCRIPTION
                "Test TC"
        REFERENCE
                "Test reference"
        SYNTAX       OCTET STRING
    END
    "#;
    let module = parse_one(src, DialectConfig::default());
    let names: Vec<_> = module.decls.iter().map(|d| d.name().as_str()).collect();
    assert_eq!(names.len(), 12);
    assert_eq!(names[11], "Test-Textual-Convention");

    let Decl::Type(enum_type) = &module.decls[5] else { panic!("expected a type") };
    let Syntax::Labelled { base, labels } = &enum_type.syntax else { panic!("expected labels") };
    assert_eq!(**base, Syntax::Integer);
    assert_eq!(labels[0].name.as_str(), "noResponse");
    assert_eq!(labels[0].value, -1);

    let Decl::Type(size) = &module.decls[7] else { panic!("expected a type") };
    let Syntax::Constrained { constraint: Constraint::Size(ranges), .. } = &size.syntax else {
        panic!("expected a size constraint")
    };
    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[1], Range { lower: Bound::Value(BigInt::from(11)), upper: None });

    let Decl::TextualConvention(tc) = &module.decls[11] else { panic!("expected a TC") };
    assert_eq!(tc.display_hint.as_deref(), Some("1x:"));
    assert_eq!(tc.status, Status::Current);
    assert_eq!(tc.reference.as_deref(), Some("Test reference"));
    assert_eq!(tc.syntax, Syntax::OctetString);
}

#[test]
fn defval_forms() {
    assert_eq!(object_type_defval("{ 123456 }"), Literal::Integer(BigInt::from(123456)));
    assert_eq!(object_type_defval("{ -123 }"), Literal::Integer(BigInt::from(-123)));
    assert_eq!(object_type_defval("{ 'abCD0e'H }"), Literal::HexString("abCD0e".to_owned()));
    assert_eq!(object_type_defval("{ '11011100'B }"), Literal::BinaryString("11011100".to_owned()));
    assert_eq!(object_type_defval("{ \"0\" }"), Literal::QuotedText("0".to_owned()));
    assert_eq!(
        object_type_defval("{ enable }"),
        Literal::SymbolRef(Ident::synthetic("enable"))
    );
    assert_eq!(object_type_defval("{ { } }"), Literal::BracketedSet(vec![]));
    assert_eq!(
        object_type_defval("{ { present, absent } }"),
        Literal::BracketedSet(vec![
            Literal::SymbolRef(Ident::synthetic("present")),
            Literal::SymbolRef(Ident::synthetic("absent")),
        ])
    );
    assert_eq!(
        object_type_defval("{ { 0 0 } }"),
        Literal::BracketedSet(vec![
            Literal::Integer(BigInt::from(0)),
            Literal::Integer(BigInt::from(0)),
        ])
    );
}

#[test]
fn quoted_defval_keeps_backslashes_and_newlines() {
    let literal = object_type_defval("{ \"\\ntest\nvalue\\\" }");
    assert_eq!(literal, Literal::QuotedText("\\ntest\nvalue\\".to_owned()));
}

#[test]
fn object_type_clauses() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        ifEntry OBJECT-TYPE
            SYNTAX      IfEntry
            MAX-ACCESS  not-accessible
            STATUS      current
            DESCRIPTION \"An entry\"
            INDEX       { IMPLIED ifIndex }
            ::= { ifTable 1 }
        END";
    let Decl::ObjectType(ot) = single_decl(src, DialectConfig::default()) else {
        panic!("expected an OBJECT-TYPE")
    };
    assert_eq!(ot.access, Some(Access::NotAccessible));
    let Some(IndexClause::Index(items)) = ot.index else { panic!("expected INDEX") };
    assert!(matches!(
        &items[0],
        IndexItem::Object { implied: true, name } if name.as_str() == "ifIndex"
    ));
    assert_eq!(
        ot.oid.components,
        vec![OidComponent::Name(Ident::synthetic("ifTable")), OidComponent::Number(1)]
    );
}

#[test]
fn module_identity_with_revisions() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        testMIB MODULE-IDENTITY
            LAST-UPDATED \"200001010000Z\"
            ORGANIZATION \"Org\"
            CONTACT-INFO \"Contact\"
            DESCRIPTION  \"Module\"
            REVISION     \"200001010000Z\"
            DESCRIPTION  \"First\"
            ::= { iso org(3) dod(6) 1 }
        END";
    let Decl::ModuleIdentity(identity) = single_decl(src, DialectConfig::default()) else {
        panic!("expected a MODULE-IDENTITY")
    };
    assert_eq!(identity.last_updated, "200001010000Z");
    assert_eq!(identity.description, "Module");
    assert_eq!(identity.revisions.len(), 1);
    assert_eq!(identity.oid.components[1], OidComponent::NamedNumber(Ident::synthetic("org"), 3));
}

#[test]
fn conformance_macros() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        testGroup OBJECT-GROUP
            OBJECTS { a, b }
            STATUS current
            DESCRIPTION \"Group\"
            ::= { testConformance 1 }
        testCompliance MODULE-COMPLIANCE
            STATUS current
            DESCRIPTION \"Compliance\"
            MODULE
                MANDATORY-GROUPS { testGroup }
                GROUP testOptional
                DESCRIPTION \"Optional\"
                OBJECT a
                MIN-ACCESS read-only
                DESCRIPTION \"Read only is fine\"
            MODULE IF-MIB
                MANDATORY-GROUPS { ifGeneralGroup }
            ::= { testConformance 2 }
        testCaps AGENT-CAPABILITIES
            PRODUCT-RELEASE \"1.0\"
            STATUS current
            DESCRIPTION \"Caps\"
            SUPPORTS TEST-MIB
            INCLUDES { testGroup }
            VARIATION a
                ACCESS read-only
                DEFVAL { 5 }
                DESCRIPTION \"Variation\"
            ::= { testConformance 3 }
        END";
    let module = parse_one(src, DialectConfig::default());
    let Decl::ModuleCompliance(compliance) = &module.decls[1] else { panic!() };
    assert_eq!(compliance.modules.len(), 2);
    assert!(compliance.modules[0].module.is_none());
    assert_eq!(compliance.modules[0].objects[0].min_access, Some(Access::ReadOnly));
    assert_eq!(compliance.modules[1].module.as_ref().map(Ident::as_str), Some("IF-MIB"));
    let Decl::AgentCapabilities(caps) = &module.decls[2] else { panic!() };
    assert_eq!(caps.supports[0].variations[0].access, Some(Access::ReadOnly));
}

#[test]
fn macro_definitions_are_recorded() {
    let src = "SNMPv2-SMI DEFINITIONS ::= BEGIN
        OBJECT-TYPE MACRO ::=
        BEGIN
            TYPE NOTATION ::= \"SYNTAX\" Syntax
            VALUE NOTATION ::= value(VALUE ObjectName)
        END
        org OBJECT IDENTIFIER ::= { iso 3 }
        END";
    let module = parse_one(src, DialectConfig::default());
    assert!(matches!(&module.decls[0], Decl::Macro(m) if m.name.as_str() == "OBJECT-TYPE"));
    assert!(matches!(&module.decls[1], Decl::Value(_)));
}

// Dialects
//
//

#[test]
fn trailing_import_comma() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN IMPORTS a, b, FROM X-MIB; END";
    let err = parse(src, DialectConfig::smi_v2()).unwrap_err();
    assert!(matches!(err, ParseError::Dialect { .. }));
    assert_eq!(parse_one(src, DialectConfig::smi_v1_relaxed()).imports[0].symbols.len(), 2);
}

#[test]
fn mixed_separators() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        IMPORTS a b FROM X-MIB;
        T ::= INTEGER { one(1) two(2) }
        END";
    assert!(parse(src, DialectConfig::smi_v1()).is_err());
    let module = parse_one(src, DialectConfig::smi_v1_relaxed());
    assert_eq!(module.imports[0].symbols.len(), 2);
}

#[test]
fn trailing_sequence_comma() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        Entry ::= SEQUENCE { a Integer32, b OCTET STRING, }
        END";
    assert!(parse(src, DialectConfig::smi_v2()).is_err());
    let Decl::Type(entry) = single_decl(src, DialectConfig::smi_v1_relaxed()) else { panic!() };
    assert!(matches!(entry.syntax, Syntax::Sequence(ref fields) if fields.len() == 2));
}

#[test]
fn empty_sequence_needs_no_cells() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN Entry ::= SEQUENCE { } END";
    assert!(parse(src, DialectConfig::smi_v1()).is_err());
    assert!(parse(src, DialectConfig::smi_v1_relaxed()).is_ok());
}

#[test]
fn smi_v1_keywords() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        sysDescr OBJECT-TYPE
            SYNTAX  DisplayString (SIZE (0..255))
            ACCESS  read-only
            STATUS  mandatory
            ::= { system 1 }
        coldStart TRAP-TYPE
            ENTERPRISE snmp
            VARIABLES { sysDescr }
            ::= 0
        END";
    assert!(matches!(parse(src, DialectConfig::smi_v2()), Err(ParseError::Dialect { .. })));
    let module = parse_one(src, DialectConfig::smi_v1());
    let Decl::ObjectType(ot) = &module.decls[0] else { panic!() };
    assert_eq!(ot.status, Status::Mandatory);
    let Decl::Trap(trap) = &module.decls[1] else { panic!() };
    assert_eq!(trap.enterprise.as_str(), "snmp");
    assert_eq!(trap.number, 0);
}

#[test]
fn enterprise_braces_in_trap() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        coldStart TRAP-TYPE ENTERPRISE { snmp } ::= 0
        END";
    assert!(parse(src, DialectConfig::smi_v1()).is_err());
    assert!(parse(src, DialectConfig::smi_v1_relaxed()).is_ok());
}

#[test]
fn index_types() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        entry OBJECT-TYPE
            SYNTAX Entry
            MAX-ACCESS not-accessible
            STATUS current
            INDEX { INTEGER }
            ::= { table 1 }
        END";
    assert!(parse(src, DialectConfig::smi_v2()).is_err());
    let Decl::ObjectType(ot) = single_decl(src, DialectConfig::smi_v1()) else { panic!() };
    assert!(matches!(
        ot.index,
        Some(IndexClause::Index(ref items)) if matches!(items[0], IndexItem::Type(Syntax::Integer))
    ));
}

#[test]
fn identifier_case_folding() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN
        TestObject OBJECT IDENTIFIER ::= { iso 3 }
        END";
    assert!(matches!(parse(src, DialectConfig::smi_v1()), Err(ParseError::Dialect { .. })));
    let decl = single_decl(src, DialectConfig::smi_v1_relaxed());
    assert_eq!(decl.name().as_str(), "TestObject");
}

// Errors
//
//

#[test]
fn error_location() {
    let src = "TEST-MIB DEFINITIONS ::= BEGIN\n  foo BAR\nEND";
    let err = parse(src, DialectConfig::default()).unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(err.column(), 3);
}

#[test]
fn unexpected_end_of_input() {
    let err = parse("TEST-MIB DEFINITIONS ::= BEGIN", DialectConfig::default()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn invalid_character() {
    let err =
        parse("TEST-MIB DEFINITIONS ::= BEGIN\n @ END", DialectConfig::default()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidToken { .. }));
    assert_eq!((err.line(), err.column()), (2, 2));
}
