//! The modules every MIB builds on.
//!
//! Their definitions are kept here as (abridged) MIB text and run through the
//! same parser and symbol table builder as any other module. Application types
//! declared here become built-in types of their own instead of aliases of
//! `INTEGER` or `OCTET STRING`.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use mibc_lang_parser::{DialectConfig, parse};

use crate::symbol_table::SymbolTable;
use crate::symbol_table::build::build_with_tables;

/// Names of the built-in base modules, in build order.
pub const BASE_MODULES: [&str; 7] = [
    "SNMPv2-SMI",
    "SNMPv2-TC",
    "SNMPv2-CONF",
    "RFC1155-SMI",
    "RFC1065-SMI",
    "RFC-1212",
    "RFC-1215",
];

pub fn is_base_module(name: &str) -> bool {
    BASE_MODULES.contains(&name)
}

/// The symbol table of a built-in base module.
pub fn base_table(name: &str) -> Option<&'static SymbolTable> {
    static TABLES: OnceLock<BTreeMap<String, SymbolTable>> = OnceLock::new();
    TABLES.get_or_init(build_base_tables).get(name)
}

fn build_base_tables() -> BTreeMap<String, SymbolTable> {
    let mut tables = BTreeMap::new();
    for name in BASE_MODULES {
        let source = base_source(name);
        let modules = match parse(&source, DialectConfig::smi_v1_relaxed()) {
            Ok(modules) => modules,
            Err(err) => {
                log::error!("Built-in module {name} does not parse: {err}");
                continue;
            }
        };
        for module in modules {
            let build = build_with_tables(&module, &tables, true);
            for warning in &build.warnings {
                log::error!("Built-in module {name}: {warning}");
            }
            tables.insert(module.name.id.clone(), build.table);
        }
    }
    tables
}

fn base_source(name: &str) -> String {
    match name {
        "SNMPv2-SMI" => SNMPV2_SMI.to_owned(),
        "SNMPv2-TC" => SNMPV2_TC.to_owned(),
        "SNMPv2-CONF" => SNMPV2_CONF.to_owned(),
        "RFC1155-SMI" | "RFC1065-SMI" => {
            format!("{name} DEFINITIONS ::= BEGIN\n{RFC1155_SMI_BODY}\nEND\n")
        }
        "RFC-1212" => {
            "RFC-1212 DEFINITIONS ::= BEGIN\nOBJECT-TYPE MACRO ::= BEGIN END\nEND\n".to_owned()
        }
        "RFC-1215" => {
            "RFC-1215 DEFINITIONS ::= BEGIN\nTRAP-TYPE MACRO ::= BEGIN END\nEND\n".to_owned()
        }
        _ => String::new(),
    }
}

const SNMPV2_SMI: &str = r#"
SNMPv2-SMI DEFINITIONS ::= BEGIN

ccitt           OBJECT IDENTIFIER ::= { 0 }
iso             OBJECT IDENTIFIER ::= { 1 }
joint-iso-ccitt OBJECT IDENTIFIER ::= { 2 }
org             OBJECT IDENTIFIER ::= { iso 3 }
dod             OBJECT IDENTIFIER ::= { org 6 }
internet        OBJECT IDENTIFIER ::= { dod 1 }
directory       OBJECT IDENTIFIER ::= { internet 1 }
mgmt            OBJECT IDENTIFIER ::= { internet 2 }
mib-2           OBJECT IDENTIFIER ::= { mgmt 1 }
transmission    OBJECT IDENTIFIER ::= { mib-2 10 }
experimental    OBJECT IDENTIFIER ::= { internet 3 }
private         OBJECT IDENTIFIER ::= { internet 4 }
enterprises     OBJECT IDENTIFIER ::= { private 1 }
security        OBJECT IDENTIFIER ::= { internet 5 }
snmpV2          OBJECT IDENTIFIER ::= { internet 6 }
snmpDomains     OBJECT IDENTIFIER ::= { snmpV2 1 }
snmpProxys      OBJECT IDENTIFIER ::= { snmpV2 2 }
snmpModules     OBJECT IDENTIFIER ::= { snmpV2 3 }

MODULE-IDENTITY   MACRO ::= BEGIN END
OBJECT-IDENTITY   MACRO ::= BEGIN END
OBJECT-TYPE       MACRO ::= BEGIN END
NOTIFICATION-TYPE MACRO ::= BEGIN END

ObjectName       ::= OBJECT IDENTIFIER
NotificationName ::= OBJECT IDENTIFIER

Integer32  ::= INTEGER (-2147483648..2147483647)
IpAddress  ::= [APPLICATION 0] IMPLICIT OCTET STRING (SIZE (4))
Counter32  ::= [APPLICATION 1] IMPLICIT INTEGER (0..4294967295)
Gauge32    ::= [APPLICATION 2] IMPLICIT INTEGER (0..4294967295)
Unsigned32 ::= [APPLICATION 2] IMPLICIT INTEGER (0..4294967295)
TimeTicks  ::= [APPLICATION 3] IMPLICIT INTEGER (0..4294967295)
Opaque     ::= [APPLICATION 4] IMPLICIT OCTET STRING
Counter64  ::= [APPLICATION 6] IMPLICIT INTEGER (0..18446744073709551615)
ExtUTCTime ::= OCTET STRING (SIZE (11 | 13))

zeroDotZero OBJECT-IDENTITY
    STATUS      current
    DESCRIPTION "A value used for null identifiers."
    ::= { 0 0 }

END
"#;

const SNMPV2_TC: &str = r#"
SNMPv2-TC DEFINITIONS ::= BEGIN

IMPORTS
    TimeTicks FROM SNMPv2-SMI;

TEXTUAL-CONVENTION MACRO ::= BEGIN END

DisplayString ::= TEXTUAL-CONVENTION
    DISPLAY-HINT "255a"
    STATUS       current
    SYNTAX       OCTET STRING (SIZE (0..255))

PhysAddress ::= TEXTUAL-CONVENTION
    DISPLAY-HINT "1x:"
    STATUS       current
    SYNTAX       OCTET STRING

MacAddress ::= TEXTUAL-CONVENTION
    DISPLAY-HINT "1x:"
    STATUS       current
    SYNTAX       OCTET STRING (SIZE (6))

TruthValue ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       INTEGER { true(1), false(2) }

TestAndIncr ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       INTEGER (0..2147483647)

AutonomousType ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       OBJECT IDENTIFIER

InstancePointer ::= TEXTUAL-CONVENTION
    STATUS       obsolete
    SYNTAX       OBJECT IDENTIFIER

VariablePointer ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       OBJECT IDENTIFIER

RowPointer ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       OBJECT IDENTIFIER

RowStatus ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       INTEGER {
                     active(1),
                     notInService(2),
                     notReady(3),
                     createAndGo(4),
                     createAndWait(5),
                     destroy(6)
                 }

TimeStamp ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       TimeTicks

TimeInterval ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       INTEGER (0..2147483647)

DateAndTime ::= TEXTUAL-CONVENTION
    DISPLAY-HINT "2d-1d-1d,1d:1d:1d.1d,1a1d:1d"
    STATUS       current
    SYNTAX       OCTET STRING (SIZE (8 | 11))

StorageType ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       INTEGER {
                     other(1),
                     volatile(2),
                     nonVolatile(3),
                     permanent(4),
                     readOnly(5)
                 }

TDomain ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       OBJECT IDENTIFIER

TAddress ::= TEXTUAL-CONVENTION
    STATUS       current
    SYNTAX       OCTET STRING (SIZE (1..255))

END
"#;

const SNMPV2_CONF: &str = r#"
SNMPv2-CONF DEFINITIONS ::= BEGIN

OBJECT-GROUP       MACRO ::= BEGIN END
NOTIFICATION-GROUP MACRO ::= BEGIN END
MODULE-COMPLIANCE  MACRO ::= BEGIN END
AGENT-CAPABILITIES MACRO ::= BEGIN END

END
"#;

const RFC1155_SMI_BODY: &str = r#"
internet     OBJECT IDENTIFIER ::= { iso org(3) dod(6) 1 }
directory    OBJECT IDENTIFIER ::= { internet 1 }
mgmt         OBJECT IDENTIFIER ::= { internet 2 }
experimental OBJECT IDENTIFIER ::= { internet 3 }
private      OBJECT IDENTIFIER ::= { internet 4 }
enterprises  OBJECT IDENTIFIER ::= { private 1 }

OBJECT-TYPE MACRO ::= BEGIN END

ObjectName     ::= OBJECT IDENTIFIER
NetworkAddress ::= CHOICE { internet IpAddress }
IpAddress      ::= [APPLICATION 0] IMPLICIT OCTET STRING (SIZE (4))
Counter        ::= [APPLICATION 1] IMPLICIT INTEGER (0..4294967295)
Gauge          ::= [APPLICATION 2] IMPLICIT INTEGER (0..4294967295)
TimeTicks      ::= [APPLICATION 3] IMPLICIT INTEGER (0..4294967295)
Opaque         ::= [APPLICATION 4] IMPLICIT OCTET STRING
"#;
