use std::fmt;
use std::str::FromStr;

/// Grammar tolerances selected for one parse run.
///
/// All switches default to `false`, which is strict SMIv2. The three presets
/// mirror the usual ways MIBs found in the wild deviate from the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialectConfig {
    /// `ACCESS`, `TRAP-TYPE`, `ENTERPRISE`, `VARIABLES` and the `mandatory`/`optional`
    /// status values.
    pub smi_v1_keywords: bool,
    /// Built-in types (`INTEGER`, `OCTET STRING`, ...) as `INDEX` items.
    pub index_types: bool,
    /// `a, b, FROM M` in `IMPORTS`.
    pub trailing_import_comma: bool,
    /// `SEQUENCE { a T, b U, }`.
    pub trailing_sequence_comma: bool,
    /// Whitespace in place of a comma between list items.
    pub mixed_separators: bool,
    /// Identifier capitalization no longer tells type references from value references.
    pub fold_identifier_case: bool,
    /// `ENTERPRISE { name }` in `TRAP-TYPE`.
    pub enterprise_braces_in_trap: bool,
    /// Field-less `SEQUENCE { }`.
    pub no_cells: bool,
}

impl DialectConfig {
    /// Strict SMIv2.
    pub const fn smi_v2() -> Self {
        DialectConfig {
            smi_v1_keywords: false,
            index_types: false,
            trailing_import_comma: false,
            trailing_sequence_comma: false,
            mixed_separators: false,
            fold_identifier_case: false,
            enterprise_braces_in_trap: false,
            no_cells: false,
        }
    }

    /// SMIv2 plus the SMIv1 keyword set and type-only `INDEX` items.
    pub const fn smi_v1() -> Self {
        DialectConfig { smi_v1_keywords: true, index_types: true, ..Self::smi_v2() }
    }

    /// Everything `smi_v1` accepts plus the common authoring mistakes.
    pub const fn smi_v1_relaxed() -> Self {
        DialectConfig {
            trailing_import_comma: true,
            trailing_sequence_comma: true,
            mixed_separators: true,
            fold_identifier_case: true,
            enterprise_braces_in_trap: true,
            no_cells: true,
            ..Self::smi_v1()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialect(pub String);

impl fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dialect {:?}, expected one of smiv2, smiv1, smiv1-relaxed", self.0)
    }
}

impl std::error::Error for UnknownDialect {}

impl FromStr for DialectConfig {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "smiv2" => Ok(DialectConfig::smi_v2()),
            "smiv1" => Ok(DialectConfig::smi_v1()),
            "smiv1-relaxed" => Ok(DialectConfig::smi_v1_relaxed()),
            _ => Err(UnknownDialect(s.to_owned())),
        }
    }
}
