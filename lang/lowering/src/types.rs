use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use mibc_lang_parser::cst;

/// The built-in types every chain of type references ends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Integer,
    OctetString,
    ObjectIdentifier,
    Bits,
    Integer32,
    Unsigned32,
    Counter32,
    Counter64,
    Gauge32,
    TimeTicks,
    IpAddress,
    Opaque,
    Counter,
    Gauge,
    NetworkAddress,
    Sequence,
    SequenceOf,
    Choice,
    /// The chain could not be followed to a built-in type.
    Unknown,
}

impl BaseType {
    /// Application types are declared by name in the base modules.
    pub fn from_application_name(name: &str) -> Option<BaseType> {
        let base = match name {
            "Integer32" => BaseType::Integer32,
            "Unsigned32" => BaseType::Unsigned32,
            "Counter32" => BaseType::Counter32,
            "Counter64" => BaseType::Counter64,
            "Gauge32" => BaseType::Gauge32,
            "TimeTicks" => BaseType::TimeTicks,
            "IpAddress" => BaseType::IpAddress,
            "Opaque" => BaseType::Opaque,
            "Counter" => BaseType::Counter,
            "Gauge" => BaseType::Gauge,
            "NetworkAddress" => BaseType::NetworkAddress,
            _ => return None,
        };
        Some(base)
    }

    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            BaseType::Integer
            | BaseType::Integer32
            | BaseType::Unsigned32
            | BaseType::Counter32
            | BaseType::Counter64
            | BaseType::Gauge32
            | BaseType::TimeTicks
            | BaseType::Counter
            | BaseType::Gauge => SyntaxKind::Integer,
            BaseType::OctetString
            | BaseType::IpAddress
            | BaseType::Opaque
            | BaseType::NetworkAddress => SyntaxKind::OctetString,
            BaseType::Bits => SyntaxKind::Bits,
            BaseType::ObjectIdentifier => SyntaxKind::ObjectIdentifier,
            BaseType::Sequence | BaseType::SequenceOf | BaseType::Choice | BaseType::Unknown => {
                SyntaxKind::Other
            }
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BaseType::Integer => "INTEGER",
            BaseType::OctetString => "OCTET STRING",
            BaseType::ObjectIdentifier => "OBJECT IDENTIFIER",
            BaseType::Bits => "BITS",
            BaseType::Integer32 => "Integer32",
            BaseType::Unsigned32 => "Unsigned32",
            BaseType::Counter32 => "Counter32",
            BaseType::Counter64 => "Counter64",
            BaseType::Gauge32 => "Gauge32",
            BaseType::TimeTicks => "TimeTicks",
            BaseType::IpAddress => "IpAddress",
            BaseType::Opaque => "Opaque",
            BaseType::Counter => "Counter",
            BaseType::Gauge => "Gauge",
            BaseType::NetworkAddress => "NetworkAddress",
            BaseType::Sequence => "SEQUENCE",
            BaseType::SequenceOf => "SEQUENCE OF",
            BaseType::Choice => "CHOICE",
            BaseType::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// The classes of types a `DEFVAL` is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Integer,
    OctetString,
    Bits,
    ObjectIdentifier,
    /// Structural or unresolved types, which never have a default value.
    Other,
}

/// An enumeration label or a named bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeConstraint {
    Range(Vec<ValueRange>),
    Size(Vec<ValueRange>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub lower: Bound,
    pub upper: Option<Bound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    Min,
    Max,
    Value(BigInt),
}

/// A type with its chain of named types followed to the built-in type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedType {
    pub base: BaseType,
    /// Named types passed on the way, nearest first.
    pub via: Vec<String>,
    pub display_hint: Option<String>,
    /// Constraints of every step, outermost last.
    pub constraints: Vec<TypeConstraint>,
    /// Enumeration labels or named bits in declaration order.
    pub labels: Vec<Label>,
}

impl ResolvedType {
    pub fn builtin(base: BaseType) -> Self {
        ResolvedType {
            base,
            via: Vec::new(),
            display_hint: None,
            constraints: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn unknown() -> Self {
        ResolvedType::builtin(BaseType::Unknown)
    }

    pub fn syntax_kind(&self) -> SyntaxKind {
        self.base.syntax_kind()
    }

    pub fn is_unknown(&self) -> bool {
        self.base == BaseType::Unknown
    }

    pub fn is_enumerated(&self) -> bool {
        self.syntax_kind() == SyntaxKind::Integer && !self.labels.is_empty()
    }

    pub fn label(&self, name: &str) -> Option<i64> {
        self.labels.iter().find(|label| label.name == name).map(|label| label.value)
    }
}

/// Follow `syntax` to its built-in type.
///
/// `named` resolves type references; everything else is structural.
pub fn resolve_syntax(
    syntax: &cst::Syntax,
    named: &mut impl FnMut(&cst::Ident) -> ResolvedType,
) -> ResolvedType {
    match syntax {
        cst::Syntax::Integer => ResolvedType::builtin(BaseType::Integer),
        cst::Syntax::OctetString => ResolvedType::builtin(BaseType::OctetString),
        cst::Syntax::ObjectIdentifier => ResolvedType::builtin(BaseType::ObjectIdentifier),
        cst::Syntax::Bits(labels) => {
            ResolvedType { labels: lower_labels(labels), ..ResolvedType::builtin(BaseType::Bits) }
        }
        cst::Syntax::Reference(name) => {
            let mut ty = named(name);
            ty.via.insert(0, name.id.clone());
            ty
        }
        cst::Syntax::Labelled { base, labels } => {
            let mut ty = resolve_syntax(base, named);
            ty.labels = lower_labels(labels);
            ty
        }
        cst::Syntax::Constrained { base, constraint } => {
            let mut ty = resolve_syntax(base, named);
            ty.constraints.push(lower_constraint(constraint));
            ty
        }
        cst::Syntax::Tagged { base, .. } => resolve_syntax(base, named),
        cst::Syntax::Sequence(_) => ResolvedType::builtin(BaseType::Sequence),
        cst::Syntax::SequenceOf(_) => ResolvedType::builtin(BaseType::SequenceOf),
        cst::Syntax::Choice(_) => ResolvedType::builtin(BaseType::Choice),
    }
}

fn lower_labels(labels: &[cst::NamedNumber]) -> Vec<Label> {
    labels.iter().map(|l| Label { name: l.name.id.clone(), value: l.value }).collect()
}

fn lower_constraint(constraint: &cst::Constraint) -> TypeConstraint {
    let ranges = constraint.ranges().iter().map(lower_range).collect();
    match constraint {
        cst::Constraint::Size(_) => TypeConstraint::Size(ranges),
        cst::Constraint::Value(_) => TypeConstraint::Range(ranges),
    }
}

fn lower_range(range: &cst::Range) -> ValueRange {
    ValueRange { lower: lower_bound(&range.lower), upper: range.upper.as_ref().map(lower_bound) }
}

fn lower_bound(bound: &cst::Bound) -> Bound {
    match bound {
        cst::Bound::Min => Bound::Min,
        cst::Bound::Max => Bound::Max,
        cst::Bound::Value(n) => Bound::Value(n.clone()),
    }
}

#[cfg(test)]
mod types_tests {
    use mibc_lang_parser::cst::{Ident, NamedNumber, Syntax};

    use super::*;

    #[test]
    fn application_types_are_integers_or_strings() {
        assert_eq!(BaseType::Counter64.syntax_kind(), SyntaxKind::Integer);
        assert_eq!(BaseType::IpAddress.syntax_kind(), SyntaxKind::OctetString);
        assert_eq!(BaseType::SequenceOf.syntax_kind(), SyntaxKind::Other);
        assert_eq!(BaseType::from_application_name("Gauge32"), Some(BaseType::Gauge32));
        assert_eq!(BaseType::from_application_name("DisplayString"), None);
    }

    #[test]
    fn refinements_accumulate() {
        let syntax = Syntax::Labelled {
            base: Box::new(Syntax::Reference(Ident::synthetic("Base"))),
            labels: vec![NamedNumber { name: Ident::synthetic("up"), value: 1 }],
        };
        let ty = resolve_syntax(&syntax, &mut |_| ResolvedType {
            via: vec!["Integer32".to_owned()],
            ..ResolvedType::builtin(BaseType::Integer32)
        });
        assert_eq!(ty.via, vec!["Base", "Integer32"]);
        assert!(ty.is_enumerated());
        assert_eq!(ty.label("up"), Some(1));
        assert_eq!(ty.label("down"), None);
    }
}
