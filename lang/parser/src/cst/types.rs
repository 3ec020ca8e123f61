use num_bigint::BigInt;

use mibc_lang_miette_util::codespan::Span;

use super::Ident;

/// A type as it appears after `SYNTAX` or `::=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Syntax {
    Integer,
    OctetString,
    ObjectIdentifier,
    /// `BITS { label(n), ... }`
    Bits(Vec<NamedNumber>),
    /// A named type such as `Integer32` or `DisplayString`.
    Reference(Ident),
    /// `INTEGER { up(1), down(2) }` or a label refinement of a named type.
    Labelled { base: Box<Syntax>, labels: Vec<NamedNumber> },
    Constrained { base: Box<Syntax>, constraint: Constraint },
    Sequence(Vec<Field>),
    SequenceOf(Ident),
    Choice(Vec<Field>),
    /// `[APPLICATION n] IMPLICIT T`, only found in the base modules.
    Tagged { application: bool, tag: u32, implicit: bool, base: Box<Syntax> },
}

impl Syntax {
    /// Strip constraints, labels and tags down to the type that is refined.
    pub fn root(&self) -> &Syntax {
        match self {
            Syntax::Labelled { base, .. }
            | Syntax::Constrained { base, .. }
            | Syntax::Tagged { base, .. } => base.root(),
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedNumber {
    pub name: Ident,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub span: Span,
    pub name: Ident,
    pub syntax: Syntax,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `(SIZE (0..255))`
    Size(Vec<Range>),
    /// `(0..2 | 4)`
    Value(Vec<Range>),
}

impl Constraint {
    pub fn ranges(&self) -> &[Range] {
        match self {
            Constraint::Size(ranges) | Constraint::Value(ranges) => ranges,
        }
    }
}

/// A single value (`upper == None`) or an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub lower: Bound,
    pub upper: Option<Bound>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
    Value(BigInt),
}
