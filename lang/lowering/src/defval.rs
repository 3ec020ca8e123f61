//! Resolution of `DEFVAL` clauses to concrete values.
//!
//! Every literal form is checked against the class of its object's type.
//! Forms a class does not accept resolve to [`ResolvedValue::NotAValue`];
//! resolution never fails.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use mibc_lang_parser::cst::Literal;

use crate::symbol_table::SymbolTable;
use crate::types::{ResolvedType, SyntaxKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedValue {
    Value { value: Value, syntax: SyntaxKind },
    /// The literal is not a value of the target type.
    NotAValue,
}

impl ResolvedValue {
    pub fn is_value(&self) -> bool {
        matches!(self, ResolvedValue::Value { .. })
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            ResolvedValue::Value { value, .. } => Some(value),
            ResolvedValue::NotAValue => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Integer(BigInt),
    Bytes(Vec<u8>),
    Oid(Vec<u32>),
}

/// Resolve `literal` as a default value of type `ty`.
///
/// `table` resolves symbol references of `OBJECT IDENTIFIER` defaults.
pub fn resolve(literal: &Literal, ty: &ResolvedType, table: &SymbolTable) -> ResolvedValue {
    let syntax = ty.syntax_kind();
    let value = match syntax {
        SyntaxKind::Integer => integer(literal, ty).map(Value::Integer),
        SyntaxKind::OctetString => octets(literal).map(Value::Bytes),
        SyntaxKind::Bits => bits(literal, ty).map(Value::Bytes),
        SyntaxKind::ObjectIdentifier => match literal {
            Literal::SymbolRef(name) => {
                table.oid(name.as_str()).map(|oid| Value::Oid(oid.to_vec()))
            }
            _ => None,
        },
        SyntaxKind::Other => None,
    };
    match value {
        Some(value) => ResolvedValue::Value { value, syntax },
        None => {
            log::trace!("{} is not a {syntax:?} value", literal.kind_name());
            ResolvedValue::NotAValue
        }
    }
}

fn integer(literal: &Literal, ty: &ResolvedType) -> Option<BigInt> {
    let n = match literal {
        Literal::Integer(n) => n.clone(),
        Literal::HexString(digits) => magnitude(digits, 16)?,
        Literal::BinaryString(digits) => magnitude(digits, 2)?,
        Literal::SymbolRef(name) => return ty.label(name.as_str()).map(BigInt::from),
        Literal::QuotedText(_) | Literal::BracketedSet(_) => return None,
    };
    if ty.is_enumerated() && !ty.labels.iter().any(|label| BigInt::from(label.value) == n) {
        return None;
    }
    Some(n)
}

/// The unsigned value of a digit string; the empty string is zero.
fn magnitude(digits: &str, radix: u32) -> Option<BigInt> {
    if digits.is_empty() {
        return Some(BigInt::ZERO);
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

fn octets(literal: &Literal) -> Option<Vec<u8>> {
    match literal {
        Literal::QuotedText(text) => Some(text.as_bytes().to_vec()),
        Literal::HexString(digits) => pack(digits, 4),
        Literal::BinaryString(digits) => pack(digits, 1),
        Literal::Integer(_) | Literal::SymbolRef(_) | Literal::BracketedSet(_) => None,
    }
}

/// Pack digits of `bits_per_digit` bits each into octets, most significant
/// bit first, left-padded with zero bits to a whole number of octets.
fn pack(digits: &str, bits_per_digit: u32) -> Option<Vec<u8>> {
    let radix = 1 << bits_per_digit;
    let per_octet = (8 / bits_per_digit) as usize;
    let values = digits.chars().map(|c| c.to_digit(radix)).collect::<Option<Vec<_>>>()?;

    let padding = (per_octet - values.len() % per_octet) % per_octet;
    let padded: Vec<u32> = std::iter::repeat_n(0, padding).chain(values).collect();
    let octets = padded
        .chunks(per_octet)
        .map(|chunk| chunk.iter().fold(0u32, |acc, d| (acc << bits_per_digit) | d) as u8)
        .collect();
    Some(octets)
}

fn bits(literal: &Literal, ty: &ResolvedType) -> Option<Vec<u8>> {
    let items = match literal {
        Literal::BracketedSet(items) => items,
        Literal::HexString(_) | Literal::BinaryString(_) => return octets(literal),
        Literal::Integer(_) | Literal::QuotedText(_) | Literal::SymbolRef(_) => return None,
    };

    let mut positions = Vec::with_capacity(items.len());
    for item in items {
        let Literal::SymbolRef(name) = item else {
            return None;
        };
        // Positions beyond `u16` are not bits anyone can set.
        let position = u16::try_from(ty.label(name.as_str())?).ok()?;
        positions.push(usize::from(position));
    }

    // Long enough for the highest bit present, at least one octet.
    let len = positions.iter().max().map_or(1, |max| max / 8 + 1);
    let mut octets = vec![0u8; len];
    for position in positions {
        octets[position / 8] |= 0x80u8 >> (position % 8);
    }
    Some(octets)
}
