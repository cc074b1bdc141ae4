//! The keyed-literal check.
//!
//! A struct literal that names its fields but fills the rest from a
//! `..base` expression silently inherits whatever the base holds. For
//! timeouts and keep-alives that is usually zero, meaning "never" or
//! "disabled". This module decides which literals to judge and reports the
//! fields they leave out.

use std::collections::HashSet;
use std::path::Path;

use crate::literal::{CompositeLit, Element};
use crate::oracle::{TypeDescriptor, Underlying};
use crate::rules::Rules;
use crate::types::Diagnostic;

/// Why a literal was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotStruct,
    NoTypeName,
    Positional,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NotStruct => write!(f, "type is not a struct"),
            Rejection::NoTypeName => write!(f, "type name cannot be derived"),
            Rejection::Positional => write!(f, "literal has positional elements"),
        }
    }
}

/// A fully keyed struct literal.
#[derive(Debug)]
pub struct KeyedLiteral<'a> {
    pub type_name: &'a str,
    pub keys: HashSet<&'a str>,
}

/// Accept only fully keyed struct literals whose type name can be reported.
///
/// A literal without any elements is vacuously fully keyed.
pub fn classify<'a>(lit: &'a CompositeLit, underlying: &Underlying) -> Result<KeyedLiteral<'a>, Rejection> {
    if !matches!(underlying, Underlying::Struct { .. }) {
        return Err(Rejection::NotStruct);
    }
    let type_name = lit.type_expr.type_name().ok_or(Rejection::NoTypeName)?;

    let mut keys = HashSet::new();
    for element in &lit.elements {
        match element {
            Element::Keyed(key) => {
                keys.insert(key.as_str());
            }
            // One positional element means none of them are keyed
            Element::Positional => return Err(Rejection::Positional),
        }
    }

    Ok(KeyedLiteral { type_name, keys })
}

/// Report every must-specify field of `ty` that `lit` does not name.
///
/// Fields are reported in declaration order. Returns why the literal was
/// skipped, if it was.
pub fn check_literal(
    lit: &CompositeLit,
    ty: &TypeDescriptor,
    rules: &Rules,
    file: &Path,
    report: &mut dyn FnMut(Diagnostic),
) -> Result<(), Rejection> {
    let keyed = classify(lit, &ty.underlying)?;
    let Underlying::Struct { fields, .. } = &ty.underlying else {
        return Err(Rejection::NotStruct);
    };

    for field in fields {
        if rules.must_be_specified(field) && !keyed.keys.contains(field.name.as_str()) {
            report(Diagnostic {
                file: file.to_path_buf(),
                line: lit.position.line,
                column: lit.position.column,
                message: format!("unspecified field {} of {}", field.name, keyed.type_name),
                field: field.name.clone(),
                type_name: keyed.type_name.to_string(),
            });
        }
    }

    Ok(())
}
