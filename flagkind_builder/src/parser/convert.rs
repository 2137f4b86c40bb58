use std::str::FromStr;
use thiserror::Error;

use crate::model::{Kind, Value};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {kind}.")]
pub(crate) struct InvalidConversion {
    pub(crate) token: String,
    pub(crate) kind: Kind,
}

type Converter = fn(&str) -> Option<Value>;

// Exhaustive over `Kind`, so every kind is guaranteed a converter.
fn converter(kind: Kind) -> Converter {
    match kind {
        Kind::Integer => integer,
        Kind::Float => float,
        Kind::Character => character,
        Kind::Boolean => boolean,
        Kind::String => string,
    }
}

fn integer(token: &str) -> Option<Value> {
    i64::from_str(token).ok().map(Value::Integer)
}

fn float(token: &str) -> Option<Value> {
    f64::from_str(token).ok().map(Value::Float)
}

fn character(token: &str) -> Option<Value> {
    // Only the first character is kept; an empty token has nothing to keep.
    token.chars().next().map(Value::Character)
}

fn boolean(token: &str) -> Option<Value> {
    // Strict: only "true" and "false".
    bool::from_str(token).ok().map(Value::Boolean)
}

fn string(token: &str) -> Option<Value> {
    Some(Value::String(token.to_string()))
}

/// Convert the value `token` into the `kind`.
pub(crate) fn convert(kind: Kind, token: &str) -> Result<Value, InvalidConversion> {
    converter(kind)(token).ok_or_else(|| InvalidConversion {
        token: token.to_string(),
        kind,
    })
}
