use std::collections::hash_map;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// The type of value a typed flag expects on the Cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A base-10 signed integer (`i64`).
    Integer,
    /// A decimal floating point number (`f64`).
    Float,
    /// The first character of the value token.
    Character,
    /// Strictly `true` or `false`.
    Boolean,
    /// The value token, verbatim.
    String,
}

impl Kind {
    /// The label used for this kind in usage and diagnostic messages.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Integer => "Integer",
            Kind::Float => "Float",
            Kind::Character => "Character",
            Kind::Boolean => "Boolean",
            Kind::String => "String",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A kind label that does not name any [`Kind`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported kind '{0}'.")]
pub struct UnsupportedKind(pub String);

impl FromStr for Kind {
    type Err = UnsupportedKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Integer" | "Int" => Ok(Kind::Integer),
            "Float" => Ok(Kind::Float),
            "Character" | "Char" => Ok(Kind::Character),
            "Boolean" | "Bool" => Ok(Kind::Boolean),
            "String" => Ok(Kind::String),
            _ => Err(UnsupportedKind(value.to_string())),
        }
    }
}

/// A parsed flag value, tagged by its [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Value of an [`Kind::Integer`] flag.
    Integer(i64),
    /// Value of a [`Kind::Float`] flag.
    Float(f64),
    /// Value of a [`Kind::Character`] flag.
    Character(char),
    /// Value of a [`Kind::Boolean`] flag, or the presence of a switch.
    Boolean(bool),
    /// Value of a [`Kind::String`] flag.
    String(String),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Character(_) => Kind::Character,
            Value::Boolean(_) => Kind::Boolean,
            Value::String(_) => Kind::String,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Character(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::String(value) => write!(f, "{value}"),
        }
    }
}

/// The flags captured by a single parse, keyed by flag name.
///
/// Switches that were present map to `Value::Boolean(true)`.
/// Flags that were not present on the Cli are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFlags {
    values: HashMap<String, Value>,
    // Names in the order they were first captured.
    order: Vec<String>,
}

impl ParsedFlags {
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();

        if !self.values.contains_key(&name) {
            self.order.push(name.clone());
        }

        self.values.insert(name, value);
    }

    /// Get the value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a value was captured for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Get the integer captured for `name`, if it is one.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get the float captured for `name`, if it is one.
    pub fn float(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get the character captured for `name`, if it is one.
    pub fn character(&self, name: &str) -> Option<char> {
        match self.get(name) {
            Some(Value::Character(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get the boolean captured for `name`, if it is one.
    /// For a switch, this is `Some(true)` when present and `None` when absent.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(Value::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get the string captured for `name`, if it is one.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::String(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The number of captured flags.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no flags were captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the captured flags, in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Take the underlying mapping.
    pub fn into_inner(self) -> HashMap<String, Value> {
        self.values
    }
}

impl std::fmt::Display for ParsedFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .order
            .iter()
            .map(|name| format!("{name}={}", self.values[name]))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}
