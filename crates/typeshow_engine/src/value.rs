/* 📖 # How are values and their types modelled?

`TypedValue` is a closed enum: each variant holds the Rust type its kind stands for.
`ValueKind` is the fieldless tag of the same seven kinds, used where only the kind is
known (config files, zero values). Type names come from `std::any::type_name` of the
payload type, so `Float32` reports `f32` and `Text` reports `String`.
*/

use std::any::type_name;
use std::fmt;

use serde::Deserialize;
use typeshow_base::{TypeshowResult, bail, err};

use crate::float_format::{format_f32, format_f64};

/// The kind tag of a [`TypedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Bool,
    Uint8,
    Float32,
    Float64,
    /// Signed platform-sized integer declared without an initializer.
    DefaultInt,
    /// Signed platform-sized integer, the type an integer literal is inferred as.
    Int,
}

impl ValueKind {
    pub const ALL: [ValueKind; 7] = [
        ValueKind::Text,
        ValueKind::Bool,
        ValueKind::Uint8,
        ValueKind::Float32,
        ValueKind::Float64,
        ValueKind::DefaultInt,
        ValueKind::Int,
    ];

    /// Name of the Rust type holding values of this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Text => short_type_name::<String>(),
            ValueKind::Bool => short_type_name::<bool>(),
            ValueKind::Uint8 => short_type_name::<u8>(),
            ValueKind::Float32 => short_type_name::<f32>(),
            ValueKind::Float64 => short_type_name::<f64>(),
            ValueKind::DefaultInt | ValueKind::Int => short_type_name::<isize>(),
        }
    }

    /// The value a variable of this kind holds when declared without an initializer.
    pub fn zero_value(self) -> TypedValue {
        match self {
            ValueKind::Text => TypedValue::Text(String::default()),
            ValueKind::Bool => TypedValue::Bool(bool::default()),
            ValueKind::Uint8 => TypedValue::Uint8(u8::default()),
            ValueKind::Float32 => TypedValue::Float32(f32::default()),
            ValueKind::Float64 => TypedValue::Float64(f64::default()),
            ValueKind::DefaultInt => TypedValue::DefaultInt,
            ValueKind::Int => TypedValue::Int(isize::default()),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// One primitive datum together with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Text(String),
    Bool(bool),
    Uint8(u8),
    Float32(f32),
    Float64(f64),
    /// Always zero.
    DefaultInt,
    Int(isize),
}

impl TypedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValue::Text(_) => ValueKind::Text,
            TypedValue::Bool(_) => ValueKind::Bool,
            TypedValue::Uint8(_) => ValueKind::Uint8,
            TypedValue::Float32(_) => ValueKind::Float32,
            TypedValue::Float64(_) => ValueKind::Float64,
            TypedValue::DefaultInt => ValueKind::DefaultInt,
            TypedValue::Int(_) => ValueKind::Int,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Parses `literal` as a value of an explicitly given kind.
    ///
    /// Text literals may be wrapped in double quotes, which are stripped.
    pub fn parse_as(kind: ValueKind, literal: &str) -> TypeshowResult<TypedValue> {
        fn parse<T>(literal: &str, kind: ValueKind) -> TypeshowResult<T>
        where
            T: std::str::FromStr,
            T::Err: fmt::Display,
        {
            literal
                .parse()
                .map_err(|e| err!("'{}' is not a valid {}: {}", literal, kind, e))
        }

        Ok(match kind {
            ValueKind::Text => TypedValue::Text(unquote(literal).unwrap_or(literal).to_string()),
            ValueKind::Bool => TypedValue::Bool(parse(literal, kind)?),
            ValueKind::Uint8 => TypedValue::Uint8(parse(literal, kind)?),
            ValueKind::Float32 => TypedValue::Float32(parse(literal, kind)?),
            ValueKind::Float64 => TypedValue::Float64(parse(literal, kind)?),
            ValueKind::DefaultInt => {
                bail!("a default-initialized integer takes no value, got '{}'", literal)
            }
            ValueKind::Int => TypedValue::Int(parse(literal, kind)?),
        })
    }

    /// Infers the kind from the shape of `literal`.
    ///
    /// Quoted literals are text, `true`/`false` are booleans, integer literals become
    /// [`TypedValue::Int`], other numeric literals [`TypedValue::Float64`], and anything
    /// else is taken as text verbatim.
    pub fn infer(literal: &str) -> TypeshowResult<TypedValue> {
        if let Some(inner) = unquote(literal) {
            return Ok(TypedValue::Text(inner.to_string()));
        }
        if literal == "true" || literal == "false" {
            return TypedValue::parse_as(ValueKind::Bool, literal);
        }
        if is_integer_literal(literal) {
            return TypedValue::parse_as(ValueKind::Int, literal);
        }
        if is_float_literal(literal) {
            return TypedValue::parse_as(ValueKind::Float64, literal);
        }
        Ok(TypedValue::Text(literal.to_string()))
    }
}

fn unquote(literal: &str) -> Option<&str> {
    literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
}

fn is_integer_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix(['-', '+']).unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float_literal(literal: &str) -> bool {
    literal.bytes().any(|b| b.is_ascii_digit())
        && literal
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && literal.parse::<f64>().is_ok()
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Text(text) => f.write_str(text),
            TypedValue::Bool(value) => write!(f, "{}", value),
            TypedValue::Uint8(value) => write!(f, "{}", value),
            TypedValue::Float32(value) => f.write_str(&format_f32(*value)),
            TypedValue::Float64(value) => f.write_str(&format_f64(*value)),
            TypedValue::DefaultInt => f.write_str("0"),
            TypedValue::Int(value) => write!(f, "{}", value),
        }
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::Text(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::Text(value.to_string())
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Bool(value)
    }
}

impl From<u8> for TypedValue {
    fn from(value: u8) -> Self {
        TypedValue::Uint8(value)
    }
}

impl From<f32> for TypedValue {
    fn from(value: f32) -> Self {
        TypedValue::Float32(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        TypedValue::Float64(value)
    }
}

impl From<isize> for TypedValue {
    fn from(value: isize) -> Self {
        TypedValue::Int(value)
    }
}

/// Non-empty display text naming a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    pub fn new(text: impl Into<String>) -> TypeshowResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            bail!("label must not be empty");
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
