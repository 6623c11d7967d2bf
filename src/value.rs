use std::{borrow::Cow, fmt::Display};

use num_bigint::BigInt;

#[derive(Debug, PartialEq, Clone)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Number {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(int) => i64::try_from(int).ok(),
            Self::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(num) => Some(*num),
            Self::Int(_) => None,
        }
    }
}

/// A string as a sequence of 16-bit code units.
///
/// Bytes copied from the input (or from a Rust `&str`) take one unit each, in `0..=0xFF`.
/// A `\uXXXX` escape takes exactly one unit holding its full value: surrogate pairs
/// are not merged and nothing is re-encoded as UTF-8.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct Str(Vec<u16>);

impl Str {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn units(&self) -> &[u16] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw bytes, or `None` when a unit came from an escape above `\u00FF`.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        self.0.iter().map(|&unit| u8::try_from(unit).ok()).collect()
    }

    /// Bytes are read as UTF-8 when every unit fits in one; otherwise the units are
    /// read as UTF-16. Invalid sequences become U+FFFD in both cases.
    pub fn to_string_lossy(&self) -> String {
        match self.to_bytes() {
            Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            None => String::from_utf16_lossy(&self.0),
        }
    }
}

impl From<Vec<u16>> for Str {
    fn from(units: Vec<u16>) -> Self {
        Self(units)
    }
}

impl From<&[u8]> for Str {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|&b| u16::from(b)).collect())
    }
}

impl From<&str> for Str {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<String> for Str {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.0.len() == other.len()
            && self
                .0
                .iter()
                .zip(other.bytes())
                .all(|(&unit, b)| unit == u16::from(b))
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// An object key. The decoder only ever produces `Key::String`; `Key::Label` lets callers
/// use symbolic constants when building a tree to encode. Both encode the same way.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Key {
    String(Str),
    Label(&'static str),
}

impl Key {
    pub fn units(&self) -> Cow<'_, [u16]> {
        match self {
            Self::String(s) => Cow::Borrowed(s.units()),
            Self::Label(label) => Cow::Owned(Str::from(*label).0),
        }
    }

    /// Compares by encoded text, so a label and a string with the same bytes match.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::String(s) => s == name,
            Self::Label(label) => *label == name,
        }
    }
}

impl From<Str> for Key {
    fn from(s: Str) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::String(Str::from(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::String(Str::from(s))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(Str),
    Array(Vec<Value>),
    Object(Vec<(Key, Value)>),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::encoder::write_value(f, self)
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(bool) => Some(*bool),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(num) => Some(num),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&Str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(Key, Value)]> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// First member named `key`. Later duplicates are shadowed.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k.matches(key))
            .map(|(_, v)| v)
    }

    pub fn unwrap_null(&self) {
        match self {
            Self::Null => (),
            _ => panic!("Try to get null, but value is not null: {}", self),
        }
    }

    pub fn unwrap_bool(&self) -> bool {
        match self {
            Self::Bool(bool) => *bool,
            _ => panic!("Try to get bool, but value is not a bool: {}", self),
        }
    }

    pub fn unwrap_number(&self) -> &Number {
        match self {
            Self::Number(num) => num,
            _ => panic!("Try to get number, but value is not a number: {}", self),
        }
    }

    pub fn unwrap_string(&self) -> &Str {
        match self {
            Self::String(s) => s,
            _ => panic!("Try to get string, but value is not a string: {}", self),
        }
    }

    pub fn unwrap_array(&self) -> &Vec<Value> {
        match self {
            Self::Array(array) => array,
            _ => panic!("Try to get array, but value is not a array: {}", self),
        }
    }

    pub fn unwrap_object(&self) -> &Vec<(Key, Value)> {
        match self {
            Self::Object(obj) => obj,
            _ => panic!("Try to get object, but value is not a object: {}", self),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Number::Int(BigInt::from(value)))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Number(Number::Int(BigInt::from(value)))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(Number::Int(BigInt::from(value)))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::Number(Number::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<Str> for Value {
    fn from(value: Str) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Str::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(Str::from(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}
