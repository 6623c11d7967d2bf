use std::fmt::{Result, Write};

use crate::value::{Number, Value};

/// Encodes `value` as compact JSON text. The output is always ASCII.
///
/// Encoding cannot fail. Floats that are NaN or infinite have no JSON form and are
/// written as `null`.
pub fn encode(value: &Value) -> String {
    value.to_string()
}

pub(crate) fn write_value<W: Write>(out: &mut W, value: &Value) -> Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(true) => out.write_str("true"),
        Value::Bool(false) => out.write_str("false"),
        Value::Number(num) => write_number(out, num),
        Value::String(s) => write_units(out, s.units()),
        Value::Array(array) => {
            out.write_char('[')?;

            for (n, item) in array.iter().enumerate() {
                if n > 0 {
                    out.write_char(',')?;
                }
                write_value(out, item)?;
            }

            out.write_char(']')
        }
        Value::Object(obj) => {
            out.write_char('{')?;

            for (n, (key, item)) in obj.iter().enumerate() {
                if n > 0 {
                    out.write_char(',')?;
                }
                write_units(out, &key.units())?;
                out.write_char(':')?;
                write_value(out, item)?;
            }

            out.write_char('}')
        }
    }
}

fn write_number<W: Write>(out: &mut W, num: &Number) -> Result {
    match num {
        Number::Int(int) => write!(out, "{}", int),
        // Debug gives the shortest round-trip digits and always keeps a '.' or an
        // exponent, so the float never comes back as an integer
        Number::Float(num) if num.is_finite() => write!(out, "{:?}", num),
        Number::Float(_) => out.write_str("null"),
    }
}

fn write_units<W: Write>(out: &mut W, units: &[u16]) -> Result {
    out.write_char('"')?;

    for &unit in units {
        match unit {
            0x22 => out.write_str("\\\"")?,
            0x5C => out.write_str("\\\\")?,
            0x08 => out.write_str("\\b")?,
            0x09 => out.write_str("\\t")?,
            0x0A => out.write_str("\\n")?,
            0x0C => out.write_str("\\f")?,
            0x0D => out.write_str("\\r")?,
            0x20..=0x7F => out.write_char(char::from(unit as u8))?,
            _ => write!(out, "\\u{:04X}", unit)?,
        }
    }

    out.write_char('"')
}
