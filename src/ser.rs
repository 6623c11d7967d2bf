use serde::{
    ser::{Serialize, SerializeMap, SerializeSeq},
    Serializer,
};

use crate::value::{Key, Number, Str, Value};

impl Serialize for Str {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::String(str) => str.serialize(serializer),
            Key::Label(label) => serializer.serialize_str(label),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Float(num) => serializer.serialize_f64(*num),
            Number::Int(int) => {
                if let Ok(num) = i64::try_from(int) {
                    serializer.serialize_i64(num)
                } else if let Ok(num) = u64::try_from(int) {
                    serializer.serialize_u64(num)
                } else {
                    // Too wide for serde's data model, keep the digits
                    serializer.collect_str(int)
                }
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Value::Bool(bool) => serializer.serialize_bool(*bool),
            Value::Number(num) => num.serialize(serializer),
            Value::String(str) => str.serialize(serializer),
            Value::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;

                for v in array {
                    seq.serialize_element(v)?;
                }

                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;

                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }

                map.end()
            }
        }
    }
}
