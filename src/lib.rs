#![forbid(unsafe_code)]
#![warn(clippy::all)]
//! A lenient JSON codec. [`decode`] parses JSON text into an ordered [`Value`] tree and
//! hands back whatever input is left after it; [`encode`] turns a tree back into compact
//! JSON text.
//!
//! ## Leniency
//!
//! The decoder accepts more than strict JSON:
//!
//! - repeated, leading and trailing commas in arrays and objects collapse (`[1,,2,]` is `[1,2]`),
//! - numbers are any run of `0-9 . e E - +` that parses as an integer or a float, so
//!   leading zeros (`007`) and a leading `+` are fine,
//! - unescaped control bytes inside strings are kept as they are,
//! - text after the first value is not an error, it is returned as the remainder.
//!
//! Use [`decode_document`] when the input must hold exactly one value.
//!
//! ## Strings
//!
//! Strings are [`Str`]: a sequence of 16-bit code units. Input bytes map to one unit each
//! and a `\uXXXX` escape maps to exactly one unit. No UTF-8 validation or surrogate-pair
//! merging happens, in either direction.
//!
//! ## Example
//!
//! ```rust
//! use lenient_json::{decode, encode};
//!
//! let (value, rest) = decode(r#"{"hello": ["world",, 1.5]} trailing"#).unwrap();
//!
//! assert_eq!(value.get("hello").unwrap().unwrap_array().len(), 2);
//! assert_eq!(rest, b"trailing");
//! assert_eq!(encode(&value), r#"{"hello":["world",1.5]}"#);
//! ```
//!
//! With the default `serde` support a tree can be fed to any serializer:
//!
//! ```rust
//! use lenient_json::decode_document;
//!
//! let value = decode_document(r#"{"hello": "world"}"#).unwrap();
//! let json = serde_json::to_value(&value).unwrap();
//!
//! assert_eq!(json["hello"], "world");
//! ```

extern crate bytecount;
extern crate memchr;
extern crate nom;
extern crate serde;

mod encoder;
mod parser;
mod ser;
#[cfg(feature = "wasm")]
mod wasm;

pub mod error;
pub mod value;

pub use encoder::encode;
pub use error::Error;
pub use parser::{decode, decode_document, MAX_DEPTH};
pub use value::{Key, Number, Str, Value};

pub const MIME_TYPE: &str = "application/json";

pub fn mime_type() -> &'static str {
    MIME_TYPE
}
