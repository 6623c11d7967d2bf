use std::num::ParseFloatError;
use std::str::{self, FromStr};

use log::debug;
use memchr::memchr2;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1, take_while_m_n},
    character::{complete::char, is_hex_digit},
    combinator::{cut, map, value},
    error::context,
    number::complete::u8 as byte,
    sequence::preceded,
    Err, IResult, Parser,
};
use num_bigint::BigInt;

use crate::error::Error;
use crate::value::{Key, Number, Str, Value};

pub type Span<'a> = &'a [u8];

pub type Result<'a, R> = IResult<Span<'a>, R, Error>;
pub type ParseResult<'a> = std::result::Result<(Value, Span<'a>), Error>;

/// Deepest array/object nesting accepted. Each level costs stack frames, so deeper
/// input is rejected instead of overflowing the stack.
pub const MAX_DEPTH: usize = 128;

fn is_sp(b: u8) -> bool {
    b <= b' '
}

fn sp(i: Span) -> Result<Span> {
    take_while(is_sp)(i)
}

fn is_number_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'-' | b'+')
}

fn keyword(i: Span) -> Result<Value> {
    alt((
        value(Value::Bool(true), tag("true")),
        value(Value::Bool(false), tag("false")),
        value(Value::Null, tag("null")),
    ))(i)
}

fn hex_value(digit: u8) -> u16 {
    let value = match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    };

    u16::from(value)
}

fn unicode_escape(i: Span) -> Result<u16> {
    context(
        "4 hex digits",
        map(take_while_m_n(4, 4, is_hex_digit), |hex: Span| {
            hex.iter()
                .fold(0u16, |unit, &digit| (unit << 4) | hex_value(digit))
        }),
    )(i)
}

fn escape(i: Span) -> Result<u16> {
    let (rest, c) = context("escape", byte::<_, Error>)(i)?;

    let unit = match c {
        b'"' | b'\\' => c,
        b'b' => 0x08,
        b't' => b'\t',
        b'n' => b'\n',
        b'f' => 0x0C,
        b'r' => b'\r',
        b'u' => return unicode_escape(rest),
        _ => {
            return Err(Err::Failure(Error::new(
                i,
                format!("invalid escape '\\{}'", c.escape_ascii()),
            )))
        }
    };

    Ok((rest, u16::from(unit)))
}

/// String body after the opening quote. Unescaped bytes are kept as they are,
/// control bytes included.
fn string(i: Span) -> Result<Str> {
    let mut units = Vec::new();
    let mut rest = i;

    loop {
        let Some(at) = memchr2(b'"', b'\\', rest) else {
            return Err(Err::Failure(Error::new(
                &rest[rest.len()..],
                "unterminated string",
            )));
        };

        units.extend(rest[..at].iter().map(|&b| u16::from(b)));
        let delimiter = rest[at];
        rest = &rest[at + 1..];

        if delimiter == b'"' {
            return Ok((rest, Str::from(units)));
        }

        let (next, unit) = cut(escape)(rest)?;
        units.push(unit);
        rest = next;
    }
}

impl FromStr for Number {
    type Err = ParseFloatError;

    /// Integers first, so `1` and `1.0` stay distinct. Anything the integer grammar
    /// rejects goes to the float grammar, leniency included.
    fn from_str(literal: &str) -> std::result::Result<Self, Self::Err> {
        match literal.parse::<BigInt>() {
            Ok(int) => Ok(Self::Int(int)),
            Err(_) => literal.parse().map(Self::Float),
        }
    }
}

fn number(i: Span) -> Result<Number> {
    let (rest, literal) = take_while1::<_, _, Error>(is_number_byte)(i)?;

    let number = str::from_utf8(literal)
        .ok()
        .and_then(|literal| literal.parse().ok())
        // Overflowing floats parse as infinity, which has no JSON form
        .filter(|number| !matches!(number, Number::Float(f) if !f.is_finite()));

    match number {
        Some(number) => Ok((rest, number)),
        None => Err(Err::Failure(Error::new(
            i,
            format!("invalid number '{}'", literal.escape_ascii()),
        ))),
    }
}

/// Items up to the `close` byte. Commas are skipped wherever they appear, so runs of
/// commas collapse and a leading or trailing comma is tolerated.
fn items<'a, O, P>(close: u8, mut item: P) -> impl FnMut(Span<'a>) -> Result<'a, Vec<O>>
where
    P: Parser<Span<'a>, O, Error>,
{
    move |i: Span<'a>| {
        let mut items = Vec::new();
        let (mut i, _) = sp(i)?;

        loop {
            match i.first() {
                Some(&b) if b == close => return Ok((&i[1..], items)),
                Some(b',') => {
                    i = sp(&i[1..])?.0;
                }
                Some(_) => {
                    let (rest, o) = item.parse(i)?;
                    items.push(o);
                    i = rest;
                }
                None => {
                    return Err(Err::Failure(Error::new(
                        i,
                        format!("expected '{}' but found end of input", char::from(close)),
                    )))
                }
            }
        }
    }
}

fn member(i: Span, depth: usize) -> Result<(Key, Value)> {
    let (i, key) = context("object key", preceded(char('"'), cut(string)))(i)?;

    let (i, _) = context("':'", cut(preceded(sp, char(':'))))(i)?;

    let (i, value) = json_value(i, depth)?;

    Ok((i, (Key::String(key), value)))
}

fn json_value(i: Span, depth: usize) -> Result<Value> {
    let (i, _) = sp(i)?;

    if depth > MAX_DEPTH && matches!(i.first(), Some(b'{' | b'[')) {
        return Err(Err::Failure(Error::new(i, "nesting too deep")));
    }

    let nested = depth + 1;

    let (i, value) = match i.first() {
        Some(b'"') => map(string, Value::String)(&i[1..]),
        Some(b'{') => map(items(b'}', |i| member(i, nested)), Value::Object)(&i[1..]),
        Some(b'[') => map(items(b']', |i| json_value(i, nested)), Value::Array)(&i[1..]),
        _ => context("value", alt((keyword, map(number, Value::Number))))(i),
    }?;

    let (i, _) = sp(i)?;

    Ok((i, value))
}

/// Decodes one value from the front of `text`.
///
/// Whitespace (any byte up to and including `' '`) around the value is skipped. Whatever
/// follows is returned untouched as the remainder, so back-to-back documents can be read
/// by calling `decode` again on it.
pub fn decode<T: AsRef<[u8]> + ?Sized>(text: &T) -> ParseResult<'_> {
    let source = text.as_ref();

    match json_value(source, 1) {
        Ok((rest, value)) => Ok((value, rest)),
        Err(Err::Error(e)) | Err(Err::Failure(e)) => {
            let e = e.locate(source);
            debug!("Failed to decode json: {}", e);
            Err(e)
        }
        // Only complete combinators are used, this is kept for exhaustiveness
        Err(Err::Incomplete(_)) => Err(Error::at_end(source, "unexpected end of input")),
    }
}

/// Like [`decode`], but the whole input must be a single document.
pub fn decode_document<T: AsRef<[u8]> + ?Sized>(text: &T) -> std::result::Result<Value, Error> {
    let source = text.as_ref();

    let (value, rest) = decode(source)?;

    if rest.is_empty() {
        return Ok(value);
    }

    let e = Error::new(rest, "unexpected characters after the root value").locate(source);
    debug!("Rejected json document: {}", e);

    Err(e)
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        decode_document(s)
    }
}
