use std::fmt::Display;

use bytecount::count;
use memchr::memrchr;
use nom::error::{ContextError, ErrorKind, FromExternalError, ParseError};

use crate::parser::Span;

/// Where decoding stopped. `line` and `col` are 1-based, `col` counts bytes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub(crate) fn locate(source: &[u8], offset: usize) -> Self {
        let before = &source[..offset];
        let line_start = memrchr(b'\n', before).map(|i| i + 1).unwrap_or(0);

        Self {
            offset,
            line: count(before, b'\n') + 1,
            col: offset - line_start + 1,
        }
    }
}

/// A decode failure. The `reason` is a diagnostic for humans, not a stable code.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
    pub position: Position,
    pub reason: String,
    // Length of the input left when the failure was raised, resolved into
    // `position` once the whole source is known.
    remaining: usize,
    found: String,
    // Set once the reason names what was expected; outer contexts keep it.
    settled: bool,
}

impl Error {
    pub(crate) fn new(input: Span, reason: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            reason: reason.into(),
            remaining: input.len(),
            found: found(input),
            settled: true,
        }
    }

    pub(crate) fn unexpected(input: Span) -> Self {
        let found = found(input);

        Self {
            position: Position::default(),
            reason: format!("unexpected {}", found),
            remaining: input.len(),
            found,
            settled: false,
        }
    }

    pub(crate) fn at_end(source: &[u8], reason: impl Into<String>) -> Self {
        Self::new(&source[source.len()..], reason).locate(source)
    }

    pub(crate) fn locate(mut self, source: &[u8]) -> Self {
        let offset = source.len().saturating_sub(self.remaining);
        self.position = Position::locate(source, offset);
        self
    }
}

fn found(input: Span) -> String {
    match input.first() {
        Some(b) if b.is_ascii_graphic() => format!("'{}'", char::from(*b)),
        Some(b) => format!("byte 0x{:02X}", b),
        None => "end of input".into(),
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.reason, self.position.line, self.position.col
        )
    }
}

impl std::error::Error for Error {}

impl<'a> ParseError<Span<'a>> for Error {
    fn from_error_kind(input: Span<'a>, _kind: ErrorKind) -> Self {
        Self::unexpected(input)
    }

    fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<Span<'a>> for Error {
    fn add_context(_input: Span<'a>, ctx: &'static str, mut other: Self) -> Self {
        if !other.settled {
            other.reason = format!("expected {} but found {}", ctx, other.found);
            other.settled = true;
        }

        other
    }
}

impl<'a, T> FromExternalError<Span<'a>, T> for Error {
    fn from_external_error(input: Span<'a>, _kind: ErrorKind, _e: T) -> Self {
        Self::unexpected(input)
    }
}
