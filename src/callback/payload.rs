//! Decoding of callback bodies.

use std::fmt;

use serde_json::Value;

/// Body text that did not parse as JSON, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText(pub String);

/// What a callback body decoded to.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The body was empty; no parse was attempted.
    Absent,
    /// The body parsed as JSON.
    Structured(Value),
    /// The body was not JSON.
    Raw(String),
}

/// Attempt to parse `text` as JSON, handing the text back on failure.
pub fn parse_structured(text: &str) -> Result<Value, RawText> {
    serde_json::from_str(text).map_err(|_| RawText(text.to_owned()))
}

impl Payload {
    /// Decode a request body.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD before parsing, so a
    /// binary body ends up as [`Payload::Raw`] instead of failing the request.
    pub fn decode(body: &[u8]) -> Self {
        if body.is_empty() {
            return Payload::Absent;
        }

        let text = String::from_utf8_lossy(body);
        match parse_structured(&text) {
            Ok(value) => Payload::Structured(value),
            Err(RawText(raw)) => Payload::Raw(raw),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Absent => f.write_str("None"),
            Payload::Structured(value) => write!(f, "{value}"),
            Payload::Raw(text) => f.write_str(text),
        }
    }
}
