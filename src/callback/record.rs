//! The per-request log record.

use std::fmt::{self, Write};

use crate::callback::payload::Payload;

/// Divider line that opens every record.
pub const DIVIDER: &str = "=== Callback Received ===";

/// Everything logged about one callback.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackRecord {
    /// Request target exactly as sent, query string included.
    pub path: String,
    /// Headers collapsed to one value per name, in first-seen order.
    pub headers: Vec<(String, String)>,
    pub payload: Payload,
}

impl CallbackRecord {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Render `'text'` with backslashes and single quotes escaped.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('\'')?;
    for ch in text.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            _ => f.write_char(ch)?,
        }
    }
    f.write_char('\'')
}

impl fmt::Display for CallbackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{DIVIDER}")?;
        writeln!(f, "Path: {}", self.path)?;

        f.write_str("Headers: {")?;
        for (i, (name, value)) in self.headers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, name)?;
            f.write_str(": ")?;
            write_quoted(f, value)?;
        }
        f.write_str("}\n")?;

        writeln!(f, "Body: {}", self.payload)
    }
}
