// SPDX-License-Identifier: MPL-2.0
//! Turns a response body into the text shown by a label.
//!
//! Owner endpoints answer either with a bare name (`alice`) or with a JSON
//! scalar (`"alice"`, `42`). JSON strings are unquoted, JSON numbers and
//! booleans keep their JSON spelling, and everything else is shown as the
//! raw body without surrounding whitespace.

use serde_json::Value;

/// Decodes a response body into display text.
#[must_use]
pub fn decode(body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(text)) => text,
        Ok(scalar @ (Value::Number(_) | Value::Bool(_))) => scalar.to_string(),
        _ => trimmed.to_string(),
    }
}
