//! Serialization of [`JsonValue`] trees into JSON text.
//!
//! [`stringify`] produces the compact form without any extra whitespace;
//! [`stringify_pretty`] produces a multi-line form with configurable
//! indentation. Both forms round-trip through the parser, including the
//! distinction between integer and float numbers.

use crate::types::JsonValue;

/// Serialize a value into a compact JSON string.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::Array(array) => array.stringify(),
		JsonValue::Boolean(boolean) => boolean.to_string(),
		JsonValue::Float(float) => format_float(*float),
		JsonValue::Integer(integer) => integer.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Object(object) => object.stringify(),
		JsonValue::String(string) => format!("\"{}\"", escape_json_string(string)),
	}
}

/// Serialize a value into a pretty-printed JSON string, each nesting level
/// indented by `indent` spaces.
#[must_use]
pub fn stringify_pretty(json: &JsonValue, indent: usize) -> String {
	stringify_pretty_at(json, indent, 0)
}

/// Pretty-print a value that sits at nesting level `depth`.
///
/// Scalars have no inner structure and use their compact form; arrays and
/// objects lay out one element per line.
#[must_use]
pub(crate) fn stringify_pretty_at(json: &JsonValue, indent: usize, depth: usize) -> String {
	match json {
		JsonValue::Array(array) => array.stringify_pretty(indent, depth),
		JsonValue::Object(object) => object.stringify_pretty(indent, depth),
		_ => stringify(json),
	}
}

/// Escape a string for embedding in JSON, without the surrounding quotes.
///
/// Quotes and backslashes are escaped, the control characters with short
/// escapes use them, and all other control characters below U+0020 become
/// `\u00XX`. Everything else passes through unchanged.
#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut result = String::with_capacity(input.len() + 2);
	for c in input.chars() {
		match c {
			'"' => result.push_str("\\\""),
			'\\' => result.push_str("\\\\"),
			'\x08' => result.push_str("\\b"),
			'\x0C' => result.push_str("\\f"),
			'\n' => result.push_str("\\n"),
			'\r' => result.push_str("\\r"),
			'\t' => result.push_str("\\t"),
			c if c < '\x20' => result.push_str(&format!("\\u{:04x}", c as u32)),
			c => result.push(c),
		}
	}
	result
}

/// Format a float so that it re-parses as a float.
///
/// Values without a fractional part get a `.0` suffix, so `2.0` never
/// collapses into the integer `2`. Non-finite values have no JSON
/// representation and become `null`.
#[must_use]
pub(crate) fn format_float(value: f64) -> String {
	if !value.is_finite() {
		return String::from("null");
	}
	let text = value.to_string();
	if text.contains(['.', 'e', 'E']) {
		text
	} else {
		format!("{text}.0")
	}
}
