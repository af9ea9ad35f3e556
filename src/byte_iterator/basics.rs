//! Token-level parsing helpers built on top of [`ByteIterator`].
//!
//! These functions implement the lexical layer of the JSON grammar:
//! - `parse_tag` for the fixed literals `null`, `true` and `false`
//! - `parse_quoted_json_string` for string literals with escapes
//!   (`\" \\ \/ \b \f \n \r \t \uXXXX`, including surrogate pairs)
//! - `parse_number_lexeme` for the JSON number grammar
//! - `parse_object_entries` and `parse_array_entries` to iterate over
//!   object/array contents
//!
//! Parsing functions consume only as much as needed and leave the cursor
//! positioned at the next token (e.g., after a closing `]` or `}`).

use super::iterator::ByteIterator;
use crate::error::JsonError;

/// Match a fixed ASCII tag at the current cursor position.
///
/// Advances byte by byte and returns an error on the first mismatch.
///
/// # Errors
/// Returns an error if the upcoming bytes do not exactly match `tag` or if the
/// buffer is exhausted prematurely.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<(), JsonError> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("invalid literal, expected '{tag}'")));
		}
	}
	Ok(())
}

/// Parse a JSON quoted string literal and return it as `String`.
///
/// Supports the standard JSON escapes (`\" \\ \/ \b \f \n \r \t`) and `\uXXXX`
/// escapes with exactly four case-insensitive hex digits. A high surrogate
/// must be followed by a `\uXXXX` low surrogate; the pair is combined into a
/// single code point above U+FFFF. Leaves the cursor positioned after the
/// closing quote.
///
/// # Errors
/// - Missing opening or closing quote
/// - Unknown escape sequence or malformed `\uXXXX` hex
/// - Lone or mismatched surrogates
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String, JsonError> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let c = parse_unicode_escape(iter)?;
					let mut buffer = [0u8; 4];
					bytes.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(|_| iter.format_error("string is not valid UTF-8"))
}

/// Decode the `XXXX` part of a `\uXXXX` escape, combining surrogate pairs.
///
/// The cursor must be positioned right after the `u`; for a high surrogate the
/// following `\uXXXX` low surrogate is consumed as well.
fn parse_unicode_escape(iter: &mut ByteIterator) -> Result<char, JsonError> {
	let unit = parse_hex_unit(iter)?;
	let code_point = match unit {
		0xD800..=0xDBFF => {
			if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
				return Err(iter.format_error("expected low surrogate after high surrogate"));
			}
			let low = parse_hex_unit(iter)?;
			if !(0xDC00..=0xDFFF).contains(&low) {
				return Err(iter.format_error("invalid low surrogate"));
			}
			0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
		}
		0xDC00..=0xDFFF => return Err(iter.format_error("unexpected lone low surrogate")),
		_ => u32::from(unit),
	};
	char::from_u32(code_point).ok_or_else(|| iter.format_error("invalid unicode code point"))
}

fn parse_hex_unit(iter: &mut ByteIterator) -> Result<u16, JsonError> {
	let mut value: u16 = 0;
	for _ in 0..4 {
		let digit = match iter.expect_next_byte()? {
			b @ b'0'..=b'9' => b - b'0',
			b @ b'a'..=b'f' => b - b'a' + 10,
			b @ b'A'..=b'F' => b - b'A' + 10,
			_ => return Err(iter.format_error("invalid hex digit in unicode escape")),
		};
		value = (value << 4) | u16::from(digit);
	}
	Ok(value)
}

/// Parse a JSON number and return its lexeme together with a float marker.
///
/// Accepts the JSON number grammar: optional `-`, mandatory integer digit run,
/// optional fraction, and optional exponent (`e`/`E` with optional sign). The
/// marker is `true` when a fraction or exponent is present. Leaves the cursor
/// at the first non-number byte.
///
/// # Errors
/// Returns an error if required digits are missing.
pub fn parse_number_lexeme(iter: &mut ByteIterator) -> Result<(String, bool), JsonError> {
	let mut number = Vec::with_capacity(16);
	let mut is_float = false;

	if let Some(b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut integer_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		integer_digits = true;
		number.push(iter.expect_next_byte()?);
	}
	if !integer_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		is_float = true;
		number.push(iter.expect_next_byte()?);
		let mut fraction_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			fraction_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !fraction_digits {
			return Err(iter.format_error("expected digits after decimal point"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		is_float = true;
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	let text = String::from_utf8(number).map_err(|_| iter.format_error("invalid number"))?;
	Ok((text, is_float))
}

/// Iterate over JSON object entries, invoking `parse_value` for each key.
///
/// Expects a `{ ... }` structure with quoted-string keys and a colon between
/// key and value. After each value, `,` continues to the next entry and `}`
/// terminates the object; a comma must be followed by another entry, so a
/// trailing comma is rejected.
///
/// # Errors
/// Returns an error on malformed objects (missing quotes/colon/comma/brace,
/// trailing comma) or if `parse_value` returns an error.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<(), JsonError>,
) -> Result<(), JsonError> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if let Some(b'}') = iter.peek() {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("expected '\"' while parsing an object key"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b'}' => break,
			b',' => {}
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
	Ok(())
}

/// Iterate over JSON array entries, collecting the results from `parse_value`.
///
/// Expects a `[ ... ]` structure; returns an empty `Vec` for `[]`, otherwise
/// collects each parsed element separated by commas. A comma must be followed
/// by another element, so a trailing comma is rejected.
///
/// # Errors
/// Returns an error on malformed arrays (missing brackets/commas, trailing
/// comma) or if `parse_value` returns an error.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R, JsonError>,
) -> Result<Vec<R>, JsonError> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	result.push(parse_value(iter)?);

	loop {
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b']' => break,
			b',' => {
				iter.skip_whitespace();
				result.push(parse_value(iter)?);
			}
			_ => return Err(iter.format_error("expected ',' or ']'")),
		}
	}

	Ok(result)
}
