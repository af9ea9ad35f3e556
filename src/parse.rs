//! Recursive-descent JSON parser producing [`JsonValue`] trees.
//!
//! [`parse_json_str`] is the document-level entry point: it parses exactly one
//! value and rejects any trailing non-whitespace. [`parse_json_iter`] parses a
//! single value from a [`ByteIterator`], leaving the cursor right after it.

use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_lexeme, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use crate::error::JsonError;
use crate::types::{JsonArray, JsonObject, JsonValue};

/// Parse a complete JSON document from a string.
///
/// The document must contain exactly one JSON value; anything other than
/// whitespace after it is an error.
///
/// # Errors
/// Returns a parse error describing the position and the surrounding input.
pub fn parse_json_str(json: &str) -> Result<JsonValue, JsonError> {
	let mut iter = ByteIterator::from_str(json);
	let value = parse_json_iter(&mut iter)?;
	iter.skip_whitespace();
	if iter.peek().is_some() {
		return Err(iter.format_error("unexpected trailing data"));
	}
	Ok(value)
}

/// Parse a single JSON value at the current cursor position.
///
/// Dispatches on the first non-whitespace byte and leaves the cursor
/// positioned right after the parsed value.
///
/// # Errors
/// Returns a parse error on malformed input or unexpected end of input.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue, JsonError> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => Ok(JsonValue::Array(parse_json_array(iter)?)),
		b'{' => Ok(JsonValue::Object(parse_json_object(iter)?)),
		b'"' => Ok(JsonValue::String(parse_quoted_json_string(iter)?)),
		b'0'..=b'9' | b'-' => parse_json_number(iter),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		_ => Err(iter.format_error("unexpected character while parsing a value")),
	}
}

fn parse_json_array(iter: &mut ByteIterator) -> Result<JsonArray, JsonError> {
	parse_array_entries(iter, parse_json_iter).map(JsonArray)
}

fn parse_json_object(iter: &mut ByteIterator) -> Result<JsonObject, JsonError> {
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter| {
		// duplicate keys: last value wins, first position kept
		object.insert(key, parse_json_iter(iter)?);
		Ok(())
	})?;
	Ok(object)
}

/// Integer lexemes become `Integer`; lexemes with a fraction or exponent
/// become `Float`. An integer lexeme outside the `i64` range falls back to
/// `Float`.
fn parse_json_number(iter: &mut ByteIterator) -> Result<JsonValue, JsonError> {
	let (lexeme, is_float) = parse_number_lexeme(iter)?;
	if !is_float {
		if let Ok(integer) = lexeme.parse::<i64>() {
			return Ok(JsonValue::Integer(integer));
		}
	}
	lexeme
		.parse::<f64>()
		.map(JsonValue::Float)
		.map_err(|_| iter.format_error("invalid number"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_parse_scalars() {
		assert_eq!(parse_json_str("null").unwrap(), JsonValue::Null);
		assert_eq!(parse_json_str("true").unwrap(), JsonValue::Boolean(true));
		assert_eq!(parse_json_str("false").unwrap(), JsonValue::Boolean(false));
		assert_eq!(parse_json_str("\"text\"").unwrap(), JsonValue::from("text"));
		assert_eq!(parse_json_str("42").unwrap(), JsonValue::Integer(42));
		assert_eq!(parse_json_str("-7").unwrap(), JsonValue::Integer(-7));
	}

	#[rstest]
	#[case("42", JsonValue::Integer(42))]
	#[case("-0", JsonValue::Integer(0))]
	#[case("42.5", JsonValue::Float(42.5))]
	#[case("42.0", JsonValue::Float(42.0))]
	#[case("1e3", JsonValue::Float(1000.0))]
	#[case("-2.5E-1", JsonValue::Float(-0.25))]
	#[case("9223372036854775807", JsonValue::Integer(i64::MAX))]
	#[case("-9223372036854775808", JsonValue::Integer(i64::MIN))]
	// integer lexemes outside the i64 range fall back to Float
	#[case("9223372036854775808", JsonValue::Float(9.223_372_036_854_776e18))]
	fn test_parse_number_kinds(#[case] input: &str, #[case] expected: JsonValue) {
		let value = parse_json_str(input).unwrap();
		assert_eq!(value, expected);
		match (&value, &expected) {
			(JsonValue::Integer(_), JsonValue::Integer(_)) | (JsonValue::Float(_), JsonValue::Float(_)) => {}
			_ => panic!("number kind mismatch for {input}: {value:?}"),
		}
	}

	#[test]
	fn test_parse_nested_document() {
		let value = parse_json_str(
			r##"{
				"string": "text",
				"number": 42,
				"float": 3.14,
				"boolean": true,
				"null": null,
				"array": [1, "two", false],
				"object": {"key": "value"}
			}"##,
		)
		.unwrap();

		assert_eq!(value.at("string").unwrap(), &JsonValue::from("text"));
		assert_eq!(value.at("number").unwrap(), &JsonValue::Integer(42));
		assert_eq!(value.at("float").unwrap(), &JsonValue::Float(3.14));
		assert_eq!(value.at("boolean").unwrap(), &JsonValue::Boolean(true));
		assert_eq!(value.at("null").unwrap(), &JsonValue::Null);
		assert_eq!(value.at("array").unwrap().len(), 3);
		assert_eq!(value.at("object").unwrap().at("key").unwrap(), &JsonValue::from("value"));
	}

	#[test]
	fn test_whitespace_is_tolerated() {
		let value = parse_json_str(" \t\r\n [ 1 , \n 2 ] \r\n ").unwrap();
		assert_eq!(value, JsonValue::from(vec![1, 2]));
	}

	#[test]
	fn test_duplicate_keys_last_wins_first_position() {
		let value = parse_json_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
		let object = value.as_object().unwrap();

		assert_eq!(object.len(), 2);
		assert_eq!(object.get("a"), Some(&JsonValue::Integer(3)));
		assert_eq!(value.stringify(), r#"{"a":3,"b":2}"#);
	}

	#[rstest]
	#[case::empty("")]
	#[case::whitespace_only("  \n ")]
	#[case::trailing_data("1 2")]
	#[case::trailing_garbage("{} x")]
	#[case::bare_word("hello")]
	#[case::missing_value(r#"{"a":}"#)]
	#[case::trailing_comma_array("[1,2,]")]
	#[case::trailing_comma_object(r#"{"a":1,}"#)]
	#[case::missing_colon(r#"{"a" 1}"#)]
	#[case::missing_comma(r#"[1 2]"#)]
	#[case::unquoted_key("{a:1}")]
	#[case::unterminated_string("\"abc")]
	#[case::unterminated_array("[1,2")]
	#[case::unterminated_object(r#"{"a":1"#)]
	#[case::lone_minus("-")]
	#[case::dangling_fraction("1.")]
	#[case::leading_plus("+1")]
	#[case::bad_escape("\"\\x\"")]
	#[case::lone_surrogate("\"\\uD800\"")]
	fn test_rejects_malformed(#[case] input: &str) {
		assert!(parse_json_str(input).is_err(), "expected parse failure for {input:?}");
	}

	#[test]
	fn test_error_carries_position() {
		let error = parse_json_str("[1,2,]").unwrap_err().to_string();
		assert!(error.contains("position 5"), "unexpected message: {error}");
	}

	#[test]
	fn test_parse_json_iter_stops_after_value() {
		let mut iter = ByteIterator::from_str("[1,2] tail");
		let value = parse_json_iter(&mut iter).unwrap();

		assert_eq!(value, JsonValue::from(vec![1, 2]));
		iter.skip_whitespace();
		assert_eq!(iter.peek(), Some(b't'));
	}
}
