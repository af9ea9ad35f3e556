//! Dot-path navigation over [`JsonValue`] trees.
//!
//! A path like `"a.b.1"` is split on `.` into segments. A segment consisting
//! only of ASCII digits addresses an array index, any other segment addresses
//! an object key. [`JsonValue::get_path`] reads, [`JsonValue::set_path`]
//! writes (creating intermediate objects as needed), and
//! [`JsonValue::path_or`] reads with a typed fallback.

use crate::error::JsonError;
use crate::types::{FromJson, JsonValue};

/// One step of a dot path: either an object key or an array index.
#[derive(Clone, Copy, Debug, PartialEq)]
enum PathSegment<'a> {
	Key(&'a str),
	Index(usize),
}

/// Digits-only segments become indexes. A digit run too large for `usize`
/// cannot address any array and is treated as a key.
fn parse_segment(text: &str) -> PathSegment {
	if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
		if let Ok(index) = text.parse::<usize>() {
			return PathSegment::Index(index);
		}
	}
	PathSegment::Key(text)
}

fn parse_path(path: &str) -> Vec<PathSegment> {
	path.split('.').map(parse_segment).collect()
}

/// Validate that writing through `segments` would succeed, without mutating.
///
/// Missing object keys are fine (the write pass creates them), so the walk
/// continues through a virtual `Null` once a key is absent. Index segments
/// never create or grow arrays and must hit an existing element.
fn check_write_path(root: &JsonValue, segments: &[PathSegment]) -> Result<(), JsonError> {
	const NULL: JsonValue = JsonValue::Null;
	let mut current = root;
	for segment in segments {
		current = match segment {
			PathSegment::Key(key) => match current {
				JsonValue::Object(object) => object.get(key).unwrap_or(&NULL),
				JsonValue::Null => &NULL,
				_ => {
					return Err(JsonError::TypeMismatch {
						expected: "an object",
						found: current.type_as_str(),
					});
				}
			},
			PathSegment::Index(index) => match current {
				// a null intermediate would promote to an empty array, so any
				// index into it is out of range
				JsonValue::Null => return Err(JsonError::IndexOutOfRange { index: *index, len: 0 }),
				_ => current.at_index(*index)?,
			},
		};
	}
	Ok(())
}

impl JsonValue {
	/// Navigate a dot path and return a reference to the addressed value.
	///
	/// # Errors
	/// Returns an error naming the full path when a key is absent, an index is
	/// out of range, or a segment is applied to the wrong kind of value.
	pub fn get_path(&self, path: &str) -> Result<&JsonValue, JsonError> {
		let mut current = self;
		for segment in parse_path(path) {
			current = match segment {
				PathSegment::Key(key) => current.at(key),
				PathSegment::Index(index) => current.at_index(index),
			}
			.map_err(|source| JsonError::at_path(path, source))?;
		}
		Ok(current)
	}

	/// `true` iff `get_path` would succeed.
	#[must_use]
	pub fn has_path(&self, path: &str) -> bool {
		self.get_path(path).is_ok()
	}

	/// Navigate a dot path and overwrite the addressed slot with `value`.
	///
	/// Key segments create what is missing: a `Null` along the way is promoted
	/// to an object and absent keys are inserted. Index segments never create
	/// or grow arrays; they must address an existing element. On error the
	/// tree is left unchanged.
	///
	/// # Errors
	/// Returns an error naming the full path when an index is out of range or
	/// a segment is applied to the wrong kind of value.
	pub fn set_path(&mut self, path: &str, value: impl Into<JsonValue>) -> Result<(), JsonError> {
		let segments = parse_path(path);
		check_write_path(self, &segments).map_err(|source| JsonError::at_path(path, source))?;

		let mut current = self;
		for segment in segments {
			current = match segment {
				PathSegment::Key(key) => current.entry(key),
				PathSegment::Index(index) => current.as_array_mut().and_then(|array| {
					let len = array.len();
					array.get_mut(index).ok_or(JsonError::IndexOutOfRange { index, len })
				}),
			}
			.map_err(|source| JsonError::at_path(path, source))?;
		}
		*current = value.into();
		Ok(())
	}

	/// Navigate a dot path and convert the result to `T`, falling back to
	/// `default` when the path does not resolve or the value does not convert.
	/// Never fails.
	#[must_use]
	pub fn path_or<T: FromJson>(&self, path: &str, default: T) -> T {
		self
			.get_path(path)
			.ok()
			.and_then(|value| T::from_json(value).ok())
			.unwrap_or(default)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	fn sample() -> JsonValue {
		JsonValue::parse_str(r#"{"a":{"b":[10,20]},"s":"text"}"#).unwrap()
	}

	#[test]
	fn test_parse_segment() {
		assert_eq!(parse_segment("key"), PathSegment::Key("key"));
		assert_eq!(parse_segment("0"), PathSegment::Index(0));
		assert_eq!(parse_segment("17"), PathSegment::Index(17));
		assert_eq!(parse_segment("1a"), PathSegment::Key("1a"));
		assert_eq!(parse_segment(""), PathSegment::Key(""));
		// digit run too large for usize addresses nothing, treated as a key
		assert_eq!(
			parse_segment("99999999999999999999999999"),
			PathSegment::Key("99999999999999999999999999")
		);
	}

	#[test]
	fn test_get_path() -> Result<()> {
		let value = sample();

		assert_eq!(value.get_path("a.b.1")?, &JsonValue::Integer(20));
		assert_eq!(value.get_path("a.b")?.len(), 2);
		assert_eq!(value.get_path("s")?.as_str()?, "text");
		Ok(())
	}

	#[test]
	fn test_get_path_errors_name_the_path() {
		let value = sample();

		assert_eq!(
			value.get_path("a.x").unwrap_err().to_string(),
			"invalid path 'a.x': key 'x' not found"
		);
		assert_eq!(
			value.get_path("a.b.2").unwrap_err().to_string(),
			"invalid path 'a.b.2': index 2 out of range, length is 2"
		);
		assert_eq!(
			value.get_path("s.x").unwrap_err().to_string(),
			"invalid path 's.x': expected an object, found string"
		);
		assert_eq!(
			value.get_path("a.0").unwrap_err().to_string(),
			"invalid path 'a.0': expected an array, found object"
		);
	}

	#[test]
	fn test_has_path() {
		let value = sample();

		assert!(value.has_path("a.b.0"));
		assert!(value.has_path("s"));
		assert!(!value.has_path("a.b.2"));
		assert!(!value.has_path("missing"));
	}

	#[test]
	fn test_set_path_overwrites_array_element() -> Result<()> {
		let mut value = sample();
		value.set_path("a.b.1", 99)?;

		assert_eq!(value.at("a")?.at("b")?.stringify(), "[10,99]");
		Ok(())
	}

	#[test]
	fn test_set_path_creates_intermediate_objects() -> Result<()> {
		let mut value = JsonValue::Null;
		value.set_path("x.y.z", "deep")?;

		assert_eq!(value.stringify(), r#"{"x":{"y":{"z":"deep"}}}"#);

		// existing siblings are untouched
		value.set_path("x.w", 1)?;
		assert_eq!(value.stringify(), r#"{"x":{"y":{"z":"deep"},"w":1}}"#);
		Ok(())
	}

	#[test]
	fn test_set_path_never_grows_arrays() {
		let mut value = sample();

		let error = value.set_path("a.b.5", 1).unwrap_err();
		assert_eq!(error.to_string(), "invalid path 'a.b.5': index 5 out of range, length is 2");

		// an index under a missing key addresses a virtual null, length 0
		let error = value.set_path("a.c.0", 1).unwrap_err();
		assert_eq!(error.to_string(), "invalid path 'a.c.0': index 0 out of range, length is 0");
	}

	#[test]
	fn test_set_path_index_into_null_is_out_of_range() {
		// a null intermediate promotes to an array per segment kind, so the
		// failure is an out-of-range index, not a kind mismatch
		let mut value = JsonValue::parse_str(r#"{"a":null}"#).unwrap();
		let error = value.set_path("a.0", 1).unwrap_err();

		assert_eq!(
			error,
			JsonError::at_path("a.0", JsonError::IndexOutOfRange { index: 0, len: 0 })
		);
		assert_eq!(value.stringify(), r#"{"a":null}"#);
	}

	#[test]
	fn test_set_path_failure_leaves_tree_unchanged() {
		let mut value = sample();
		let before = value.clone();

		assert!(value.set_path("n.e.w.0", 1).is_err());
		assert!(value.set_path("a.b.9", 1).is_err());
		assert!(value.set_path("s.k", 1).is_err());
		assert_eq!(value, before);
	}

	#[test]
	fn test_set_path_type_mismatch() {
		let mut value = sample();

		assert_eq!(
			value.set_path("s.k", 1).unwrap_err().to_string(),
			"invalid path 's.k': expected an object, found string"
		);
		assert_eq!(
			value.set_path("a.1", 1).unwrap_err().to_string(),
			"invalid path 'a.1': expected an array, found object"
		);
	}

	#[test]
	fn test_path_or() {
		let value = sample();

		assert_eq!(value.path_or("a.b.0", 0), 10);
		assert_eq!(value.path_or("missing.path", 7), 7);
		assert_eq!(value.path_or("s", String::new()), "text");
		// wrong type falls back too
		assert_eq!(value.path_or("s", 3), 3);
	}
}
