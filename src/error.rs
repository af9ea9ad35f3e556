//! Error taxonomy shared by the parser, the value accessors and the path navigator.

use thiserror::Error;

/// Errors produced while parsing, accessing and navigating JSON values.
///
/// The strict APIs (`as_*`, `at`, `get_path`, `parse_json_str`) surface these;
/// the safe APIs (`value_or`, `path_or`, `has_path`) collapse every failure to
/// the supplied default. Serialization never fails.
#[derive(Debug, Error, PartialEq)]
pub enum JsonError {
	/// Malformed input text; the message carries the byte position and a
	/// snippet of the surrounding input. Always fatal, no partial tree.
	#[error("{0}")]
	Parse(String),
	/// Operation attempted on a value whose active kind is incompatible.
	#[error("expected {expected}, found {found}")]
	TypeMismatch {
		/// What the operation required, e.g. `"an object"`.
		expected: &'static str,
		/// The actual kind of the value.
		found: &'static str,
	},
	/// Checked object access on an absent key.
	#[error("key '{0}' not found")]
	KeyNotFound(String),
	/// Checked array access at or beyond the current length.
	#[error("index {index} out of range, length is {len}")]
	IndexOutOfRange {
		/// The offending index.
		index: usize,
		/// The array length at the time of access.
		len: usize,
	},
	/// A path-resolution failure, wrapping the underlying error together with
	/// the original path string.
	#[error("invalid path '{path}': {source}")]
	Path {
		/// The full dot-separated path that failed to resolve.
		path: String,
		/// The underlying mismatch/not-found/out-of-range error.
		source: Box<JsonError>,
	},
}

impl JsonError {
	pub(crate) fn at_path(path: &str, source: JsonError) -> Self {
		JsonError::Path {
			path: path.to_string(),
			source: Box::new(source),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(
			JsonError::TypeMismatch {
				expected: "an object",
				found: "string"
			}
			.to_string(),
			"expected an object, found string"
		);
		assert_eq!(JsonError::KeyNotFound("health".to_string()).to_string(), "key 'health' not found");
		assert_eq!(
			JsonError::IndexOutOfRange { index: 4, len: 2 }.to_string(),
			"index 4 out of range, length is 2"
		);
	}

	#[test]
	fn test_path_wraps_source() {
		let error = JsonError::at_path("a.b", JsonError::KeyNotFound("b".to_string()));
		assert_eq!(error.to_string(), "invalid path 'a.b': key 'b' not found");
	}
}
