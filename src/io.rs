//! Reading and writing JSON documents as files.

use crate::types::JsonValue;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read and parse a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or does not contain valid JSON.
pub fn read_json_file(path: impl AsRef<Path>) -> Result<JsonValue> {
	let path = path.as_ref();
	log::debug!("reading json file {path:?}");
	let text = fs::read_to_string(path).with_context(|| format!("failed to read file {path:?}"))?;
	JsonValue::parse_str(&text).with_context(|| format!("failed to parse json file {path:?}"))
}

/// Serialize a value and write it to a file, compact by default or
/// pretty-printed with `indent` spaces per level.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_json_file(path: impl AsRef<Path>, json: &JsonValue, indent: Option<usize>) -> Result<()> {
	let path = path.as_ref();
	log::debug!("writing json file {path:?}");
	let text = match indent {
		Some(indent) => json.stringify_pretty(indent),
		None => json.stringify(),
	};
	fs::write(path, text).with_context(|| format!("failed to write file {path:?}"))
}
