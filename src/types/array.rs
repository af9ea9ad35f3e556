//! JSON array type and utilities for serializing and converting to Rust types.

use crate::error::JsonError;
use crate::stringify::{stringify, stringify_pretty_at};
use crate::types::JsonValue;
use std::fmt::{Debug, Display};

/// A JSON array, backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		JsonArray(Vec::new())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	#[must_use]
	pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
		self.0.get_mut(index)
	}

	/// Append a value, converting it into a `JsonValue`.
	pub fn push(&mut self, value: impl Into<JsonValue>) {
		self.0.push(value.into());
	}

	/// Return an iterator over the elements in order.
	pub fn iter(&self) -> impl Iterator<Item = &JsonValue> {
		self.0.iter()
	}

	/// Get a reference to the underlying `Vec<JsonValue>`.
	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	/// Serialize the array to a compact string without extra whitespace.
	///
	/// # Examples
	///
	/// ```rust
	/// use dotjson::{JsonArray, JsonValue};
	/// let arr = JsonArray(vec![JsonValue::from(1), JsonValue::from(2)]);
	/// assert_eq!(arr.stringify(), "[1,2]");
	/// ```
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// Serialize the array to a pretty-printed string at nesting level `depth`,
	/// each level indented by `indent` spaces. An empty array collapses to `[]`.
	#[must_use]
	pub fn stringify_pretty(&self, indent: usize, depth: usize) -> String {
		if self.0.is_empty() {
			return String::from("[]");
		}
		let inner = " ".repeat((depth + 1) * indent);
		let items = self
			.0
			.iter()
			.map(|value| format!("{inner}{}", stringify_pretty_at(value, indent, depth + 1)))
			.collect::<Vec<_>>();
		format!("[\n{}\n{}]", items.join(",\n"), " ".repeat(depth * indent))
	}

	/// Convert all elements to Rust `String`s, returning an error if any
	/// element is not a string.
	///
	/// # Errors
	/// Returns an error if any element is not a JSON string.
	pub fn as_string_vec(&self) -> Result<Vec<String>, JsonError> {
		self.0.iter().map(JsonValue::as_string).collect()
	}

	/// Convert all elements to `i64`, returning an error if any element is not
	/// numeric. Floats truncate toward zero.
	///
	/// # Errors
	/// Returns an error if any element is not a JSON number.
	pub fn as_i64_vec(&self) -> Result<Vec<i64>, JsonError> {
		self.0.iter().map(JsonValue::as_i64).collect()
	}

	/// Convert all elements to `f64`, returning an error if any element is not
	/// numeric.
	///
	/// # Errors
	/// Returns an error if any element is not a JSON number.
	pub fn as_f64_vec(&self) -> Result<Vec<f64>, JsonError> {
		self.0.iter().map(JsonValue::as_f64).collect()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(Vec::from_iter(input.into_iter().map(JsonValue::from)))
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		JsonArray(Vec::from_iter(input.iter().map(|v| JsonValue::from(v.clone()))))
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		JsonArray(Vec::from_iter(input.iter().map(|v| JsonValue::from(*v))))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	#[test]
	fn test_stringify() {
		let array = JsonArray(vec![JsonValue::from("hello"), JsonValue::from(42), JsonValue::from(true)]);

		assert_eq!(array.stringify(), r#"["hello",42,true]"#);
		assert_eq!(JsonArray::new().stringify(), "[]");
	}

	#[test]
	fn test_stringify_pretty() {
		let array = JsonArray::from(vec!["a", "b"]);
		assert_eq!(array.stringify_pretty(2, 0), "[\n  \"a\",\n  \"b\"\n]");
		assert_eq!(JsonArray::new().stringify_pretty(2, 0), "[]");
	}

	#[test]
	fn test_push_and_get() {
		let mut array = JsonArray::new();
		array.push(1);
		array.push("two");

		assert_eq!(array.len(), 2);
		assert_eq!(array.get(0), Some(&JsonValue::Integer(1)));
		assert_eq!(array.get(1), Some(&JsonValue::from("two")));
		assert_eq!(array.get(2), None);
	}

	#[test]
	fn test_as_string_vec() -> Result<()> {
		let array = JsonArray::from(vec!["hello", "world"]);
		assert_eq!(array.as_string_vec()?, vec!["hello", "world"]);

		assert_eq!(
			JsonArray::from(vec![1, 2]).as_string_vec().unwrap_err().to_string(),
			"expected a string, found integer"
		);
		Ok(())
	}

	#[test]
	fn test_as_number_vecs() -> Result<()> {
		let array = JsonArray(vec![JsonValue::Integer(1), JsonValue::Float(2.5)]);

		assert_eq!(array.as_i64_vec()?, vec![1, 2]);
		assert_eq!(array.as_f64_vec()?, vec![1.0, 2.5]);

		assert!(JsonArray::from(vec!["a"]).as_i64_vec().is_err());
		Ok(())
	}

	#[test]
	fn test_from_impls() {
		assert_eq!(JsonArray::from(vec![1, 2, 3]).len(), 3);

		let source = vec![4, 5];
		assert_eq!(JsonArray::from(&source).0, vec![JsonValue::Integer(4), JsonValue::Integer(5)]);

		let fixed = [6, 7];
		assert_eq!(JsonArray::from(&fixed).0, vec![JsonValue::Integer(6), JsonValue::Integer(7)]);
	}

	#[test]
	fn test_debug_impl() {
		let array = JsonArray(vec![JsonValue::from("debug"), JsonValue::from(42)]);
		assert_eq!(format!("{array:?}"), r#"[String("debug"), Integer(42)]"#);
	}
}
