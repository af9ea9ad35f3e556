//! JSON value enum representing any valid JSON data, with accessors and mutators.

use crate::error::JsonError;
use crate::parse::parse_json_str;
use crate::stringify::{stringify, stringify_pretty};
use crate::types::{JsonArray, JsonObject};
use std::fmt::Display;

/// Represents any JSON data: null, booleans, integers, floats, strings,
/// arrays, and objects.
///
/// A value owns its entire subtree; `Clone` deep-copies it and the default
/// value is `Null`. Integers and floats are kept as distinct kinds, matching
/// the distinction the parser makes between `42` and `42.0`.
#[derive(Clone, Debug, Default)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Float(f64),
	Integer(i64),
	#[default]
	Null,
	Object(JsonObject),
	String(String),
}

/// Conversion from a borrowed `JsonValue` into a plain Rust type.
///
/// Implemented for `bool`, `String`, all primitive numbers and `JsonValue`
/// itself. Numeric implementations coerce between the two number kinds
/// (floats truncate toward zero when read as integers) but never convert
/// from strings or booleans.
pub trait FromJson: Sized {
	/// # Errors
	/// Returns a `TypeMismatch` error if the active kind is incompatible.
	fn from_json(value: &JsonValue) -> Result<Self, JsonError>;
}

impl FromJson for bool {
	fn from_json(value: &JsonValue) -> Result<Self, JsonError> {
		value.as_bool()
	}
}

impl FromJson for String {
	fn from_json(value: &JsonValue) -> Result<Self, JsonError> {
		value.as_string()
	}
}

impl FromJson for JsonValue {
	fn from_json(value: &JsonValue) -> Result<Self, JsonError> {
		Ok(value.clone())
	}
}

impl JsonValue {
	/// Parse a JSON string into a `JsonValue`.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid.
	pub fn parse_str(json: &str) -> Result<JsonValue, JsonError> {
		parse_json_str(json)
	}

	/// Return the JSON kind as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Float(_) => "float",
			Integer(_) => "integer",
			Null => "null",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Create a new empty JSON array value.
	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	/// Create a new empty JSON object value.
	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::new())
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	#[must_use]
	pub fn is_boolean(&self) -> bool {
		matches!(self, JsonValue::Boolean(_))
	}

	/// `true` for both number kinds.
	#[must_use]
	pub fn is_number(&self) -> bool {
		matches!(self, JsonValue::Integer(_) | JsonValue::Float(_))
	}

	#[must_use]
	pub fn is_integer(&self) -> bool {
		matches!(self, JsonValue::Integer(_))
	}

	#[must_use]
	pub fn is_float(&self) -> bool {
		matches!(self, JsonValue::Float(_))
	}

	#[must_use]
	pub fn is_string(&self) -> bool {
		matches!(self, JsonValue::String(_))
	}

	#[must_use]
	pub fn is_array(&self) -> bool {
		matches!(self, JsonValue::Array(_))
	}

	#[must_use]
	pub fn is_object(&self) -> bool {
		matches!(self, JsonValue::Object(_))
	}

	fn type_mismatch(&self, expected: &'static str) -> JsonError {
		JsonError::TypeMismatch {
			expected,
			found: self.type_as_str(),
		}
	}

	/// Return the boolean value.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON boolean.
	pub fn as_bool(&self) -> Result<bool, JsonError> {
		if let JsonValue::Boolean(value) = self {
			Ok(*value)
		} else {
			Err(self.type_mismatch("a boolean"))
		}
	}

	/// Return the numeric value as `i64`, truncating floats toward zero.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON number.
	pub fn as_i64(&self) -> Result<i64, JsonError> {
		match self {
			JsonValue::Integer(value) => Ok(*value),
			JsonValue::Float(value) => Ok(*value as i64),
			_ => Err(self.type_mismatch("a number")),
		}
	}

	/// Return the numeric value as `f64`, widening integers.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON number.
	pub fn as_f64(&self) -> Result<f64, JsonError> {
		match self {
			JsonValue::Float(value) => Ok(*value),
			JsonValue::Integer(value) => Ok(*value as f64),
			_ => Err(self.type_mismatch("a number")),
		}
	}

	/// Return a string slice if this value is a JSON string.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_str(&self) -> Result<&str, JsonError> {
		if let JsonValue::String(text) = self {
			Ok(text)
		} else {
			Err(self.type_mismatch("a string"))
		}
	}

	/// Return the string value as an owned `String`.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_string(&self) -> Result<String, JsonError> {
		self.as_str().map(str::to_owned)
	}

	/// Borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&JsonArray, JsonError> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			Err(self.type_mismatch("an array"))
		}
	}

	/// Mutably borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array_mut(&mut self) -> Result<&mut JsonArray, JsonError> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			Err(self.type_mismatch("an array"))
		}
	}

	/// Consume the `JsonValue` and extract the `JsonArray` if it is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn into_array(self) -> Result<JsonArray, JsonError> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			Err(self.type_mismatch("an array"))
		}
	}

	/// Borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&JsonObject, JsonError> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			Err(self.type_mismatch("an object"))
		}
	}

	/// Mutably borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object_mut(&mut self) -> Result<&mut JsonObject, JsonError> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			Err(self.type_mismatch("an object"))
		}
	}

	/// Consume the `JsonValue` and extract the `JsonObject` if it is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn into_object(self) -> Result<JsonObject, JsonError> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			Err(self.type_mismatch("an object"))
		}
	}

	/// Get a reference to the value for `key`, or `None` if this value is not
	/// an object or the key is absent.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		if let JsonValue::Object(object) = self {
			object.get(key)
		} else {
			None
		}
	}

	/// Get a reference to the element at `index`, or `None` if this value is
	/// not an array or the index is out of range.
	#[must_use]
	pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
		if let JsonValue::Array(array) = self {
			array.get(index)
		} else {
			None
		}
	}

	/// Checked object access: never inserts.
	///
	/// # Errors
	/// Returns `TypeMismatch` if this value is not an object and `KeyNotFound`
	/// if the key is absent.
	pub fn at(&self, key: &str) -> Result<&JsonValue, JsonError> {
		match self {
			JsonValue::Object(object) => object.get(key).ok_or_else(|| JsonError::KeyNotFound(key.to_string())),
			_ => Err(self.type_mismatch("an object")),
		}
	}

	/// Checked array access: never grows the array.
	///
	/// # Errors
	/// Returns `TypeMismatch` if this value is not an array and
	/// `IndexOutOfRange` if `index >= len`.
	pub fn at_index(&self, index: usize) -> Result<&JsonValue, JsonError> {
		match self {
			JsonValue::Array(array) => array.get(index).ok_or(JsonError::IndexOutOfRange {
				index,
				len: array.len(),
			}),
			_ => Err(self.type_mismatch("an array")),
		}
	}

	/// Auto-promoting mutable object access.
	///
	/// A `Null` value is promoted to an empty object first; a missing key is
	/// appended with a `Null` value and a mutable reference to it is returned.
	///
	/// # Errors
	/// Returns `TypeMismatch` on any non-null, non-object value.
	pub fn entry(&mut self, key: &str) -> Result<&mut JsonValue, JsonError> {
		if self.is_null() {
			*self = JsonValue::new_object();
		}
		match self {
			JsonValue::Object(object) => Ok(object.entry(key)),
			_ => Err(self.type_mismatch("an object")),
		}
	}

	/// Auto-promoting mutable array access.
	///
	/// A `Null` value is promoted to an empty array first; the array grows
	/// with `Null` fillers up to and including `index`.
	///
	/// # Errors
	/// Returns `TypeMismatch` on any non-null, non-array value and
	/// `IndexOutOfRange` when `index` is `usize::MAX` (no array can hold an
	/// element there).
	pub fn entry_index(&mut self, index: usize) -> Result<&mut JsonValue, JsonError> {
		if self.is_null() {
			*self = JsonValue::new_array();
		}
		match self {
			JsonValue::Array(array) => {
				let required_len = index.checked_add(1).ok_or(JsonError::IndexOutOfRange {
					index,
					len: array.0.len(),
				})?;
				if required_len > array.0.len() {
					array.0.resize(required_len, JsonValue::Null);
				}
				Ok(&mut array.0[index])
			}
			_ => Err(self.type_mismatch("an array")),
		}
	}

	/// Append a value, promoting `Null` to an empty array first.
	///
	/// # Errors
	/// Returns `TypeMismatch` on any other non-array kind.
	pub fn push(&mut self, value: impl Into<JsonValue>) -> Result<(), JsonError> {
		if self.is_null() {
			*self = JsonValue::new_array();
		}
		match self {
			JsonValue::Array(array) => {
				array.push(value.into());
				Ok(())
			}
			_ => Err(self.type_mismatch("an array")),
		}
	}

	/// `true` iff this value is an object containing `key`.
	#[must_use]
	pub fn contains(&self, key: &str) -> bool {
		if let JsonValue::Object(object) = self {
			object.contains_key(key)
		} else {
			false
		}
	}

	/// Remove `key` from an object, returning the removed value if the key
	/// existed. Returns `None` on non-objects.
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		if let JsonValue::Object(object) = self {
			object.remove(key)
		} else {
			None
		}
	}

	/// Element count for arrays/objects, byte length for strings, `0` otherwise.
	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			JsonValue::Array(array) => array.len(),
			JsonValue::Object(object) => object.len(),
			JsonValue::String(text) => text.len(),
			_ => 0,
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Safe typed object lookup: returns `default` when this value is not an
	/// object, the key is absent, or the stored value does not convert to `T`.
	/// Never fails.
	#[must_use]
	pub fn value_or<T: FromJson>(&self, key: &str, default: T) -> T {
		self.get(key).and_then(|value| T::from_json(value).ok()).unwrap_or(default)
	}

	/// Serialize to a compact JSON string without inserted whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	/// Serialize to a pretty-printed JSON string, each nesting level indented
	/// by `indent` more spaces than its parent.
	#[must_use]
	pub fn stringify_pretty(&self, indent: usize) -> String {
		stringify_pretty(self, indent)
	}
}

/// Structural equality: kinds must match, except that integers and floats
/// compare by numeric value. Object equality ignores key order.
impl PartialEq for JsonValue {
	fn eq(&self, other: &Self) -> bool {
		use JsonValue::*;
		match (self, other) {
			(Null, Null) => true,
			(Boolean(a), Boolean(b)) => a == b,
			(Integer(a), Integer(b)) => a == b,
			(Float(a), Float(b)) => a == b,
			(Integer(a), Float(b)) | (Float(b), Integer(a)) => *a as f64 == *b,
			(String(a), String(b)) => a == b,
			(Array(a), Array(b)) => a == b,
			(Object(a), Object(b)) => a == b,
			_ => false,
		}
	}
}

impl Display for JsonValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}
