//! JSON object type: an ordered sequence of unique (key, value) pairs.

use crate::error::JsonError;
use crate::stringify::{escape_json_string, stringify, stringify_pretty_at};
use crate::types::JsonValue;
use std::fmt::{Debug, Display};

/// A JSON object backed by an insertion-ordered `Vec<(String, JsonValue)>`.
///
/// Keys are unique: inserting an existing key overwrites its value in place
/// without changing its position, while a new key is appended at the end.
/// Iteration and serialization follow insertion order, never sorted order.
#[derive(Clone, Default)]
pub struct JsonObject(Vec<(String, JsonValue)>);

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		JsonObject(Vec::new())
	}

	/// Parse a JSON string into a `JsonObject`.
	///
	/// # Errors
	/// Returns an error on invalid JSON or a non-object root.
	pub fn parse_str(json: &str) -> Result<JsonObject, JsonError> {
		JsonValue::parse_str(json)?.into_object()
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
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.iter().any(|entry| entry.0 == key)
	}

	/// Get a reference to the value for `key`, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.iter().find(|entry| entry.0 == key).map(|entry| &entry.1)
	}

	/// Get a mutable reference to the value for `key`, if present.
	#[must_use]
	pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
		self.0.iter_mut().find(|entry| entry.0 == key).map(|entry| &mut entry.1)
	}

	/// Insert `value` under `key`, returning the previous value if the key
	/// existed. An existing key keeps its position; a new key is appended.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
		let key = key.into();
		let value = value.into();
		if let Some(entry) = self.0.iter_mut().find(|entry| entry.0 == key) {
			Some(std::mem::replace(&mut entry.1, value))
		} else {
			self.0.push((key, value));
			None
		}
	}

	/// Set the specified key to the given value, converting it into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.insert(key, JsonValue::from(value));
	}

	/// Set the specified key only if the provided `Option` is `Some`.
	pub fn set_optional<T>(&mut self, key: &str, value: &Option<T>)
	where
		JsonValue: From<T>,
		T: Clone,
	{
		if let Some(v) = value {
			self.insert(key, JsonValue::from(v.clone()));
		}
	}

	/// Return a mutable reference to the value for `key`, appending a
	/// `Null`-valued entry first if the key is absent.
	pub fn entry(&mut self, key: &str) -> &mut JsonValue {
		if let Some(index) = self.0.iter().position(|entry| entry.0 == key) {
			&mut self.0[index].1
		} else {
			self.0.push((key.to_string(), JsonValue::Null));
			let last = self.0.len() - 1;
			&mut self.0[last].1
		}
	}

	/// Remove `key`, returning its value if it existed.
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		let index = self.0.iter().position(|entry| entry.0 == key)?;
		Some(self.0.remove(index).1)
	}

	/// Merge entries from another `JsonObject` into this one, overwriting
	/// existing keys in place and appending new ones.
	pub fn assign(&mut self, object: JsonObject) {
		for (key, value) in object.0 {
			self.insert(key, value);
		}
	}

	/// Return an iterator over key-value pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter().map(|entry| (&entry.0, &entry.1))
	}

	/// Return an iterator over keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.0.iter().map(|entry| &entry.0)
	}

	/// Return an iterator over values in insertion order.
	pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
		self.0.iter().map(|entry| &entry.1)
	}

	/// Serialize this `JsonObject` into a compact JSON string.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Serialize this `JsonObject` into a pretty-printed JSON string at
	/// nesting level `depth`, each level indented by `indent` spaces. An empty
	/// object collapses to `{}`.
	#[must_use]
	pub fn stringify_pretty(&self, indent: usize, depth: usize) -> String {
		if self.0.is_empty() {
			return String::from("{}");
		}
		let inner = " ".repeat((depth + 1) * indent);
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				format!(
					"{inner}\"{}\": {}",
					escape_json_string(key),
					stringify_pretty_at(value, indent, depth + 1)
				)
			})
			.collect::<Vec<_>>();
		format!("{{\n{}\n{}}}", items.join(",\n"), " ".repeat(depth * indent))
	}
}

/// Object equality ignores key order: same size and, for every key in one,
/// an equal value for that key in the other.
impl PartialEq for JsonObject {
	fn eq(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().all(|(key, value)| other.get(key) == Some(value))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonValue::Object`.
impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonObject`, consuming the vector of
/// key-value pairs.
impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		let mut object = JsonObject::new();
		for (key, value) in input {
			object.insert(key, JsonValue::from(value));
		}
		object
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insertion_order_is_preserved() {
		let mut object = JsonObject::new();
		object.set("b", 1);
		object.set("a", 2);
		object.set("c", 3);

		let keys: Vec<&String> = object.keys().collect();
		assert_eq!(keys, vec!["b", "a", "c"]);
		assert_eq!(object.stringify(), r#"{"b":1,"a":2,"c":3}"#);
	}

	#[test]
	fn test_insert_overwrites_in_place() {
		let mut object = JsonObject::from(vec![("b", 1), ("a", 2), ("c", 3)]);
		let previous = object.insert("a", 99);

		assert_eq!(previous, Some(JsonValue::Integer(2)));
		assert_eq!(object.len(), 3);
		assert_eq!(object.stringify(), r#"{"b":1,"a":99,"c":3}"#);
	}

	#[test]
	fn test_get_and_get_mut() {
		let mut object = JsonObject::from(vec![("key", "value")]);

		assert_eq!(object.get("key"), Some(&JsonValue::from("value")));
		assert_eq!(object.get("missing"), None);

		*object.get_mut("key").unwrap() = JsonValue::from(7);
		assert_eq!(object.get("key"), Some(&JsonValue::Integer(7)));
	}

	#[test]
	fn test_entry() {
		let mut object = JsonObject::new();

		assert!(object.entry("fresh").is_null());
		*object.entry("fresh") = JsonValue::from(1);
		assert_eq!(object.get("fresh"), Some(&JsonValue::Integer(1)));
		assert_eq!(object.len(), 1);
	}

	#[test]
	fn test_remove() {
		let mut object = JsonObject::from(vec![("a", 1), ("b", 2)]);

		assert_eq!(object.remove("a"), Some(JsonValue::Integer(1)));
		assert_eq!(object.remove("a"), None);
		assert_eq!(object.len(), 1);
		assert!(object.contains_key("b"));
	}

	#[test]
	fn test_assign() {
		let mut target = JsonObject::from(vec![("key1", "value1"), ("key2", "old")]);
		let source = JsonObject::from(vec![("key2", "new"), ("key3", "value3")]);
		target.assign(source);

		assert_eq!(target.stringify(), r#"{"key1":"value1","key2":"new","key3":"value3"}"#);
	}

	#[test]
	fn test_set_and_set_optional() {
		let mut object = JsonObject::new();
		object.set("key1", 42);
		object.set_optional("key2", &Some(84));
		object.set_optional::<i32>("key3", &None);

		assert_eq!(object.stringify(), r#"{"key1":42,"key2":84}"#);
	}

	#[test]
	fn test_stringify_pretty() {
		let object = JsonObject::from(vec![("a", 1), ("b", 2)]);
		assert_eq!(object.stringify_pretty(2, 0), "{\n  \"a\": 1,\n  \"b\": 2\n}");
		assert_eq!(JsonObject::new().stringify_pretty(2, 0), "{}");
	}

	#[test]
	fn test_equality_ignores_order() {
		let a = JsonObject::from(vec![("x", 1), ("y", 2)]);
		let b = JsonObject::from(vec![("y", 2), ("x", 1)]);
		let c = JsonObject::from(vec![("x", 1), ("y", 3)]);
		let d = JsonObject::from(vec![("x", 1)]);

		assert_eq!(a, b);
		assert_ne!(a, c);
		assert_ne!(a, d);
	}

	#[test]
	fn test_parse_str() {
		let object = JsonObject::parse_str(r#"{"key1":"value1","key2":42}"#).unwrap();
		assert_eq!(object.get("key2"), Some(&JsonValue::Integer(42)));

		assert!(JsonObject::parse_str("[1,2]").is_err());
	}

	#[test]
	fn test_debug_fmt() {
		let object = JsonObject::from(vec![("k", 1)]);
		assert_eq!(format!("{object:?}"), r#"{"k": Integer(1)}"#);
	}
}
