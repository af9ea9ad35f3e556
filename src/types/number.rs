//! Numeric conversions between `JsonValue` and Rust number types.
//!
//! `From` implementations map Rust integers to `JsonValue::Integer` and Rust
//! floats to `JsonValue::Float`; `FromJson` implementations convert back,
//! coercing between the two number kinds (floats truncate toward zero when
//! read as integers).

use crate::error::JsonError;
use crate::types::value::{FromJson, JsonValue};

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Float(input)
	}
}

impl From<f32> for JsonValue {
	fn from(input: f32) -> Self {
		JsonValue::Float(f64::from(input))
	}
}

/// Implement `From<integer>` for `JsonValue` for types with lossless i64 conversion.
macro_rules! impl_from_integer_lossless {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Integer(i64::from(input))
				}
			}
		)+
	};
}

/// Implement `From<integer>` for `JsonValue` for types without lossless i64 conversion.
macro_rules! impl_from_integer_lossy {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Integer(input as i64)
				}
			}
		)+
	};
}

impl_from_integer_lossless!(u8, u16, u32, i8, i16, i32, i64);
impl_from_integer_lossy!(u64, u128, usize, i128, isize);

/// Implement `FromJson` for integer types via `as_i64`.
macro_rules! impl_from_json_integer {
	($($t:ty),+ $(,)?) => {
		$(
			impl FromJson for $t {
				fn from_json(value: &JsonValue) -> Result<Self, JsonError> {
					Ok(value.as_i64()? as $t)
				}
			}
		)+
	};
}

/// Implement `FromJson` for float types via `as_f64`.
macro_rules! impl_from_json_float {
	($($t:ty),+ $(,)?) => {
		$(
			impl FromJson for $t {
				fn from_json(value: &JsonValue) -> Result<Self, JsonError> {
					Ok(value.as_f64()? as $t)
				}
			}
		)+
	};
}

impl_from_json_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_json_float!(f32, f64);
