//! A self-contained JSON document model.
//!
//! The crate parses JSON text into an owned [`JsonValue`] tree, serializes it
//! back compactly or pretty-printed, and navigates it with dot paths. Objects
//! preserve insertion order and integers stay distinct from floats through a
//! parse/serialize round trip.
//!
//! ```rust
//! use dotjson::{JsonValue, parse_json_str};
//!
//! let mut config = parse_json_str(r#"{"server":{"ports":[80,443]}}"#)?;
//!
//! assert_eq!(config.get_path("server.ports.1")?.as_i64()?, 443);
//!
//! config.set_path("server.name", "edge-1")?;
//! config.set_path("server.ports.0", 8080)?;
//!
//! assert_eq!(config.path_or("server.timeout", 30), 30);
//! assert_eq!(
//! 	config.stringify(),
//! 	r#"{"server":{"ports":[8080,443],"name":"edge-1"}}"#
//! );
//! # Ok::<(), dotjson::JsonError>(())
//! ```

pub mod byte_iterator;
mod error;
mod io;
mod parse;
mod path;
mod stringify;
mod types;

pub use error::JsonError;
pub use io::{read_json_file, write_json_file};
pub use parse::{parse_json_iter, parse_json_str};
pub use stringify::{escape_json_string, stringify, stringify_pretty};
pub use types::{FromJson, JsonArray, JsonObject, JsonValue};
