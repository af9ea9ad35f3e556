//! Byte-level cursor over an in-memory buffer plus token-level parsing helpers.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::ByteIterator;
