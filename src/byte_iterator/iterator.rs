//! A byte-level cursor over an in-memory buffer.
//!
//! `ByteIterator` provides peeking at the next byte without consuming it,
//! advancing the cursor, and consuming bytes one by one. Error messages carry
//! the current byte position and a snippet of the recently consumed input.

use crate::error::JsonError;

const SNIPPET_SIZE: usize = 16;

/// A cursor over a byte slice with support for peeking, consuming, and error reporting.
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` over the bytes of a string slice.
	#[must_use]
	pub fn from_str(text: &'a str) -> Self {
		ByteIterator {
			bytes: text.as_bytes(),
			position: 0,
		}
	}

	/// Returns the current absolute byte position.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Advances the cursor past the current byte, if any.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the current byte, advancing the cursor.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		if byte.is_some() {
			self.position += 1;
		}
		byte
	}

	/// Consumes and returns the next byte.
	///
	/// # Errors
	/// Returns an error if the end of the buffer is reached unexpectedly.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8, JsonError> {
		self.consume().ok_or_else(|| self.format_error("unexpected end of input"))
	}

	/// Returns the current byte without advancing.
	///
	/// # Errors
	/// Returns an error if the end of the buffer is reached unexpectedly.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8, JsonError> {
		self.peek().ok_or_else(|| self.format_error("unexpected end of input"))
	}

	/// Skips over JSON whitespace (space, tab, `\n`, `\r`).
	pub fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.position += 1;
		}
	}

	/// Builds a parse error carrying the current position and a snippet of the
	/// input leading up to it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> JsonError {
		let end = self.position.min(self.bytes.len());
		let start = end.saturating_sub(SNIPPET_SIZE);
		let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
		if self.position >= self.bytes.len() {
			snippet.push_str("<EOF>");
		}
		JsonError::Parse(format!("{msg} at position {}: {snippet}", self.position))
	}
}
