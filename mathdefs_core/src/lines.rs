use std::io::BufRead;

use crate::MathdefsResult;

/// A single line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
	/// The raw text, including the original `\n` or `\r\n` terminator. The
	/// final line of a file may have no terminator.
	pub raw: String,
	/// 1-indexed line number.
	pub number: usize,
}

impl Line {
	/// The line without its terminator. All pattern matching happens against
	/// this.
	pub fn content(&self) -> &str {
		let content = self.raw.strip_suffix('\n').unwrap_or(&self.raw);
		content.strip_suffix('\r').unwrap_or(content)
	}
}

/// Forward-only cursor over the lines of a UTF-8 input.
///
/// The scanner and the definitions parser share one reader by mutable
/// reference, so a line consumed by either is never seen again by the other.
pub struct LineReader<R> {
	inner: R,
	line_number: usize,
}

impl<R: BufRead> LineReader<R> {
	pub fn new(inner: R) -> Self {
		Self {
			inner,
			line_number: 0,
		}
	}

	/// Read the next line, or `None` once the input is exhausted. Invalid
	/// UTF-8 surfaces as an I/O error.
	pub fn next_line(&mut self) -> MathdefsResult<Option<Line>> {
		let mut raw = String::new();
		if self.inner.read_line(&mut raw)? == 0 {
			return Ok(None);
		}

		self.line_number += 1;
		Ok(Some(Line {
			raw,
			number: self.line_number,
		}))
	}

	/// Number of lines consumed so far.
	pub fn line_number(&self) -> usize {
		self.line_number
	}
}
