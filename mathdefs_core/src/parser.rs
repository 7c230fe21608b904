use std::io::BufRead;

use crate::LineReader;
use crate::MathdefsError;
use crate::MathdefsResult;
use crate::patterns::is_end_defs;
use crate::patterns::match_definition;

/// A single `name = definition` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDef {
	pub variable: String,
	/// The raw definition text, before formatting.
	pub definition: String,
}

impl VarDef {
	pub fn new(variable: impl Into<String>, definition: impl Into<String>) -> Self {
		Self {
			variable: variable.into(),
			definition: definition.into(),
		}
	}
}

/// The contents of one `[defs] ... [/defs]` region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefsBlock {
	/// Indentation captured from the `[defs]` line.
	pub prefix: String,
	/// Entries in source order.
	pub defs: Vec<VarDef>,
	/// Line number of the `[defs]` marker.
	pub line: usize,
}

/// Consume lines from `lines` up to and including the `[/defs]` marker.
///
/// The opening `[defs]` line must already have been consumed; `prefix` is its
/// indentation. Any line that is neither a definition nor the closing marker
/// is an error, and so is running out of input before the block is closed.
pub fn parse_defs<R: BufRead>(
	lines: &mut LineReader<R>,
	prefix: impl Into<String>,
) -> MathdefsResult<DefsBlock> {
	let mut block = DefsBlock {
		prefix: prefix.into(),
		defs: vec![],
		line: lines.line_number(),
	};

	while let Some(line) = lines.next_line()? {
		let content = line.content();

		if is_end_defs(content) {
			return Ok(block);
		}

		let Some((variable, definition)) = match_definition(content) else {
			return Err(MathdefsError::InvalidDefinition {
				line: line.number,
				content: content.to_string(),
			});
		};

		tracing::trace!(line = line.number, variable, "definition");
		block.defs.push(VarDef::new(variable, definition));
	}

	Err(MathdefsError::UnclosedBlock { line: block.line })
}
