use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::LineReader;
use crate::MathdefsError;
use crate::MathdefsResult;
use crate::parse_defs;
use crate::patterns::match_begin_defs;
use crate::render_table;

/// Copy `reader` to `writer`, replacing every `[defs]` block with its rendered
/// table. Lines outside blocks are written back byte for byte.
///
/// On error, output for everything before the offending block has already
/// been written.
pub fn preprocess<R: BufRead, W: Write>(reader: R, writer: &mut W) -> MathdefsResult<()> {
	let mut lines = LineReader::new(reader);

	while let Some(line) = lines.next_line()? {
		let Some(prefix) = match_begin_defs(line.content()) else {
			writer.write_all(line.raw.as_bytes())?;
			continue;
		};

		tracing::debug!(line = line.number, prefix, "opening definitions block");
		let block = parse_defs(&mut lines, prefix)?;
		render_table(&block, writer)?;
	}

	Ok(())
}

/// Preprocess an in-memory document.
pub fn preprocess_str(content: impl AsRef<str>) -> MathdefsResult<String> {
	let mut output = Vec::new();
	preprocess(content.as_ref().as_bytes(), &mut output)?;
	String::from_utf8(output)
		.map_err(|e| MathdefsError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Open the UTF-8 file at `path` and preprocess it into `writer`.
pub fn preprocess_file<W: Write>(path: impl AsRef<Path>, writer: &mut W) -> MathdefsResult<()> {
	let path = path.as_ref();
	tracing::debug!(path = %path.display(), "preprocessing file");
	let file = File::open(path)?;
	preprocess(BufReader::new(file), writer)
}
