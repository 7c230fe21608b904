use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use mathdefs_core::AnyEmptyResult;
use mathdefs_core::preprocess_file;

/// Printed to stdout when no input file is given.
pub const USAGE: &str = "Usage: mathdefs <input.quiz>";

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Render `[defs]` blocks in quiz documents as math definition tables.",
	long_about = "mathdefs is a line-by-line preprocessing filter for .quiz documents.\n\nEvery \
	              `[defs] ... [/defs]` block of `name = definition` lines is replaced by an \
	              HTML table with inline LaTeX math that reflows nicely on mobile. All other \
	              lines are copied through unchanged.\n\nThe result is always written to \
	              standard output:\n  mathdefs input.quiz > output.quiz"
)]
pub struct MathdefsCli {
	/// The `.quiz` document to preprocess.
	pub input: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl MathdefsCli {
	/// The default log filter when `RUST_LOG` is not set.
	pub fn log_filter(&self) -> &'static str {
		if self.verbose { "debug" } else { "warn" }
	}
}

/// Preprocess `input` into `writer`.
///
/// Output is buffered and always flushed, so lines before a syntax error are
/// kept. A preprocessing error takes precedence over a failed flush.
pub fn run<W: Write>(input: &Path, writer: W) -> AnyEmptyResult {
	let mut writer = BufWriter::new(writer);

	let result = preprocess_file(input, &mut writer);
	let flushed = writer.flush();
	result?;
	flushed?;

	tracing::debug!(path = %input.display(), "done");
	Ok(())
}
