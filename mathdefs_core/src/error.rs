use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MathdefsError {
	#[error(transparent)]
	#[diagnostic(code(mathdefs::io_error))]
	Io(#[from] std::io::Error),

	#[error("syntax error on line {line}: inside [defs], but not a valid definition: `{content}`")]
	#[diagnostic(
		code(mathdefs::invalid_definition),
		help("each line inside a `[defs]` block must look like `name = definition`")
	)]
	InvalidDefinition { line: usize, content: String },

	#[error("syntax error: [defs] opened on line {line} not closed by end of file")]
	#[diagnostic(
		code(mathdefs::unclosed_block),
		help("add a `[/defs]` line to close this block")
	)]
	UnclosedBlock { line: usize },
}

pub type MathdefsResult<T> = Result<T, MathdefsError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
