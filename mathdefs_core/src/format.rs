use crate::patterns::split_trailing_punctuation;

/// Typeset opening curly quote.
pub const OPEN_QUOTE: &str = r"$\text{``}$";
/// Typeset closing curly quote.
pub const CLOSE_QUOTE: &str = r"$\text{''}$";
pub const MATH_PERIOD: &str = "$.$";
pub const MATH_COMMA: &str = "$,$";

/// Format a raw definition for display in the table.
///
/// Applies, in order:
///
/// - [`substitute_quotes`]: begin/end quotes become LaTeX curly quotes.
/// - [`wrap_trailing_punctuation`]: the trailing `.` or `,` is typeset as
///   math so it lines up with the quotes.
/// - [`coalesce_math_blocks`]: adjacent inline math blocks are merged.
pub fn format_definition(definition: &str) -> String {
	let definition = substitute_quotes(definition);
	let definition = wrap_trailing_punctuation(&definition);
	coalesce_math_blocks(&definition)
}

/// Replace the first `"` with [`OPEN_QUOTE`] and the second with
/// [`CLOSE_QUOTE`]. Only applies when there are exactly two double quotes;
/// any other count is left untouched.
pub fn substitute_quotes(definition: &str) -> String {
	if definition.matches('"').count() != 2 {
		return definition.to_string();
	}

	definition
		.replacen('"', OPEN_QUOTE, 1)
		.replacen('"', CLOSE_QUOTE, 1)
}

/// Wrap the trailing period or comma in math delimiters.
///
/// Only fires when the whole definition has the shape
/// `body` + `.`/`,` + optional whitespace + optional `[...]` suffix.
pub fn wrap_trailing_punctuation(definition: &str) -> String {
	let Some((prefix, punct, suffix)) = split_trailing_punctuation(definition) else {
		return definition.to_string();
	};

	let punct = punct.replace('.', MATH_PERIOD).replace(',', MATH_COMMA);
	format!("{prefix}{punct}{suffix}")
}

/// Remove every `$$` (an empty math block left where two directives meet)
/// until none remain.
pub fn coalesce_math_blocks(definition: &str) -> String {
	let mut definition = definition.to_string();
	while definition.contains("$$") {
		definition = definition.replace("$$", "");
	}
	definition
}
