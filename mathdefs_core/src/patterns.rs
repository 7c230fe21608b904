use std::sync::LazyLock;

use regex::Regex;

/// A line that opens a definitions block. Group 1 is the indentation that is
/// reapplied to every rendered table line.
static BEGIN_DEFS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(\s*)\[defs\]\s*$").expect("valid begin pattern"));

static END_DEFS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*\[/defs\]\s*$").expect("valid end pattern"));

/// `name = definition`, where the name has no whitespace.
static DEF_VAR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*(\S+) = (.+)$").expect("valid definition pattern"));

/// Splits a definition into its body, the trailing `.` or `,` (plus any
/// whitespace), and an optional bracketed suffix such as a reference.
static DEF_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(.+)([.,]\s*)((?:\[.*\])?)$").expect("valid punctuation pattern")
});

/// Returns the indentation prefix when `content` is a `[defs]` line.
pub(crate) fn match_begin_defs(content: &str) -> Option<&str> {
	BEGIN_DEFS
		.captures(content)
		.and_then(|captures| captures.get(1))
		.map(|prefix| prefix.as_str())
}

pub(crate) fn is_end_defs(content: &str) -> bool {
	END_DEFS.is_match(content)
}

/// Returns `(variable, definition)` when `content` is a definition line.
pub(crate) fn match_definition(content: &str) -> Option<(&str, &str)> {
	let captures = DEF_VAR.captures(content)?;
	let variable = captures.get(1)?.as_str();
	let definition = captures.get(2)?.as_str();
	Some((variable, definition))
}

/// Returns `(prefix, punctuation, suffix)` when the whole definition ends in
/// the trailing punctuation shape.
pub(crate) fn split_trailing_punctuation(definition: &str) -> Option<(&str, &str, &str)> {
	let captures = DEF_PUNCT.captures(definition)?;
	let prefix = captures.get(1)?.as_str();
	let punct = captures.get(2)?.as_str();
	let suffix = captures.get(3).map_or("", |suffix| suffix.as_str());
	Some((prefix, punct, suffix))
}
