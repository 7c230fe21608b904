use std::io::Write;

use crate::DefsBlock;
use crate::MathdefsResult;
use crate::format_definition;

/// Write `block` as an HTML table. Every line is prefixed with the block's
/// indentation and terminated with `\n`.
pub fn render_table<W: Write>(block: &DefsBlock, writer: &mut W) -> MathdefsResult<()> {
	tracing::debug!(
		line = block.line,
		count = block.defs.len(),
		"rendering definitions table"
	);

	let prefix = block.prefix.as_str();
	let mut emit = |text: &str| writeln!(writer, "{prefix}{text}");

	emit(r#"<table style="margin: 1rem auto;">"#)?;
	emit("  <tbody>")?;

	for var_def in &block.defs {
		emit("    <tr>")?;
		emit(&format!(
			r#"      <td style="vertical-align: top;">${} = $</td>"#,
			var_def.variable
		))?;
		emit("      <td>")?;
		emit(&format!("        {}", format_definition(&var_def.definition)))?;
		emit("      </td>")?;
		emit("    </tr>")?;
	}

	emit("  </tbody>")?;
	emit("</table>")?;

	Ok(())
}
