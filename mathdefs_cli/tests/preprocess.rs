mod common;

use std::io::Write;

use clap::Parser;
use mathdefs_cli::MathdefsCli;
use mathdefs_cli::run;
use mathdefs_core::AnyEmptyResult;
use mathdefs_core::MathdefsError;
use rstest::rstest;
use similar_asserts::assert_eq;

const DICE_QUIZ: &str = r#"<question>
  [defs]
    A = "the sum of the three dice rolls is 12",
    B = "the sum of the three dice rolls is odd".
  [/defs]
</question>
"#;

const DICE_RENDERED: &str = r#"<question>
  <table style="margin: 1rem auto;">
    <tbody>
      <tr>
        <td style="vertical-align: top;">$A = $</td>
        <td>
          $\text{``}$the sum of the three dice rolls is 12$\text{''},$
        </td>
      </tr>
      <tr>
        <td style="vertical-align: top;">$B = $</td>
        <td>
          $\text{``}$the sum of the three dice rolls is odd$\text{''}.$
        </td>
      </tr>
    </tbody>
  </table>
</question>
"#;

#[test]
fn renders_defs_block_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("dice.quiz");
	std::fs::write(&input, DICE_QUIZ)?;

	let output = common::mathdefs_cmd().arg(&input).assert().success();
	let stdout = String::from_utf8(output.get_output().stdout.clone())?;
	assert_eq!(stdout, DICE_RENDERED);

	Ok(())
}

#[test]
fn passes_through_documents_without_blocks() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("plain.quiz");
	let content = "<quiz>\r\n  <p>No definitions here.</p>\r\n</quiz>";
	std::fs::write(&input, content)?;

	common::mathdefs_cmd()
		.arg(&input)
		.assert()
		.success()
		.stdout(content)
		.stderr(predicates::str::is_empty());

	Ok(())
}

#[test]
fn prints_usage_without_input() {
	common::mathdefs_cmd()
		.assert()
		.failure()
		.code(1)
		.stdout(predicates::str::contains("Usage: mathdefs <input.quiz>"));
}

#[rstest]
#[case::unclosed_block(
	Some("intro\n[defs]\n  A = \"x\".\n"),
	"intro\n",
	"mathdefs::unclosed_block"
)]
#[case::blank_line_in_block(
	Some("before\n[defs]\n  A = \"x\".\n\n[/defs]\nafter\n[defs]\nB = y\n[/defs]\n"),
	"before\n",
	"mathdefs::invalid_definition"
)]
#[case::prose_in_block(
	Some("before\n  [defs]\n  A = x.\n  some prose here\n  [/defs]\n"),
	"before\n",
	"mathdefs::invalid_definition"
)]
#[case::missing_file(None, "", "mathdefs::io_error")]
fn fails_with_diagnostic(
	#[case] content: Option<&str>,
	#[case] expected_stdout: &str,
	#[case] expected_code: &str,
) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("input.quiz");
	if let Some(content) = content {
		std::fs::write(&input, content)?;
	}

	let output = common::mathdefs_cmd()
		.arg(&input)
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains(expected_code));
	let stdout = String::from_utf8(output.get_output().stdout.clone())?;
	assert_eq!(stdout, expected_stdout);

	Ok(())
}

#[test]
fn syntax_error_wins_over_failed_flush() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("unclosed.quiz");
	std::fs::write(&input, "intro\n[defs]\nA = x\n")?;

	let Err(error) = run(&input, ClosedPipe) else {
		panic!("expected preprocessing to fail");
	};
	let error = error
		.downcast::<MathdefsError>()
		.map_err(|e| format!("expected a preprocessing error, got {e}"))?;
	assert!(matches!(*error, MathdefsError::UnclosedBlock { line: 2 }));

	Ok(())
}

#[test]
fn failed_flush_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("plain.quiz");
	std::fs::write(&input, "just text\n")?;

	let Err(error) = run(&input, ClosedPipe) else {
		panic!("expected the flush to fail");
	};
	assert!(error.downcast_ref::<std::io::Error>().is_some());

	Ok(())
}

/// A writer whose reader has gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
	fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
		Err(std::io::ErrorKind::BrokenPipe.into())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Err(std::io::ErrorKind::BrokenPipe.into())
	}
}

#[test]
fn verbose_logs_go_to_stderr() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("dice.quiz");
	std::fs::write(&input, DICE_QUIZ)?;

	let output = common::mathdefs_cmd()
		.arg("--verbose")
		.arg(&input)
		.assert()
		.success()
		.stderr(predicates::str::contains("opening definitions block"));
	let stdout = String::from_utf8(output.get_output().stdout.clone())?;
	assert_eq!(stdout, DICE_RENDERED);

	Ok(())
}

#[test]
fn parses_arguments() -> AnyEmptyResult {
	let args = MathdefsCli::try_parse_from(["mathdefs", "-v", "--no-color", "input.quiz"])?;
	assert!(args.verbose);
	assert!(args.no_color);
	assert_eq!(args.log_filter(), "debug");
	assert_eq!(
		args.input.as_deref(),
		Some(std::path::Path::new("input.quiz"))
	);

	let args = MathdefsCli::try_parse_from(["mathdefs"])?;
	assert!(args.input.is_none());
	assert_eq!(args.log_filter(), "warn");

	Ok(())
}
