use std::process;

use clap::Parser;
use mathdefs_cli::MathdefsCli;
use mathdefs_cli::USAGE;
use mathdefs_cli::run;
use mathdefs_core::MathdefsError;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = MathdefsCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	// Logs go to stderr so they never mix with the preprocessed document.
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.init();

	let Some(input) = args.input.as_deref() else {
		println!("{USAGE}");
		process::exit(1);
	};

	if let Err(e) = run(input, std::io::stdout().lock()) {
		match e.downcast::<MathdefsError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				if use_color {
					eprintln!("{} {e}", "error:".red());
				} else {
					eprintln!("error: {e}");
				}
			}
		}
		process::exit(2);
	}
}
