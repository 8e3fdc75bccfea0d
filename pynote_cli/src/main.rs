use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use clap::Parser;
use owo_colors::OwoColorize;
use pynote_cli::PynoteCli;
use pynote_core::PynoteConfig;
use pynote_core::PynoteResult;
use pynote_core::pipeline::PipelineOptions;
use pynote_core::pipeline::ProcessedFile;
use pynote_core::pipeline::process_files_with;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "PYNOTE_LOG";

static USE_COLOR: AtomicBool = AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = PynoteCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, Ordering::Relaxed);
	}

	init_logging(args.verbose, use_color);

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

	if let Err(e) = run(&args) {
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(1);
	}
}

fn init_logging(verbose: bool, use_color: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("warn,pynote_core=debug,pynote_cli=debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_ansi(use_color)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run(args: &PynoteCli) -> PynoteResult<()> {
	let cwd = std::env::current_dir()?;
	let config = PynoteConfig::load(&cwd)?.unwrap_or_default();

	let mut options = PipelineOptions::from(config);
	if let Some(html) = args.html_override() {
		options.html = html;
	}
	tracing::debug!(?options, "resolved options");

	process_files_with(&args.paths, &options, print_written)?;

	Ok(())
}

fn print_written(processed: &ProcessedFile) {
	println!("{} {}", colored!("Wrote", green), processed.markdown.display());

	if let Some(html) = &processed.html {
		println!("{} {}", colored!("Wrote", green), html.display());
	}
}
