use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Turn source files with \"\"\"-delimited prose into markdown and HTML pages.",
	long_about = "pynote reads source files in which narrative text sits between triple-quote \
	              delimiters and everything else is code.\n\nFor every input file it writes \
	              `output/<stem>.md` next to the file, with code regions wrapped in fenced code \
	              blocks. With `--html` it also writes `output/<stem>.html`, a standalone page \
	              that renders the markdown in the browser.\n\nDefaults can be set in a \
	              `pynote.toml` file in the current directory."
)]
pub struct PynoteCli {
	/// Source files to convert, processed in order. The first failure stops
	/// the batch.
	#[arg(required = true, value_name = "PATH")]
	pub paths: Vec<PathBuf>,

	/// Also write an HTML page for each input.
	#[arg(long, overrides_with = "no_html")]
	pub html: bool,

	/// Do not write HTML pages, even if enabled in `pynote.toml`.
	#[arg(long, overrides_with = "html")]
	pub no_html: bool,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl PynoteCli {
	/// The HTML switch given on the command line, if any. When both flags are
	/// given the last one wins.
	pub fn html_override(&self) -> Option<bool> {
		match (self.html, self.no_html) {
			(true, _) => Some(true),
			(_, true) => Some(false),
			_ => None,
		}
	}
}
