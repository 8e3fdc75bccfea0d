use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum PynoteError {
	#[error(transparent)]
	#[diagnostic(code(pynote::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read input file `{}`", .path.display())]
	#[diagnostic(
		code(pynote::read_input),
		help("check that the path exists, is a file, and is readable")
	)]
	ReadInput {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write output file `{}`", .path.display())]
	#[diagnostic(code(pynote::write_output))]
	WriteOutput {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cannot derive an output name from `{}`", .path.display())]
	#[diagnostic(
		code(pynote::missing_file_stem),
		help("pass a path to a file, e.g. `notes.py`")
	)]
	MissingFileStem { path: PathBuf },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(pynote::config_parse),
		help("check that pynote.toml is valid TOML with `language`, `html`, [output] and [assets]")
	)]
	ConfigParse(String),

	#[error("template rendering failed: {0}")]
	#[diagnostic(code(pynote::template_render))]
	TemplateRender(String),

	#[error("failed to serialize markdown for embedding: {0}")]
	#[diagnostic(code(pynote::serialize))]
	Serialize(String),
}

pub type PynoteResult<T> = Result<T, PynoteError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
