use std::ffi::OsStr;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

use tracing::info;

use crate::HtmlAssets;
use crate::PynoteConfig;
use crate::PynoteError;
use crate::PynoteResult;
use crate::Segmenter;
use crate::block::DEFAULT_LANGUAGE;
use crate::config::DEFAULT_OUTPUT_DIR;

/// Settings for converting files on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
	/// Also write `<stem>.html`.
	pub html: bool,
	/// Output directory, relative to each input file's parent.
	pub output_dir: PathBuf,
	/// Info string for opening code fences.
	pub language: String,
	/// Assets referenced by the HTML page.
	pub assets: HtmlAssets,
}

impl Default for PipelineOptions {
	fn default() -> Self {
		Self {
			html: false,
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			language: DEFAULT_LANGUAGE.to_string(),
			assets: HtmlAssets::default(),
		}
	}
}

impl From<PynoteConfig> for PipelineOptions {
	fn from(config: PynoteConfig) -> Self {
		Self {
			html: config.html,
			output_dir: config.output.directory,
			language: config.language,
			assets: config.assets,
		}
	}
}

/// Where the outputs for one input file are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
	pub directory: PathBuf,
	pub markdown: PathBuf,
	pub html: PathBuf,
}

/// Summary of one converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
	pub input: PathBuf,
	/// The markdown file that was written.
	pub markdown: PathBuf,
	/// The HTML page, when one was written.
	pub html: Option<PathBuf>,
	/// Number of blocks the segmenter produced.
	pub blocks: usize,
	pub title: String,
}

/// Compute the output paths for `input`: `<parent>/<output_dir>/<stem>.md`
/// and `.html`, where `<parent>` is the directory of the absolute input path.
pub fn output_paths(input: &Path, options: &PipelineOptions) -> PynoteResult<OutputPaths> {
	let missing_stem = || {
		PynoteError::MissingFileStem {
			path: input.to_path_buf(),
		}
	};

	let stem = input.file_stem().ok_or_else(missing_stem)?;
	let absolute = std::path::absolute(input)?;
	let parent = absolute.parent().ok_or_else(missing_stem)?;
	let directory = parent.join(&options.output_dir);

	Ok(OutputPaths {
		markdown: directory.join(with_extension(stem, "md")),
		html: directory.join(with_extension(stem, "html")),
		directory,
	})
}

fn with_extension(stem: &OsStr, extension: &str) -> OsString {
	let mut name = stem.to_os_string();
	name.push(".");
	name.push(extension);
	name
}

/// Convert a single file, writing markdown and, if enabled, HTML.
///
/// Nothing is cleaned up on failure: when the HTML write fails the markdown
/// file stays on disk.
#[tracing::instrument(skip_all, fields(path = %input.display()))]
pub fn process_file(input: &Path, options: &PipelineOptions) -> PynoteResult<ProcessedFile> {
	let source = std::fs::read_to_string(input).map_err(|source| {
		PynoteError::ReadInput {
			path: input.to_path_buf(),
			source,
		}
	})?;

	let document = Segmenter::new(options.language.as_str()).segment(&source);
	let paths = output_paths(input, options)?;

	std::fs::create_dir_all(&paths.directory).map_err(|source| {
		PynoteError::WriteOutput {
			path: paths.directory.clone(),
			source,
		}
	})?;

	write_output(&paths.markdown, &document.markdown())?;
	info!(output = %paths.markdown.display(), "wrote markdown");

	let html = if options.html {
		let page = document.to_html_with(&options.assets)?;
		write_output(&paths.html, &page)?;
		info!(output = %paths.html.display(), "wrote html");
		Some(paths.html)
	} else {
		None
	};

	Ok(ProcessedFile {
		input: input.to_path_buf(),
		markdown: paths.markdown,
		html,
		blocks: document.len(),
		title: document.title(),
	})
}

/// Convert every input in order. The first failure stops the batch and is
/// returned; files converted before it keep their output.
pub fn process_files<I, P>(inputs: I, options: &PipelineOptions) -> PynoteResult<Vec<ProcessedFile>>
where
	I: IntoIterator<Item = P>,
	P: AsRef<Path>,
{
	process_files_with(inputs, options, |_| {})
}

/// Like [`process_files`], calling `on_processed` as soon as each file has
/// been written.
pub fn process_files_with<I, P, F>(
	inputs: I,
	options: &PipelineOptions,
	mut on_processed: F,
) -> PynoteResult<Vec<ProcessedFile>>
where
	I: IntoIterator<Item = P>,
	P: AsRef<Path>,
	F: FnMut(&ProcessedFile),
{
	let mut processed = Vec::new();

	for input in inputs {
		let file = process_file(input.as_ref(), options)?;
		on_processed(&file);
		processed.push(file);
	}

	Ok(processed)
}

fn write_output(path: &Path, content: &str) -> PynoteResult<()> {
	std::fs::write(path, content).map_err(|source| {
		PynoteError::WriteOutput {
			path: path.to_path_buf(),
			source,
		}
	})
}
