use tracing::debug;
use tracing::trace;

use crate::Block;
use crate::Document;
use crate::LineCursor;
use crate::block::DEFAULT_LANGUAGE;

/// The token that opens and closes prose regions.
pub const PROSE_DELIMITER: &str = "\"\"\"";

/// How a line read at the top level of the segmenter starts the next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
	/// `"""text"""` on a single line. Holds the text between the delimiters.
	OneLiner(&'a str),
	/// A line that is exactly `"""`, opening a multi-line prose block.
	BlockOpen,
	/// Any other line. Starts a code block.
	Content,
}

/// Classify a line. The rules are checked in order and the first match wins:
/// one-liner, then block opener, then content.
///
/// ```rust
/// use pynote_core::LineKind;
/// use pynote_core::classify;
///
/// assert_eq!(classify(r#""""Hello""""#), LineKind::OneLiner("Hello"));
/// assert_eq!(classify(r#"""""#), LineKind::BlockOpen);
/// assert_eq!(classify("x = 1"), LineKind::Content);
/// ```
pub fn classify(line: &str) -> LineKind<'_> {
	if is_one_liner(line) {
		let text = &line[PROSE_DELIMITER.len()..line.len() - PROSE_DELIMITER.len()];
		return LineKind::OneLiner(text);
	}

	if line == PROSE_DELIMITER {
		return LineKind::BlockOpen;
	}

	LineKind::Content
}

/// Starts and ends with the delimiter with at least one character in between.
fn is_one_liner(line: &str) -> bool {
	line.starts_with(PROSE_DELIMITER)
		&& line.ends_with(PROSE_DELIMITER)
		&& line.len() > PROSE_DELIMITER.len() * 2
}

fn is_delimited(line: &str) -> bool {
	line.starts_with(PROSE_DELIMITER)
}

/// Groups the lines of a source file into prose and code blocks.
#[derive(Debug, Clone)]
pub struct Segmenter {
	language: String,
}

impl Default for Segmenter {
	fn default() -> Self {
		Self::new(DEFAULT_LANGUAGE)
	}
}

impl Segmenter {
	/// Create a segmenter whose documents fence code with `language`.
	pub fn new(language: impl Into<String>) -> Self {
		Self {
			language: language.into(),
		}
	}

	pub fn language(&self) -> &str {
		&self.language
	}

	/// Segment source text.
	pub fn segment(&self, source: &str) -> Document {
		self.segment_cursor(LineCursor::from_source(source))
	}

	/// Segment an already split list of lines.
	pub fn segment_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Document {
		self.segment_cursor(LineCursor::new(lines))
	}

	fn segment_cursor(&self, mut cursor: LineCursor<'_>) -> Document {
		let mut document = Document::new(self.language.clone());

		while let Some(line) = cursor.next_line() {
			let kind = classify(line);
			trace!(position = cursor.position(), ?kind, "classified line");

			let block = match kind {
				LineKind::OneLiner(text) => Block::prose([text]),
				LineKind::BlockOpen => read_prose_block(&mut cursor),
				LineKind::Content => read_code_block(line, &mut cursor),
			};

			let block_kind = if block.is_prose() { "prose" } else { "code" };
			debug!(
				kind = block_kind,
				lines = block.lines().len(),
				"appending block"
			);
			document.push(block);
		}

		debug!(blocks = document.len(), title = %document.title(), "segmented document");
		document
	}
}

/// Segment `source` with the default code language.
pub fn segment(source: &str) -> Document {
	Segmenter::default().segment(source)
}

/// Collect lines up to the closing delimiter, which is consumed and dropped.
/// Running out of input ends the block without complaint.
fn read_prose_block(cursor: &mut LineCursor<'_>) -> Block {
	let mut lines = Vec::new();

	while let Some(line) = cursor.next_line() {
		if is_delimited(line) {
			break;
		}
		lines.push(line);
	}

	Block::prose(lines)
}

/// Collect `first` and every following line up to the next delimited line.
/// The delimited line is pushed back so the top level classifies it.
fn read_code_block<'a>(first: &'a str, cursor: &mut LineCursor<'a>) -> Block {
	let mut lines = vec![first];

	while let Some(line) = cursor.next_line() {
		if is_delimited(line) {
			cursor.step_back();
			break;
		}
		lines.push(line);
	}

	Block::code(lines)
}
