use std::borrow::Cow;

use derive_more::Deref;

use crate::Block;
use crate::HtmlAssets;
use crate::PynoteResult;
use crate::block::DEFAULT_LANGUAGE;
use crate::html;

/// Line terminator token emitted after every markdown line.
pub const NEWLINE: &str = "\n";

/// Marker a prose line must start with to provide the document title.
const TITLE_MARKER: &str = "# ";

/// The blocks of one source file in reading order.
///
/// Built once by the [`Segmenter`](crate::Segmenter) and then rendered. Derefs
/// to the underlying list of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Document {
	#[deref]
	blocks: Vec<Block>,
	/// Info string for the opening fence of code blocks.
	language: String,
}

impl Default for Document {
	fn default() -> Self {
		Self::new(DEFAULT_LANGUAGE)
	}
}

impl Document {
	pub fn new(language: impl Into<String>) -> Self {
		Self {
			blocks: Vec::new(),
			language: language.into(),
		}
	}

	pub fn push(&mut self, block: Block) {
		self.blocks.push(block);
	}

	pub fn blocks(&self) -> &[Block] {
		&self.blocks
	}

	pub fn language(&self) -> &str {
		&self.language
	}

	/// The text of a leading `# ` heading, kept exactly as written after the
	/// marker, surrounding whitespace included.
	///
	/// Only the first line of the first block is considered, and only when that
	/// block is prose. Everything else yields an empty string.
	pub fn title(&self) -> String {
		let Some(Block::Prose(lines)) = self.blocks.first() else {
			return String::new();
		};

		lines
			.first()
			.and_then(|line| line.strip_prefix(TITLE_MARKER))
			.map(ToString::to_string)
			.unwrap_or_default()
	}

	/// Render the document as a sequence of markdown tokens.
	///
	/// Every rendered line is followed by a [`NEWLINE`] token and every block by
	/// one more, leaving a blank line between blocks. Empty blocks are skipped.
	/// Concatenating the tokens gives the markdown file.
	pub fn to_markdown(&self) -> Vec<Cow<'_, str>> {
		let mut tokens = Vec::new();

		for block in self.blocks.iter().filter(|block| block.is_truthy()) {
			for line in block.render(&self.language) {
				tokens.push(line);
				tokens.push(Cow::Borrowed(NEWLINE));
			}
			tokens.push(Cow::Borrowed(NEWLINE));
		}

		tokens
	}

	/// The markdown tokens joined into a single string.
	pub fn markdown(&self) -> String {
		self.to_markdown().concat()
	}

	/// Render a standalone HTML page that renders the markdown in the browser,
	/// using the default CDN assets.
	pub fn to_html(&self) -> PynoteResult<String> {
		self.to_html_with(&HtmlAssets::default())
	}

	/// Render a standalone HTML page with the given asset URLs.
	pub fn to_html_with(&self, assets: &HtmlAssets) -> PynoteResult<String> {
		let tokens = self.to_markdown();
		html::render_page(&self.title(), tokens.as_slice(), assets)
	}
}
