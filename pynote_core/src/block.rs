/// Opening and closing fence for code blocks in the rendered markdown.
pub const CODE_FENCE: &str = "```";

/// Default info string attached to opening code fences.
pub const DEFAULT_LANGUAGE: &str = "py";

/// One contiguous region of a source file.
///
/// Leading and trailing empty lines are removed when a block is built, while
/// empty lines in the middle are kept. A block whose lines are all empty is
/// left untouched, so it still counts as non-empty (see
/// [`Block::is_truthy`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
	/// Narrative text written between `"""` delimiters. Rendered verbatim.
	Prose(Vec<String>),
	/// Everything outside the delimiters. Rendered inside a fenced code block.
	Code(Vec<String>),
}

impl Block {
	/// Build a prose block from raw lines.
	pub fn prose<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Prose(trim_empty_lines(lines.into_iter().map(Into::into).collect()))
	}

	/// Build a code block from raw lines.
	pub fn code<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Code(trim_empty_lines(lines.into_iter().map(Into::into).collect()))
	}

	/// The stored lines after trimming.
	pub fn lines(&self) -> &[String] {
		match self {
			Self::Prose(lines) | Self::Code(lines) => lines,
		}
	}

	pub fn is_prose(&self) -> bool {
		matches!(self, Self::Prose(_))
	}

	pub fn is_code(&self) -> bool {
		matches!(self, Self::Code(_))
	}

	/// `true` when the block holds no lines at all.
	pub fn is_empty(&self) -> bool {
		self.lines().is_empty()
	}

	/// `true` when the block has lines but none of them contain anything other
	/// than whitespace.
	pub fn is_blank(&self) -> bool {
		let lines = self.lines();
		!lines.is_empty() && lines.iter().all(|line| line.trim().is_empty())
	}

	/// Whether the block takes part in rendered output.
	///
	/// This only looks at the line count. A code block made of blank lines is
	/// truthy even though [`Block::render`] produces nothing for it, and the
	/// document still emits the separator line after it.
	pub fn is_truthy(&self) -> bool {
		!self.is_empty()
	}

	/// Render the block as markdown lines, without line terminators.
	///
	/// `language` is the info string used for the opening fence of code
	/// blocks.
	pub fn render<'a>(&'a self, language: &str) -> Vec<std::borrow::Cow<'a, str>> {
		match self {
			Self::Prose(lines) => lines.iter().map(|line| line.as_str().into()).collect(),
			Self::Code(_) if self.is_blank() => Vec::new(),
			Self::Code(lines) => {
				let mut rendered = Vec::with_capacity(lines.len() + 2);
				rendered.push(format!("{CODE_FENCE}{language}").into());
				rendered.extend(lines.iter().map(|line| line.as_str().into()));
				rendered.push(CODE_FENCE.into());
				rendered
			}
		}
	}
}

/// Strip leading and trailing empty lines. When no line has content the input
/// is returned as is.
fn trim_empty_lines(mut lines: Vec<String>) -> Vec<String> {
	let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
		return lines;
	};
	let last = lines
		.iter()
		.rposition(|line| !line.is_empty())
		.unwrap_or(first);

	lines.truncate(last + 1);
	lines.drain(..first);
	lines
}
