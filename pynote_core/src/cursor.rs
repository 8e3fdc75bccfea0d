/// A forward cursor over the lines of a source file with a single slot of
/// pushback.
///
/// The cursor owns an index-addressable list of raw lines and an explicit
/// position. [`LineCursor::next_line`] hands out the line at the position with
/// its terminator removed and advances. [`LineCursor::step_back`] rewinds by
/// exactly one line so the segmenter can look at a line, decide it belongs to
/// the next block, and leave it for the next classification.
///
/// ```rust
/// use pynote_core::LineCursor;
///
/// let mut cursor = LineCursor::from_source("first\nsecond\n");
/// assert_eq!(cursor.next_line(), Some("first"));
/// assert_eq!(cursor.next_line(), Some("second"));
/// cursor.step_back();
/// assert_eq!(cursor.next_line(), Some("second"));
/// assert_eq!(cursor.next_line(), None);
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
	/// Raw lines, possibly still carrying their `\n` or `\r\n` terminator.
	lines: Vec<&'a str>,
	/// Index of the next line to produce.
	position: usize,
	/// Whether a line has been produced since the last step back.
	can_step_back: bool,
}

impl<'a> LineCursor<'a> {
	/// Create a cursor over an ordered sequence of raw lines.
	pub fn new(lines: impl IntoIterator<Item = &'a str>) -> Self {
		Self {
			lines: lines.into_iter().collect(),
			position: 0,
			can_step_back: false,
		}
	}

	/// Create a cursor over the lines of `source`, split after every `\n`.
	pub fn from_source(source: &'a str) -> Self {
		Self::new(source.split_inclusive('\n'))
	}

	/// Produce the next line without its line terminator.
	///
	/// Returns `None` once every line has been produced. The position does not
	/// move in that case, so repeated calls keep returning `None`.
	pub fn next_line(&mut self) -> Option<&'a str> {
		let raw = *self.lines.get(self.position)?;
		self.position += 1;
		self.can_step_back = true;

		Some(strip_terminator(raw))
	}

	/// Make the most recently produced line available again.
	///
	/// # Panics
	///
	/// Only one step back is allowed per call to [`LineCursor::next_line`].
	/// Stepping back twice in a row, or before anything was produced, is a
	/// caller bug and panics.
	pub fn step_back(&mut self) {
		assert!(
			self.can_step_back,
			"`LineCursor::step_back` requires a `next_line` call since the last step back"
		);

		self.position -= 1;
		self.can_step_back = false;
	}

	/// Whether [`LineCursor::step_back`] may be called right now.
	pub fn can_step_back(&self) -> bool {
		self.can_step_back
	}

	/// Index of the next line to be produced.
	pub fn position(&self) -> usize {
		self.position
	}

	/// Number of lines not yet produced.
	pub fn remaining(&self) -> usize {
		self.lines.len() - self.position
	}
}

impl<'a> Iterator for LineCursor<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_line()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.remaining();
		(remaining, Some(remaining))
	}
}

/// Remove a trailing `\n` and a `\r` directly before it.
fn strip_terminator(raw: &str) -> &str {
	match raw.strip_suffix('\n') {
		Some(line) => line.strip_suffix('\r').unwrap_or(line),
		None => raw,
	}
}
