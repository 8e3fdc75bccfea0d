use serde::Deserialize;
use serde::Serialize;

use crate::PynoteError;
use crate::PynoteResult;

/// highlight.js theme loaded by the generated page.
pub const DEFAULT_STYLESHEET: &str =
	"https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.6.0/styles/github.min.css";
/// highlight.js script loaded by the generated page.
pub const DEFAULT_HIGHLIGHT_SCRIPT: &str =
	"https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.6.0/highlight.min.js";
/// marked script loaded by the generated page.
pub const DEFAULT_MARKDOWN_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/marked/marked.min.js";

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Third-party assets referenced by the generated HTML page.
///
/// Configured through the `[assets]` table of `pynote.toml`:
///
/// ```toml
/// [assets]
/// stylesheet = "https://example.com/github.min.css"
/// highlight = "https://example.com/highlight.min.js"
/// markdown = "https://example.com/marked.min.js"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlAssets {
	/// Stylesheet for highlighted code.
	pub stylesheet: String,
	/// Syntax highlighter script, expected to expose `hljs.highlightAll()`.
	pub highlight: String,
	/// Markdown renderer script, expected to expose `marked.parse()`.
	pub markdown: String,
}

impl Default for HtmlAssets {
	fn default() -> Self {
		Self {
			stylesheet: DEFAULT_STYLESHEET.to_string(),
			highlight: DEFAULT_HIGHLIGHT_SCRIPT.to_string(),
			markdown: DEFAULT_MARKDOWN_SCRIPT.to_string(),
		}
	}
}

/// Render the HTML page around a list of markdown tokens.
///
/// `title` goes through the template engine's HTML escaping. Asset URLs are
/// escaped with [`escape_attribute`] so they are written as given. The tokens
/// are embedded as a JavaScript array literal built by
/// [`escape_script_literal`].
pub fn render_page<S: Serialize>(
	title: &str,
	markdown_tokens: &[S],
	assets: &HtmlAssets,
) -> PynoteResult<String> {
	let literal = escape_script_literal(markdown_tokens)?;

	let mut env = minijinja::Environment::new();
	env.set_keep_trailing_newline(true);
	env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
		.map_err(|e| PynoteError::TemplateRender(e.to_string()))?;

	let template = env
		.get_template(PAGE_TEMPLATE_NAME)
		.map_err(|e| PynoteError::TemplateRender(e.to_string()))?;

	template
		.render(minijinja::context! {
			title => title,
			stylesheet => safe_attribute(&assets.stylesheet),
			highlight => safe_attribute(&assets.highlight),
			markdown_renderer => safe_attribute(&assets.markdown),
			markdown => minijinja::Value::from_safe_string(literal),
		})
		.map_err(|e| PynoteError::TemplateRender(e.to_string()))
}

/// Escape `value` for a double-quoted attribute.
///
/// Only `&`, `"`, `<` and `>` are replaced. Unlike the template engine's HTML
/// escaping, `/` is kept, so URLs appear in the page verbatim.
pub fn escape_attribute(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());

	for ch in value.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'"' => escaped.push_str("&quot;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			_ => escaped.push(ch),
		}
	}

	escaped
}

fn safe_attribute(value: &str) -> minijinja::Value {
	minijinja::Value::from_safe_string(escape_attribute(value))
}

/// Serialize `tokens` as a JSON array that is safe to place inside a
/// `<script>` element.
///
/// On top of JSON string escaping, `<`, `>`, `&`, U+2028 and U+2029 are
/// written as `\u` escapes so the literal can never close the surrounding
/// element.
pub fn escape_script_literal<S: Serialize>(tokens: &[S]) -> PynoteResult<String> {
	let mut buffer = Vec::new();
	let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
	let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
	tokens
		.serialize(&mut serializer)
		.map_err(|e| PynoteError::Serialize(e.to_string()))?;

	let json = String::from_utf8(buffer).map_err(|e| PynoteError::Serialize(e.to_string()))?;
	let mut escaped = String::with_capacity(json.len());

	for ch in json.chars() {
		match ch {
			'<' => escaped.push_str("\\u003c"),
			'>' => escaped.push_str("\\u003e"),
			'&' => escaped.push_str("\\u0026"),
			'\u{2028}' => escaped.push_str("\\u2028"),
			'\u{2029}' => escaped.push_str("\\u2029"),
			_ => escaped.push(ch),
		}
	}

	Ok(escaped)
}
