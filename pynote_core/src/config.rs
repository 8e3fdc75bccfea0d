use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::HtmlAssets;
use crate::PynoteError;
use crate::PynoteResult;
use crate::block::DEFAULT_LANGUAGE;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["pynote.toml", ".pynote.toml", ".config/pynote.toml"];

/// Default name of the directory created next to each input file.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Configuration loaded from a `pynote.toml` file.
///
/// ```toml
/// language = "py"
/// html = true
///
/// [output]
/// directory = "output"
///
/// [assets]
/// markdown = "https://cdn.jsdelivr.net/npm/marked/marked.min.js"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PynoteConfig {
	/// Info string for opening code fences.
	pub language: String,
	/// Whether to write the HTML page when the command line does not say.
	pub html: bool,
	/// Where output files go.
	pub output: OutputConfig,
	/// Scripts and styles referenced by the HTML page.
	pub assets: HtmlAssets,
}

impl Default for PynoteConfig {
	fn default() -> Self {
		Self {
			language: DEFAULT_LANGUAGE.to_string(),
			html: false,
			output: OutputConfig::default(),
			assets: HtmlAssets::default(),
		}
	}
}

/// Output location settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
	/// Directory, relative to each input file's parent, that receives the
	/// generated files.
	pub directory: PathBuf,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
		}
	}
}

impl PynoteConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> PynoteResult<Option<PynoteConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Parse config file content.
	pub fn parse(content: &str) -> PynoteResult<PynoteConfig> {
		toml::from_str(content).map_err(|e| PynoteError::ConfigParse(e.to_string()))
	}
}
