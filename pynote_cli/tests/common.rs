use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

/// A `pynote` command running inside `dir` with colors disabled.
pub fn pynote_cmd(dir: &Path) -> Command {
	let mut cmd = Command::new(get_cargo_bin("pynote"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("PYNOTE_LOG");
	cmd.current_dir(dir);
	cmd
}

pub const NOTEBOOK: &str = "\"\"\"\n# A Minimal Application\n\nA minimal application looks \
                            something like this:\n\"\"\"\n\nfrom flask import Flask\n\napp = \
                            Flask(__name__)\n\n\"\"\"So what did that code do?\"\"\"\n";
