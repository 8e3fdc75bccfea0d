//! `pynote_core` turns source files that interleave code with `"""`-delimited
//! prose into markdown documents, and optionally into standalone HTML pages
//! that render the markdown in the browser.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file
//!   → LineCursor (lines without terminators, one line of pushback)
//!   → Segmenter (classifies lines, groups them into prose and code blocks)
//!   → Document (title, markdown tokens, HTML page)
//!   → pipeline (writes output/<stem>.md and output/<stem>.html)
//! ```
//!
//! ## Source Format
//!
//! ```text
//! """
//! # A Minimal Application
//! """
//!
//! from flask import Flask
//!
//! """Everything else is code."""
//! ```
//!
//! - A line that is exactly `"""` opens a prose block that runs until the next
//!   line starting with `"""`.
//! - A line like `"""text"""` is a prose block on its own.
//! - Any other line starts a code block that runs until the next line starting
//!   with `"""`.
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `pynote.toml`.
//! - [`pipeline`] — Reading input files and writing the generated outputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use pynote_core::segment;
//!
//! let document = segment("\"\"\"\n# Notes\n\"\"\"\nx = 1\n");
//! assert_eq!(document.title(), "Notes");
//! assert_eq!(document.markdown(), "# Notes\n\n```py\nx = 1\n```\n\n");
//! ```

pub use block::*;
pub use config::PynoteConfig;
pub use cursor::*;
pub use document::*;
pub use error::*;
pub use html::*;
pub use segmenter::*;

mod block;
pub mod config;
mod cursor;
mod document;
#[allow(unused_assignments)]
mod error;
mod html;
pub mod pipeline;
mod segmenter;
