//! # mdtool-commonmark
//!
//! The Markdown layer behind `mdtool`. Parsing and HTML rendering are done by
//! `comrak`; this crate turns comrak's AST into a flat, markdown-it style token
//! sequence and recovers a document title from it.
//!
//! ```rust
//! use mdtool_commonmark::{MarkdownProcessor, RenderOptions, extract_title};
//!
//! let processor = MarkdownProcessor::new(RenderOptions::default());
//! let document = processor.parse(b"# Hello *World*\n\nSome text.");
//!
//! assert_eq!(extract_title(document.tokens()), "Hello World");
//! assert!(processor.render(&document).contains("<p>Some text.</p>"));
//! ```

pub mod processor;
pub mod title;
mod types;
pub mod utils;

pub use crate::{
  processor::{MarkdownProcessor, ParsedDocument},
  title::extract_title,
  types::{Element, RenderOptions, Token},
};
