//! Convert a Markdown document into a standalone HTML page.
//!
//! The pipeline is: interpret the command line ([`options::Invocation`]),
//! read the source ([`input::acquire`]), parse it and recover the title
//! ([`mdtool_commonmark`]), render the body, then wrap and deliver the page
//! ([`output::dispatch`]).
pub mod cli;
pub mod error;
pub mod input;
pub mod options;
pub mod output;
pub mod preview;
pub mod shell;

use log::debug;
use mdtool_commonmark::{MarkdownProcessor, extract_title};

use crate::{error::Result, options::Invocation, shell::RenderedDocument};

/// Run a complete conversion for `invocation`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// delivered.
pub fn convert(invocation: &Invocation) -> Result<()> {
  let data = input::acquire(&invocation.input)?;

  let processor = MarkdownProcessor::new(invocation.options);
  let parsed = processor.parse(&data);
  let title = extract_title(parsed.tokens());
  debug!("Document title: {title:?}");

  let document = RenderedDocument {
    title,
    body: processor.render(&parsed),
    xhtml: invocation.options.xhtml,
  };

  output::dispatch(&document, &invocation.output)
}
