use std::ffi::OsString;

use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::error::UsageError;

const OPTIONS_HELP: &str = "Rendering options:
  +h[tml]         Enable raw HTML passthrough
  +l[inkify]      Enable autolinking
  +ta[bles]       Enable GFM tables
  +ty[pographer]  Enable typographic replacements
  +a[ll]          All of the above
  +x[html]        XHTML output

  -help           Display help

Use 'browser:' in place of the output file to get the output in a browser.";

/// Command line interface for mdtool
#[derive(Parser, Debug)]
#[command(
  name = "mdtool",
  author,
  version,
  about = "Convert a Markdown document into a standalone HTML page",
  override_usage = "mdtool [options] [inputfile|URL] [outputfile]",
  after_help = OPTIONS_HELP
)]
pub struct Cli {
  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Rendering options (`+html`, `+tables`, ...) and up to two documents:
  /// the input (`-`, a path or an http(s) URL) and the output file.
  #[arg(value_name = "ARGS", trailing_var_arg = true)]
  pub args: Vec<String>,
}

impl Cli {
  /// Parse the process arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse_from(normalize_args(std::env::args_os()))
  }

  /// Turn a [`UsageError`] into a clap error carrying the usage text.
  #[must_use]
  pub fn usage_error(err: &UsageError) -> clap::Error {
    let kind = match err {
      UsageError::AmbiguousOption(_) => ErrorKind::ArgumentConflict,
      UsageError::TooManyDocuments(_) => ErrorKind::TooManyValues,
    };
    Self::command().error(kind, err)
  }
}

/// Accept the single-dash `-help` spelling alongside `--help`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
  I: IntoIterator<Item = OsString>,
{
  args
    .into_iter()
    .map(|arg| {
      if arg == "-help" {
        OsString::from("--help")
      } else {
        arg
      }
    })
    .collect()
}
