//! Interpretation of the raw argument list into an [`Invocation`].
use std::{fmt, path::PathBuf};

use mdtool_commonmark::RenderOptions;

use crate::error::UsageError;

/// Output argument selecting the browser preview instead of a file.
pub const BROWSER_TARGET: &str = "browser:";

/// Document reference meaning standard input.
pub const STDIN_REF: &str = "-";

/// Where the Markdown source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRef {
  Stdin,
  Url(String),
  Path(PathBuf),
}

impl From<&str> for DocumentRef {
  fn from(reference: &str) -> Self {
    if reference == STDIN_REF {
      Self::Stdin
    } else if reference.starts_with("http://")
      || reference.starts_with("https://")
    {
      Self::Url(reference.to_owned())
    } else {
      Self::Path(PathBuf::from(reference))
    }
  }
}

impl fmt::Display for DocumentRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Stdin => f.write_str("standard input"),
      Self::Url(url) => f.write_str(url),
      Self::Path(path) => write!(f, "{}", path.display()),
    }
  }
}

/// Where the finished document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
  Stdout,
  File(PathBuf),
  BrowserPreview,
}

impl From<Option<&str>> for OutputTarget {
  fn from(reference: Option<&str>) -> Self {
    match reference {
      None => Self::Stdout,
      Some(BROWSER_TARGET) => Self::BrowserPreview,
      Some(path) => Self::File(PathBuf::from(path)),
    }
  }
}

/// A fully interpreted command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub options: RenderOptions,
  pub input:   DocumentRef,
  pub output:  OutputTarget,
}

impl Invocation {
  /// Interpret `+flag` tokens and positional document references.
  ///
  /// Arguments are scanned left to right. Anything that is not a known flag
  /// is a document reference; at most two are accepted (input, output). With
  /// none, input is standard input and output is standard output.
  ///
  /// # Errors
  ///
  /// Returns [`UsageError::AmbiguousOption`] as soon as `+t` is seen, and
  /// [`UsageError::TooManyDocuments`] when more than two documents are given.
  pub fn from_args<I, S>(args: I) -> Result<Self, UsageError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut options = RenderOptions::default();
    let mut documents = Vec::with_capacity(2);

    for arg in args {
      let arg = arg.as_ref();
      match arg {
        "+html" | "+h" => options.html = true,
        "+linkify" | "+l" => options.linkify = true,
        "+tables" | "+ta" => options.tables = true,
        "+typographer" | "+ty" => options.typographer = true,
        "+all" | "+a" => options = options.with_all_extensions(),
        "+xhtml" | "+x" => options.xhtml = true,
        "+t" => return Err(UsageError::AmbiguousOption(arg.to_owned())),
        _ => documents.push(arg.to_owned()),
      }
    }

    if documents.len() > 2 {
      return Err(UsageError::TooManyDocuments(documents.len()));
    }

    let input = documents
      .first()
      .map_or(DocumentRef::Stdin, |reference| {
        DocumentRef::from(reference.as_str())
      });
    let output = OutputTarget::from(documents.get(1).map(String::as_str));

    Ok(Self {
      options,
      input,
      output,
    })
  }
}
