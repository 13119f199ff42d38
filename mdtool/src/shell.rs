//! The HTML boilerplate wrapped around rendered body HTML.
//!
//! Nothing here knows where the bytes end up: the same functions write to
//! standard output, files and HTTP responses.
use std::io::{self, Write};

const HTML5_OPENING: &str = "<!DOCTYPE html>\n<html>";

const XHTML_OPENING: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 \
                             Transitional//EN\"\n  \
                             \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n\
                             <html xmlns=\"http://www.w3.org/1999/xhtml\">";

const POSTAMBLE: &str = "</body>\n</html>\n";

/// A rendered page: extracted title and body HTML.
///
/// Built once and then only read, by every sink that consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
  /// Document title, possibly empty. Escaped when written.
  pub title: String,

  /// Body HTML produced by the renderer.
  pub body: String,

  /// Use the XHTML 1.0 Transitional shell instead of HTML5.
  pub xhtml: bool,
}

impl RenderedDocument {
  /// Write preamble, body and postamble to `sink`.
  ///
  /// # Errors
  ///
  /// Returns the first write error. Bytes already written stay written.
  pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    write_preamble(sink, &self.title, self.xhtml)?;
    sink.write_all(self.body.as_bytes())?;
    write_postamble(sink)
  }

  /// The complete page as a string.
  #[must_use]
  pub fn to_html(&self) -> String {
    let mut page = Vec::with_capacity(self.body.len() + 512);
    // Writing into a Vec cannot fail.
    if self.write_to(&mut page).is_err() {
      log::error!("Failed to assemble page in memory");
    }
    String::from_utf8_lossy(&page).into_owned()
  }
}

/// Write the doctype, `<head>` and opening `<body>` tag.
///
/// The title is HTML-escaped. With `xhtml` the XHTML 1.0 Transitional doctype
/// and namespaced `<html>` tag are used and `<meta>` is self-closed.
///
/// # Errors
///
/// Returns an error if writing to `sink` fails.
pub fn write_preamble<W: Write + ?Sized>(
  sink: &mut W,
  title: &str,
  xhtml: bool,
) -> io::Result<()> {
  let (opening, meta_end) = if xhtml {
    (XHTML_OPENING, " /")
  } else {
    (HTML5_OPENING, "")
  };

  write!(
    sink,
    "{opening}\n<head>\n<meta charset=\"utf-8\"{meta_end}>\n<title>{}</title>\n</head>\n<body>\n",
    html_escape::encode_safe(title)
  )
}

/// Write the closing `</body></html>` sequence.
///
/// # Errors
///
/// Returns an error if writing to `sink` fails.
pub fn write_postamble<W: Write + ?Sized>(sink: &mut W) -> io::Result<()> {
  sink.write_all(POSTAMBLE.as_bytes())
}
