//! Delivery of the finished document to its [`OutputTarget`].
use std::{
  fs::{File, OpenOptions},
  io::{self, BufWriter, Write},
  path::Path,
};

use log::{info, warn};

use crate::{
  error::{MdtoolError, Result},
  options::OutputTarget,
  preview,
  shell::{RenderedDocument, write_postamble, write_preamble},
};

/// Send `document` to `target`.
///
/// For [`OutputTarget::BrowserPreview`] this blocks until the browser has
/// fetched the page.
///
/// # Errors
///
/// Returns an error if the output cannot be created or written, or if the
/// browser preview fails to start.
pub fn dispatch(document: &RenderedDocument, target: &OutputTarget) -> Result<()> {
  match target {
    OutputTarget::Stdout => write_stdout(document),
    OutputTarget::File(path) => write_file(document, path),
    OutputTarget::BrowserPreview => {
      preview::serve_once(document.clone(), |url| open::that(url))
    },
  }
}

fn write_stdout(document: &RenderedDocument) -> Result<()> {
  let stdout = io::stdout();
  write_stream(document, BufWriter::new(stdout.lock()))
}

/// Write `document` the way it appears on standard output: like
/// [`RenderedDocument::write_to`], with a newline after the body.
///
/// # Errors
///
/// Returns an error if writing to or flushing `out` fails.
pub fn write_stream<W: Write>(
  document: &RenderedDocument,
  mut out: W,
) -> Result<()> {
  write_preamble(&mut out, &document.title, document.xhtml)?;
  out.write_all(document.body.as_bytes())?;
  writeln!(out)?;
  write_postamble(&mut out)?;
  out.flush()?;
  Ok(())
}

/// Write `document` to `path`, creating or truncating it.
///
/// Write failures are fatal. Once everything is written, a failure to sync the
/// file is only logged.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a write fails.
pub fn write_file(document: &RenderedDocument, path: &Path) -> Result<()> {
  let file = create_output(path).map_err(|source| {
    MdtoolError::Create {
      path: path.to_path_buf(),
      source,
    }
  })?;

  let mut writer = BufWriter::new(file);
  document.write_to(&mut writer)?;
  let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;

  if let Err(e) = file.sync_all() {
    warn!("Failed to close {}: {e}", path.display());
  }

  info!("Wrote {}", path.display());
  Ok(())
}

fn create_output(path: &Path) -> io::Result<File> {
  let mut options = OpenOptions::new();
  options.write(true).create(true).truncate(true);

  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(0o600);
  }

  options.open(path)
}
