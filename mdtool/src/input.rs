//! Reading the Markdown source into memory.
use std::{
  fs,
  io::{self, Read},
  path::Path,
};

use log::debug;
use reqwest::blocking::Client;

use crate::{
  error::{MdtoolError, Result},
  options::DocumentRef,
};

/// Read the whole document behind `document` into memory.
///
/// Every source gets exactly one attempt; nothing is retried or cached.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, if standard input
/// cannot be read, or if the URL cannot be fetched or answers with a non-2xx
/// status.
pub fn acquire(document: &DocumentRef) -> Result<Vec<u8>> {
  let data = match document {
    DocumentRef::Stdin => read_from(io::stdin().lock())?,
    DocumentRef::Url(url) => fetch(url)?,
    DocumentRef::Path(path) => read_file(path)?,
  };
  debug!("Read {} bytes from {document}", data.len());
  Ok(data)
}

/// Read a reader to its end.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_from<R: Read>(mut reader: R) -> Result<Vec<u8>> {
  let mut data = Vec::new();
  reader.read_to_end(&mut data)?;
  Ok(data)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
  fs::read(path).map_err(|source| {
    MdtoolError::Read {
      path: path.to_path_buf(),
      source,
    }
  })
}

fn fetch(url: &str) -> Result<Vec<u8>> {
  let fetch_error = |source: reqwest::Error| {
    MdtoolError::Fetch {
      url: url.to_owned(),
      source,
    }
  };

  // No timeout: a hung server blocks until it gives up on its own.
  let client = Client::builder()
    .timeout(None)
    .build()
    .map_err(fetch_error)?;
  let response = client.get(url).send().map_err(fetch_error)?;

  let status = response.status();
  if !status.is_success() {
    return Err(MdtoolError::Status {
      url: url.to_owned(),
      status,
    });
  }

  let body = response.bytes().map_err(fetch_error)?;
  Ok(body.to_vec())
}
