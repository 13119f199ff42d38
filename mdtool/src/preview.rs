//! One-shot local HTTP server used to show the document in a browser.
//!
//! The server binds an OS-assigned port on the loopback interface, asks the
//! browser to open it and shuts down after the first `GET /` has been
//! answered. `HEAD /` is answered but does not count. Other paths (e.g.
//! `/favicon.ico`) get a 404 and do not count either. A repeated `GET /`
//! arriving before shutdown is answered with the same page.
//!
//! There is no timeout: if the browser never connects, this blocks forever.
use std::{
  io,
  net::{Ipv4Addr, SocketAddr},
  sync::Arc,
  time::Duration,
};

use axum::{
  Router,
  extract::State,
  http::Method,
  response::Html,
  routing::get,
};
use log::{debug, info, warn};
use tokio::{
  net::TcpListener,
  sync::{Mutex, oneshot},
};

use crate::{
  error::{MdtoolError, Result},
  shell::RenderedDocument,
};

/// Pause between answering the request and closing the connection.
///
/// Some browsers abort the read when the server closes too eagerly. The exact
/// value carries no meaning.
pub const CLOSE_GRACE_PERIOD: Duration = Duration::from_millis(50);

struct PreviewState {
  document: RenderedDocument,
  served:   Mutex<Option<oneshot::Sender<()>>>,
}

/// Serve `document` to a single browser request, then return.
///
/// `launch` is called with the server's root URL once the server is
/// listening; in production it opens the default browser.
///
/// # Errors
///
/// Returns an error if the runtime or listener cannot be set up, if `launch`
/// fails, or if the server stops abnormally.
pub fn serve_once<F>(document: RenderedDocument, launch: F) -> Result<()>
where
  F: FnOnce(&str) -> io::Result<()>,
{
  let runtime = tokio::runtime::Builder::new_multi_thread()
    .enable_all()
    .build()?;

  runtime.block_on(async move {
    let listener =
      TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await?;
    let url = format!("http://{}/", listener.local_addr()?);

    let (served_tx, served_rx) = oneshot::channel();
    let state = Arc::new(PreviewState {
      document,
      served: Mutex::new(Some(served_tx)),
    });
    let app = Router::new()
      .route("/", get(serve_document))
      .with_state(state);

    let server = tokio::spawn(async move {
      axum::serve(listener, app)
        .with_graceful_shutdown(async move {
          if served_rx.await.is_ok() {
            tokio::time::sleep(CLOSE_GRACE_PERIOD).await;
          }
        })
        .await
    });

    info!("Serving preview at {url}");
    launch(&url).map_err(|source| {
      MdtoolError::Browser {
        url: url.clone(),
        source,
      }
    })?;

    server
      .await
      .map_err(|e| MdtoolError::Preview(e.to_string()))??;
    debug!("Preview server stopped");
    Ok::<(), MdtoolError>(())
  })
}

async fn serve_document(
  method: Method,
  State(state): State<Arc<PreviewState>>,
) -> Html<Vec<u8>> {
  let mut page = Vec::with_capacity(state.document.body.len() + 512);
  if let Err(e) = state.document.write_to(&mut page) {
    warn!("Failed to write preview response: {e}");
  }

  // HEAD requests get the headers only and do not count as the page view.
  if method != Method::GET {
    return Html(page);
  }

  if let Some(served) = state.served.lock().await.take() {
    if served.send(()).is_err() {
      debug!("Preview server already shutting down");
    }
  }

  Html(page)
}
