// SPDX-License-Identifier: PMPL-1.0-or-later
//! Input resolution: URL, file:// URL, or local file path.
//!
//! HTTP(S) URLs pass through untouched. A local `.html`/`.htm` file is
//! read once and served from an ephemeral loopback server so that
//! browser-driven and remote engines can reach it; the server lives
//! exactly as long as the returned [`ResolvedTarget`].

use crate::error::{AuditError, Result};
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

/// A reachable address for an audit, plus the resource backing it
#[derive(Debug)]
pub struct ResolvedTarget {
    pub url: String,
    pub is_local: bool,
    server: Option<EphemeralServer>,
}

impl ResolvedTarget {
    fn passthrough(url: String, is_local: bool) -> Self {
        Self { url, is_local, server: None }
    }
}

/// Loopback HTTP server for a single document; shut down on drop
#[derive(Debug)]
struct EphemeralServer {
    handle: JoinHandle<()>,
}

impl Drop for EphemeralServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Resolve a user-supplied URL or file path into a reachable address
pub async fn resolve(input: &str) -> Result<ResolvedTarget> {
    if let Ok(url) = Url::parse(input) {
        match url.scheme() {
            "http" | "https" => {
                return Ok(ResolvedTarget::passthrough(input.to_string(), is_localhost(&url)));
            }
            "file" => {
                return Ok(ResolvedTarget::passthrough(input.to_string(), true));
            }
            _ => {
                return Err(AuditError::InvalidInput(format!(
                    "Unsupported URL scheme: {}",
                    url.scheme()
                )));
            }
        }
    }

    let path = Path::new(input);
    if is_html_file(path) {
        let content = std::fs::read_to_string(path)?;
        let (url, server) = serve_document(content).await?;
        debug!("Serving {} at {}", path.display(), url);
        return Ok(ResolvedTarget { url, is_local: true, server: Some(server) });
    }

    Err(AuditError::InvalidInput(format!(
        "\"{}\" is not a valid URL, file:// URL, or local HTML file path",
        input
    )))
}

fn is_localhost(url: &Url) -> bool {
    matches!(url.host_str(), Some("localhost") | Some("127.0.0.1") | Some("::1") | Some("[::1]"))
}

fn is_html_file(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    path.exists() && matches!(ext, "html" | "htm")
}

/// Bind a loopback listener on a random port and serve one HTML document
async fn serve_document(content: String) -> Result<(String, EphemeralServer)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let url = format!("http://127.0.0.1:{}/", port);

    let handle = tokio::spawn(async move {
        loop {
            let (mut stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!("Ephemeral server accept failed: {}", e);
                    break;
                }
            };
            let body = content.clone();
            tokio::spawn(async move {
                // Drain the request head; the response is the same for
                // every path.
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    Ok((url, EphemeralServer { handle }))
}
