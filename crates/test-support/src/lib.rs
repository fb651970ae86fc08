use anyhow::Context as _;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// A localhost HTTP server that serves fixed documents (spec files, route tables) for URL-source
/// tests. The server task is aborted on drop.
pub struct DocumentServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl DocumentServer {
    /// Serve each `(path, body)` pair with `GET`. Any other path answers 404.
    ///
    /// # Errors
    ///
    /// Returns an error if binding an ephemeral localhost port fails or if the bound socket's
    /// local address cannot be read.
    pub async fn start(documents: Vec<(&'static str, String)>) -> anyhow::Result<Self> {
        let mut app = Router::new();
        for (path, body) in documents {
            app = app.route(
                path,
                get(move || {
                    let body = body.clone();
                    async move { body }
                }),
            );
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind ephemeral port")?;
        let addr = listener.local_addr().context("read local addr")?;
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, task })
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for DocumentServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
