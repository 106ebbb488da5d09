//! Test helpers: an in-process Livestatus server and sample rows.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixListener;
use tokio::sync::Mutex;

/// A unix socket server that records every query it receives and answers
/// each one with the same canned reply.
pub struct FakeLivestatus {
    _dir: TempDir,
    socket_path: PathBuf,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeLivestatus {
    pub async fn replying(reply: &str) -> Self {
        Self::spawn(Some(reply.to_string())).await
    }

    /// Accepts connections and reads the query but never answers.
    pub async fn silent() -> Self {
        Self::spawn(None).await
    }

    async fn spawn(reply: Option<String>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("live");
        let listener = UnixListener::bind(&socket_path).unwrap();
        let queries = Arc::new(Mutex::new(Vec::new()));

        let recorded = queries.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let recorded = recorded.clone();
                let reply = reply.clone();
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let _ = stream.read_to_end(&mut request).await;
                    recorded
                        .lock()
                        .await
                        .push(String::from_utf8_lossy(&request).into_owned());

                    match reply {
                        Some(reply) => {
                            let _ = stream.write_all(reply.as_bytes()).await;
                            let _ = stream.shutdown().await;
                        }
                        None => std::future::pending::<()>().await,
                    }
                });
            }
        });

        Self {
            _dir: dir,
            socket_path,
            queries,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Number of queries recorded so far, without waiting.
    pub async fn count(&self) -> usize {
        self.queries.lock().await.len()
    }

    /// Queries received so far. Waits briefly so handlers spawned for
    /// connections that are still being read get a chance to record.
    pub async fn received(&self) -> Vec<String> {
        for _ in 0..50 {
            let queries = self.queries.lock().await;
            if !queries.is_empty() {
                return queries.clone();
            }
            drop(queries);
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        self.queries.lock().await.clone()
    }
}

pub fn host_row(name: &str) -> Value {
    json!([
        1, name, "Web server", 1, "10.0.0.1", "24x7", "naemon", 0,
        [12, 4, 9], ["alice", "bob"], [],
        "", 1, 0.004, 1, ["linux", "web"],
        0, 1, 1, 1, 0,
        1700000000, 0, 1690000000, 0, 0, 1700000000,
        0.12, 1700000060, 0, "24x7", 1,
        5, 1, 2, 0, 2, 0,
        0, 1, ["HTTP", "SSH"]
    ])
}

pub fn service_row(host_name: &str, description: &str) -> Value {
    json!([
        11, 0, "24x7", "naemon", 0, 1,
        [], ["alice"], description, [3],
        "", 1, 0.25, 1, ["http"],
        1, 1, 1, 1,
        1700000000, 0, 1690000000, 0, 1700000000, 0, 0,
        0.01, 1700000060, 0, "24x7", 1,
        0, 1, 1, host_name
    ])
}
