//! Livestatus socket client.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::{timeout_at, Instant};

use super::Query;

/// Query error types.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("failed to connect to {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("query timed out after {0:?}")]
    Timeout(Duration),
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
}

/// Client for a Livestatus unix socket.
///
/// Every query uses its own connection; nothing is pooled or retried.
#[derive(Debug, Clone)]
pub struct Client {
    socket_path: PathBuf,
    timeout: Duration,
}

impl Client {
    pub fn new<P: AsRef<Path>>(socket_path: P, timeout: Duration) -> Self {
        Self {
            socket_path: socket_path.as_ref().to_path_buf(),
            timeout,
        }
    }

    /// Connect, send the query and return the open reply stream.
    ///
    /// The deadline starts now and also bounds reading the reply.
    pub async fn open(&self, query: &Query) -> Result<Reply, QueryError> {
        let deadline = Instant::now() + self.timeout;
        tracing::debug!(
            "Querying {} on {}:\n{}",
            query.table(),
            self.socket_path.display(),
            query
        );

        let mut stream = timeout_at(deadline, UnixStream::connect(&self.socket_path))
            .await
            .map_err(|_| QueryError::Timeout(self.timeout))?
            .map_err(|source| QueryError::Connect {
                path: self.socket_path.clone(),
                source,
            })?;

        let request = query.to_string();
        timeout_at(deadline, async {
            stream.write_all(request.as_bytes()).await?;
            stream.shutdown().await?;
            Ok::<_, std::io::Error>(())
        })
        .await
        .map_err(|_| QueryError::Timeout(self.timeout))??;

        Ok(Reply {
            stream,
            deadline,
            timeout: self.timeout,
        })
    }

    /// Run a query and read the complete reply.
    pub async fn execute(&self, query: &Query) -> Result<Vec<u8>, QueryError> {
        self.open(query).await?.read_to_end().await
    }
}

/// The read side of a query connection. Dropping it closes the socket.
#[derive(Debug)]
pub struct Reply {
    stream: UnixStream,
    deadline: Instant,
    timeout: Duration,
}

impl Reply {
    /// Drain the reply until Livestatus closes the connection.
    pub async fn read_to_end(mut self) -> Result<Vec<u8>, QueryError> {
        let mut body = Vec::new();
        timeout_at(self.deadline, self.stream.read_to_end(&mut body))
            .await
            .map_err(|_| QueryError::Timeout(self.timeout))??;
        Ok(body)
    }
}
