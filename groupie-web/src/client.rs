//! Remote data client
//!
//! Issues one GET per call to a fixed endpoint of the artist API and hands
//! back the raw body. The status code is not inspected here: a non-2xx body
//! flows on to the decoder like any other payload.

use std::time::Duration;

use async_trait::async_trait;
use groupie_common::Endpoint;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Transport-level failure talking to the remote API
#[derive(Debug, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError(err.to_string())
    }
}

/// Source of raw remote payloads
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the full body of `endpoint`
    async fn fetch(&self, endpoint: Endpoint) -> Result<Vec<u8>, FetchError>;
}

/// HTTP implementation of [`RecordSource`]
pub struct HttpSource {
    /// HTTP client for API requests
    http_client: Client,
    /// API base URL; endpoint paths are appended to it
    base_url: String,
}

impl HttpSource {
    /// Create a client for the API at `base_url`
    ///
    /// No request timeout is applied unless `timeout` is given.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch(&self, endpoint: Endpoint) -> Result<Vec<u8>, FetchError> {
        let url = endpoint.url(&self.base_url);
        debug!(endpoint = %endpoint, url = %url, "Fetching remote records");

        // The response owns the connection; it is released when consumed
        // below or dropped on the error path.
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(
            endpoint = %endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            "Remote fetch complete"
        );

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a random local port
    async fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/api", addr)
    }

    /// Client that talks to localhost directly, whatever proxy env is set
    fn local_source(base_url: String) -> HttpSource {
        HttpSource {
            http_client: Client::builder().no_proxy().build().unwrap(),
            base_url,
        }
    }

    #[tokio::test]
    async fn test_body_returned_without_status_check() {
        let base = one_shot_server(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]",
        )
        .await;

        let source = local_source(base);
        let body = source.fetch(Endpoint::Artists).await.unwrap();
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let source = local_source(format!("http://127.0.0.1:{}/api", port));
        let err = source.fetch(Endpoint::Locations).await.unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
