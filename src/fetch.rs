use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;

/// Fixed desktop-browser User-Agent. ESPN serves a different (or no)
/// schedule page to clients it does not recognize.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One-page fetch contract. The pool only sees this trait, so tests
/// drive it with stub implementations.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET one URL and return the response body text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher shared by all workers.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve one canned HTTP response on a local port.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 5\r\nconnection: close\r\n\r\nhello",
        )
        .await;

        let fetcher = HttpFetcher::new().unwrap();
        assert_eq!(fetcher.fetch(&url).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 9\r\nconnection: close\r\n\r\nnot found",
        )
        .await;

        let fetcher = HttpFetcher::new().unwrap();
        match fetcher.fetch(&url).await {
            Err(FetchError::HttpStatus(404)) => {}
            other => panic!("expected HttpStatus(404), got {other:?}"),
        }
    }
}
