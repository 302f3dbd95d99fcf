use crate::config::{DEFAULT_DELAY, DEFAULT_RETRIES};
use crate::error::{Result, SyncError};
use crate::record::RemoteUser;
use std::time::Duration;

/// Fetcher pulls the current snapshot of remote user records over HTTP.
///
/// Transient failures (transport errors and non-2xx statuses) are retried
/// up to the configured limit with a fixed delay between attempts. An empty
/// array is a valid zero-record snapshot, not an error.
pub struct Fetcher {
    client: reqwest::Client,
    url: String,
    retries: usize,
    delay: Duration,
}

impl Fetcher {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .expect("reqwest client");
        Self {
            client,
            url: url.into(),
            retries: DEFAULT_RETRIES,
            delay: DEFAULT_DELAY,
        }
    }

    /// Set the number of attempts before a fetch failure becomes fatal.
    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries.max(1);
        self
    }

    /// Set the fixed pause between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// GET the snapshot, retrying on failure. The delay is constant across
    /// attempts, not exponential. After the last failed attempt the
    /// underlying error escalates to the caller.
    pub async fn fetch(&self) -> Result<Vec<RemoteUser>> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt().await {
                Ok(users) => return Ok(users),
                Err(e) => {
                    log::error!("error fetching users (attempt {attempt}): {e}");
                    if attempt < self.retries {
                        log::info!("retrying in {} seconds", self.delay.as_secs());
                        tokio::time::sleep(self.delay).await;
                    } else {
                        return Err(SyncError::Transport {
                            attempts: attempt,
                            source: e,
                        });
                    }
                }
            }
        }
    }

    async fn attempt(&self) -> std::result::Result<Vec<RemoteUser>, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BODY: &str = r#"[{"name":"Ann","email":"a@x.com"}]"#;

    fn ok(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    fn server_error() -> String {
        "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
            .to_string()
    }

    /// One canned response per connection, repeating the last one forever.
    /// Returns the base URL and a counter of requests served.
    async fn serve(responses: Vec<String>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            loop {
                let (mut stream, _) = listener.accept().await.unwrap();
                let n = counter.fetch_add(1, Ordering::SeqCst);
                let response = responses.get(n).unwrap_or_else(|| responses.last().unwrap());
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf).await;
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        (url, hits)
    }

    #[tokio::test]
    async fn succeeds_after_two_failures() {
        let (url, hits) = serve(vec![server_error(), server_error(), ok(BODY)]).await;
        let fetcher = Fetcher::new(url)
            .with_retries(3)
            .with_delay(Duration::ZERO);
        let users = fetcher.fetch().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name.as_deref(), Some("Ann"));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausts_retries_and_escalates() {
        let (url, hits) = serve(vec![server_error()]).await;
        let fetcher = Fetcher::new(url)
            .with_retries(3)
            .with_delay(Duration::ZERO);
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, SyncError::Transport { attempts: 3, .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn empty_array_is_zero_record_success() {
        let (url, _) = serve(vec![ok("[]")]).await;
        let fetcher = Fetcher::new(url).with_delay(Duration::ZERO);
        let users = fetcher.fetch().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn unparseable_body_follows_the_retry_path() {
        let (url, hits) = serve(vec![ok("not json")]).await;
        let fetcher = Fetcher::new(url)
            .with_retries(2)
            .with_delay(Duration::ZERO);
        let err = fetcher.fetch().await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
