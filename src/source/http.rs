//! HTTP endpoint data source.
//!
//! Polls a stats endpoint (e.g. `http://localhost:5000/api/stats`) on a
//! fixed cadence and makes fetched snapshots available via `poll()`.
//!
//! The tick schedule is independent of request completion: each tick fires
//! its own GET as a detached task, so a slow response from one tick may
//! resolve after a later tick's response. Overlapping requests are not
//! prevented; the last response to resolve wins. Fetch failures (transport
//! error, non-2xx status, malformed body) are recorded and logged but never
//! interrupt the schedule.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{FetchError, StatsSnapshot, StatsSource};

/// A data source that polls a stats endpoint over HTTP.
///
/// Created via [`HttpSource::builder`], which spawns the polling task on
/// `start()`. The task runs until [`HttpSource::stop`] is called or the
/// source is dropped. Stopping only cancels the tick schedule; a request
/// already in flight is never aborted (its response is simply discarded
/// once the receiver is gone).
///
/// # Example
///
/// ```no_run
/// use botwatch::{HttpSource, StatsSource};
/// use std::time::Duration;
///
/// # tokio_test::block_on(async {
/// let mut source = HttpSource::builder()
///     .endpoint("http://localhost:5000/api/stats")
///     .interval(Duration::from_secs(5))
///     .start();
///
/// if let Some(snapshot) = source.poll() {
///     println!("users: {:?}", snapshot.bot.map(|b| b.total_users));
/// }
/// source.stop();
/// # });
/// ```
#[derive(Debug)]
pub struct HttpSource {
    receiver: mpsc::Receiver<StatsSnapshot>,
    description: String,
    last_error: Arc<Mutex<Option<String>>>,
    ticker: JoinHandle<()>,
}

impl HttpSource {
    /// Create a new builder for configuring the source.
    pub fn builder() -> HttpSourceBuilder {
        HttpSourceBuilder::default()
    }

    /// Stop the polling schedule.
    ///
    /// In-flight requests are not aborted; they complete and their results
    /// are dropped.
    pub fn stop(&self) {
        self.ticker.abort();
    }
}

impl Drop for HttpSource {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

impl StatsSource for HttpSource {
    fn poll(&mut self) -> Option<StatsSnapshot> {
        // Drain everything that resolved since the last poll and keep the
        // most recent; earlier responses lose to later ones.
        let mut latest = None;
        while let Ok(snapshot) = self.receiver.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<String> {
        self.last_error.lock().unwrap().clone()
    }
}

/// Builder for [`HttpSource`].
#[derive(Debug, Default)]
pub struct HttpSourceBuilder {
    endpoint: Option<String>,
    interval: Option<Duration>,
    timeout: Option<Duration>,
}

impl HttpSourceBuilder {
    /// Set the stats endpoint URL (default: `http://localhost:5000/api/stats`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the polling interval (default: 5 seconds).
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set a request timeout. There is none by default: a hung request
    /// simply never resolves and its tick contributes no update.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the source and start the polling task.
    ///
    /// The first fetch is issued immediately; subsequent fetches follow the
    /// configured interval. Must be called from within a tokio runtime.
    pub fn start(self) -> HttpSource {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| "http://localhost:5000/api/stats".to_string());
        let interval = self.interval.unwrap_or(Duration::from_secs(5));

        let mut client = Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        let client = client.build().expect("Failed to build HTTP client");

        let (tx, rx) = mpsc::channel(16);
        let last_error = Arc::new(Mutex::new(None));
        let description = format!("http: {}", endpoint);

        let error_handle = last_error.clone();
        let url = endpoint.clone();
        let ticker = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            loop {
                ticks.tick().await;

                let client = client.clone();
                let url = url.clone();
                let tx = tx.clone();
                let error_handle = error_handle.clone();

                // Detached so a stalled request cannot delay the next tick.
                tokio::spawn(async move {
                    match fetch_once(&client, &url).await {
                        Ok(snapshot) => {
                            debug!(endpoint = %url, "received stats snapshot");
                            *error_handle.lock().unwrap() = None;
                            let _ = tx.send(snapshot).await;
                        }
                        Err(e) => {
                            warn!(endpoint = %url, "stats fetch failed: {}", e);
                            *error_handle.lock().unwrap() = Some(e.to_string());
                        }
                    }
                });
            }
        });

        HttpSource {
            receiver: rx,
            description,
            last_error,
            ticker,
        }
    }
}

/// One fetch-and-parse cycle against the endpoint.
async fn fetch_once(client: &Client, url: &str) -> Result<StatsSnapshot, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        // Don't attempt to parse an error body
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn sample_json() -> &'static str {
        r#"{"bot":{"total_users":10,"total_deliveries":20,"total_earnings":30,"active_buffs":1},"bot_status":true}"#
    }

    /// Spawn a listener that answers every connection with the same canned
    /// HTTP response, returning its endpoint URL.
    async fn serve(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    // Read the request head; content doesn't matter
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;

                    let response = format!(
                        "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });

        format!("http://{}/api/stats", addr)
    }

    #[test]
    fn test_builder_defaults() {
        let builder = HttpSourceBuilder::default();
        assert!(builder.endpoint.is_none());
        assert!(builder.interval.is_none());
        assert!(builder.timeout.is_none());
    }

    #[tokio::test]
    async fn test_http_source_receives_snapshot() {
        let endpoint = serve("HTTP/1.1 200 OK", sample_json()).await;

        let mut source = HttpSource::builder()
            .endpoint(&endpoint)
            .interval(Duration::from_millis(50))
            .start();

        assert_eq!(source.description(), format!("http: {}", endpoint));

        tokio::time::sleep(Duration::from_millis(200)).await;

        let snapshot = source.poll().expect("should have received a snapshot");
        assert_eq!(snapshot.bot.unwrap().total_users, 10);
        assert_eq!(snapshot.bot_status, Some(true));
        assert!(source.error().is_none());
    }

    #[tokio::test]
    async fn test_http_source_drains_to_latest() {
        let endpoint = serve("HTTP/1.1 200 OK", sample_json()).await;

        let mut source = HttpSource::builder()
            .endpoint(&endpoint)
            .interval(Duration::from_millis(20))
            .start();

        // Let several ticks resolve, then a single poll consumes them all
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(source.poll().is_some());
        assert!(source.poll().is_none());
    }

    #[tokio::test]
    async fn test_http_source_server_error() {
        let endpoint = serve("HTTP/1.1 500 Internal Server Error", "oops").await;

        let mut source = HttpSource::builder()
            .endpoint(&endpoint)
            .interval(Duration::from_millis(50))
            .start();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(source.poll().is_none());
        let err = source.error().expect("error should be recorded");
        assert!(err.contains("500"), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_http_source_invalid_json() {
        let endpoint = serve("HTTP/1.1 200 OK", "not valid json").await;

        let mut source = HttpSource::builder()
            .endpoint(&endpoint)
            .interval(Duration::from_millis(50))
            .start();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(source.poll().is_none());
        let err = source.error().expect("error should be recorded");
        assert!(err.contains("parse"), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_http_source_unreachable() {
        // Bind-then-drop to get a port nothing is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut source = HttpSource::builder()
            .endpoint(format!("http://{}/api/stats", addr))
            .interval(Duration::from_millis(50))
            .start();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(source.poll().is_none());
        assert!(source.error().is_some());
    }

    #[tokio::test]
    async fn test_http_source_error_cleared_on_success() {
        // No listener yet: first fetches fail
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut source = HttpSource::builder()
            .endpoint(format!("http://{}/api/stats", addr))
            .interval(Duration::from_millis(50))
            .start();

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(source.error().is_some());

        // Bring a server up on the same port
        let listener = match TcpListener::bind(addr).await {
            Ok(l) => l,
            // Port was grabbed by something else; nothing left to assert
            Err(_) => return,
        };
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let body = sample_json();
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(source.poll().is_some());
        assert!(source.error().is_none());
    }

    #[tokio::test]
    async fn test_http_source_stop() {
        let endpoint = serve("HTTP/1.1 200 OK", sample_json()).await;

        let mut source = HttpSource::builder()
            .endpoint(&endpoint)
            .interval(Duration::from_millis(20))
            .start();

        tokio::time::sleep(Duration::from_millis(100)).await;
        source.stop();

        // Let any fetch that was already in flight resolve, then drain
        tokio::time::sleep(Duration::from_millis(50)).await;
        let _ = source.poll();

        // No new snapshots after stopping
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(source.poll().is_none());
    }
}
