//! End-to-end fetches against a local canned HTTP responder.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use tailrisk_core::Interval;
use tailrisk_ext_alphavantage::{AlphaVantageClient, AlphaVantageConfig};
use tailrisk_traits::{PriceRequest, PriceSource, TraitError};

const DAILY: &str = r#"{
    "Meta Data": {"2. Symbol": "IBM"},
    "Time Series (Daily)": {
        "2025-09-03": {"1. open": "10", "2. high": "11", "3. low": "9", "4. close": "10.5", "5. volume": "100"},
        "2025-09-02": {"1. open": "9", "2. high": "10", "3. low": "8", "4. close": "10.0", "5. volume": "90"}
    }
}"#;

/// Serves one canned `(status, body)` per connection and reports each
/// request line.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let request = String::from_utf8_lossy(&buf);
            let line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(line);

            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
    });

    (format!("http://{addr}/query"), rx)
}

fn client(base_url: &str) -> AlphaVantageClient {
    AlphaVantageClient::new(
        AlphaVantageConfig::new("TESTKEY")
            .with_base_url(base_url)
            .with_timeout_secs(5)
            .with_max_retries(2),
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_daily_series() {
    let (url, mut requests) = serve(vec![(200, DAILY)]).await;

    let series = client(&url)
        .fetch(&PriceRequest::new("IBM", Interval::Daily))
        .await
        .unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.observations()[0].close, Some(10.0));
    assert_eq!(series.returns().len(), 1);

    let line = requests.recv().await.unwrap();
    assert!(line.starts_with("GET /query?"));
    assert!(line.contains("function=TIME_SERIES_DAILY"));
    assert!(line.contains("symbol=IBM"));
    assert!(line.contains("outputsize=full"));
    assert!(line.contains("apikey=TESTKEY"));
}

#[tokio::test]
async fn test_transient_error_is_retried() {
    let (url, mut requests) = serve(vec![(503, "busy"), (200, DAILY)]).await;

    let series = client(&url)
        .fetch(&PriceRequest::new("IBM", Interval::Daily))
        .await
        .unwrap();
    assert_eq!(series.len(), 2);

    assert!(requests.recv().await.is_some());
    assert!(requests.recv().await.is_some());
}

#[tokio::test]
async fn test_rate_limit_surfaces() {
    let (url, _requests) = serve(vec![(
        200,
        r#"{"Note": "Our standard API rate limit is 25 requests per day."}"#,
    )])
    .await;

    let err = client(&url)
        .fetch(&PriceRequest::new("IBM", Interval::Weekly))
        .await
        .unwrap_err();
    assert!(matches!(err, TraitError::RateLimited(_)));
}

#[tokio::test]
async fn test_client_error_status() {
    let (url, _requests) = serve(vec![(404, "missing")]).await;

    let err = client(&url)
        .fetch(&PriceRequest::new("IBM", Interval::Monthly))
        .await
        .unwrap_err();
    assert!(matches!(err, TraitError::RequestRejected(ref m) if m.contains("404")));
}
