use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::product::services::{ExchangeRateError, ExchangeRateService};

use crate::client::ExchangeRateClient;

const RETRY_BACKOFF: Duration = Duration::from_millis(250);

#[derive(Deserialize)]
struct PairConversionResponse {
    conversion_rate: Option<serde_json::Number>,
}

/// `ExchangeRateService` backed by the ExchangeRate-API pair endpoint.
pub struct ExchangeRateApi {
    client: ExchangeRateClient,
}

impl ExchangeRateApi {
    pub fn new(client: ExchangeRateClient) -> Self {
        Self { client }
    }

    /// Extracts a positive `conversion_rate` from a provider response body.
    fn parse_rate(body: &str) -> Result<Decimal, ExchangeRateError> {
        let response: PairConversionResponse =
            serde_json::from_str(body).map_err(|_| ExchangeRateError::MissingRate)?;

        let raw = response
            .conversion_rate
            .ok_or(ExchangeRateError::MissingRate)?
            .to_string();

        let rate = Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .map_err(|_| ExchangeRateError::MissingRate)?;

        if rate <= Decimal::ZERO {
            return Err(ExchangeRateError::MissingRate);
        }
        Ok(rate)
    }

    fn is_transient(error: &reqwest::Error) -> bool {
        error.is_connect() || error.is_timeout()
    }

    async fn fetch(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        let mut attempt = 0;
        loop {
            match self.client.client.get(url).send().await {
                Err(e) if Self::is_transient(&e) && attempt < self.client.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        max_retries = self.client.max_retries,
                        "Exchange rate request failed, retrying: {}",
                        e
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                result => return result,
            }
        }
    }
}

#[async_trait]
impl ExchangeRateService for ExchangeRateApi {
    async fn get_conversion_rate(
        &self,
        base: &str,
        target: &str,
    ) -> Result<Decimal, ExchangeRateError> {
        let url = self.client.pair_url(base, target);
        tracing::debug!(base, target, "Requesting conversion rate");

        let response = self.fetch(&url).await.map_err(|e| {
            // Strip the URL so the API key never ends up in logs or responses.
            let message = e.without_url().to_string();
            tracing::error!("Failed to connect to external currency API: {}", message);
            ExchangeRateError::Connection(message)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExchangeRateError::Connection(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                "External currency API error: {}",
                body
            );
            return Err(ExchangeRateError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let rate = Self::parse_rate(&body)?;
        tracing::info!(base, target, %rate, "Conversion rate retrieved");
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::client::ExchangeRateClientConfig;

    fn api(base_url: &str, timeout: Duration, max_retries: u32) -> ExchangeRateApi {
        ExchangeRateApi::new(
            ExchangeRateClient::new(ExchangeRateClientConfig {
                base_url: base_url.to_string(),
                api_key: "secret-key".to_string(),
                timeout,
                max_retries,
            })
            .unwrap(),
        )
    }

    /// Local provider answering every request with `status_line` and `body`.
    /// Returns its base URL, the number of requests served and the request
    /// lines received.
    async fn serve(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, Arc<AtomicUsize>, Arc<std::sync::Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(std::sync::Mutex::new(Vec::new()));

        let (counter, seen) = (hits.clone(), requests.clone());
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let seen = seen.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let read = stream.read(&mut buf).await.unwrap_or(0);
                    let head = String::from_utf8_lossy(&buf[..read]);
                    if let Some(line) = head.lines().next() {
                        seen.lock().unwrap().push(line.to_string());
                    }
                    let response = format!(
                        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        (base_url, hits, requests)
    }

    /// Local provider that accepts connections and never answers.
    async fn serve_nothing() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(async move {
                    let _held = stream;
                    tokio::time::sleep(Duration::from_secs(30)).await;
                });
            }
        });

        (base_url, hits)
    }

    #[tokio::test]
    async fn should_return_rate_from_pair_endpoint() {
        let (base_url, hits, requests) =
            serve("200 OK", r#"{"result":"success","conversion_rate":0.20000}"#).await;

        let rate = api(&base_url, Duration::from_secs(5), 2)
            .get_conversion_rate("BRL", "USD")
            .await
            .unwrap();

        assert_eq!(rate, Decimal::new(2, 1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(
            requests.lock().unwrap()[0],
            "GET /secret-key/pair/BRL/USD HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn should_report_non_success_status_without_retrying() {
        let (base_url, hits, _) = serve(
            "404 Not Found",
            r#"{"result":"error","error-type":"unsupported-code"}"#,
        )
        .await;

        let result = api(&base_url, Duration::from_secs(5), 2)
            .get_conversion_rate("BRL", "XYZ")
            .await;

        match result {
            Err(ExchangeRateError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("unsupported-code"));
            }
            other => panic!("expected unexpected status, got {:?}", other),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_report_missing_rate_in_success_body() {
        let (base_url, _, _) = serve("200 OK", r#"{"result":"success"}"#).await;

        let result = api(&base_url, Duration::from_secs(5), 0)
            .get_conversion_rate("BRL", "USD")
            .await;

        assert!(matches!(result, Err(ExchangeRateError::MissingRate)));
    }

    #[tokio::test]
    async fn should_retry_timeouts_up_to_the_limit() {
        let (base_url, hits) = serve_nothing().await;

        let result = api(&base_url, Duration::from_millis(200), 2)
            .get_conversion_rate("BRL", "USD")
            .await;

        assert!(matches!(result, Err(ExchangeRateError::Connection(_))));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn should_back_off_between_refused_connections_and_hide_key() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let started = Instant::now();
        let result = api(&base_url, Duration::from_secs(5), 2)
            .get_conversion_rate("BRL", "USD")
            .await;

        // Two retries wait 250ms and 500ms.
        assert!(started.elapsed() >= Duration::from_millis(750));
        match result {
            Err(ExchangeRateError::Connection(message)) => {
                assert!(!message.contains("secret-key"), "{}", message);
            }
            other => panic!("expected connection error, got {:?}", other),
        }
    }

    #[test]
    fn should_parse_decimal_rate_exactly() {
        let body = r#"{"result":"success","base_code":"BRL","target_code":"USD","conversion_rate":0.1825}"#;
        assert_eq!(
            ExchangeRateApi::parse_rate(body).unwrap(),
            Decimal::new(1825, 4)
        );
    }

    #[test]
    fn should_parse_integer_rate() {
        let body = r#"{"conversion_rate":5}"#;
        assert_eq!(ExchangeRateApi::parse_rate(body).unwrap(), Decimal::new(5, 0));
    }

    #[test]
    fn should_report_missing_rate() {
        for body in [
            r#"{"result":"error","error-type":"unsupported-code"}"#,
            r#"{"conversion_rate":null}"#,
            r#"{"conversion_rate":0}"#,
            r#"{"conversion_rate":-1.5}"#,
            "not json",
        ] {
            assert!(
                matches!(
                    ExchangeRateApi::parse_rate(body),
                    Err(ExchangeRateError::MissingRate)
                ),
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn should_report_non_numeric_rate_as_missing() {
        let body = r#"{"conversion_rate":"0.18"}"#;
        assert!(matches!(
            ExchangeRateApi::parse_rate(body),
            Err(ExchangeRateError::MissingRate)
        ));
    }
}
