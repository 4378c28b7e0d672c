//! Low-level HTTP client — `FoodflashHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients).

use crate::backend::OrderBackend;
use crate::domain::order::wire::{CreateOrderRequest, CreateOrderResponse, OrderRecord};
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::shared::UserId;

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the FoodFlash REST API.
#[derive(Clone)]
pub struct FoodflashHttp {
    base_url: String,
    client: Client,
    history_retry: RetryPolicy,
}

impl FoodflashHttp {
    /// Build a client. `timeout` of `None` leaves reqwest's default (no limit).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.pool_max_idle_per_host(10);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            history_retry: RetryPolicy::None,
        })
    }

    /// Retry policy applied to history fetches. Order creation never retries.
    pub fn with_history_retry(mut self, policy: RetryPolicy) -> Self {
        self.history_retry = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, HttpError> {
        let url = format!("{}/api/orders", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn get_user_orders(&self, user_id: UserId) -> Result<Vec<OrderRecord>, HttpError> {
        let url = format!("{}/api/orders/user/{}", self.base_url, user_id);
        self.get(&url, self.history_retry.clone()).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(&method, url, body).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if !config.is_retryable(&e) || attempt >= config.max_retries {
                        return Err(e);
                    }

                    let delay = match &e {
                        HttpError::RateLimited {
                            retry_after_ms: Some(ms),
                            ..
                        } => Duration::from_millis(*ms),
                        _ => config.delay_for_attempt(attempt),
                    };
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    last_error = Some(e);
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(%method, url, "Sending request");
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let text = resp.text().await?;
            return serde_json::from_str::<T>(&text).map_err(|e| HttpError::Decode(e.to_string()));
        }

        let retry_after_ms = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let body_text = resp.text().await.unwrap_or_default();

        match status.as_u16() {
            429 => Err(HttpError::RateLimited {
                retry_after_ms,
                body: body_text,
            }),
            status_code => Err(HttpError::Status {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

/// `Retry-After` in delta-seconds, as milliseconds. Values that overflow are ignored.
fn parse_retry_after(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|secs| secs.checked_mul(1000))
}

#[async_trait]
impl OrderBackend for FoodflashHttp {
    async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, HttpError> {
        FoodflashHttp::create_order(self, request).await
    }

    async fn fetch_orders(&self, user_id: UserId) -> Result<Vec<OrderRecord>, HttpError> {
        self.get_user_orders(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FoodflashClient;
    use crate::domain::submission::{SubmissionOutcome, SubmitError};
    use crate::shared::VendorId;
    use chrono::{TimeZone, Utc};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    // ─── Local server ────────────────────────────────────────────────────────

    fn http_response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
        let mut out = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
            status,
            body.len()
        );
        for (name, value) in headers {
            out.push_str(&format!("{}: {}\r\n", name, value));
        }
        out.push_str("\r\n");
        out.push_str(body);
        out
    }

    /// Read one request, headers and body, so the reply is not cut short.
    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serve one canned response per connection, in order. Returns the base URL.
    async fn serve(responses: Vec<String>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for response in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                read_request(&mut stream).await;
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
        });
        format!("http://{}", addr)
    }

    fn client_at(base_url: &str) -> FoodflashClient {
        FoodflashClient::builder()
            .base_url(base_url)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    // ─── Unit ────────────────────────────────────────────────────────────────

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = FoodflashHttp::new("http://localhost:5000/", None).unwrap();
        assert_eq!(http.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after("120"), Some(120_000));
        assert_eq!(parse_retry_after(" 3 "), Some(3_000));
        assert_eq!(parse_retry_after("18446744073709552"), None);
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) is closed on test hosts; the connect fails fast.
        let http = FoodflashHttp::new("http://127.0.0.1:9", Some(Duration::from_secs(5))).unwrap();
        let err = http.get_user_orders(UserId::new(1)).await.unwrap_err();
        assert!(
            matches!(err, HttpError::Transport(_) | HttpError::Timeout),
            "unexpected error: {err:?}"
        );
        assert!(err.status().is_none());
    }

    // ─── Over the wire ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_non_2xx_keeps_status_and_body() {
        let body = r#"{"error": "card declined"}"#;
        let url = serve(vec![http_response("402 Payment Required", &[], body)]).await;
        let http = FoodflashHttp::new(&url, Some(Duration::from_secs(5))).unwrap();

        let err = http.get_user_orders(UserId::new(1)).await.unwrap_err();
        assert_eq!(
            err,
            HttpError::Status {
                status: 402,
                body: body.to_string(),
            }
        );
        assert_eq!(err.server_reason().as_deref(), Some("card declined"));
    }

    #[tokio::test]
    async fn test_declined_order_banner_end_to_end() {
        let url = serve(vec![http_response(
            "402 Payment Required",
            &[],
            r#"{"error": "card declined"}"#,
        )])
        .await;
        let client = client_at(&url);

        let outcome = client.submissions().submit(VendorId::new(2), "Burger Barn").await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed(SubmitError::RejectedByServer {
                status: Some(402),
                reason: "card declined".into(),
            })
        );
        let snapshot = client.snapshot().await;
        assert!(!snapshot.submitting);
        assert_eq!(
            snapshot.last_error.as_deref(),
            Some("Failed to place order: card declined")
        );
    }

    #[tokio::test]
    async fn test_success_false_body_is_rejection() {
        let url = serve(vec![http_response(
            "200 OK",
            &[],
            r#"{"success": false, "error": "card declined"}"#,
        )])
        .await;
        let client = client_at(&url);

        let outcome = client.submissions().submit(VendorId::new(2), "Burger Barn").await;

        assert!(matches!(
            outcome,
            SubmissionOutcome::Failed(SubmitError::RejectedByServer { status: None, .. })
        ));
        assert_eq!(
            client.snapshot().await.last_error.as_deref(),
            Some("Failed to place order: card declined")
        );
    }

    #[tokio::test]
    async fn test_undecodable_2xx_body_is_network_failure() {
        let url = serve(vec![
            http_response("200 OK", &[], "<html>ok</html>"),
            http_response("200 OK", &[], "<html>ok</html>"),
        ])
        .await;

        let http = FoodflashHttp::new(&url, Some(Duration::from_secs(5))).unwrap();
        let err = http.get_user_orders(UserId::new(1)).await.unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)), "unexpected error: {err:?}");

        let client = client_at(&url);
        let outcome = client.submissions().submit(VendorId::new(1), "Pizza Palace").await;
        assert!(matches!(
            outcome,
            SubmissionOutcome::Failed(SubmitError::NetworkFailure(_))
        ));
        let banner = client.snapshot().await.last_error.unwrap();
        assert!(
            banner.starts_with("Failed to place order: Invalid response body"),
            "{banner}"
        );
    }

    #[tokio::test]
    async fn test_oversized_retry_after_does_not_panic() {
        let url = serve(vec![http_response(
            "429 Too Many Requests",
            &[("Retry-After", "18446744073709552")],
            "",
        )])
        .await;
        let client = client_at(&url);

        let outcome = client.submissions().submit(VendorId::new(2), "Burger Barn").await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed(SubmitError::RejectedByServer {
                status: Some(429),
                reason: "Request failed with status code 429".into(),
            })
        );
        assert!(!client.submissions().is_submitting());
    }

    #[tokio::test]
    async fn test_rate_limit_carries_retry_after() {
        let url = serve(vec![http_response(
            "429 Too Many Requests",
            &[("Retry-After", "2")],
            "",
        )])
        .await;
        let http = FoodflashHttp::new(&url, Some(Duration::from_secs(5))).unwrap();

        let err = http.get_user_orders(UserId::new(1)).await.unwrap_err();
        assert_eq!(
            err,
            HttpError::RateLimited {
                retry_after_ms: Some(2_000),
                body: String::new(),
            }
        );
    }

    #[tokio::test]
    async fn test_placed_order_then_history_with_sql_timestamps() {
        let history = r#"[
            {"id": 1, "status": "delivered", "total": 15.99,
             "created_at": "2025-05-30T12:00:00.000Z", "restaurant_name": "Pizza Palace"},
            {"id": 7, "status": "preparing", "total": "15.99",
             "created_at": "2025-06-01 18:00:00", "restaurant_name": "Burger Barn"}
        ]"#;
        let url = serve(vec![
            http_response("201 Created", &[], r#"{"success": true, "orderId": 7}"#),
            http_response("200 OK", &[], history),
        ])
        .await;
        let client = client_at(&url);

        let outcome = client.submissions().submit(VendorId::new(2), "Burger Barn").await;

        assert!(outcome.is_placed(), "unexpected outcome: {outcome:?}");
        let snapshot = client.snapshot().await;
        assert!(snapshot.last_error.is_none());
        assert_eq!(snapshot.orders.len(), 2);
        assert_eq!(snapshot.orders[1].id.to_string(), "7");
        assert_eq!(
            snapshot.orders[1].created_at,
            Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()
        );
        assert!(snapshot.synced_at.is_some());
    }

    #[tokio::test]
    async fn test_create_order_request_on_the_wire() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let reply = http_response("200 OK", &[], r#"{"success": false}"#);
            stream.write_all(reply.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            request
        });
        let client = client_at(&url);

        client.submissions().submit(VendorId::new(3), "Taco Fiesta").await;

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/orders HTTP/1.1"), "{request}");
        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["vendorId"], 3);
        assert_eq!(json["userId"], 1);
        assert_eq!(json["paymentInfo"]["paymentMethodId"], "pm_test_card");
    }
}
