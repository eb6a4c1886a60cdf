//! Crime analytics API client.

use std::time::Duration;

use async_trait::async_trait;
use crime_hotspots_config::ApiConfig;
use crime_hotspots_incident_models::{ForecastEntry, Incident};
use serde::de::DeserializeOwned;

use crate::LoaderError;

/// Maximum length of the response body preview included in error logs.
const BODY_PREVIEW_LEN: usize = 500;

/// Source of incident and forecast collections.
#[async_trait]
pub trait CrimeApi: Send + Sync {
    /// Fetches every incident.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError`] on transport failure, a non-success status,
    /// or an undecodable body.
    async fn incidents(&self) -> Result<Vec<Incident>, LoaderError>;

    /// Fetches the hotspot forecast.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError`] on transport failure, a non-success status,
    /// or an undecodable body.
    async fn forecast(&self) -> Result<Vec<ForecastEntry>, LoaderError>;
}

/// [`CrimeApi`] over HTTP. No retries: a failed request fails the cycle.
#[derive(Debug, Clone)]
pub struct HttpCrimeApi {
    client: reqwest::Client,
    incidents_url: String,
    forecast_url: String,
}

impl HttpCrimeApi {
    /// Creates a client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, LoaderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            incidents_url: config.incidents_url(),
            forecast_url: config.forecast_url(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoaderError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoaderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Read the raw body first so a decode failure can log what arrived.
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| {
            let preview = if text.len() > BODY_PREVIEW_LEN {
                format!("{}...", text.chars().take(BODY_PREVIEW_LEN).collect::<String>())
            } else {
                text.clone()
            };
            log::warn!(
                "JSON decode failed.\n  \
                 url: {url}\n  \
                 received: {} bytes\n  \
                 error: {source}\n  \
                 body preview: {preview}",
                text.len(),
            );
            LoaderError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }
}

#[async_trait]
impl CrimeApi for HttpCrimeApi {
    async fn incidents(&self) -> Result<Vec<Incident>, LoaderError> {
        self.get_json(&self.incidents_url).await
    }

    async fn forecast(&self) -> Result<Vec<ForecastEntry>, LoaderError> {
        self.get_json(&self.forecast_url).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves one canned HTTP response and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    fn api(base_url: String) -> HttpCrimeApi {
        HttpCrimeApi::new(&ApiConfig {
            base_url,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn fetches_incidents() {
        let base = serve_once(
            "200 OK",
            r#"[{"type":"Theft","location":"X","lat":16.5,"lng":80.6,"summary":"Phone","severity":0.4}]"#,
        )
        .await;

        let incidents = api(base).incidents().await.unwrap();
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].crime_type, "Theft");
        assert_eq!(incidents[0].severity, Some(0.4));
    }

    #[tokio::test]
    async fn fetches_empty_forecast() {
        let base = serve_once("200 OK", "[]").await;
        assert!(api(base).forecast().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn server_error_is_status_failure() {
        let base = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        let err = api(base).incidents().await.unwrap_err();
        assert!(
            matches!(err, LoaderError::Status { status: 500, ref url } if url.ends_with("/api/incidents")),
            "unexpected error: {err}"
        );
    }

    #[tokio::test]
    async fn malformed_body_is_decode_failure() {
        let base = serve_once("200 OK", r#"[{"type":"Theft""#).await;
        assert!(matches!(
            api(base).incidents().await,
            Err(LoaderError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(matches!(
            api(format!("http://{addr}")).forecast().await,
            Err(LoaderError::Http(_))
        ));
    }
}
