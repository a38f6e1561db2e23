//! HTTP client for the download backend
//!
//! Two endpoints are consumed:
//! - `GET /api/v1/info?ytb_kw=<base64>` returns `{ code, msg, data }` and a
//!   correlation id in the `x-request-id` header.
//! - `GET /api/v1/download?keyword=..&quality=..` streams the file; the client
//!   only ever builds this URL (see [`crate::download`]).

use crate::api::envelope::ResultEnvelope;
use crate::api::models::{ApiResponse, ResponseCode, VideoMetadata};
use crate::api::traits::InfoSource;
use crate::utils::config::AppSettings;
use crate::utils::error::AppError;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

pub const INFO_PATH: &str = "/api/v1/info";
pub const DOWNLOAD_PATH: &str = "/api/v1/download";
pub const INFO_PARAM: &str = "ytb_kw";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Opaque transport encoding of the user input (standard base64 of its UTF-8 bytes)
pub fn encode_keyword(keyword_or_url: &str) -> String {
    STANDARD.encode(keyword_or_url.as_bytes())
}

/// `base` + `path`, keeping any path prefix the backend is mounted under
pub fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    url.set_path(&format!("{}{}", prefix, path));
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Correlation id from the response headers; empty when absent or not text
pub fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Metadata client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(settings: &AppSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!("ytb-downloader/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.request_timeout())
            .build()?;
        Ok(Self::with_client(client, settings.server()?))
    }

    pub fn with_client(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn info_url(&self, keyword_or_url: &str) -> Url {
        let mut url = endpoint(&self.base, INFO_PATH);
        url.query_pairs_mut()
            .append_pair(INFO_PARAM, &encode_keyword(keyword_or_url));
        url
    }

    async fn request_info(&self, keyword_or_url: &str) -> ResultEnvelope {
        let url = self.info_url(keyword_or_url);
        debug!("Requesting video info: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Info request failed: {}", e);
                return ResultEnvelope::from_error(&AppError::Transport(e.to_string()), "");
            }
        };

        let request_id = correlation_id(response.headers());
        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read info response body: {}", e);
                return ResultEnvelope::from_error(&AppError::Transport(e.to_string()), request_id);
            }
        };

        let envelope = envelope_from_body(status, &body, request_id);
        if envelope.is_success() {
            info!(
                "Video info received (request_id={:?})",
                envelope.correlation_id
            );
        } else {
            warn!(
                "Video info failed (request_id={:?}): {}",
                envelope.correlation_id, envelope.message
            );
        }
        envelope
    }

    async fn request_thumbnail(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl InfoSource for ApiClient {
    fn id(&self) -> &'static str {
        "http-backend"
    }

    async fn fetch_info(&self, keyword_or_url: &str) -> ResultEnvelope {
        self.request_info(keyword_or_url).await
    }

    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, AppError> {
        self.request_thumbnail(url).await
    }
}

/// Turn a raw info response into an envelope.
///
/// A body that parses as `{ code, msg, data }` wins over the HTTP status, so
/// backend messages on 4xx/5xx still reach the user.
pub fn envelope_from_body(status: StatusCode, body: &[u8], request_id: String) -> ResultEnvelope {
    let response = match serde_json::from_slice::<ApiResponse<serde_json::Value>>(body) {
        Ok(response) => response,
        Err(e) => {
            let err = if status.is_success() {
                AppError::Transport(format!("invalid response from server: {}", e))
            } else {
                AppError::Transport(format!("server responded with {}", status))
            };
            return ResultEnvelope::from_error(&err, request_id);
        }
    };

    match response.code {
        ResponseCode::Fail => {
            let message = if response.msg.is_empty() {
                format!("request failed ({})", status)
            } else {
                response.msg
            };
            ResultEnvelope::from_error(
                &AppError::BackendReported {
                    message,
                    correlation_id: request_id,
                },
                "",
            )
        }
        ResponseCode::Ok => match response.data.filter(|d| !d.is_null()) {
            None => ResultEnvelope::failure("backend returned no video data", request_id),
            Some(data) => match serde_json::from_value::<VideoMetadata>(data) {
                Ok(video) => ResultEnvelope::success(video, response.msg, request_id),
                Err(e) => ResultEnvelope::failure(
                    format!("unexpected video payload: {}", e),
                    request_id,
                ),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_encode_keyword() {
        assert_eq!(encode_keyword("dQw4w9WgXcQ"), "ZFF3NHc5V2dYY1E=");
        assert_eq!(encode_keyword(""), "");
    }

    #[test]
    fn test_endpoint_keeps_prefix() {
        let base = Url::parse("https://example.com/ytb/?x=1#f").unwrap();
        assert_eq!(
            endpoint(&base, INFO_PATH).as_str(),
            "https://example.com/ytb/api/v1/info"
        );
        let bare = Url::parse("http://localhost:7777").unwrap();
        assert_eq!(
            endpoint(&bare, DOWNLOAD_PATH).as_str(),
            "http://localhost:7777/api/v1/download"
        );
    }

    #[test]
    fn test_info_url_escapes_base64() {
        let client = ApiClient::with_client(
            Client::new(),
            Url::parse("http://localhost:7777").unwrap(),
        );
        // "??>" encodes to "Pz8+", whose '+' must survive the query string
        let url = client.info_url("??>");
        let value = url
            .query_pairs()
            .find(|(k, _)| k == INFO_PARAM)
            .map(|(_, v)| v.into_owned());
        assert_eq!(value.as_deref(), Some("Pz8+"));
        assert!(url.as_str().contains("ytb_kw=Pz8%2B"));
    }

    #[test]
    fn test_correlation_id_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(correlation_id(&headers), "");
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(correlation_id(&headers), "abc-123");
    }

    #[test]
    fn test_envelope_success() {
        let body = br#"{"code":1,"msg":"ok","data":{"ID":"abc","Title":"t","Formats":[],"Thumbnails":[]}}"#;
        let envelope = envelope_from_body(StatusCode::OK, body, "rid".into());
        assert!(envelope.is_success());
        assert_eq!(envelope.correlation_id, "rid");
        assert_eq!(envelope.video().map(|v| v.id.as_str()), Some("abc"));
    }

    #[test]
    fn test_envelope_backend_failure() {
        let body = br#"{"code":2,"msg":"video is private","data":null}"#;
        let envelope = envelope_from_body(StatusCode::OK, body, "rid-2".into());
        assert_eq!(envelope.status, ResponseCode::Fail);
        assert_eq!(envelope.message, "video is private");
        assert_eq!(envelope.correlation_id, "rid-2");
        assert!(envelope.payload.is_none());
    }

    #[test]
    fn test_envelope_failure_on_error_status_keeps_backend_message() {
        let body = br#"{"code":2,"msg":"bad keyword"}"#;
        let envelope = envelope_from_body(StatusCode::BAD_REQUEST, body, String::new());
        assert_eq!(envelope.message, "bad keyword");
    }

    #[test]
    fn test_envelope_unparseable_bodies() {
        let envelope = envelope_from_body(StatusCode::BAD_GATEWAY, b"<html>", "rid".into());
        assert_eq!(envelope.status, ResponseCode::Fail);
        assert!(envelope.message.contains("502"));
        assert_eq!(envelope.correlation_id, "rid");

        let envelope = envelope_from_body(StatusCode::OK, b"not json", String::new());
        assert!(envelope.message.contains("invalid response"));
    }

    #[test]
    fn test_envelope_ok_without_data_is_failure() {
        let envelope =
            envelope_from_body(StatusCode::OK, br#"{"code":1,"msg":"ok"}"#, "r".into());
        assert!(!envelope.is_success());
        assert_eq!(envelope.status, ResponseCode::Fail);
    }
}
