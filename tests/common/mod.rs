//! Mock download backend for integration tests.
//!
//! Serves `/api/v1/info`, `/api/v1/download` and a thumbnail, optionally
//! under a path prefix. Keywords pick the canned response:
//! - `dQw4w9WgXcQ`: a video with one muxed and one audio format
//! - `private`: `code: 2` with a request id
//! - `no-header`: `code: 2` without a request id
//! - `slow-<id>`: the video `<id>` after a delay
//! - anything else: an HTML 500 page

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const THUMBNAIL_BYTES: &[u8] = b"\x89PNG fake thumbnail";

#[derive(Clone)]
struct MockState {
    origin: String,
    prefix: String,
    /// Raw `ytb_kw` values in arrival order
    received: Arc<Mutex<Vec<String>>>,
}

pub struct MockBackend {
    pub base: Url,
    received: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self::start_at("").await
    }

    /// Mount the API under `prefix`, e.g. `/ytb`
    pub async fn start_at(prefix: &str) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        let received = Arc::new(Mutex::new(Vec::new()));

        let state = MockState {
            origin: format!("http://{}", addr),
            prefix: prefix.to_string(),
            received: received.clone(),
        };

        let api = Router::new()
            .route("/api/v1/info", get(info))
            .route("/api/v1/download", get(download))
            .route("/thumb.jpg", get(thumbnail))
            .with_state(state);
        let app = if prefix.is_empty() {
            api
        } else {
            Router::new().nest(prefix, api)
        };

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });

        Self {
            base: Url::parse(&format!("http://{}{}", addr, prefix)).expect("base url"),
            received,
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

/// Server address that refuses connections
pub async fn unreachable_base() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    Url::parse(&format!("http://{}", addr)).expect("base url")
}

fn video(state: &MockState, id: &str) -> Value {
    json!({
        "ID": id,
        "Title": "Never Gonna Give You Up",
        "Description": "The official video",
        "Author": "Rick Astley",
        "ChannelID": "UCuAXFkgsw1L7xaCfnd5JJOw",
        "ChannelHandle": "@RickAstleyYT",
        "Views": 1_500_000_000u64,
        "Duration": 212_000_000_000u64,
        "PublishDate": "2009-10-25T06:57:33Z",
        "Thumbnails": [
            {"URL": format!("{}{}/thumb.jpg", state.origin, state.prefix), "Width": 1280, "Height": 720}
        ],
        "Formats": [
            {
                "itag": 18,
                "url": "",
                "mimeType": "video/mp4; codecs=\"avc1.42001E, mp4a.40.2\"",
                "quality": "medium",
                "bitrate": 503_000,
                "fps": 25,
                "width": 640,
                "height": 360,
                "contentLength": "13369580",
                "qualityLabel": "360p",
                "audioQuality": "AUDIO_QUALITY_LOW",
                "audioChannels": 2
            },
            {
                "itag": 140,
                "url": "",
                "mimeType": "audio/mp4; codecs=\"mp4a.40.2\"",
                "quality": "tiny",
                "bitrate": 130_000,
                "contentLength": "3433514",
                "qualityLabel": "",
                "audioQuality": "AUDIO_QUALITY_MEDIUM",
                "audioSampleRate": "44100",
                "audioChannels": 2
            }
        ]
    })
}

async fn info(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let raw = params.get("ytb_kw").cloned().unwrap_or_default();
    state.received.lock().unwrap().push(raw.clone());

    let keyword = STANDARD
        .decode(raw.as_bytes())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default();

    if let Some(id) = keyword.strip_prefix("slow-") {
        tokio::time::sleep(Duration::from_millis(300)).await;
        let body = json!({"code": 1, "msg": "ok", "data": video(&state, id)});
        return ([("x-request-id", "rid-slow")], Json(body)).into_response();
    }

    match keyword.as_str() {
        "dQw4w9WgXcQ" => {
            let body = json!({"code": 1, "msg": "ok", "data": video(&state, &keyword)});
            ([("x-request-id", "rid-ok")], Json(body)).into_response()
        }
        "private" => (
            [("x-request-id", "rid-private")],
            Json(json!({"code": 2, "msg": "extract video info failed: video is private", "data": null})),
        )
            .into_response(),
        "no-header" => Json(json!({"code": 2, "msg": "boom"})).into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [("x-request-id", "rid-500")],
            "<html>upstream exploded</html>",
        )
            .into_response(),
    }
}

async fn download(Query(params): Query<HashMap<String, String>>) -> Response {
    let (Some(keyword), Some(quality)) = (params.get("keyword"), params.get("quality")) else {
        return (StatusCode::BAD_REQUEST, "missing keyword or quality").into_response();
    };
    (
        [(
            "content-disposition",
            format!("attachment; filename=\"{}-{}.mp4\"", keyword, quality),
        )],
        format!("bytes of {} at itag {}", keyword, quality),
    )
        .into_response()
}

async fn thumbnail() -> impl IntoResponse {
    ([("content-type", "image/jpeg")], THUMBNAIL_BYTES)
}
