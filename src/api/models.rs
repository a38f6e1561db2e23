//! Data structures exchanged with the download backend

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Backend status code: `1` is success, anything else a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ResponseCode {
    Ok,
    Fail,
}

impl From<i64> for ResponseCode {
    fn from(code: i64) -> Self {
        match code {
            1 => ResponseCode::Ok,
            _ => ResponseCode::Fail,
        }
    }
}

impl From<ResponseCode> for i64 {
    fn from(code: ResponseCode) -> Self {
        match code {
            ResponseCode::Ok => 1,
            ResponseCode::Fail => 2,
        }
    }
}

/// Raw `{ code, msg, data }` body of every API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: ResponseCode,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

/// Video information structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoMetadata {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "ChannelID", default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_handle: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub views: u64,
    /// Nanoseconds
    #[serde(default, deserialize_with = "lenient_u64")]
    pub duration: u64,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: Vec<FormatDescriptor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnails: Vec<Thumbnail>,
}

impl VideoMetadata {
    /// Highest resolution thumbnail (last in the list)
    pub fn preferred_thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnails.last()
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_nanos(self.duration)
    }
}

/// Video format information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatDescriptor {
    #[serde(deserialize_with = "lenient_u32")]
    pub itag: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub fps: u32,
    pub url: String,
    pub mime_type: String,
    pub quality: String,
    pub signature_cipher: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub bitrate: u64,
    #[serde(deserialize_with = "lenient_u32")]
    pub width: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub height: u32,
    pub last_modified: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub content_length: u64,
    pub quality_label: String,
    pub projection_type: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub average_bitrate: u64,
    pub audio_quality: String,
    pub approx_duration_ms: String,
    pub audio_sample_rate: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub audio_channels: u32,
}

impl FormatDescriptor {
    /// Audio-only formats are recognised by their mime type
    pub fn is_audio(&self) -> bool {
        self.mime_type.contains("audio")
    }

    /// `AUDIO_QUALITY_MEDIUM` -> `MEDIUM`
    pub fn audio_quality_short(&self) -> Option<&str> {
        if self.audio_quality.is_empty() {
            return None;
        }
        let short = match self.audio_quality.rfind('_') {
            Some(pos) => &self.audio_quality[pos + 1..],
            None => self.audio_quality.as_str(),
        };
        Some(short)
    }

    pub fn size_mb(&self) -> f64 {
        self.content_length as f64 / 1024.0 / 1024.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Thumbnail {
    #[serde(rename = "URL")]
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Container hint understood by the download endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    None,
    Mp4,
    Webm,
    Av01,
    Avc1,
}

impl MimeType {
    pub fn code(self) -> u8 {
        match self {
            MimeType::None => 0,
            MimeType::Mp4 => 1,
            MimeType::Webm => 2,
            MimeType::Av01 => 3,
            MimeType::Avc1 => 4,
        }
    }
}

impl std::str::FromStr for MimeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(MimeType::None),
            "mp4" => Ok(MimeType::Mp4),
            "webm" => Ok(MimeType::Webm),
            "av01" => Ok(MimeType::Av01),
            "avc1" => Ok(MimeType::Avc1),
            other => Err(format!(
                "unknown container {:?}, expected one of none, mp4, webm, av01, avc1",
                other
            )),
        }
    }
}

/// Parameters of `GET /api/v1/download`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub keyword: String,
    pub quality: Option<String>,
    pub language: Option<String>,
    pub mime_type: Option<MimeType>,
}

impl DownloadRequest {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            quality: None,
            language: None,
            mime_type: None,
        }
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    /// Query pairs in wire order; unset options are omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("keyword", self.keyword.clone())];
        if let Some(quality) = &self.quality {
            pairs.push(("quality", quality.clone()));
        }
        if let Some(language) = &self.language {
            pairs.push(("language", language.clone()));
        }
        if let Some(mime_type) = self.mime_type {
            pairs.push(("mime_type", mime_type.code().to_string()));
        }
        pairs
    }
}

/// Numbers may arrive as JSON numbers, numeric strings or null
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Raw::Int(n)) => Ok(n),
        Some(Raw::Float(f)) if f >= 0.0 => Ok(f as u64),
        Some(Raw::Float(f)) => Err(serde::de::Error::custom(format!(
            "negative number {}",
            f
        ))),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid number {:?}: {}", s, e))),
    }
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = lenient_u64(deserializer)?;
    u32::try_from(n).map_err(|_| serde::de::Error::custom(format!("number {} out of range", n)))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_code_mapping() {
        let ok: ApiResponse<serde_json::Value> =
            serde_json::from_value(json!({"code": 1, "msg": "ok", "data": null})).unwrap();
        assert_eq!(ok.code, ResponseCode::Ok);
        assert!(ok.data.is_none());

        let fail: ApiResponse<serde_json::Value> =
            serde_json::from_value(json!({"code": 2, "msg": "nope"})).unwrap();
        assert_eq!(fail.code, ResponseCode::Fail);

        let odd: ApiResponse<serde_json::Value> =
            serde_json::from_value(json!({"code": 500})).unwrap();
        assert_eq!(odd.code, ResponseCode::Fail);
        assert_eq!(serde_json::to_value(ResponseCode::Ok).unwrap(), json!(1));
    }

    #[test]
    fn test_video_from_backend_json() {
        let video: VideoMetadata = serde_json::from_value(json!({
            "ID": "dQw4w9WgXcQ",
            "Title": "Never Gonna Give You Up",
            "Author": "Rick Astley",
            "ChannelID": "UCuAXFkgsw1L7xaCfnd5JJOw",
            "Views": 1500000000u64,
            "Duration": 212000000000u64,
            "PublishDate": "2009-10-25T06:57:33Z",
            "Thumbnails": [
                {"URL": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg", "Width": 120, "Height": 90},
                {"URL": "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg", "Width": 1280, "Height": 720}
            ],
            "Formats": [
                {"itag": 18, "fps": 25, "mimeType": "video/mp4; codecs=\"avc1.42001E, mp4a.40.2\"",
                 "qualityLabel": "360p", "contentLength": "12345678", "bitrate": 503351},
                {"itag": 140, "mimeType": "audio/mp4; codecs=\"mp4a.40.2\"",
                 "audioQuality": "AUDIO_QUALITY_MEDIUM", "contentLength": 3433514, "audioChannels": 2}
            ]
        }))
        .unwrap();

        assert_eq!(video.id, "dQw4w9WgXcQ");
        assert_eq!(video.duration(), Duration::from_secs(212));
        assert_eq!(
            video.preferred_thumbnail().map(|t| t.width),
            Some(1280)
        );
        assert_eq!(video.formats[0].content_length, 12_345_678);
        assert!(!video.formats[0].is_audio());
        assert!(video.formats[1].is_audio());
        assert_eq!(video.formats[1].audio_quality_short(), Some("MEDIUM"));
        assert_eq!(video.formats[1].fps, 0);
        assert_eq!(
            video.watch_url(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_video_with_null_lists() {
        let video: VideoMetadata =
            serde_json::from_value(json!({"ID": "x", "Formats": null, "Thumbnails": null}))
                .unwrap();
        assert!(video.formats.is_empty());
        assert!(video.preferred_thumbnail().is_none());
    }

    #[test]
    fn test_lenient_numbers_reject_garbage() {
        let bad = serde_json::from_value::<FormatDescriptor>(json!({"itag": "eighteen"}));
        assert!(bad.is_err());
        let negative = serde_json::from_value::<FormatDescriptor>(json!({"bitrate": -1.5}));
        assert!(negative.is_err());
    }

    #[test]
    fn test_audio_quality_without_prefix() {
        let format = FormatDescriptor {
            audio_quality: "LOW".to_string(),
            ..Default::default()
        };
        assert_eq!(format.audio_quality_short(), Some("LOW"));
        assert_eq!(FormatDescriptor::default().audio_quality_short(), None);
    }

    #[test]
    fn test_download_request_pairs() {
        let mut request = DownloadRequest::new("abc").with_quality("18");
        assert_eq!(
            request.query_pairs(),
            vec![("keyword", "abc".to_string()), ("quality", "18".to_string())]
        );

        request.language = Some("en".to_string());
        request.mime_type = Some(MimeType::Webm);
        let pairs = request.query_pairs();
        assert_eq!(pairs[2], ("language", "en".to_string()));
        assert_eq!(pairs[3], ("mime_type", "2".to_string()));
    }

    #[test]
    fn test_mime_type_from_str() {
        assert_eq!("MP4".parse::<MimeType>(), Ok(MimeType::Mp4));
        assert_eq!("webm".parse::<MimeType>(), Ok(MimeType::Webm));
        assert_eq!("avc1".parse::<MimeType>().map(MimeType::code), Ok(4));
        assert!("mkv".parse::<MimeType>().is_err());
    }
}
