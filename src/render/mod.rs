//! Result rendering
//!
//! [`render`] is a pure function from the controller state to a [`ResultView`].
//! The GUI draws the view with widgets, the CLI prints it through `Display`.

pub mod humanize;
mod text;

use crate::api::{FormatDescriptor, VideoMetadata};
use crate::controller::SearchState;
use std::collections::HashSet;
use tracing::warn;

pub const ERROR_TITLE: &str = "Search Video Failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Skeleton blocks shown while searching
    pub placeholders: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { placeholders: 4 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Nothing searched yet
    Empty,
    Loading { placeholders: usize },
    Error(ErrorPanel),
    Loaded(LoadedView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub title: &'static str,
    pub message: String,
    pub correlation_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedView {
    pub card: VideoCard,
    pub rows: Vec<FormatRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub id: String,
    pub title: String,
    /// "by {author}, {views} views, {duration}"
    pub subheader: String,
    pub thumbnail_url: Option<String>,
    pub watch_url: String,
    pub published: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Audio => "Audio",
            MediaKind::Video => "Video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRow {
    /// Row key: the itag
    pub key: u32,
    /// Position in the response's format list, used for downloads
    pub index: usize,
    pub fps: String,
    pub kind: MediaKind,
    /// Video rows only
    pub quality_label: Option<String>,
    /// Audio rows only
    pub audio_quality: Option<String>,
    pub size_mb: String,
    pub mime_type: String,
}

impl FormatRow {
    fn new(index: usize, format: &FormatDescriptor) -> Self {
        let kind = if format.is_audio() {
            MediaKind::Audio
        } else {
            MediaKind::Video
        };
        let (quality_label, audio_quality) = match kind {
            MediaKind::Audio => (
                None,
                Some(format.audio_quality_short().unwrap_or("-").to_string()),
            ),
            MediaKind::Video => (Some(format.quality_label.clone()), None),
        };

        Self {
            key: format.itag,
            index,
            fps: if format.fps > 0 {
                format.fps.to_string()
            } else {
                "-".to_string()
            },
            kind,
            quality_label,
            audio_quality,
            size_mb: format!("{:.2}", format.size_mb()),
            mime_type: format.mime_type.clone(),
        }
    }

    /// Text of the quality column
    pub fn quality_text(&self) -> &str {
        self.quality_label
            .as_deref()
            .or(self.audio_quality.as_deref())
            .unwrap_or("-")
    }
}

pub fn render(state: &SearchState, options: &RenderOptions) -> ResultView {
    match state {
        SearchState::Idle => ResultView::Empty,
        SearchState::Searching(_) => ResultView::Loading {
            placeholders: options.placeholders,
        },
        SearchState::Failed(envelope) => ResultView::Error(ErrorPanel {
            title: ERROR_TITLE,
            message: envelope.message.clone(),
            correlation_id: envelope.correlation_id.clone(),
        }),
        SearchState::Succeeded(envelope) => match envelope.video() {
            Some(video) => ResultView::Loaded(render_video(video)),
            None => ResultView::Error(ErrorPanel {
                title: ERROR_TITLE,
                message: envelope.message.clone(),
                correlation_id: envelope.correlation_id.clone(),
            }),
        },
    }
}

fn render_video(video: &VideoMetadata) -> LoadedView {
    let card = VideoCard {
        id: video.id.clone(),
        title: video.title.clone(),
        subheader: format!(
            "by {}, {} views, {}",
            video.author,
            video.views,
            humanize::humanize_duration(video.duration())
        ),
        thumbnail_url: video.preferred_thumbnail().map(|t| t.url.clone()),
        watch_url: video.watch_url(),
        published: humanize::publish_date(&video.publish_date),
    };

    let mut seen = HashSet::new();
    let rows = video
        .formats
        .iter()
        .enumerate()
        .filter(|(_, format)| {
            let fresh = seen.insert(format.itag);
            if !fresh {
                warn!("Duplicate itag {} in response for {}", format.itag, video.id);
            }
            fresh
        })
        .map(|(index, format)| FormatRow::new(index, format))
        .collect();

    LoadedView { card, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResultEnvelope;
    use crate::controller::SearchTicket;
    use serde_json::json;
    use std::sync::Arc;

    fn sample_video(thumbnails: serde_json::Value) -> VideoMetadata {
        serde_json::from_value(json!({
            "ID": "dQw4w9WgXcQ",
            "Title": "Never Gonna Give You Up",
            "Author": "Rick Astley",
            "Views": 42,
            "Duration": 212_000_000_000u64,
            "PublishDate": "2009-10-25T06:57:33Z",
            "Thumbnails": thumbnails,
            "Formats": [
                {"itag": 18, "fps": 25, "mimeType": "video/mp4; codecs=\"avc1.42001E\"",
                 "qualityLabel": "360p", "audioQuality": "AUDIO_QUALITY_LOW",
                 "contentLength": "10485760"},
                {"itag": 140, "mimeType": "audio/mp4; codecs=\"mp4a.40.2\"",
                 "qualityLabel": "", "audioQuality": "AUDIO_QUALITY_MEDIUM",
                 "contentLength": "3433514"}
            ]
        }))
        .unwrap()
    }

    fn succeeded(video: VideoMetadata) -> SearchState {
        SearchState::Succeeded(Arc::new(ResultEnvelope::success(video, "ok", "rid")))
    }

    #[test]
    fn test_idle_and_loading() {
        let options = RenderOptions { placeholders: 3 };
        assert_eq!(render(&SearchState::Idle, &options), ResultView::Empty);

        let searching = SearchState::Searching(SearchTicket {
            seq: 1,
            keyword: "x".to_string(),
        });
        assert_eq!(
            render(&searching, &options),
            ResultView::Loading { placeholders: 3 }
        );
    }

    #[test]
    fn test_failure_shows_message_and_request_id_verbatim() {
        let state = SearchState::Failed(Arc::new(ResultEnvelope::failure(
            "extract video info failed: private video",
            "7f3c-req",
        )));
        match render(&state, &RenderOptions::default()) {
            ResultView::Error(panel) => {
                assert_eq!(panel.title, ERROR_TITLE);
                assert_eq!(panel.message, "extract video info failed: private video");
                assert_eq!(panel.correlation_id, "7f3c-req");
            }
            other => panic!("expected error panel, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_thumbnails_omit_image() {
        let view = render(&succeeded(sample_video(json!([]))), &RenderOptions::default());
        match view {
            ResultView::Loaded(loaded) => {
                assert_eq!(loaded.card.thumbnail_url, None);
                assert_eq!(loaded.rows.len(), 2);
            }
            other => panic!("expected loaded view, got {:?}", other),
        }
    }

    #[test]
    fn test_card_prefers_last_thumbnail() {
        let video = sample_video(json!([
            {"URL": "https://i.ytimg.com/small.jpg", "Width": 120, "Height": 90},
            {"URL": "https://i.ytimg.com/large.jpg", "Width": 1280, "Height": 720}
        ]));
        let ResultView::Loaded(loaded) = render(&succeeded(video), &RenderOptions::default())
        else {
            panic!("expected loaded view");
        };

        assert_eq!(
            loaded.card.thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/large.jpg")
        );
        assert_eq!(loaded.card.subheader, "by Rick Astley, 42 views, 4 minutes");
        assert_eq!(loaded.card.published.as_deref(), Some("2009-10-25"));
        assert_eq!(
            loaded.card.watch_url,
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_audio_and_video_rows() {
        let ResultView::Loaded(loaded) =
            render(&succeeded(sample_video(json!([]))), &RenderOptions::default())
        else {
            panic!("expected loaded view");
        };

        let video_row = loaded.rows.iter().find(|r| r.key == 18).unwrap();
        assert_eq!(video_row.kind, MediaKind::Video);
        assert_eq!(video_row.quality_label.as_deref(), Some("360p"));
        assert_eq!(video_row.audio_quality, None);
        assert_eq!(video_row.fps, "25");
        assert_eq!(video_row.size_mb, "10.00");

        let audio_row = loaded.rows.iter().find(|r| r.key == 140).unwrap();
        assert_eq!(audio_row.kind, MediaKind::Audio);
        assert_eq!(audio_row.quality_label, None);
        assert_eq!(audio_row.audio_quality.as_deref(), Some("MEDIUM"));
        assert_eq!(audio_row.quality_text(), "MEDIUM");
        assert_eq!(audio_row.fps, "-");
        assert_eq!(audio_row.size_mb, "3.27");
        assert_eq!(audio_row.index, 1);
    }

    #[test]
    fn test_duplicate_itags_keep_first() {
        let mut video = sample_video(json!([]));
        let mut dup = video.formats[0].clone();
        dup.quality_label = "720p".to_string();
        video.formats.push(dup);

        let ResultView::Loaded(loaded) = render(&succeeded(video), &RenderOptions::default())
        else {
            panic!("expected loaded view");
        };
        let keys: Vec<u32> = loaded.rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![18, 140]);
        assert_eq!(loaded.rows[0].quality_label.as_deref(), Some("360p"));
    }
}
