//! Download trigger
//!
//! Downloads are delegated entirely: the client builds the backend download
//! URL for the chosen format and hands it to a [`Navigator`]. No bytes pass
//! through this process.

pub mod navigator;

pub use navigator::{BrowserNavigator, Navigator, PrintNavigator};

use crate::api::client::{endpoint, DOWNLOAD_PATH};
use crate::api::{DownloadRequest, MimeType, VideoMetadata};
use crate::utils::error::AppError;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

pub struct DownloadTrigger {
    base: Url,
    navigator: Arc<dyn Navigator>,
    // Applied to every request
    language: Option<String>,
    mime_type: Option<MimeType>,
}

impl DownloadTrigger {
    pub fn new(base: Url, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            base,
            navigator,
            language: None,
            mime_type: None,
        }
    }

    /// Ask the backend for an audio language and container on every download
    pub fn with_preferences(
        mut self,
        language: Option<String>,
        mime_type: Option<MimeType>,
    ) -> Self {
        self.language = language.filter(|l| !l.trim().is_empty());
        self.mime_type = mime_type;
        self
    }

    /// `{ keyword: video.id, quality: formats[index].itag }`
    pub fn request_for(video: &VideoMetadata, index: usize) -> Result<DownloadRequest, AppError> {
        let format = video
            .formats
            .get(index)
            .ok_or(AppError::InvalidFormatIndex {
                index,
                available: video.formats.len(),
            })?;
        Ok(DownloadRequest::new(video.id.clone()).with_quality(format.itag.to_string()))
    }

    pub fn download_url(&self, request: &DownloadRequest) -> Url {
        let mut url = endpoint(&self.base, DOWNLOAD_PATH);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in request.query_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        url
    }

    /// Open the download for format `index` of the loaded video.
    ///
    /// With no loaded video this is a no-op and returns `Ok(None)`.
    pub fn start_download(
        &self,
        video: Option<&VideoMetadata>,
        index: usize,
    ) -> Result<Option<Url>, AppError> {
        let Some(video) = video else {
            debug!("Download requested with no loaded result, ignoring");
            return Ok(None);
        };

        let mut request = Self::request_for(video, index)?;
        request.language = self.language.clone();
        request.mime_type = self.mime_type;
        let url = self.download_url(&request);
        info!("Opening download for {} (itag {:?}): {}", video.id, request.quality, url);
        self.navigator.open(&url)?;
        Ok(Some(url))
    }
}
