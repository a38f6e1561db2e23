use crate::api::envelope::ResultEnvelope;
use crate::utils::error::AppError;
use async_trait::async_trait;

/// Source of video metadata
///
/// The GUI and the CLI only talk to the backend through this trait, so a
/// different transport (or a canned source in tests) can be plugged in.
#[async_trait]
pub trait InfoSource: Send + Sync {
    /// Returns a unique identifier for this source (e.g., "http-backend")
    fn id(&self) -> &'static str;

    /// Look up a video by URL or bare ID. Never fails: errors come back as a
    /// `Fail` envelope.
    async fn fetch_info(&self, keyword_or_url: &str) -> ResultEnvelope;

    /// Fetch thumbnail bytes for display
    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, AppError> {
        Err(AppError::Transport(format!(
            "Thumbnails not supported by {} ({})",
            self.id(),
            url
        )))
    }
}
