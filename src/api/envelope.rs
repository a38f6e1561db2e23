//! Normalized outcome of a metadata request

use crate::api::models::{ResponseCode, VideoMetadata};
use crate::utils::error::AppError;

/// One completed metadata request. Success always carries a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope {
    pub status: ResponseCode,
    pub message: String,
    pub correlation_id: String,
    pub payload: Option<VideoMetadata>,
}

impl ResultEnvelope {
    pub fn success(
        video: VideoMetadata,
        message: impl Into<String>,
        correlation_id: impl Into<String>,
    ) -> Self {
        Self {
            status: ResponseCode::Ok,
            message: message.into(),
            correlation_id: correlation_id.into(),
            payload: Some(video),
        }
    }

    pub fn failure(message: impl Into<String>, correlation_id: impl Into<String>) -> Self {
        Self {
            status: ResponseCode::Fail,
            message: message.into(),
            correlation_id: correlation_id.into(),
            payload: None,
        }
    }

    /// Failure envelope for a transport or backend error
    pub fn from_error(err: &AppError, correlation_id: impl Into<String>) -> Self {
        match err {
            AppError::BackendReported {
                message,
                correlation_id,
            } => Self::failure(message.clone(), correlation_id.clone()),
            other => Self::failure(other.to_string(), correlation_id),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseCode::Ok && self.payload.is_some()
    }

    pub fn video(&self) -> Option<&VideoMetadata> {
        self.payload.as_ref()
    }
}
