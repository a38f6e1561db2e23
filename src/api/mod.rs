pub mod client;
pub mod envelope;
pub mod models;
pub mod traits;

pub use client::ApiClient;
pub use envelope::ResultEnvelope;
pub use models::{
    DownloadRequest, FormatDescriptor, MimeType, ResponseCode, Thumbnail, VideoMetadata,
};
pub use traits::InfoSource;
