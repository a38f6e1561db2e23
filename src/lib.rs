//! YTB Downloader library
//!
//! Desktop client for a YouTube download backend: looks up video metadata,
//! lists the available formats and hands the chosen one to the browser.

pub mod api;
pub mod controller;
pub mod download;
pub mod gui;
pub mod query;
pub mod render;
pub mod utils;

// Re-export main types for easier use
pub use api::{ApiClient, InfoSource, ResultEnvelope, VideoMetadata};
pub use controller::{SearchController, SearchState};
pub use download::DownloadTrigger;
pub use gui::{Message, View, YtbApp};
pub use query::SearchQuery;
pub use render::{render, ResultView};
pub use utils::{AppError, AppSettings};
