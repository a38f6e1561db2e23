//! GUI components

pub mod error_panel;
pub mod format_table;
pub mod search_bar;
pub mod skeleton;
pub mod video_card;

pub use error_panel::error_panel;
pub use format_table::format_table;
pub use search_bar::search_bar;
pub use skeleton::skeletons;
pub use video_card::video_card;
