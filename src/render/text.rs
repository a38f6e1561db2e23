//! Plain-text presentation used by the headless CLI

use super::{ErrorPanel, LoadedView, ResultView};
use std::fmt;

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultView::Empty => writeln!(f, "No search yet."),
            ResultView::Loading { .. } => writeln!(f, "Searching..."),
            ResultView::Error(panel) => fmt::Display::fmt(panel, f),
            ResultView::Loaded(loaded) => fmt::Display::fmt(loaded, f),
        }
    }
}

impl fmt::Display for ErrorPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  {}", self.message)?;
        writeln!(f, "  request id: {}", self.correlation_id)
    }
}

impl fmt::Display for LoadedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = &self.card;
        writeln!(f, "Basic Info:")?;
        writeln!(f, "  {}", card.title)?;
        writeln!(f, "  {}", card.subheader)?;
        if let Some(published) = &card.published {
            writeln!(f, "  published {}", published)?;
        }
        writeln!(f, "  {}", card.watch_url)?;
        writeln!(f)?;

        writeln!(f, "Video Formats:")?;
        writeln!(
            f,
            "  {:>3}  {:>5}  {:>5}  {:<14}  {:>9}  {}",
            "#", "itag", "FPS", "quality", "size(MB)", "mime type"
        )?;
        for row in &self.rows {
            let quality = format!("{} {}", row.quality_text(), row.kind.label());
            writeln!(
                f,
                "  {:>3}  {:>5}  {:>5}  {:<14}  {:>9}  {}",
                row.index, row.key, row.fps, quality, row.size_mb, row.mime_type
            )?;
        }
        Ok(())
    }
}
