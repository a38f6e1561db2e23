//! Available formats table

use crate::gui::app::Message;
use crate::gui::theme;
use crate::render::{FormatRow, MediaKind};
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

// Column weights: itag, fps, type, quality, size, mime, action
const WEIGHTS: [u16; 7] = [1, 1, 1, 2, 2, 5, 2];

fn cell(content: impl Into<Element<'static, Message>>, column: usize) -> Element<'static, Message> {
    container(content)
        .width(Length::FillPortion(WEIGHTS[column]))
        .into()
}

fn chip(kind: MediaKind) -> Element<'static, Message> {
    let style = match kind {
        MediaKind::Audio => theme::ChipStyle::Audio,
        MediaKind::Video => theme::ChipStyle::Video,
    };
    container(text(kind.label()).size(11))
        .padding([2, 8])
        .style(iced::theme::Container::Custom(Box::new(style)))
        .into()
}

fn header() -> Element<'static, Message> {
    let labels = ["itag", "FPS", "Type", "Quality", "Size (MB)", "MIME type", ""];
    let cells: Vec<Element<'static, Message>> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            cell(
                text(*label)
                    .size(12)
                    .style(iced::theme::Text::Color(theme::GRAY_600)),
                i,
            )
        })
        .collect();

    container(iced::widget::Row::with_children(cells).spacing(8))
        .padding([8, 12])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::TableHeaderContainer,
        )))
        .into()
}

fn format_row(format: &FormatRow) -> Element<'static, Message> {
    let body = |value: String| {
        text(value)
            .size(13)
            .style(iced::theme::Text::Color(theme::GRAY_800))
    };

    row![
        cell(body(format.key.to_string()), 0),
        cell(body(format.fps.clone()), 1),
        cell(chip(format.kind), 2),
        cell(body(format.quality_text().to_string()), 3),
        cell(body(format.size_mb.clone()), 4),
        cell(body(format.mime_type.clone()), 5),
        cell(
            button(text("Download").size(12))
                .on_press(Message::Download(format.index))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::DownloadButton))),
            6,
        ),
    ]
    .spacing(8)
    .padding([6, 12])
    .align_items(Alignment::Center)
    .into()
}

/// One row per format, keyed by itag
pub fn format_table(rows: &[FormatRow]) -> Element<'static, Message> {
    let body = Column::with_children(rows.iter().map(format_row).collect::<Vec<_>>()).spacing(4);

    container(column![header(), body].spacing(6))
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)))
        .into()
}
