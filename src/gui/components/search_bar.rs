//! Keyword input component

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Keyword field with paste, clear and search buttons.
///
/// Enter in the field submits like the search button does.
pub fn search_bar(value: &str, is_searching: bool) -> Element<'static, Message> {
    let can_submit = !value.trim().is_empty();

    row![
        text_input("Video link or ID, e.g. dQw4w9WgXcQ", value)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .padding(15)
            .width(Length::Fill)
            .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle))),
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearInput)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
        button(text(if is_searching { "Searching..." } else { "Search" }).size(16))
            .on_press_maybe(can_submit.then_some(Message::Submit))
            .padding([14, 28])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
