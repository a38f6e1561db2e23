//! Failed search panel

use crate::gui::app::Message;
use crate::gui::theme;
use crate::render::ErrorPanel;
use iced::widget::{column, container, row, text};
use iced::{Element, Length};

/// Backend message and request id, shown verbatim
pub fn error_panel(panel: &ErrorPanel) -> Element<'static, Message> {
    container(
        column![
            text(panel.title)
                .size(18)
                .style(iced::theme::Text::Color(theme::RED_500)),
            text(&panel.message)
                .size(14)
                .style(iced::theme::Text::Color(theme::GRAY_800)),
            row![
                text("Request ID:")
                    .size(12)
                    .style(iced::theme::Text::Color(theme::GRAY_500)),
                text(&panel.correlation_id)
                    .size(12)
                    .style(iced::theme::Text::Color(theme::GRAY_700)),
            ]
            .spacing(6),
        ]
        .spacing(10),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::ErrorPanelContainer,
    )))
    .into()
}
