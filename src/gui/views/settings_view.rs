//! Settings view implementation

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, container, row, slider, text, text_input, toggler, Space};
use iced::{Alignment, Element, Length};

/// Editable copy of the settings shown in the form
pub struct SettingsForm<'a> {
    pub server_url: &'a str,
    pub server_error: Option<&'a str>,
    pub request_timeout_secs: u64,
    pub placeholder_count: usize,
    pub open_in_browser: bool,
}

/// Create the settings view
pub fn settings_view(form: SettingsForm<'_>) -> Element<'static, Message> {
    let header = row![
        button(text("← Back").size(16))
            .on_press(Message::SwitchToMain)
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        Space::with_width(Length::Fill),
        text("Settings")
            .size(24)
            .style(iced::theme::Text::Color(theme::GRAY_800)),
        Space::with_width(Length::Fill),
        Space::with_width(Length::Fixed(80.0)), // Balance the back button
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let mut server_section = column![
        text("Backend Server")
            .size(16)
            .style(iced::theme::Text::Color(theme::GRAY_800)),
        text_input(crate::utils::config::DEFAULT_SERVER_URL, form.server_url)
            .on_input(Message::ServerUrlChanged)
            .padding(12)
            .width(Length::Fill)
            .style(if form.server_error.is_some() {
                iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
            } else {
                iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
            }),
    ]
    .spacing(10);

    if let Some(error) = form.server_error {
        server_section = server_section.push(
            text(error)
                .size(13)
                .style(iced::theme::Text::Color(theme::RED_500)),
        );
    }

    let behaviour_section = column![
        text("Behaviour")
            .size(16)
            .style(iced::theme::Text::Color(theme::GRAY_800)),
        column![
            row![
                text("Request timeout (seconds)")
                    .size(14)
                    .style(iced::theme::Text::Color(theme::GRAY_600)),
                Space::with_width(Length::Fill),
                text(form.request_timeout_secs.to_string())
                    .size(14)
                    .style(iced::theme::Text::Color(theme::GRAY_800)),
            ],
            slider(5..=120, form.request_timeout_secs.min(120) as u8, |v| {
                Message::RequestTimeoutChanged(u64::from(v))
            })
            .width(Length::Fill),
        ]
        .spacing(8),
        column![
            row![
                text("Loading placeholders")
                    .size(14)
                    .style(iced::theme::Text::Color(theme::GRAY_600)),
                Space::with_width(Length::Fill),
                text(form.placeholder_count.to_string())
                    .size(14)
                    .style(iced::theme::Text::Color(theme::GRAY_800)),
            ],
            slider(1..=8, form.placeholder_count.min(8) as u8, |v| {
                Message::PlaceholderCountChanged(usize::from(v))
            })
            .width(Length::Fill),
        ]
        .spacing(8),
        toggler(
            Some("Open downloads in the browser (otherwise copy the link)".to_string()),
            form.open_in_browser,
            Message::OpenInBrowserToggled,
        )
        .text_size(14),
    ]
    .spacing(20);

    let save_button = button(text("Save Settings").size(16))
        .on_press(Message::SaveSettings)
        .padding([12, 24])
        .width(Length::Fill)
        .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));

    column![
        header,
        container(column![server_section, behaviour_section].spacing(24))
            .padding(24)
            .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer))),
        Space::with_height(Length::Fill),
        save_button,
    ]
    .spacing(24)
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
