//! Search page

use crate::gui::app::Message;
use crate::gui::components::{error_panel, format_table, search_bar, skeletons, video_card};
use crate::gui::theme;
use crate::render::ResultView;
use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};
use url::Url;

/// Create the main view
pub fn main_view(
    input: &str,
    is_searching: bool,
    share_link: Option<&Url>,
    result: &ResultView,
    thumbnail: Option<&image::Handle>,
    status_message: &str,
) -> Element<'static, Message> {
    let mut hero = column![
        text("Youtube Video Downloader")
            .size(30)
            .style(iced::theme::Text::Color(theme::GRAY_800)),
        search_bar(input, is_searching),
    ]
    .spacing(20);

    if let Some(link) = share_link {
        hero = hero.push(
            row![
                container(
                    column![
                        text("Share link")
                            .size(11)
                            .style(iced::theme::Text::Color(theme::GRAY_500)),
                        text(link.as_str())
                            .size(12)
                            .style(iced::theme::Text::Color(theme::GRAY_800)),
                    ]
                    .spacing(4)
                )
                .padding([8, 12])
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(InfoTagStyle))),
                button(text("Copy").size(14))
                    .on_press(Message::CopyShareLink)
                    .padding([10, 16])
                    .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
        );
    }

    if !status_message.is_empty() {
        hero = hero.push(
            text(status_message)
                .size(12)
                .style(iced::theme::Text::Color(theme::GRAY_500)),
        );
    }

    let hero_section = container(hero)
        .padding(32)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)));

    let result_section: Element<'static, Message> = match result {
        ResultView::Empty => container(
            column![
                text("No video yet")
                    .size(16)
                    .style(iced::theme::Text::Color(theme::GRAY_500)),
                text("Search a link or video ID to list its formats")
                    .size(14)
                    .style(iced::theme::Text::Color(theme::GRAY_400)),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into(),
        ResultView::Loading { placeholders } => skeletons(*placeholders),
        ResultView::Error(panel) => error_panel(panel),
        ResultView::Loaded(loaded) => column![
            section_title("Basic Info:"),
            video_card(&loaded.card, thumbnail),
            Space::with_height(Length::Fixed(8.0)),
            section_title("Video Formats:"),
            format_table(&loaded.rows),
        ]
        .spacing(12)
        .into(),
    };

    let content = scrollable(
        column![hero_section, result_section]
            .spacing(32)
            .padding([0, 12, 0, 0]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle)));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(32)
        .into()
}

fn section_title(label: &str) -> Element<'static, Message> {
    text(label)
        .size(20)
        .style(iced::theme::Text::Color(theme::GRAY_800))
        .into()
}

struct InfoTagStyle;

impl iced::widget::container::StyleSheet for InfoTagStyle {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(theme::GRAY_100)),
            border: iced::Border {
                color: theme::GRAY_200,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}
