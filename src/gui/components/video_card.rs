//! Basic info card

use crate::gui::app::Message;
use crate::gui::theme;
use crate::render::VideoCard;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, Element, Length};

const THUMB_WIDTH: f32 = 240.0;
const THUMB_HEIGHT: f32 = 135.0;

/// Thumbnail, title and subheader of the loaded video.
///
/// `thumbnail` is the fetched image; while it is still loading a grey block
/// takes its place. Cards without a thumbnail URL show no image at all.
pub fn video_card(card: &VideoCard, thumbnail: Option<&image::Handle>) -> Element<'static, Message> {
    let mut details = column![
        text(&card.title)
            .size(20)
            .style(iced::theme::Text::Color(theme::GRAY_800)),
        text(&card.subheader)
            .size(13)
            .style(iced::theme::Text::Color(theme::GRAY_600)),
    ]
    .spacing(8)
    .width(Length::Fill);

    if let Some(published) = &card.published {
        details = details.push(
            text(format!("Published {}", published))
                .size(12)
                .style(iced::theme::Text::Color(theme::GRAY_500)),
        );
    }

    details = details.push(Space::with_height(Length::Fixed(8.0))).push(
        row![
            button(text("Open on YouTube").size(13))
                .on_press(Message::OpenOnYoutube)
                .padding([8, 14])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
            text(&card.id)
                .size(12)
                .style(iced::theme::Text::Color(theme::GRAY_400)),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    );

    let mut content = row![].spacing(24);
    if card.thumbnail_url.is_some() {
        let cover: Element<'static, Message> = match thumbnail {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(THUMB_WIDTH))
                .height(Length::Fixed(THUMB_HEIGHT))
                .into(),
            None => container(Space::new(
                Length::Fixed(THUMB_WIDTH),
                Length::Fixed(THUMB_HEIGHT),
            ))
            .style(iced::theme::Container::Custom(Box::new(
                theme::SkeletonContainer,
            )))
            .into(),
        };
        content = content.push(cover);
    }
    content = content.push(details);

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)))
        .into()
}
