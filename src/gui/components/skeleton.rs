//! Loading placeholders

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{column, container, row, Space};
use iced::{Element, Length};

fn block(height: f32) -> iced::widget::Container<'static, Message> {
    container(Space::with_height(Length::Fixed(height)))
        .style(iced::theme::Container::Custom(Box::new(
            theme::SkeletonContainer,
        )))
}

/// `count` grey blocks shaped roughly like a video card
pub fn skeletons(count: usize) -> Element<'static, Message> {
    let mut lines = column![].spacing(14).width(Length::Fill);
    for i in 0..count {
        // Every third line is shorter, like the end of a paragraph
        let filled = if i % 3 == 2 { 6 } else { 10 };
        lines = lines.push(row![
            block(18.0).width(Length::FillPortion(filled)),
            Space::with_width(Length::FillPortion(10 - filled)),
        ]);
    }

    container(
        row![block(135.0).width(Length::Fixed(240.0)), lines]
            .spacing(24),
    )
    .padding(24)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)))
    .into()
}
