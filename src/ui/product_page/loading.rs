// SPDX-License-Identifier: MPL-2.0
//! Loading view displayed while the product document is in flight.

use super::component::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the centered loading message.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("loading-product"))
        .size(typography::TITLE_SM)
        .color(theme::body_text_color());

    let hint = Text::new(i18n.tr("loading-product-hint"))
        .size(typography::BODY_SM)
        .color(theme::muted_text_color());

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
