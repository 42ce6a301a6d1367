// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar carries the store wordmark on the left and the screen links on
//! the right: back to the storefront, and into the administrator area.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether an administrator session is active (changes the admin label).
    pub signed_in: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenStorefront,
    OpenAdmin,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenStorefront,
    OpenAdmin,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenStorefront => Event::OpenStorefront,
        Message::OpenAdmin => Event::OpenAdmin,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("store-name"))
        .size(typography::TITLE_MD)
        .color(theme::brand_text_color());

    let storefront_link = button(Text::new(ctx.i18n.tr("navbar-storefront-link")))
        .style(styles::button::link)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::OpenStorefront);

    let admin_key = if ctx.signed_in {
        "navbar-admin-link-signed-in"
    } else {
        "navbar-admin-link"
    };
    let admin_link = button(Text::new(ctx.i18n.tr(admin_key)))
        .style(styles::button::link)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::OpenAdmin);

    let links = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(storefront_link)
        .push(admin_link);

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(brand)
        .push(
            Container::new(links)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_matching_events() {
        assert_eq!(update(Message::OpenStorefront), Event::OpenStorefront);
        assert_eq!(update(Message::OpenAdmin), Event::OpenAdmin);
    }
}
