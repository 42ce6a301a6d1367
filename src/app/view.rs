// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{App, Message, Screen};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::product_page;
use crate::ui::theme;
use iced::widget::{container, Column, Container};
use iced::{Background, Element, Length};

/// Renders the navbar plus the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        signed_in: app.admin.session().is_some(),
    })
    .map(Message::Navbar);

    let screen: Element<'_, Message> = match app.screen {
        Screen::Product => product_page::view(
            &app.product,
            product_page::ViewEnv { i18n: &app.i18n },
        )
        .map(Message::Product),
        Screen::Admin => app.admin.view(&app.i18n).map(Message::Admin),
    };

    let column = Column::new().push(navbar_view).push(
        Container::new(screen)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::page_background())),
            ..Default::default()
        })
        .into()
}
