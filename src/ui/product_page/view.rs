// SPDX-License-Identifier: MPL-2.0
//! Product page rendering: gallery column, information column, and the
//! loading/error states.

use super::component::{Loaded, LoadState, Message, State};
use super::{error_state, loading};
use crate::catalog::{format_price_clp, Block};
use crate::i18n::I18n;
use crate::ui::components::badge;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the product page.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Renders the product page for its current load state.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    match state.load() {
        LoadState::Loading => loading::view(env.i18n),
        LoadState::Failed(error) => view_error(error, env.i18n),
        LoadState::Loaded(loaded) => view_loaded(state, loaded, env.i18n),
    }
}

fn view_error<'a>(error: &'a error_state::State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("error-load-product-title"))
        .size(typography::TITLE_SM)
        .color(theme::error_text_color());

    let message = Text::new(i18n.tr(error.friendly_key()))
        .size(typography::BODY)
        .color(theme::error_text_color());

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(message);

    if error.show_details() && !error.details().is_empty() {
        content = content.push(
            Text::new(error.details().to_string())
                .size(typography::BODY_SM)
                .color(theme::muted_text_color()),
        );
    }

    let mut actions = Row::new().spacing(spacing::SM).push(
        button(Text::new(i18n.tr("error-retry-button")))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::danger)
            .on_press(Message::RetryPressed),
    );

    if !error.details().is_empty() {
        let details_key = if error.show_details() {
            "error-hide-details-button"
        } else {
            "error-show-details-button"
        };
        actions = actions.push(
            button(Text::new(i18n.tr(details_key)))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline)
                .on_press(Message::ToggleErrorDetails),
        );
    }

    let card = Container::new(content.push(actions))
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::ERROR_CARD_WIDTH))
        .style(styles::container::error_card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_loaded<'a>(state: &'a State, loaded: &'a Loaded, i18n: &'a I18n) -> Element<'a, Message> {
    let gallery_view = gallery::view(
        &loaded.gallery,
        gallery::ViewEnv {
            i18n,
            images: state.images(),
        },
    )
    .map(Message::Gallery);

    let info = info_column(loaded, i18n);

    let columns = Row::new()
        .spacing(spacing::XXL)
        .push(gallery_view)
        .push(info);

    let page = Container::new(columns)
        .padding([spacing::XL, spacing::XL])
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    Scrollable::new(page).width(Length::Fill).height(Length::Fill).into()
}

fn info_column<'a>(loaded: &'a Loaded, i18n: &'a I18n) -> Element<'a, Message> {
    let product = &loaded.product;

    let mut column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::MAIN_IMAGE_SIZE + sizing::THUMBNAIL_SIZE);

    column = column.push(
        Text::new(product.name.clone())
            .size(typography::TITLE_LG)
            .color(theme::heading_text_color()),
    );

    let mut badges = Row::new().spacing(spacing::SM);
    let mut has_badges = false;
    if product.highlighted {
        badges = badges.push(badge::highlighted(i18n.tr("product-highlighted-badge")));
        has_badges = true;
    }
    if let Some(slug) = &product.category {
        let label = match product.category() {
            Some(category) => i18n.tr(category.i18n_key()),
            None => slug.clone(),
        };
        badges = badges.push(badge::category(label));
        has_badges = true;
    }
    if has_badges {
        column = column.push(badges);
    }

    column = column.push(
        Text::new(format_price_clp(product.price))
            .size(typography::TITLE_MD)
            .color(theme::body_text_color()),
    );

    if let Some(stock) = product.stock {
        let count = stock.to_string();
        column = column.push(
            Text::new(i18n.tr_with_args("product-stock", &[("count", &count)]))
                .size(typography::BODY_SM)
                .color(theme::body_text_color()),
        );
    }

    column = column.push(section_card(
        i18n.tr("product-description-title"),
        &loaded.description,
    ));

    if let Some(age) = &product.age_recommendation {
        let body = vec![Block::Paragraph(age.clone())];
        column = column.push(owned_section_card(i18n.tr("product-age-title"), body));
    }

    if !loaded.specifications.is_empty() {
        column = column.push(section_card(
            i18n.tr("product-specifications-title"),
            &loaded.specifications,
        ));
    }

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(
                Text::new(i18n.tr("product-whatsapp-button"))
                    .align_x(alignment::Horizontal::Center),
            )
            .padding([spacing::SM, spacing::LG])
            .width(Length::Fill)
            .style(styles::button::inquiry)
            .on_press(Message::RequestInquiry),
        )
        .push(
            button(
                Text::new(i18n.tr("product-inquiry-button"))
                    .align_x(alignment::Horizontal::Center),
            )
            .padding([spacing::SM, spacing::LG])
            .width(Length::Fill)
            .style(styles::button::outline)
            .on_press(Message::RequestInquiry),
        );

    column.push(actions).into()
}

/// A white card with a heading and rendered markdown blocks.
fn section_card<'a>(title: String, blocks: &'a [Block]) -> Element<'a, Message> {
    let mut body = Column::new().spacing(spacing::SM).push(
        Text::new(title)
            .size(typography::TITLE_SM)
            .color(theme::heading_text_color()),
    );

    for block in blocks {
        body = body.push(render_block(block));
    }

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Like [`section_card`], for blocks built on the fly.
fn owned_section_card<'a>(title: String, blocks: Vec<Block>) -> Element<'a, Message> {
    let mut body = Column::new().spacing(spacing::SM).push(
        Text::new(title)
            .size(typography::TITLE_SM)
            .color(theme::heading_text_color()),
    );

    for block in blocks {
        body = body.push(render_owned_block(block));
    }

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn render_block(block: &Block) -> Element<'_, Message> {
    render_owned_block(block.clone())
}

fn render_owned_block<'a>(block: Block) -> Element<'a, Message> {
    match block {
        Block::Heading { text, .. } => Text::new(text)
            .size(typography::BODY)
            .color(theme::heading_text_color())
            .into(),
        Block::Paragraph(text) => Text::new(text)
            .size(typography::BODY)
            .color(theme::body_text_color())
            .into(),
        Block::ListItem(text) => Text::new(format!("• {text}"))
            .size(typography::BODY)
            .color(theme::body_text_color())
            .into(),
    }
}
