// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component updates return effects; this module turns them into tasks
//! (network round trips, the WhatsApp hand-off) and routes results back as
//! messages.

use super::{App, Message, Screen};
use crate::backend::{auth, firestore, images};
use crate::error::AuthError;
use crate::inquiry;
use crate::ui::admin;
use crate::ui::navbar;
use crate::ui::product_page;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Product(message) => {
            let (effect, task) = app.product.update(message, &app.gallery);
            let effect_task = handle_product_effect(app, effect);
            Task::batch([task.map(Message::Product), effect_task])
        }
        Message::Admin(message) => {
            let effect = app.admin.update(message);
            handle_admin_effect(app, effect)
        }
        Message::Navbar(message) => {
            match navbar::update(message) {
                navbar::Event::OpenStorefront => app.screen = Screen::Product,
                navbar::Event::OpenAdmin => app.screen = Screen::Admin,
            }
            Task::none()
        }
    }
}

fn handle_product_effect(app: &mut App, effect: product_page::Effect) -> Task<Message> {
    match effect {
        product_page::Effect::None => Task::none(),
        product_page::Effect::Reload => load_product_task(app),
        product_page::Effect::ImagesNeeded(urls) => fetch_images_task(app, urls),
        product_page::Effect::RequestInquiry { product_name } => {
            let message = inquiry::inquiry_message(&app.i18n, &product_name);
            match inquiry::inquiry_link(app.store.whatsapp_number(), &message) {
                Some(url) => inquiry::open_external(&url),
                None => eprintln!(
                    "Could not build an inquiry link for number {:?}",
                    app.store.whatsapp_number()
                ),
            }
            Task::none()
        }
    }
}

fn handle_admin_effect(app: &mut App, effect: admin::Effect) -> Task<Message> {
    match effect {
        admin::Effect::None => Task::none(),
        admin::Effect::SubmitCredentials { email, password } => match &app.backend {
            Some(backend) => {
                let backend = backend.clone();
                Task::perform(
                    async move { auth::sign_in_admin(&backend, &email, &password).await },
                    |result| Message::Admin(admin::Message::SignInCompleted(result)),
                )
            }
            None => Task::done(Message::Admin(admin::Message::SignInCompleted(Err(
                AuthError::NotConfigured,
            )))),
        },
    }
}

/// Starts (or restarts) loading the current product.
///
/// Without a configured backend the page is failed immediately; there is no
/// request that could succeed.
pub(super) fn load_product_task(app: &mut App) -> Task<Message> {
    let Some(backend) = app.backend.clone() else {
        app.product.fail(
            "error-backend-not-configured",
            "missing [backend] project_id/api_key in settings.toml".to_string(),
        );
        return Task::none();
    };

    let product_id = app.product.product_id().to_string();
    let reply_id = product_id.clone();

    Task::perform(
        async move { firestore::fetch_product(&backend, &product_id).await },
        move |result| {
            Message::Product(product_page::Message::ProductLoaded {
                product_id: reply_id.clone(),
                result,
            })
        },
    )
}

/// Fetches every needed gallery image concurrently.
fn fetch_images_task(app: &App, urls: Vec<String>) -> Task<Message> {
    let Some(backend) = &app.backend else {
        return Task::none();
    };

    let tasks = urls.into_iter().map(|url| {
        let client = backend.client().clone();
        let fetch_url = url.clone();
        Task::perform(
            async move { images::fetch_image(&client, &fetch_url).await },
            move |result| {
                Message::Product(product_page::Message::ImageFetched {
                    url: url.clone(),
                    result,
                })
            },
        )
    });

    Task::batch(tasks)
}
