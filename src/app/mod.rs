// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront screens.
//!
//! The `App` struct wires together the domains (product page, admin area,
//! localization, backend access) and translates component effects into side
//! effects like network requests or the WhatsApp hand-off. Policy decisions
//! (window sizing, which product loads first, what happens without a
//! configured backend) live here so user-facing behavior is easy to audit.

mod message;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::backend::Backend;
use crate::config::{self, GalleryConfig, StoreConfig};
use crate::i18n::I18n;
use crate::ui::admin;
use crate::ui::product_page;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Product shown when neither the CLI nor the config names one.
const FALLBACK_PRODUCT_ID: &str = "featured";

/// Root Iced application state bridging UI components, localization, and the
/// hosted backend.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    product: product_page::State,
    admin: admin::State,
    backend: Option<Backend>,
    store: StoreConfig,
    gallery: GalleryConfig,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("product_id", &self.product.product_id())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and kicks off the first product load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let product_id = flags
            .product_id
            .or_else(|| config.store.featured_product.clone())
            .unwrap_or_else(|| FALLBACK_PRODUCT_ID.to_string());

        let mut app = App {
            i18n,
            screen: Screen::Product,
            product: product_page::State::new(product_id),
            admin: admin::State::default(),
            backend: Backend::from_config(&config.backend),
            store: config.store,
            gallery: config.gallery,
        };

        let task = update::load_product_task(&mut app);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
