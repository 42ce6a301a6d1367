// SPDX-License-Identifier: MPL-2.0
//! Product page component encapsulating state and update logic.
//!
//! The page is a three-way state machine: loading, failed, or loaded. The
//! loaded arm owns the gallery (rebuilt for every product, so viewer state
//! never leaks between articles) and the parsed description blocks.

use super::error_state;
use crate::backend::{CachedImage, ImageCache};
use crate::catalog::{description, Block, Product};
use crate::config::GalleryConfig;
use crate::error::BackendError;
use crate::ui::design_tokens::sizing;
use crate::ui::gallery;
use iced::widget::image;
use iced::Task;

/// Messages emitted by the product page widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The product document finished loading. The id identifies which
    /// request this result belongs to; stale results are dropped.
    ProductLoaded {
        product_id: String,
        result: Result<Product, BackendError>,
    },
    /// One gallery image finished fetching.
    ImageFetched {
        url: String,
        result: Result<image::Handle, BackendError>,
    },
    Gallery(gallery::Message),
    /// The WhatsApp inquiry button was pressed.
    RequestInquiry,
    /// Retry affordance on the error view.
    RetryPressed,
    /// Toggle the technical details on the error view.
    ToggleErrorDetails,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Reload the current product (retry affordance).
    Reload,
    /// Fetch these image URLs into the cache.
    ImagesNeeded(Vec<String>),
    /// Open the WhatsApp inquiry for the named product.
    RequestInquiry { product_name: String },
}

/// The loaded product with everything derived from it.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub product: Product,
    /// Parsed markdown description.
    pub description: Vec<Block>,
    /// Parsed markdown specifications, when present.
    pub specifications: Vec<Block>,
    pub gallery: gallery::State,
}

/// Load progression of the page.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Failed(error_state::State),
    Loaded(Box<Loaded>),
}

/// Product page component state.
pub struct State {
    product_id: String,
    load: LoadState,
    images: ImageCache,
}

impl State {
    /// Creates the page in its loading state for `product_id`.
    #[must_use]
    pub fn new(product_id: String) -> Self {
        Self {
            product_id,
            load: LoadState::Loading,
            images: ImageCache::default(),
        }
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[must_use]
    pub fn load(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Puts the page into a failed state without a load round trip. Used
    /// when the backend is not configured at all.
    pub fn fail(&mut self, friendly_key: &'static str, details: String) {
        self.load = LoadState::Failed(error_state::State::new(friendly_key, details));
    }

    /// Image URLs the gallery needs that are not cached yet: the selected
    /// image plus the visible thumbnail strip.
    #[must_use]
    pub fn images_needed(&self) -> Vec<String> {
        let LoadState::Loaded(loaded) = &self.load else {
            return Vec::new();
        };

        let viewer = loaded.gallery.viewer();
        let mut needed: Vec<String> = Vec::new();

        let mut push = |reference: &str| {
            if reference == gallery::PLACEHOLDER_IMAGE_REF {
                return;
            }
            if self.images.contains(reference) {
                return;
            }
            if needed.iter().any(|r| r == reference) {
                return;
            }
            needed.push(reference.to_string());
        };

        push(viewer.selected_image());
        for reference in viewer.thumbnails() {
            push(reference);
        }

        needed
    }

    /// Handles a product page message.
    pub fn update(&mut self, message: Message, gallery_config: &GalleryConfig) -> (Effect, Task<Message>) {
        match message {
            Message::ProductLoaded { product_id, result } => {
                if product_id != self.product_id {
                    // A navigation happened while this request was in
                    // flight; its result no longer matters.
                    return (Effect::None, Task::none());
                }

                match result {
                    Ok(product) => {
                        let loaded = Loaded {
                            description: description::parse_description(&product.description),
                            specifications: product
                                .dimensions
                                .as_deref()
                                .map(description::parse_description)
                                .unwrap_or_default(),
                            gallery: gallery::State::new(
                                product.images.clone(),
                                gallery_config,
                                sizing::MAIN_IMAGE_SIZE,
                            ),
                            product,
                        };
                        self.load = LoadState::Loaded(Box::new(loaded));
                        (Effect::ImagesNeeded(self.images_needed()), Task::none())
                    }
                    Err(error) => {
                        self.load = LoadState::Failed(error_state::State::new(
                            error.i18n_key(),
                            error.to_string(),
                        ));
                        (Effect::None, Task::none())
                    }
                }
            }
            Message::ImageFetched { url, result } => {
                let entry = match result {
                    Ok(handle) => CachedImage::Ready(handle),
                    Err(error) => {
                        eprintln!("Image fetch failed for {url}: {error}");
                        CachedImage::Failed
                    }
                };
                self.images.insert(url, entry);
                (Effect::None, Task::none())
            }
            Message::Gallery(message) => {
                let LoadState::Loaded(loaded) = &mut self.load else {
                    return (Effect::None, Task::none());
                };

                let task = loaded.gallery.update(message).map(Message::Gallery);
                let needed = self.images_needed();
                let effect = if needed.is_empty() {
                    Effect::None
                } else {
                    Effect::ImagesNeeded(needed)
                };
                (effect, task)
            }
            Message::RequestInquiry => {
                let LoadState::Loaded(loaded) = &self.load else {
                    return (Effect::None, Task::none());
                };

                (
                    Effect::RequestInquiry {
                        product_name: loaded.product.name.clone(),
                    },
                    Task::none(),
                )
            }
            Message::RetryPressed => {
                self.load = LoadState::Loading;
                (Effect::Reload, Task::none())
            }
            Message::ToggleErrorDetails => {
                if let LoadState::Failed(error) = &mut self.load {
                    error.toggle_details();
                }
                (Effect::None, Task::none())
            }
        }
    }
}
