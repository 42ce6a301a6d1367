// SPDX-License-Identifier: MPL-2.0
//! REST access to the hosted document database and identity provider.
//!
//! This layer owns all network traffic:
//! - Firestore document reads/writes with the typed JSON value encoding
//! - Identity Toolkit password sign-in and sign-up
//! - Remote image fetching for the gallery
//!
//! All functions are `async` and are driven from the Elm loop via
//! `Task::perform`; failures are mapped into the domain error enums instead
//! of being propagated raw.

pub mod auth;
pub mod firestore;
pub mod images;

pub use auth::AdminUser;
pub use images::{CachedImage, ImageCache};

use crate::config::BackendConfig;

const USER_AGENT: &str = concat!("IcedVitrine/", env!("CARGO_PKG_VERSION"));

/// Connection parameters for the hosted backend, shared by all requests.
#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::Client,
    project_id: String,
    api_key: String,
}

impl Backend {
    /// Builds a backend handle from configuration.
    ///
    /// Returns `None` when the project or API key is missing, in which case
    /// the UI shows its "backend not configured" state instead of issuing
    /// requests that can only fail.
    #[must_use]
    pub fn from_config(config: &BackendConfig) -> Option<Self> {
        if !config.is_configured() {
            return None;
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .ok()?;

        Some(Self {
            client,
            project_id: config.project_id.clone()?,
            api_key: config.api_key.clone()?,
        })
    }

    #[must_use]
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// URL of a document within the default database.
    #[must_use]
    pub fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.project_id, collection, id
        )
    }
}
