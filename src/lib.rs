// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a small storefront product showcase built with the Iced
//! GUI framework.
//!
//! It renders a product detail screen with a zoomable image gallery and a
//! WhatsApp inquiry hand-off, and demonstrates internationalization with
//! Fluent, user preference management, and a thin REST backend layer for a
//! hosted document database and identity provider.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.2.0")]

pub mod app;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod inquiry;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
