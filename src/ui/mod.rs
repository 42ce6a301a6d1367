// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, shared styles, and the screen
//! components.

pub mod admin;
pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod product_page;
pub mod styles;
pub mod theme;
