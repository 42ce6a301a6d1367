// SPDX-License-Identifier: MPL-2.0
//! Zoomable gallery for the product's images.
//!
//! The gallery owns the viewer state machine (selection, magnification
//! toggle, focal point) and renders the primary image with its thumbnail
//! strip. Magnification is click-driven: a click toggles the 2× view, the
//! pointer position drives the anchor while magnified, and leaving the image
//! area always exits the magnified view.

pub mod component;
pub mod state;
mod view;

pub use component::{Message, State};
pub use state::{FocalPoint, PLACEHOLDER_IMAGE_REF};
pub use view::{view, ViewEnv};
