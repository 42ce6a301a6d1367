// SPDX-License-Identifier: MPL-2.0
//! Product detail screen: gallery on the left, product information on the
//! right, with loading and error states while the product document is in
//! flight.

pub mod component;
mod error_state;
mod loading;
mod view;

pub use component::{Effect, Message, State};
pub use view::{view, ViewEnv};
