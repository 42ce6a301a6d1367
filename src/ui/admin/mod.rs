// SPDX-License-Identifier: MPL-2.0
//! Administrator area: the sign-in form and the signed-in summary.

pub mod sign_in;

pub use sign_in::{Effect, Message, State};
