// SPDX-License-Identifier: MPL-2.0
//! Small reusable view components.

pub mod badge;
