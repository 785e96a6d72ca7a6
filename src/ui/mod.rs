// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its State, exposes a Message type, and reports an Effect back to
//! its parent from `update`.
//!
//! - [`owner_label`] - Label showing the owner of a resource
//! - [`styles`] - Centralized styling

pub mod owner_label;
pub mod styles;
