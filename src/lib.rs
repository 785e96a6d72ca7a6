// SPDX-License-Identifier: MPL-2.0
//! `owner_lens` shows who owns a resource, built with the Iced GUI framework.
//!
//! Its core is the [`ui::owner_label::OwnerLabel`] component: it fetches an
//! owner name over HTTP when attached, renders it as `"{name}, "`, and
//! cancels the request when detached. The network sits behind the
//! [`fetch::Fetcher`] capability so the component never depends on a
//! concrete transport.

pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod routes;
#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;
pub mod ui;
