// SPDX-License-Identifier: MPL-2.0
//! Network capability used by owner labels.
//!
//! Components never talk to a concrete HTTP client. They receive a
//! [`Fetcher`], ask it for the body behind a source, and keep the returned
//! [`PendingRequest`] as the only handle able to cancel that request.
//!
//! # Cancellation
//!
//! [`PendingRequest::issue`] wraps the fetcher's future with
//! [`futures_util::future::abortable`]. Cancelling (explicitly or by dropping
//! the handle) aborts the transport on its next poll and makes the future
//! resolve to [`FetchError::Cancelled`]. Each request also records the
//! generation it was issued under, so a completion that already left the
//! transport can still be recognised as stale by its owner.

pub mod http;
pub mod payload;

pub use http::HttpFetcher;

use futures_util::future::{self, AbortHandle, BoxFuture};
use std::future::Future;
use thiserror::Error;

/// Future returned by a [`Fetcher`], resolving to the decoded body text.
pub type FetchFuture = BoxFuture<'static, FetchResult>;

/// Result type for fetch operations.
pub type FetchResult = Result<String, FetchError>;

/// Errors that can occur while fetching a source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source could not be turned into a request URL.
    #[error("invalid source URL `{0}`")]
    InvalidUrl(String),
    /// Connection or protocol failure before a response was received.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP status: {0}")]
    Status(u16),
    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
    /// The request was cancelled by its owner.
    #[error("request cancelled")]
    Cancelled,
}

/// Capability to issue a GET request for a source and yield its payload.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, source: &str) -> FetchFuture;
}

/// Ownership handle for one in-flight request.
///
/// Dropping the handle cancels the request.
#[derive(Debug)]
pub struct PendingRequest {
    generation: u64,
    abort: AbortHandle,
}

impl PendingRequest {
    /// Starts a request for `source` and returns its handle together with
    /// the future that performs it.
    ///
    /// Nothing happens on the network until the returned future is polled.
    pub fn issue(
        fetcher: &dyn Fetcher,
        source: &str,
        generation: u64,
    ) -> (Self, impl Future<Output = FetchResult> + Send + 'static) {
        let (request, abort) = future::abortable(fetcher.fetch(source));
        let task = async move { request.await.unwrap_or(Err(FetchError::Cancelled)) };
        (Self { generation, abort }, task)
    }

    /// Generation this request was issued under.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Aborts the request. Calling this more than once is harmless.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
