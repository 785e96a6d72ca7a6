// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit and integration tests.
//!
//! [`ScriptedFetcher`] records every requested source and leaves each
//! request hanging until the test answers it, which makes it possible to
//! simulate responses that arrive late or never.

use crate::fetch::{FetchError, FetchFuture, FetchResult, Fetcher};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tokio::sync::oneshot;

#[derive(Default)]
struct Script {
    requested: Vec<String>,
    waiting: VecDeque<oneshot::Sender<FetchResult>>,
}

/// In-memory [`Fetcher`] answered manually by the test.
#[derive(Default)]
pub struct ScriptedFetcher {
    script: Mutex<Script>,
}

impl ScriptedFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources requested so far, oldest first.
    #[must_use]
    pub fn requested(&self) -> Vec<String> {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .requested
            .clone()
    }

    /// Number of requests still waiting for an answer.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .waiting
            .len()
    }

    /// Answers the oldest unanswered request.
    ///
    /// Returns `false` when there was no request or its future is gone
    /// (for example because it was cancelled and dropped).
    pub fn respond(&self, result: FetchResult) -> bool {
        let sender = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .waiting
            .pop_front();
        match sender {
            Some(sender) => sender.send(result).is_ok(),
            None => false,
        }
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(&self, source: &str) -> FetchFuture {
        let (sender, receiver) = oneshot::channel();
        {
            let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
            script.requested.push(source.to_string());
            script.waiting.push_back(sender);
        }
        Box::pin(async move { receiver.await.unwrap_or(Err(FetchError::Cancelled)) })
    }
}
