// SPDX-License-Identifier: MPL-2.0
//! Owner label: a leaf widget that shows who owns a resource.
//!
//! The label follows the usual State / Message / Effect split:
//!
//! - [`OwnerLabel::new`] renders right away with an empty name.
//! - [`OwnerLabel::attach`] issues exactly one request for the label's
//!   source and returns the [`Task`] delivering its completion.
//! - [`OwnerLabel::update`] applies a completion, unless it belongs to a
//!   request the label no longer owns.
//! - [`OwnerLabel::on_detach`] cancels whatever is in flight.
//!
//! Every attach and detach bumps the label's generation. Completions carry
//! the generation of the request that produced them, so a response that
//! slipped past cancellation is recognised as stale and dropped.

use crate::config::{
    ErrorPolicy, LabelConfig, LABEL_SEPARATOR, MAX_PADDING_RIGHT, MIN_PADDING_RIGHT,
};
use crate::fetch::{FetchError, FetchResult, Fetcher, PendingRequest};
use crate::ui::styles;
use iced::widget::{container, text};
use iced::{Element, Padding, Task};
use std::future::Future;

/// Display options shared by all labels of a parent view.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOptions {
    pub padding_right: f32,
    pub error_policy: ErrorPolicy,
    pub placeholder: String,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self::from_config(&LabelConfig::default())
    }
}

impl LabelOptions {
    #[must_use]
    pub fn from_config(config: &LabelConfig) -> Self {
        Self {
            padding_right: config
                .padding_right
                .clamp(MIN_PADDING_RIGHT, MAX_PADDING_RIGHT),
            error_policy: config.error_policy,
            placeholder: config.placeholder.clone(),
        }
    }
}

/// Where the label is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Created but never attached.
    #[default]
    Idle,
    /// Attached with a request in flight.
    Loading,
    /// Attached and showing a fetched name.
    Loaded,
    /// Attached, the last request failed.
    Failed(FetchError),
    /// Detached; nothing in flight.
    Detached,
}

/// Messages for the owner label.
#[derive(Debug, Clone)]
pub enum Message {
    /// A request finished (successfully, with an error, or cancelled).
    Fetched { generation: u64, result: FetchResult },
}

/// Effects produced by the owner label.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The rendered text changed.
    Rerender,
    /// The request failed. Carries the error for the parent to log.
    Failed(FetchError),
}

/// Render model of a label: the text and its container padding.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    pub text: String,
    pub padding_right: f32,
}

/// Owner label state.
#[derive(Debug)]
pub struct OwnerLabel {
    source: String,
    username: String,
    status: Status,
    pending: Option<PendingRequest>,
    generation: u64,
    revision: u64,
    options: LabelOptions,
}

impl OwnerLabel {
    /// Creates a label for `source` with default options.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, LabelOptions::default())
    }

    pub fn with_options(source: impl Into<String>, options: LabelOptions) -> Self {
        Self {
            source: source.into(),
            username: String::new(),
            status: Status::Idle,
            pending: None,
            generation: 0,
            revision: 0,
            options,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether a request is currently owned by the label.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Counter bumped on every change of the rendered text.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Issues the request for this label's source.
    ///
    /// Returns `None` when the label is already attached; a label never owns
    /// more than one request. The returned future does no work until polled.
    pub fn on_attach(
        &mut self,
        fetcher: &dyn Fetcher,
    ) -> Option<impl Future<Output = Message> + Send + 'static> {
        if matches!(self.status, Status::Loading | Status::Loaded | Status::Failed(_)) {
            tracing::trace!(source = %self.source, "label already attached");
            return None;
        }

        self.generation += 1;
        let generation = self.generation;
        let (pending, request) = PendingRequest::issue(fetcher, &self.source, generation);
        self.pending = Some(pending);
        self.status = Status::Loading;
        tracing::debug!(source = %self.source, generation, "owner label attached");

        Some(async move {
            Message::Fetched {
                generation,
                result: request.await,
            }
        })
    }

    /// Iced flavour of [`on_attach`](Self::on_attach).
    pub fn attach(&mut self, fetcher: &dyn Fetcher) -> Task<Message> {
        match self.on_attach(fetcher) {
            Some(request) => Task::perform(request, std::convert::identity),
            None => Task::none(),
        }
    }

    /// Cancels the in-flight request, if any.
    ///
    /// Safe to call before any attach and any number of times.
    pub fn on_detach(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
            tracing::debug!(
                source = %self.source,
                generation = pending.generation(),
                "owner request cancelled"
            );
        }
        if self.status != Status::Idle {
            let shown_before = self.current_view();
            self.generation += 1;
            self.status = Status::Detached;
            if self.current_view() != shown_before {
                self.revision += 1;
            }
        }
    }

    /// Applies a label message.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Fetched { generation, result } => {
                if generation != self.generation || self.pending.is_none() {
                    tracing::trace!(
                        source = %self.source,
                        generation,
                        current = self.generation,
                        "dropping stale owner response"
                    );
                    return Effect::None;
                }
                self.pending = None;

                match result {
                    Ok(username) => {
                        tracing::info!(source = %self.source, %username, "owner loaded");
                        self.status = Status::Loaded;
                        if username != self.username {
                            self.username = username;
                            self.revision += 1;
                            Effect::Rerender
                        } else {
                            Effect::None
                        }
                    }
                    Err(err) => {
                        tracing::warn!(source = %self.source, error = %err, "owner request failed");
                        self.status = Status::Failed(err.clone());
                        if self.options.error_policy == ErrorPolicy::Placeholder {
                            self.revision += 1;
                        }
                        Effect::Failed(err)
                    }
                }
            }
        }
    }

    /// Text currently shown, without the container.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match (&self.status, self.options.error_policy) {
            (Status::Failed(_), ErrorPolicy::Placeholder) => &self.options.placeholder,
            _ => &self.username,
        }
    }

    /// Pure render model of the label.
    #[must_use]
    pub fn current_view(&self) -> LabelView {
        LabelView {
            text: format!("{}{}", self.display_name(), LABEL_SEPARATOR),
            padding_right: self.options.padding_right,
        }
    }

    /// Render the label.
    pub fn view(&self) -> Element<'_, Message> {
        let LabelView {
            text: content,
            padding_right,
        } = self.current_view();

        container(text(content))
            .padding(Padding {
                right: padding_right,
                ..Padding::ZERO
            })
            .style(styles::container::owner_label)
            .into()
    }
}
