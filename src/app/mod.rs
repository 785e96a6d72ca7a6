// SPDX-License-Identifier: MPL-2.0
//! Application root: hosts one owner label per source.
//!
//! The `App` is the parent the labels expect. It turns configured sources
//! into fetchable URLs, attaches every label on boot, forwards completions
//! to the label that issued them, and detaches labels on request. Dropping
//! the app (window closed) drops the labels, which cancels anything still
//! in flight.

mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::routes::{Routes, ROUTE_PREFIX};
use crate::ui::owner_label::{self, LabelOptions, OwnerLabel};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 200;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;

/// Source shown when neither the command line nor the config name one.
pub const DEFAULT_SOURCE: &str = "route:userinfo";

/// Root Iced application state.
pub struct App {
    labels: Vec<OwnerLabel>,
    fetcher: Arc<dyn Fetcher>,
    attached: bool,
    /// Problem met while loading settings, shown under the labels.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("labels", &self.labels.len())
            .field("attached", &self.attached)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    let (mut config, config_warning) = config::load();
    if let Some(warning) = &config_warning {
        tracing::warn!("{warning}");
    }
    if let Some(base_url) = flags.base_url {
        config.network.base_url = base_url;
    }

    let fetcher = Arc::new(HttpFetcher::new(&config.network)?);
    let mut app = App::new(&config, &flags.sources, fetcher)?;
    app.config_warning = config_warning;

    // iced 0.14 requires a Fn boot closure; the app is handed over once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let mut app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        let task = app.attach_all();
        (app, task)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()?;

    Ok(())
}

impl App {
    /// Creates the app with one label per source.
    ///
    /// `sources` falls back to the configured list, then to
    /// [`DEFAULT_SOURCE`]. Labels start detached.
    pub fn new(config: &Config, sources: &[String], fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        let sources: Vec<String> = if !sources.is_empty() {
            sources.to_vec()
        } else if !config.sources.is_empty() {
            config.sources.clone()
        } else {
            vec![DEFAULT_SOURCE.to_string()]
        };

        let routes = Routes::new(&config.network.base_url).ok();
        let options = LabelOptions::from_config(&config.label);

        let labels = sources
            .iter()
            .map(|source| {
                resolve_source(routes.as_ref(), source)
                    .map(|source| OwnerLabel::with_options(source, options.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            labels,
            fetcher,
            attached: false,
            config_warning: None,
        })
    }

    #[must_use]
    pub fn labels(&self) -> &[OwnerLabel] {
        &self.labels
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn config_warning(&self) -> Option<&str> {
        self.config_warning.as_deref()
    }

    /// Attaches every label and returns their batched requests.
    pub fn attach_all(&mut self) -> Task<Message> {
        self.attached = true;
        let fetcher = Arc::clone(&self.fetcher);
        Task::batch(self.labels.iter_mut().enumerate().map(|(index, label)| {
            label
                .attach(fetcher.as_ref())
                .map(move |message| Message::Label { index, message })
        }))
    }

    /// Detaches every label, cancelling their requests.
    pub fn detach_all(&mut self) {
        self.attached = false;
        for label in &mut self.labels {
            label.on_detach();
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Label { index, message } => {
                let Some(label) = self.labels.get_mut(index) else {
                    tracing::warn!(index, "message for unknown label");
                    return Task::none();
                };
                if let owner_label::Effect::Failed(err) = label.update(message) {
                    tracing::debug!(source = label.source(), error = %err, "label kept its text");
                }
                Task::none()
            }
            Message::ToggleAttached => {
                if self.attached {
                    self.detach_all();
                    Task::none()
                } else {
                    self.attach_all()
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::render(self)
    }

    fn title(&self) -> String {
        String::from("OwnerLens")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Resolves `route:` sources through the route table.
fn resolve_source(routes: Option<&Routes>, source: &str) -> Result<String> {
    match routes {
        Some(routes) => routes.resolve_source(source),
        None if source.starts_with(ROUTE_PREFIX) => Err(Error::Config(format!(
            "`{source}` needs a valid network.base_url"
        ))),
        None => Ok(source.to_string()),
    }
}
