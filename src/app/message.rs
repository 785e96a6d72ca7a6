// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::owner_label;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded message of the label at `index`.
    Label {
        index: usize,
        message: owner_label::Message,
    },
    /// Detach every label if attached, attach them otherwise.
    ToggleAttached,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `OWNER_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional base URL override for relative sources and routes.
    pub base_url: Option<String>,
    /// Sources to display. Falls back to the configured list when empty.
    pub sources: Vec<String>,
}
