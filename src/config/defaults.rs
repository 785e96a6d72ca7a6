// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Network**: Where relative sources resolve and how requests identify
//! - **Label**: Owner label layout and failure display

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Base URL that relative sources and named routes resolve against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// User agent sent with every owner request.
pub const DEFAULT_USER_AGENT: &str = concat!("OwnerLens/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Label Defaults
// ==========================================================================

/// Right padding around the owner text, in logical pixels.
pub const DEFAULT_PADDING_RIGHT: f32 = 10.0;

/// Minimum right padding.
pub const MIN_PADDING_RIGHT: f32 = 0.0;

/// Maximum right padding.
pub const MAX_PADDING_RIGHT: f32 = 100.0;

/// Text shown instead of the owner when the placeholder policy is active
/// and the request failed.
pub const DEFAULT_PLACEHOLDER: &str = "unknown";

/// Separator rendered after the owner name.
pub const LABEL_SEPARATOR: &str = ", ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_default_is_within_bounds() {
        assert!(DEFAULT_PADDING_RIGHT >= MIN_PADDING_RIGHT);
        assert!(DEFAULT_PADDING_RIGHT <= MAX_PADDING_RIGHT);
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(DEFAULT_USER_AGENT.starts_with("OwnerLens/"));
        assert!(DEFAULT_USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
