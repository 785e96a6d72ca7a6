// SPDX-License-Identifier: MPL-2.0
//! Named routes of the tracking server and their URLs.
//!
//! Parents use [`Routes`] to build the `source` they hand to an owner label.
//! Labels themselves only ever see the resulting URL string.

use crate::error::{Error, Result};
use url::Url;

/// Prefix marking a command-line or config source as a named route.
pub const ROUTE_PREFIX: &str = "route:";

/// A server endpoint that answers with an owner name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Identity of the logged-in user.
    UserInfo,
    /// Owner of the resource with the given id.
    Owner(String),
}

impl Route {
    /// Parses a route name such as `userinfo` or `owner/42`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim_matches('/').split_once('/') {
            None if name.trim_matches('/') == "userinfo" => Some(Route::UserInfo),
            Some(("owner", id)) if !id.is_empty() => Some(Route::Owner(id.to_string())),
            _ => None,
        }
    }

    fn segments(&self) -> Vec<&str> {
        match self {
            Route::UserInfo => vec!["userinfo"],
            Route::Owner(id) => vec!["api", "owner", id.as_str()],
        }
    }
}

/// Route table rooted at a base URL.
#[derive(Debug, Clone)]
pub struct Routes {
    base: Url,
}

impl Routes {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::Url(format!("`{base_url}` cannot be used as a base URL")));
        }
        Ok(Self { base })
    }

    /// Absolute URL of a route.
    #[must_use]
    pub fn url_for(&self, route: &Route) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(route.segments());
        }
        url
    }

    /// Turns a user-supplied source into a fetchable source string.
    ///
    /// `route:<name>` entries are resolved through the table, anything
    /// else is passed through untouched.
    pub fn resolve_source(&self, source: &str) -> Result<String> {
        match source.strip_prefix(ROUTE_PREFIX) {
            Some(name) => Route::parse(name)
                .map(|route| self.url_for(&route).to_string())
                .ok_or_else(|| Error::Config(format!("unknown route `{name}`"))),
            None => Ok(source.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("userinfo"), Some(Route::UserInfo));
        assert_eq!(Route::parse("/userinfo/"), Some(Route::UserInfo));
        assert_eq!(
            Route::parse("owner/42"),
            Some(Route::Owner("42".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_routes() {
        assert_eq!(Route::parse("owner/"), None);
        assert_eq!(Route::parse("health"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn userinfo_url_from_origin() {
        let routes = Routes::new("http://localhost:5000").unwrap();
        assert_eq!(
            routes.url_for(&Route::UserInfo).as_str(),
            "http://localhost:5000/userinfo"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let routes = Routes::new("https://example.org/mlflow/").unwrap();
        assert_eq!(
            routes.url_for(&Route::Owner("42".into())).as_str(),
            "https://example.org/mlflow/api/owner/42"
        );
    }

    #[test]
    fn owner_id_is_percent_encoded() {
        let routes = Routes::new("http://localhost:5000").unwrap();
        assert_eq!(
            routes.url_for(&Route::Owner("a b".into())).as_str(),
            "http://localhost:5000/api/owner/a%20b"
        );
    }

    #[test]
    fn non_base_url_is_rejected() {
        assert!(matches!(Routes::new("mailto:admin@example.org"), Err(Error::Url(_))));
        assert!(matches!(Routes::new("not a url"), Err(Error::Url(_))));
    }

    #[test]
    fn resolve_source_handles_routes_and_passthrough() {
        let routes = Routes::new("http://localhost:5000").unwrap();
        assert_eq!(
            routes.resolve_source("route:userinfo").unwrap(),
            "http://localhost:5000/userinfo"
        );
        assert_eq!(routes.resolve_source("/api/owner/1").unwrap(), "/api/owner/1");
        assert!(routes.resolve_source("route:nope").is_err());
    }
}
