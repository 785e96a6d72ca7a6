// SPDX-License-Identifier: MPL-2.0
//! reqwest-backed [`Fetcher`].
//!
//! Sources may be absolute URLs or paths. Paths are resolved against the
//! configured base URL the way a browser resolves them against the page
//! origin.

use super::{payload, FetchError, FetchFuture, Fetcher};
use crate::config::NetworkConfig;
use std::time::Duration;
use url::Url;

/// HTTP implementation of the fetch capability.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl HttpFetcher {
    /// Builds a fetcher from network settings.
    pub fn new(settings: &NetworkConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(settings.user_agent());

        if let Some(secs) = settings.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let base_url = if settings.base_url.is_empty() {
            None
        } else {
            Some(
                Url::parse(&settings.base_url)
                    .map_err(|_| FetchError::InvalidUrl(settings.base_url.clone()))?,
            )
        };

        Ok(Self { client, base_url })
    }

    /// Resolves a source to the URL that will be requested.
    pub fn resolve(&self, source: &str) -> Result<Url, FetchError> {
        match Url::parse(source) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base_url
                .as_ref()
                .and_then(|base| base.join(source).ok())
                .ok_or_else(|| FetchError::InvalidUrl(source.to_string())),
            Err(_) => Err(FetchError::InvalidUrl(source.to_string())),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, source: &str) -> FetchFuture {
        let client = self.client.clone();
        let url = self.resolve(source);

        Box::pin(async move {
            let url = url?;
            tracing::debug!(%url, "requesting owner");

            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            if !response.status().is_success() {
                return Err(FetchError::Status(response.status().as_u16()));
            }

            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Body(e.to_string()))?;

            Ok(payload::decode(&body))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher_with_base(base_url: &str) -> HttpFetcher {
        let settings = NetworkConfig {
            base_url: base_url.to_string(),
            ..NetworkConfig::default()
        };
        HttpFetcher::new(&settings).expect("client should build")
    }

    #[test]
    fn absolute_source_is_used_as_is() {
        let fetcher = fetcher_with_base("http://localhost:5000");
        let url = fetcher.resolve("https://example.org/userinfo").unwrap();
        assert_eq!(url.as_str(), "https://example.org/userinfo");
    }

    #[test]
    fn relative_source_is_joined_with_base() {
        let fetcher = fetcher_with_base("http://localhost:5000");
        let url = fetcher.resolve("/api/owner/42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/owner/42");
    }

    #[test]
    fn relative_source_without_base_is_invalid() {
        let fetcher = fetcher_with_base("");
        assert_eq!(
            fetcher.resolve("/userinfo"),
            Err(FetchError::InvalidUrl("/userinfo".to_string()))
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let settings = NetworkConfig {
            base_url: "not a url".to_string(),
            ..NetworkConfig::default()
        };
        assert!(matches!(
            HttpFetcher::new(&settings),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn invalid_source_fails_without_network() {
        let fetcher = fetcher_with_base("");
        let result = fetcher.fetch("relative/only").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind a free port");
        let addr = listener.local_addr().expect("listener has an address");
        drop(listener);

        let fetcher = fetcher_with_base("");
        let result = fetcher.fetch(&format!("http://{addr}/userinfo")).await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
