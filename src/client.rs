//! The Threads API client.

use crate::config::{ClientConfig, Config, Endpoints, HttpSettings};
use crate::http::HttpClient;

/// Client for the Threads Graph API.
///
/// Holds the application credentials and a pooled HTTP transport. It stores
/// no user token: authenticated calls take an [`AccessToken`](crate::AccessToken),
/// so one client can serve many users and be shared across tasks.
///
/// Operations are grouped by area:
/// - OAuth: [`authorization_url`](Self::authorization_url),
///   [`get_access_token`](Self::get_access_token),
///   [`get_long_lived_token`](Self::get_long_lived_token),
///   [`refresh_long_lived_token`](Self::refresh_long_lived_token)
/// - publishing: media containers and carousels
/// - retrieval: threads, media objects, profiles, replies, conversations
/// - moderation: hiding replies, replying, reply controls
/// - insights: media and user metrics
#[derive(Debug, Clone)]
pub struct ThreadsClient {
    config: ClientConfig,
    endpoints: Endpoints,
    http: HttpClient,
}

impl ThreadsClient {
    /// Create a client against the public Threads endpoints.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_endpoints(config, Endpoints::default())
    }

    pub fn with_endpoints(config: ClientConfig, endpoints: Endpoints) -> Self {
        Self::build(config, endpoints, &HttpSettings::default())
    }

    /// Create a client from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::build(
            config.client.clone(),
            config.endpoints.clone(),
            &config.http,
        )
    }

    fn build(config: ClientConfig, endpoints: Endpoints, http: &HttpSettings) -> Self {
        Self {
            config,
            endpoints,
            http: HttpClient::new(http),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// URL directly under the Graph host (token endpoints).
    pub(crate) fn graph_url(&self, path: &str) -> String {
        let base = self.endpoints.graph_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// URL under the versioned Graph API (content endpoints).
    pub(crate) fn api_url(&self, path: &str) -> String {
        let version = self.endpoints.api_version.trim_matches('/');
        let path = path.trim_start_matches('/');
        self.graph_url(&format!("{version}/{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(graph_url: &str) -> ThreadsClient {
        ThreadsClient::with_endpoints(
            ClientConfig::new("C", "S", "https://app/cb", "basic"),
            Endpoints::with_graph_url(graph_url),
        )
    }

    #[test]
    fn test_graph_and_api_urls() {
        let client = client("https://graph.threads.net");
        assert_eq!(
            client.graph_url("/oauth/access_token"),
            "https://graph.threads.net/oauth/access_token"
        );
        assert_eq!(
            client.api_url("u1/threads_publish"),
            "https://graph.threads.net/v1.0/u1/threads_publish"
        );
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let client = client("http://127.0.0.1:8080/");
        assert_eq!(client.api_url("/42"), "http://127.0.0.1:8080/v1.0/42");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.client = ClientConfig::new("C", "S", "https://app/cb", "basic");
        config.endpoints.api_version = "v2.0".into();

        let client = ThreadsClient::from_config(&config);
        assert_eq!(client.config().client_id, "C");
        assert_eq!(client.api_url("me"), "https://graph.threads.net/v2.0/me");
    }
}
