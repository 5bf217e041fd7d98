//! OAuth for Threads.
//!
//! The token lifecycle has three steps:
//!
//! 1. Send the user to [`ThreadsClient::authorization_url`] and receive a
//!    `code` on the redirect URI.
//! 2. Exchange the code for a short-lived token with
//!    [`ThreadsClient::get_access_token`].
//! 3. Exchange that for a long-lived token with
//!    [`ThreadsClient::get_long_lived_token`], and keep it fresh with
//!    [`ThreadsClient::refresh_long_lived_token`].
//!
//! None of these calls store the token on the client. The caller decides
//! which token to use, persist, and rotate.

mod state;
mod token;

pub use state::generate_state;
pub use token::{AccessToken, LongLivedToken, ShortLivedToken};

use crate::client::ThreadsClient;
use crate::error::{Operation, Result};
use crate::http::Params;
use token::now_millis;

impl ThreadsClient {
    /// Build the browser authorization URL.
    ///
    /// `state` is appended only when present and non-empty.
    #[must_use]
    pub fn authorization_url(&self, state: Option<&str>) -> String {
        let config = self.config();
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("client_id", &config.client_id)
            .append_pair("redirect_uri", &config.redirect_uri)
            .append_pair("scope", &config.scope)
            .append_pair("response_type", "code");
        if let Some(state) = state.filter(|s| !s.is_empty()) {
            query.append_pair("state", state);
        }

        format!("{}?{}", self.endpoints().authorize_url, query.finish())
    }

    /// Exchange an authorization code for a short-lived token.
    pub async fn get_access_token(&self, code: &str) -> Result<ShortLivedToken> {
        let config = self.config();
        let params = Params::new()
            .with("client_id", config.client_id.as_str())
            .with("client_secret", config.client_secret.as_str())
            .with("grant_type", "authorization_code")
            .with("redirect_uri", config.redirect_uri.as_str())
            .with("code", code);

        let url = self.graph_url("oauth/access_token");
        let token: ShortLivedToken = self
            .http()
            .post_form(Operation::GetAccessToken, &url, &params)
            .await?;

        tracing::info!(user_id = %token.user_id, "exchanged authorization code");
        Ok(token)
    }

    /// Exchange a short-lived token for a long-lived one.
    pub async fn get_long_lived_token(&self, short_lived: &AccessToken) -> Result<LongLivedToken> {
        let params = Params::new()
            .with("grant_type", "th_exchange_token")
            .with("client_secret", self.config().client_secret.as_str())
            .with("access_token", short_lived.as_str());

        let url = self.graph_url("access_token");
        let token: LongLivedToken = self
            .http()
            .get(Operation::GetLongLivedToken, &url, &params)
            .await?;
        Ok(token.stamped(now_millis()))
    }

    /// Refresh an unexpired long-lived token.
    pub async fn refresh_long_lived_token(
        &self,
        long_lived: &AccessToken,
    ) -> Result<LongLivedToken> {
        let params = Params::new()
            .with("grant_type", "th_refresh_token")
            .with("access_token", long_lived.as_str());

        let url = self.graph_url("refresh_access_token");
        let token: LongLivedToken = self
            .http()
            .get(Operation::RefreshLongLivedToken, &url, &params)
            .await?;
        Ok(token.stamped(now_millis()))
    }
}
