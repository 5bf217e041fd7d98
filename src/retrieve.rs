//! Read operations for threads, media objects, profiles, and replies.

use crate::auth::AccessToken;
use crate::client::ThreadsClient;
use crate::error::{Operation, Result};
use crate::http::{Params, join_list};
use crate::types::{DataEnvelope, ThreadsMedia, UserProfile, UserThreadsQuery};
use serde::de::DeserializeOwned;

/// Replies and conversations are requested in reverse chronological order
/// unless the caller says otherwise.
pub const DEFAULT_REVERSE: bool = true;

impl ThreadsClient {
    /// List a user's threads (first page only).
    pub async fn get_user_threads<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        user_id: &str,
        fields: &[S],
        query: &UserThreadsQuery,
    ) -> Result<Vec<ThreadsMedia>> {
        let params = Params::new()
            .with("fields", join_list(fields))
            .with("limit", query.limit.to_string())
            .with("access_token", token.as_str())
            .with_opt("since", query.since.as_deref())
            .with_opt("until", query.until.as_deref());

        self.get_list(Operation::GetUserThreads, &format!("{user_id}/threads"), &params)
            .await
    }

    pub async fn get_threads_media_object<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        media_id: &str,
        fields: &[S],
    ) -> Result<ThreadsMedia> {
        let params = fields_params(token, fields);
        self.get_object(Operation::GetThreadsMediaObject, media_id, &params)
            .await
    }

    pub async fn get_user_profile<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        user_id: &str,
        fields: &[S],
    ) -> Result<UserProfile> {
        let params = fields_params(token, fields);
        self.get_object(Operation::GetUserProfile, user_id, &params)
            .await
    }

    /// Top-level replies to a post. `reverse` defaults to [`DEFAULT_REVERSE`].
    pub async fn get_replies<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        media_id: &str,
        fields: &[S],
        reverse: Option<bool>,
    ) -> Result<Vec<ThreadsMedia>> {
        let params = reverse_params(token, fields, reverse);
        self.get_list(Operation::GetReplies, &format!("{media_id}/replies"), &params)
            .await
    }

    /// All replies in a post's tree, flattened. `reverse` defaults to [`DEFAULT_REVERSE`].
    pub async fn get_conversation<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        media_id: &str,
        fields: &[S],
        reverse: Option<bool>,
    ) -> Result<Vec<ThreadsMedia>> {
        let params = reverse_params(token, fields, reverse);
        self.get_list(
            Operation::GetConversation,
            &format!("{media_id}/conversation"),
            &params,
        )
        .await
    }

    /// GET a versioned endpoint that answers with a `{"data": [...]}` envelope.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        params: &Params,
    ) -> Result<Vec<T>> {
        let envelope: DataEnvelope<T> = self
            .http()
            .get(operation, &self.api_url(path), params)
            .await?;
        tracing::debug!(%operation, count = envelope.data.len(), "decoded list");
        Ok(envelope.data)
    }

    async fn get_object<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        self.http()
            .get(operation, &self.api_url(path), params)
            .await
    }
}

fn fields_params<S: AsRef<str>>(token: &AccessToken, fields: &[S]) -> Params {
    Params::new()
        .with("fields", join_list(fields))
        .with("access_token", token.as_str())
}

fn reverse_params<S: AsRef<str>>(
    token: &AccessToken,
    fields: &[S],
    reverse: Option<bool>,
) -> Params {
    Params::new()
        .with("fields", join_list(fields))
        .with("reverse", reverse.unwrap_or(DEFAULT_REVERSE).to_string())
        .with("access_token", token.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_defaults_to_true() {
        let token = AccessToken::new("t");
        let params = reverse_params(&token, &["id", "text"], None);
        assert_eq!(params.get("reverse"), Some("true"));
        assert_eq!(params.get("fields"), Some("id,text"));

        let params = reverse_params(&token, &["id"], Some(false));
        assert_eq!(params.get("reverse"), Some("false"));
    }

    #[test]
    fn test_fields_params_order() {
        let token = AccessToken::new("t");
        let params = fields_params(&token, &["username", "id"]);
        let keys: Vec<_> = params.as_slice().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["fields", "access_token"]);
        assert_eq!(params.get("fields"), Some("username,id"));
    }
}
