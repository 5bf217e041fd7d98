//! Reply moderation.

use crate::auth::AccessToken;
use crate::client::ThreadsClient;
use crate::error::{Operation, Result};
use crate::http::Params;
use crate::types::{MediaType, ReplyControl, SuccessResponse};

impl ThreadsClient {
    /// Hide (`hide = true`) or unhide a reply. Returns the server's `success` flag.
    pub async fn hide_reply(&self, token: &AccessToken, reply_id: &str, hide: bool) -> Result<bool> {
        let params = Params::new()
            .with("hide", hide.to_string())
            .with("access_token", token.as_str());

        let url = self.api_url(&format!("{reply_id}/manage_reply"));
        let response: SuccessResponse = self
            .http()
            .post_form(Operation::HideReply, &url, &params)
            .await?;
        Ok(response.success)
    }

    /// Post a reply to `reply_to_id`. Replies need no separate publish step.
    pub async fn respond_to_reply(
        &self,
        token: &AccessToken,
        user_id: &str,
        media_type: MediaType,
        text: &str,
        reply_to_id: &str,
    ) -> Result<String> {
        let params = Params::new()
            .with("media_type", media_type.as_str())
            .with("text", text)
            .with("reply_to_id", reply_to_id)
            .with("access_token", token.as_str());

        self.post_for_id(Operation::RespondToReply, &format!("{user_id}/threads"), &params)
            .await
    }

    /// Create a post restricted to the given audience of repliers.
    pub async fn control_who_can_reply(
        &self,
        token: &AccessToken,
        user_id: &str,
        media_type: MediaType,
        text: &str,
        reply_control: ReplyControl,
    ) -> Result<String> {
        let params = Params::new()
            .with("media_type", media_type.as_str())
            .with("text", text)
            .with("reply_control", reply_control.as_str())
            .with("access_token", token.as_str());

        self.post_for_id(
            Operation::ControlWhoCanReply,
            &format!("{user_id}/threads"),
            &params,
        )
        .await
    }
}
