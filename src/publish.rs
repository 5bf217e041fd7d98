//! Publishing: single-post containers and carousels.
//!
//! A post is staged as a container (`POST /{user_id}/threads`) and then made
//! visible with `POST /{user_id}/threads_publish`. Carousels add a first step
//! that stages each item with `is_carousel_item=true`.

use crate::auth::AccessToken;
use crate::client::ThreadsClient;
use crate::error::{Operation, Result};
use crate::http::{Params, join_list};
use crate::types::{CarouselItemType, IdResponse, MediaType};

impl ThreadsClient {
    /// Stage a single post and return its creation id.
    ///
    /// Exactly one content field is sent, chosen by `media_type`: `text`
    /// for TEXT, `image_url` for IMAGE, `video_url` for VIDEO. If the
    /// matching argument is `None` or empty the field is left out and the
    /// server reports the error.
    pub async fn create_media_container(
        &self,
        token: &AccessToken,
        user_id: &str,
        media_type: MediaType,
        media_url: Option<&str>,
        text: Option<&str>,
    ) -> Result<String> {
        let params = Params::new()
            .with("media_type", media_type.as_str())
            .with("access_token", token.as_str());
        let media_url = media_url.filter(|u| !u.is_empty());
        let text = text.filter(|t| !t.is_empty());
        let params = match media_type {
            MediaType::Image => params.with_opt("image_url", media_url),
            MediaType::Video => params.with_opt("video_url", media_url),
            MediaType::Text => params.with_opt("text", text),
        };

        self.post_for_id(Operation::CreateMediaContainer, &format!("{user_id}/threads"), &params)
            .await
    }

    /// Publish a staged container and return the id of the published post.
    pub async fn publish_media_container(
        &self,
        token: &AccessToken,
        user_id: &str,
        creation_id: &str,
    ) -> Result<String> {
        self.publish(Operation::PublishMediaContainer, token, user_id, creation_id)
            .await
    }

    /// Stage one carousel item and return its item id.
    pub async fn create_carousel_item_container(
        &self,
        token: &AccessToken,
        user_id: &str,
        media_type: CarouselItemType,
        media_url: &str,
    ) -> Result<String> {
        let url_field = match media_type {
            CarouselItemType::Image => "image_url",
            CarouselItemType::Video => "video_url",
        };
        let params = Params::new()
            .with("media_type", media_type.as_str())
            .with("is_carousel_item", "true")
            .with("access_token", token.as_str())
            .with(url_field, media_url);

        self.post_for_id(
            Operation::CreateCarouselItemContainer,
            &format!("{user_id}/threads"),
            &params,
        )
        .await
    }

    /// Stage a carousel from previously created item ids.
    ///
    /// Items are displayed in the order given.
    pub async fn create_carousel_container<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        user_id: &str,
        children: &[S],
        text: Option<&str>,
    ) -> Result<String> {
        let params = Params::new()
            .with("media_type", "CAROUSEL")
            .with("children", join_list(children))
            .with("access_token", token.as_str())
            .with_opt("text", text.filter(|t| !t.is_empty()));

        self.post_for_id(
            Operation::CreateCarouselContainer,
            &format!("{user_id}/threads"),
            &params,
        )
        .await
    }

    pub async fn publish_carousel_container(
        &self,
        token: &AccessToken,
        user_id: &str,
        creation_id: &str,
    ) -> Result<String> {
        self.publish(Operation::PublishCarouselContainer, token, user_id, creation_id)
            .await
    }

    async fn publish(
        &self,
        operation: Operation,
        token: &AccessToken,
        user_id: &str,
        creation_id: &str,
    ) -> Result<String> {
        let params = Params::new()
            .with("creation_id", creation_id)
            .with("access_token", token.as_str());

        let id = self
            .post_for_id(operation, &format!("{user_id}/threads_publish"), &params)
            .await?;
        tracing::info!(%operation, id = %id, "published");
        Ok(id)
    }

    /// POST to a versioned endpoint that answers with `{"id": ...}`.
    pub(crate) async fn post_for_id(
        &self,
        operation: Operation,
        path: &str,
        params: &Params,
    ) -> Result<String> {
        let response: IdResponse = self
            .http()
            .post_form(operation, &self.api_url(path), params)
            .await?;
        Ok(response.id)
    }
}
