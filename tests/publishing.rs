mod common;

use common::{TOKEN, TestContext, keys, param};
use serde_json::json;
use threads_sdk::{CarouselItemType, ErrorKind, MediaType, Operation};

#[tokio::test]
async fn test_create_text_container() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads", 200, json!({"id": "123"}))
        .await;

    let id = ctx
        .client
        .create_media_container(&ctx.token, "u1", MediaType::Text, None, Some("hello"))
        .await
        .unwrap();
    assert_eq!(id, "123");

    let params = ctx.form_params().await;
    assert_eq!(param(&params, "media_type"), Some("TEXT"));
    assert_eq!(param(&params, "text"), Some("hello"));
    assert_eq!(param(&params, "access_token"), Some(TOKEN));
    assert_eq!(param(&params, "image_url"), None);
    assert_eq!(param(&params, "video_url"), None);
}

#[tokio::test]
async fn test_create_image_container_sends_only_image_url() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads", 200, json!({"id": 456}))
        .await;

    let id = ctx
        .client
        .create_media_container(
            &ctx.token,
            "u1",
            MediaType::Image,
            Some("https://cdn.example/a.jpg"),
            Some("ignored caption"),
        )
        .await
        .unwrap();
    assert_eq!(id, "456");

    let params = ctx.form_params().await;
    assert_eq!(keys(&params), ["media_type", "access_token", "image_url"]);
    assert_eq!(param(&params, "media_type"), Some("IMAGE"));
    assert_eq!(param(&params, "image_url"), Some("https://cdn.example/a.jpg"));
}

#[tokio::test]
async fn test_create_text_container_with_empty_text_omits_field() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "POST",
        "/v1.0/u1/threads",
        400,
        json!({"error": {"message": "The parameter text is required", "code": 100}}),
    )
    .await;

    let err = ctx
        .client
        .create_media_container(&ctx.token, "u1", MediaType::Text, None, Some(""))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let params = ctx.form_params().await;
    assert_eq!(keys(&params), ["media_type", "access_token"]);
}

#[tokio::test]
async fn test_create_image_container_with_empty_url_omits_field() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads", 400, json!({"error": {"message": "Missing image_url"}}))
        .await;

    ctx.client
        .create_media_container(&ctx.token, "u1", MediaType::Image, Some(""), None)
        .await
        .unwrap_err();

    let params = ctx.form_params().await;
    assert_eq!(keys(&params), ["media_type", "access_token"]);
}

#[tokio::test]
async fn test_create_video_container_without_url_omits_field() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "POST",
        "/v1.0/u1/threads",
        400,
        json!({"error": {"message": "The parameter video_url is required", "code": 100}}),
    )
    .await;

    let err = ctx
        .client
        .create_media_container(&ctx.token, "u1", MediaType::Video, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.operation(), Operation::CreateMediaContainer);

    let params = ctx.form_params().await;
    assert_eq!(keys(&params), ["media_type", "access_token"]);
}

#[tokio::test]
async fn test_publish_media_container() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads_publish", 200, json!({"id": "post-1"}))
        .await;

    let id = ctx
        .client
        .publish_media_container(&ctx.token, "u1", "123")
        .await
        .unwrap();
    assert_eq!(id, "post-1");

    let params = ctx.form_params().await;
    assert_eq!(keys(&params), ["creation_id", "access_token"]);
    assert_eq!(param(&params, "creation_id"), Some("123"));
}

#[tokio::test]
async fn test_publish_error_carries_remote_message() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "POST",
        "/v1.0/u1/threads_publish",
        400,
        json!({"error": {"error_message": "bad token"}}),
    )
    .await;

    let err = ctx
        .client
        .publish_media_container(&ctx.token, "u1", "123")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("bad token"));
    assert!(err.to_string().contains("publish media container"));
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_create_carousel_item_container() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads", 200, json!({"id": "item-1"}))
        .await;

    let id = ctx
        .client
        .create_carousel_item_container(
            &ctx.token,
            "u1",
            CarouselItemType::Video,
            "https://cdn.example/v.mp4",
        )
        .await
        .unwrap();
    assert_eq!(id, "item-1");

    let params = ctx.form_params().await;
    assert_eq!(param(&params, "media_type"), Some("VIDEO"));
    assert_eq!(param(&params, "is_carousel_item"), Some("true"));
    assert_eq!(param(&params, "video_url"), Some("https://cdn.example/v.mp4"));
    assert_eq!(param(&params, "image_url"), None);
}

#[tokio::test]
async fn test_create_carousel_container_preserves_child_order() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads", 200, json!({"id": "carousel-1"}))
        .await;

    let id = ctx
        .client
        .create_carousel_container(&ctx.token, "u1", &["c", "a", "b"], Some("three things"))
        .await
        .unwrap();
    assert_eq!(id, "carousel-1");

    let params = ctx.form_params().await;
    assert_eq!(param(&params, "media_type"), Some("CAROUSEL"));
    assert_eq!(param(&params, "children"), Some("c,a,b"));
    assert_eq!(param(&params, "text"), Some("three things"));
}

#[tokio::test]
async fn test_create_carousel_container_without_text() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads", 200, json!({"id": "carousel-2"}))
        .await;

    let children = vec!["a".to_string(), "b".to_string()];
    ctx.client
        .create_carousel_container(&ctx.token, "u1", &children, None)
        .await
        .unwrap();

    let params = ctx.form_params().await;
    assert_eq!(keys(&params), ["media_type", "children", "access_token"]);
    assert_eq!(param(&params, "children"), Some("a,b"));
}

#[tokio::test]
async fn test_create_carousel_container_with_empty_text_omits_field() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads", 200, json!({"id": "carousel-3"}))
        .await;

    ctx.client
        .create_carousel_container(&ctx.token, "u1", &["a", "b"], Some(""))
        .await
        .unwrap();

    let params = ctx.form_params().await;
    assert_eq!(keys(&params), ["media_type", "children", "access_token"]);
}

#[tokio::test]
async fn test_publish_carousel_container() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads_publish", 200, json!({"id": "post-9"}))
        .await;

    let id = ctx
        .client
        .publish_carousel_container(&ctx.token, "u1", "carousel-1")
        .await
        .unwrap();
    assert_eq!(id, "post-9");

    let params = ctx.form_params().await;
    assert_eq!(param(&params, "creation_id"), Some("carousel-1"));
}

#[tokio::test]
async fn test_missing_id_in_success_body_is_unknown() {
    let ctx = TestContext::new().await;
    ctx.mock_json("POST", "/v1.0/u1/threads_publish", 200, json!({"ok": true}))
        .await;

    let err = ctx
        .client
        .publish_carousel_container(&ctx.token, "u1", "carousel-1")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert!(err.to_string().starts_with("Failed to publish carousel container: "));
}
